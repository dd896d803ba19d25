pub mod compatibility;
pub mod location;
pub mod salary;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use compatibility::{score_pillar_compatibility, CompatibilityScore, PairScore};
pub use scoring::{
    score_multi_factor, FactorResult, FactorsAnalyzed, MatchingConfig, MultiFactorEngine,
    MultiFactorScore,
};
pub use weights::{FactorPresence, FactorWeights, DEFAULT_WEIGHTS};

/// Faixas de status compartilhadas pelos fatores (notas 0-100).
pub(crate) fn status_from_score(score: f64) -> &'static str {
    if score >= 90.0 {
        "PERFECT_MATCH"
    } else if score >= 70.0 {
        "MATCH"
    } else if score >= 40.0 {
        "PARTIAL_MATCH"
    } else {
        "MISS"
    }
}
