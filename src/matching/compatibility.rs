use serde::Serialize;

use crate::error::MatchError;
use crate::pillars::{
    archetype::boost_for, Archetype, CandidatePillar, CandidatePillarScores, JobPillar,
    JobPillarScores, PillarSide, CROSS_PILLAR_MAP,
};

/// Penalidade por ponto de diferença na escala 1-5: diferença máxima 4 →
/// penalidade máxima 80, então a similaridade mínima é 20. O clamp protege
/// uma eventual mudança de escala.
const SIMILARITY_SLOPE: f64 = 20.0;

/// Similaridade de um par de notas: `100 − |Δ| × 20`, em [0,100].
pub fn pair_similarity(candidate_value: f64, job_value: f64) -> f64 {
    (100.0 - (candidate_value - job_value).abs() * SIMILARITY_SLOPE).clamp(0.0, 100.0)
}

/// Um par comparado da correspondência cruzada, retido para explicação.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairScore {
    pub candidate_pillar: CandidatePillar,
    pub job_pillar: JobPillar,
    pub candidate_value: f64,
    pub job_value: f64,
    pub similarity: f64,
}

/// Resultado da compatibilidade psicométrica (pilares + bônus de arquétipo).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityScore {
    /// Nota final 0-100: `min(100, round(base + bônus))`.
    pub score: u32,
    pub base_score: f64,
    pub boost: u32,
    pub candidate_archetype: Archetype,
    pub job_archetype: Archetype,
    pub breakdown: Vec<PairScore>,
}

fn ensure_complete<T: std::fmt::Display>(
    side: PillarSide,
    missing: Vec<T>,
) -> Result<(), MatchError> {
    if missing.is_empty() {
        return Ok(());
    }
    Err(MatchError::IncompletePillarVector {
        side,
        missing: missing
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Pontua a compatibilidade cruzada de pilares entre candidato e vaga.
///
/// Recusa vetores incompletos: pilar ausente não equivale a nota zero. O
/// quinto par (tolerância a risco) só entra quando o candidato carrega o
/// sinal derivado `risco`.
pub fn score_pillar_compatibility(
    candidate: &CandidatePillarScores,
    candidate_archetype: Archetype,
    job: &JobPillarScores,
    job_archetype: Archetype,
) -> Result<CompatibilityScore, MatchError> {
    ensure_complete(PillarSide::Candidate, candidate.missing_pillars())?;
    ensure_complete(PillarSide::Job, job.missing_pillars())?;

    let mut breakdown: Vec<PairScore> = CROSS_PILLAR_MAP
        .iter()
        .map(|(c, j)| {
            let candidate_value = candidate.get(*c);
            let job_value = job.get(*j);
            PairScore {
                candidate_pillar: *c,
                job_pillar: *j,
                candidate_value,
                job_value,
                similarity: pair_similarity(candidate_value, job_value),
            }
        })
        .collect();

    if let Some(risk_signal) = candidate.risco {
        breakdown.push(PairScore {
            candidate_pillar: CandidatePillar::Crescimento,
            job_pillar: JobPillar::Risco,
            candidate_value: risk_signal,
            job_value: job.risco,
            similarity: pair_similarity(risk_signal, job.risco),
        });
    }

    let base_score =
        breakdown.iter().map(|p| p.similarity).sum::<f64>() / breakdown.len() as f64;
    let boost = boost_for(candidate_archetype, job_archetype);
    let score = ((base_score + f64::from(boost)).round() as u32).min(100);

    tracing::debug!(
        base_score,
        boost,
        score,
        pairs = breakdown.len(),
        %candidate_archetype,
        %job_archetype,
        "compatibilidade de pilares calculada"
    );

    Ok(CompatibilityScore {
        score,
        base_score,
        boost,
        candidate_archetype,
        job_archetype,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> CandidatePillarScores {
        CandidatePillarScores::new(4.0, 3.5, 2.8, 4.2)
    }

    fn job() -> JobPillarScores {
        JobPillarScores::new(3.8, 2.5, 3.7, 3.0, 4.0)
    }

    #[test]
    fn equal_values_are_similarity_100() {
        assert_eq!(pair_similarity(3.3, 3.3), 100.0);
    }

    #[test]
    fn maximal_divergence_is_similarity_20_never_negative() {
        assert_eq!(pair_similarity(1.0, 5.0), 20.0);
        assert_eq!(pair_similarity(5.0, 1.0), 20.0);
    }

    #[test]
    fn worked_example_base_score() {
        let result = score_pillar_compatibility(
            &candidate(),
            Archetype::Estrategista,
            &job(),
            Archetype::Guardiao,
        )
        .unwrap();

        let expected = [100.0, 96.0, 94.0, 92.0];
        assert_eq!(result.breakdown.len(), expected.len());
        for (pair, want) in result.breakdown.iter().zip(expected) {
            assert!((pair.similarity - want).abs() < 1e-9, "{pair:?} != {want}");
        }
        assert!((result.base_score - 95.5).abs() < 1e-9);
        assert_eq!(result.boost, 0);
        assert_eq!(result.score, result.base_score.round() as u32);
    }

    #[test]
    fn exact_scores_round_cleanly() {
        // Valores inteiros não carregam ruído de ponto flutuante: todas as
        // similaridades valem 80 e a nota final também.
        let candidate = CandidatePillarScores::new(4.0, 4.0, 4.0, 4.0);
        let job = JobPillarScores::new(3.0, 3.0, 3.0, 3.0, 3.0);
        let result =
            score_pillar_compatibility(&candidate, Archetype::Guardiao, &job, Archetype::Idealista)
                .unwrap();
        assert_eq!(result.base_score, 80.0);
        assert_eq!(result.score, 80);
    }

    #[test]
    fn identical_archetypes_boost_10_and_cap_at_100() {
        let result = score_pillar_compatibility(
            &candidate(),
            Archetype::Estrategista,
            &job(),
            Archetype::Estrategista,
        )
        .unwrap();
        assert_eq!(result.boost, 10);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn adjacent_archetypes_boost_5() {
        let result = score_pillar_compatibility(
            &candidate(),
            Archetype::Protagonista,
            &job(),
            Archetype::Transformador,
        )
        .unwrap();
        assert_eq!(result.boost, 5);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn risk_signal_adds_fifth_pair() {
        let with_risk = candidate().with_risk_signal();
        let result = score_pillar_compatibility(
            &with_risk,
            Archetype::Estrategista,
            &job(),
            Archetype::Guardiao,
        )
        .unwrap();
        assert_eq!(result.breakdown.len(), 5);
        // Quinto par: 4.2 vs 3.0 → 76.
        assert!((result.breakdown[4].similarity - 76.0).abs() < 1e-9);
        assert!((result.base_score - (382.0 + 76.0) / 5.0).abs() < 1e-9);
    }

    #[test]
    fn incomplete_candidate_vector_is_rejected() {
        let incomplete = CandidatePillarScores::new(4.0, 0.0, 2.8, 4.2);
        let err = score_pillar_compatibility(
            &incomplete,
            Archetype::Equilibrado,
            &job(),
            Archetype::Equilibrado,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MatchError::IncompletePillarVector {
                side: PillarSide::Candidate,
                ..
            }
        ));
        assert!(err.to_string().contains("Ambiente"));
    }

    #[test]
    fn incomplete_job_vector_is_rejected() {
        let incomplete = JobPillarScores::new(3.8, 2.5, 3.7, 0.0, 4.0);
        let err = score_pillar_compatibility(
            &candidate(),
            Archetype::Equilibrado,
            &incomplete,
            Archetype::Equilibrado,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Risco"));
    }

    #[test]
    fn output_is_bit_identical_across_calls() {
        let a = score_pillar_compatibility(
            &candidate(),
            Archetype::Explorador,
            &job(),
            Archetype::Proativo,
        )
        .unwrap();
        let b = score_pillar_compatibility(
            &candidate(),
            Archetype::Explorador,
            &job(),
            Archetype::Proativo,
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
