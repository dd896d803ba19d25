use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::MatchError;
use crate::matching::{
    score_pillar_compatibility, CompatibilityScore, MatchingConfig, MultiFactorEngine,
    MultiFactorScore,
};
use crate::pillars::archetype::RULE_VERSION;
use crate::pillars::{classify_archetype, classify_candidate_archetype};
use crate::{CandidateProfile, JobProfile, ENGINE_VERSION};

/// Resposta de compatibilidade entregue às camadas de aplicação/API.
///
/// Os dois blocos respondem perguntas diferentes e nunca são fundidos em uma
/// média: `behavioral` é aderência comportamental (pilares + arquétipos),
/// `qualification` é aderência de qualificação (seis fatores ponderados).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub candidate_id: Option<String>,
    pub job_id: Option<String>,

    /// Nota exibida como principal: a de qualificação quando existe (reúne
    /// mais evidência), senão a comportamental.
    pub overall_score: u32,
    pub behavioral: Option<CompatibilityScore>,
    pub qualification: Option<MultiFactorScore>,

    /// Resultado calculado contra dados de demonstração, não contra um
    /// perfil real armazenado. Flag de proveniência para a UI, não variante
    /// do algoritmo.
    pub is_demo_match: bool,

    pub matched_at: DateTime<Utc>,
    pub engine_version: &'static str,
    pub rule_version: &'static str,
}

/// Monta a resposta combinando o que os dados permitem calcular: match
/// puramente psicométrico (sem fatos de currículo/vaga), match completo, ou
/// só qualificação. Vetor de pilares presente porém incompleto é erro de
/// pré-condição, nunca descartado em silêncio.
pub fn assemble_match(
    candidate: &CandidateProfile,
    job: &JobProfile,
    config: &MatchingConfig,
    matched_at: DateTime<Utc>,
    is_demo_match: bool,
) -> Result<MatchResponse, MatchError> {
    let behavioral = match (&candidate.pillar_scores, &job.pillar_scores) {
        (Some(candidate_scores), Some(job_scores)) => {
            let candidate_archetype = classify_candidate_archetype(candidate_scores);
            let job_archetype = classify_archetype(job_scores);
            Some(score_pillar_compatibility(
                candidate_scores,
                candidate_archetype,
                job_scores,
                job_archetype,
            )?)
        }
        _ => None,
    };

    let qualification = match MultiFactorEngine::new(*config).score(candidate, job) {
        Ok(score) => Some(score),
        Err(MatchError::NoScorableData) => None,
        Err(err) => return Err(err),
    };

    let overall_score = match (&behavioral, &qualification) {
        (_, Some(qualification)) => qualification.total,
        (Some(behavioral), None) => behavioral.score,
        (None, None) => return Err(MatchError::NoScorableData),
    };

    tracing::info!(
        candidate_id = candidate.id.as_deref().unwrap_or("?"),
        job_id = job.id.as_deref().unwrap_or("?"),
        overall_score,
        has_behavioral = behavioral.is_some(),
        has_qualification = qualification.is_some(),
        is_demo_match,
        "resposta de compatibilidade montada"
    );

    Ok(MatchResponse {
        candidate_id: candidate.id.clone(),
        job_id: job.id.clone(),
        overall_score,
        behavioral,
        qualification,
        is_demo_match,
        matched_at,
        engine_version: ENGINE_VERSION,
        rule_version: RULE_VERSION,
    })
}
