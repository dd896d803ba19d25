use serde::Serialize;

use super::location::evaluate_location;
use super::salary::evaluate_salary;
use super::skills::evaluate_skills;
use super::status_from_score;
use super::weights::{FactorPresence, FactorWeights, DEFAULT_WEIGHTS};
use crate::error::MatchError;
use crate::{CandidateProfile, CultureFit, JobProfile, ResumeScores};

/// Configuração do scorer multi-fator. Os pesos são dados versionados, não
/// constantes enterradas no código.
#[derive(Debug, Clone, Copy)]
pub struct MatchingConfig {
    pub weights: FactorWeights,
    /// Fração do teto da oferta tratada como banda negociável quando as
    /// faixas salariais não se sobrepõem.
    pub salary_tolerance: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            salary_tolerance: 0.2,
        }
    }
}

/// Nota de um fator individual (0-100), com status e detalhe legível.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorResult {
    pub score: f64,
    pub status: &'static str,
    pub details: String,
}

impl FactorResult {
    fn new(score: f64, details: String) -> Self {
        Self {
            score,
            status: status_from_score(score),
            details,
        }
    }
}

/// Fatos brutos que produziram cada sub-nota, retidos para a visão de
/// detalhe do candidato/empresa.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorsAnalyzed {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_optional_skills: Vec<String>,
    pub candidate_experience_years: Option<f64>,
    pub required_experience_years: Option<f64>,
    pub work_model_match: Option<bool>,
    pub location_match: Option<bool>,
    pub salary_overlap_ratio: Option<f64>,
    pub culture: Option<CultureFit>,
    pub resume: Option<ResumeScores>,
}

/// Resultado do scorer multi-fator: nota geral, seis sub-notas (ausentes
/// quando o fato não existe), pesos efetivos e explicação gerada.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiFactorScore {
    pub total: u32,
    pub skills: Option<FactorResult>,
    pub experience: Option<FactorResult>,
    pub location: Option<FactorResult>,
    pub salary: Option<FactorResult>,
    pub culture: Option<FactorResult>,
    pub resume: Option<FactorResult>,
    pub effective_weights: FactorWeights,
    pub factors_analyzed: FactorsAnalyzed,
    pub explanation: String,
}

/// Pontua candidato × vaga pelos seis fatores ponderados, com a
/// configuração padrão de pesos.
pub fn score_multi_factor(
    candidate: &CandidateProfile,
    job: &JobProfile,
) -> Result<MultiFactorScore, MatchError> {
    MultiFactorEngine::new(MatchingConfig::default()).score(candidate, job)
}

pub struct MultiFactorEngine {
    config: MatchingConfig,
}

impl MultiFactorEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn score(
        &self,
        candidate: &CandidateProfile,
        job: &JobProfile,
    ) -> Result<MultiFactorScore, MatchError> {
        let mut analyzed = FactorsAnalyzed::default();

        let skills = self.score_skills(candidate, job, &mut analyzed);
        let experience = self.score_experience(candidate, job, &mut analyzed);
        let location = self.score_location(candidate, job, &mut analyzed);
        let salary = self.score_salary(candidate, job, &mut analyzed);
        let culture = self.score_culture(candidate, &mut analyzed);
        let resume = self.score_resume(candidate, &mut analyzed);

        let present = FactorPresence {
            skills: skills.is_some(),
            experience: experience.is_some(),
            location: location.is_some(),
            salary: salary.is_some(),
            culture: culture.is_some(),
            resume: resume.is_some(),
        };
        if !present.any() {
            return Err(MatchError::NoScorableData);
        }

        let weights = self.config.weights.redistribute(present);
        let value = |factor: &Option<FactorResult>, weight: f64| {
            factor.as_ref().map(|f| f.score * weight).unwrap_or(0.0)
        };
        let weighted = value(&skills, weights.skills)
            + value(&experience, weights.experience)
            + value(&location, weights.location)
            + value(&salary, weights.salary)
            + value(&culture, weights.culture)
            + value(&resume, weights.resume);
        let total = (weighted.round() as u32).min(100);

        let explanation = build_explanation(
            total,
            &[
                ("habilidades", &skills),
                ("experiência", &experience),
                ("localização", &location),
                ("remuneração", &salary),
                ("cultura", &culture),
                ("currículo", &resume),
            ],
        );

        tracing::debug!(
            total,
            skills = skills.as_ref().map(|f| f.score),
            experience = experience.as_ref().map(|f| f.score),
            location = location.as_ref().map(|f| f.score),
            salary = salary.as_ref().map(|f| f.score),
            culture = culture.as_ref().map(|f| f.score),
            resume = resume.as_ref().map(|f| f.score),
            "avaliação multi-fator concluída"
        );

        Ok(MultiFactorScore {
            total,
            skills,
            experience,
            location,
            salary,
            culture,
            resume,
            effective_weights: weights,
            factors_analyzed: analyzed,
            explanation,
        })
    }

    fn score_skills(
        &self,
        candidate: &CandidateProfile,
        job: &JobProfile,
        analyzed: &mut FactorsAnalyzed,
    ) -> Option<FactorResult> {
        let eval = evaluate_skills(&job.required_skills, &candidate.skills)?;
        analyzed.matched_skills = eval.matched_required.clone();
        analyzed.missing_skills = eval.missing_required.clone();
        analyzed.matched_optional_skills = eval.matched_optional.clone();
        Some(FactorResult::new(eval.score, eval.reason))
    }

    fn score_experience(
        &self,
        candidate: &CandidateProfile,
        job: &JobProfile,
        analyzed: &mut FactorsAnalyzed,
    ) -> Option<FactorResult> {
        let required = job.min_experience_years?;
        let years = candidate.experience_years?;
        analyzed.required_experience_years = Some(required);
        analyzed.candidate_experience_years = Some(years);

        // Rampa linear: 0 em zero anos, 100 no requisito, saturada acima.
        let score = if required <= 0.0 || years >= required {
            100.0
        } else {
            (years / required * 100.0).clamp(0.0, 100.0)
        };

        let details = if years >= required {
            format!(
                "requisito atendido: {years:.1} anos ({}) ≥ {required:.1} anos ({})",
                seniority_label(years),
                seniority_label(required)
            )
        } else {
            format!(
                "abaixo do requisito: {years:.1} anos ({}) < {required:.1} anos ({})",
                seniority_label(years),
                seniority_label(required)
            )
        };
        Some(FactorResult::new(score, details))
    }

    fn score_location(
        &self,
        candidate: &CandidateProfile,
        job: &JobProfile,
        analyzed: &mut FactorsAnalyzed,
    ) -> Option<FactorResult> {
        let eval = evaluate_location(
            candidate.preferred_work_model,
            candidate.location.as_deref(),
            job.work_model,
            job.location.as_deref(),
        )?;
        analyzed.work_model_match = Some(eval.work_model_match);
        analyzed.location_match = Some(eval.geo_match);
        Some(FactorResult::new(eval.score, eval.details))
    }

    fn score_salary(
        &self,
        candidate: &CandidateProfile,
        job: &JobProfile,
        analyzed: &mut FactorsAnalyzed,
    ) -> Option<FactorResult> {
        let expected = candidate.salary_expectation?;
        let offered = job.salary_range?;
        let eval = evaluate_salary(expected, offered, self.config.salary_tolerance);
        analyzed.salary_overlap_ratio = eval.overlap_ratio;
        Some(FactorResult::new(eval.score, eval.details))
    }

    fn score_culture(
        &self,
        candidate: &CandidateProfile,
        analyzed: &mut FactorsAnalyzed,
    ) -> Option<FactorResult> {
        let fit = candidate.culture_fit?;
        analyzed.culture = Some(fit);
        let score = (fit.work_style + fit.values) / 2.0;
        Some(FactorResult::new(
            score,
            format!(
                "estilo de trabalho {:.0}% / valores {:.0}%",
                fit.work_style, fit.values
            ),
        ))
    }

    fn score_resume(
        &self,
        candidate: &CandidateProfile,
        analyzed: &mut FactorsAnalyzed,
    ) -> Option<FactorResult> {
        let scores = candidate.resume_scores?;
        analyzed.resume = Some(scores);
        let score = (scores.technical + scores.soft_skills) / 2.0;
        Some(FactorResult::new(
            score,
            format!(
                "técnico {:.0}% / comportamental {:.0}%",
                scores.technical, scores.soft_skills
            ),
        ))
    }
}

fn seniority_label(years: f64) -> &'static str {
    if years < 3.0 {
        "júnior"
    } else if years < 7.0 {
        "pleno"
    } else {
        "sênior"
    }
}

fn fit_label(total: u32) -> &'static str {
    if total >= 85 {
        "excelente"
    } else if total >= 70 {
        "forte"
    } else if total >= 50 {
        "moderada"
    } else {
        "fraca"
    }
}

/// Frase curta a partir do rótulo de aderência, do fator dominante e do
/// fator mais fraco quando ele merece atenção.
fn build_explanation(total: u32, factors: &[(&str, &Option<FactorResult>)]) -> String {
    let present: Vec<(&str, f64)> = factors
        .iter()
        .filter_map(|(name, factor)| factor.as_ref().map(|f| (*name, f.score)))
        .collect();

    let mut explanation = format!("Compatibilidade {} ({total}%).", fit_label(total));

    if let Some((name, score)) = present
        .iter()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    {
        explanation.push_str(&format!(" Maior força: {name} ({score:.0}%)."));
    }
    if present.len() > 1 {
        if let Some((name, score)) = present
            .iter()
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        {
            if *score < 50.0 {
                explanation.push_str(&format!(" Ponto de atenção: {name} ({score:.0}%)."));
            }
        }
    }

    explanation
}
