use crate::skill_normalizer::{canonicalize, normalize_skill_set, skill_matches};
use crate::JobSkill;

/// Avaliação do fator de habilidades: cobertura das habilidades exigidas
/// pela vaga. Cada habilidade casada/faltante é retida individualmente para
/// a visão de detalhe da explicação.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsEvaluation {
    /// Fração de exigidas cobertas, em 0-100.
    pub score: f64,
    pub matched_required: Vec<String>,
    pub missing_required: Vec<String>,
    pub matched_optional: Vec<String>,
    pub reason: String,
}

/// Avalia a cobertura de habilidades. `None` quando a vaga não exige nenhuma
/// habilidade (fato ausente; o peso do fator é redistribuído).
pub fn evaluate_skills(job_skills: &[JobSkill], candidate_skills: &[String]) -> Option<SkillsEvaluation> {
    let required: Vec<&JobSkill> = job_skills.iter().filter(|s| s.required).collect();
    if required.is_empty() {
        return None;
    }

    // Aliases e grafias duplicadas do candidato colapsam no conjunto canônico.
    let candidate_canonical = normalize_skill_set(candidate_skills);

    let mut matched_required = Vec::new();
    let mut missing_required = Vec::new();
    for skill in &required {
        let canonical = canonicalize(&skill.name);
        if candidate_canonical.iter().any(|c| skill_matches(c, &canonical)) {
            matched_required.push(skill.name.clone());
        } else {
            missing_required.push(skill.name.clone());
        }
    }

    let matched_optional: Vec<String> = job_skills
        .iter()
        .filter(|s| !s.required)
        .filter(|s| {
            let canonical = canonicalize(&s.name);
            candidate_canonical.iter().any(|c| skill_matches(c, &canonical))
        })
        .map(|s| s.name.clone())
        .collect();

    let score = matched_required.len() as f64 / required.len() as f64 * 100.0;
    let reason = format!(
        "{} de {} habilidades exigidas cobertas ({:.0}%){}",
        matched_required.len(),
        required.len(),
        score,
        if missing_required.is_empty() {
            String::new()
        } else {
            format!(" / faltam: {}", missing_required.join(", "))
        }
    );

    Some(SkillsEvaluation {
        score,
        matched_required,
        missing_required,
        matched_optional,
        reason,
    })
}
