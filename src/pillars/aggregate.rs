use super::{CandidatePillar, CandidatePillarScores, JobPillar, JobPillarScores};
use crate::error::MatchError;

/// Resposta individual do questionário (escala Likert 1-5).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuestionResponse {
    pub question_id: String,
    pub score: u8,
}

impl QuestionResponse {
    pub fn new(question_id: impl Into<String>, score: u8) -> Self {
        Self {
            question_id: question_id.into(),
            score,
        }
    }
}

/// Mapa padrão do questionário da vaga: 5 pilares × 6 questões (30 no total),
/// intercaladas como no formulário do produto.
pub const DEFAULT_JOB_QUESTION_MAP: &[(JobPillar, &[&str])] = &[
    (
        JobPillar::Autonomia,
        &["q1", "q6", "q11", "q16", "q21", "q26"],
    ),
    (
        JobPillar::Lideranca,
        &["q2", "q7", "q12", "q17", "q22", "q27"],
    ),
    (
        JobPillar::TrabalhoGrupo,
        &["q3", "q8", "q13", "q18", "q23", "q28"],
    ),
    (JobPillar::Risco, &["q4", "q9", "q14", "q19", "q24", "q29"]),
    (
        JobPillar::Ambicao,
        &["q5", "q10", "q15", "q20", "q25", "q30"],
    ),
];

/// Mapa padrão do questionário do candidato: 4 pilares × 4 questões.
pub const DEFAULT_CANDIDATE_QUESTION_MAP: &[(CandidatePillar, &[&str])] = &[
    (CandidatePillar::Compensation, &["c1", "c5", "c9", "c13"]),
    (CandidatePillar::Ambiente, &["c2", "c6", "c10", "c14"]),
    (CandidatePillar::Proposito, &["c3", "c7", "c11", "c15"]),
    (CandidatePillar::Crescimento, &["c4", "c8", "c12", "c16"]),
];

fn validate_scale(responses: &[QuestionResponse]) -> Result<(), MatchError> {
    for response in responses {
        if !(1..=5).contains(&response.score) {
            return Err(MatchError::InvalidScoreRange {
                question_id: response.question_id.clone(),
                score: response.score,
            });
        }
    }
    Ok(())
}

/// Média das respostas presentes para as questões do pilar. Pilar sem
/// nenhuma resposta vale 0.0 ("não avaliado"); a checagem de completude é
/// responsabilidade de quem consome o vetor.
fn pillar_mean(question_ids: &[&str], responses: &[QuestionResponse]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u32;
    for response in responses {
        if question_ids.contains(&response.question_id.as_str()) {
            sum += f64::from(response.score);
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

/// Agrega respostas do questionário da vaga em notas por pilar.
pub fn aggregate_job_pillars(
    responses: &[QuestionResponse],
    map: &[(JobPillar, &[&str])],
) -> Result<JobPillarScores, MatchError> {
    validate_scale(responses)?;

    let mut scores = JobPillarScores::default();
    for (pillar, questions) in map {
        scores.set(*pillar, pillar_mean(questions, responses));
    }
    Ok(scores)
}

/// Agrega respostas do questionário do candidato em notas por pilar.
pub fn aggregate_candidate_pillars(
    responses: &[QuestionResponse],
    map: &[(CandidatePillar, &[&str])],
) -> Result<CandidatePillarScores, MatchError> {
    validate_scale(responses)?;

    let mut scores = CandidatePillarScores::default();
    for (pillar, questions) in map {
        scores.set(*pillar, pillar_mean(questions, responses));
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_responses(score: u8) -> Vec<QuestionResponse> {
        (1..=30)
            .map(|i| QuestionResponse::new(format!("q{i}"), score))
            .collect()
    }

    #[test]
    fn default_maps_have_fixed_shape() {
        for (_, questions) in DEFAULT_JOB_QUESTION_MAP {
            assert_eq!(questions.len(), 6);
        }
        for (_, questions) in DEFAULT_CANDIDATE_QUESTION_MAP {
            assert_eq!(questions.len(), 4);
        }
        let total: usize = DEFAULT_JOB_QUESTION_MAP.iter().map(|(_, q)| q.len()).sum();
        assert_eq!(total, 30);
    }

    #[test]
    fn uniform_responses_average_to_their_value() {
        let scores = aggregate_job_pillars(&job_responses(4), DEFAULT_JOB_QUESTION_MAP).unwrap();
        assert_eq!(scores.autonomia, 4.0);
        assert_eq!(scores.ambicao, 4.0);
        assert!(scores.is_complete());
    }

    #[test]
    fn mixed_responses_average_per_pillar() {
        // Autonomia: q1=5, q6=2 → 3.5; demais pilares sem resposta → 0.0.
        let responses = vec![
            QuestionResponse::new("q1", 5),
            QuestionResponse::new("q6", 2),
        ];
        let scores = aggregate_job_pillars(&responses, DEFAULT_JOB_QUESTION_MAP).unwrap();
        assert_eq!(scores.autonomia, 3.5);
        assert_eq!(scores.lideranca, 0.0);
        assert!(!scores.is_complete());
    }

    #[test]
    fn missing_pillar_scores_zero_not_error() {
        let scores = aggregate_candidate_pillars(
            &[QuestionResponse::new("c1", 3)],
            DEFAULT_CANDIDATE_QUESTION_MAP,
        )
        .unwrap();
        assert_eq!(scores.compensation, 3.0);
        assert_eq!(scores.ambiente, 0.0);
    }

    #[test]
    fn out_of_scale_score_is_rejected() {
        let err = aggregate_job_pillars(
            &[QuestionResponse::new("q1", 6)],
            DEFAULT_JOB_QUESTION_MAP,
        )
        .unwrap_err();
        assert_eq!(
            err,
            MatchError::InvalidScoreRange {
                question_id: "q1".into(),
                score: 6
            }
        );

        let err = aggregate_candidate_pillars(
            &[QuestionResponse::new("c2", 0)],
            DEFAULT_CANDIDATE_QUESTION_MAP,
        )
        .unwrap_err();
        assert!(matches!(err, MatchError::InvalidScoreRange { .. }));
    }

    #[test]
    fn unknown_question_ids_are_ignored() {
        let responses = vec![
            QuestionResponse::new("q1", 4),
            QuestionResponse::new("pergunta_legada", 5),
        ];
        let scores = aggregate_job_pillars(&responses, DEFAULT_JOB_QUESTION_MAP).unwrap();
        assert_eq!(scores.autonomia, 4.0);
    }
}
