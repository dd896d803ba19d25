//! Fluxo completo: questionários → pilares → arquétipos → compatibilidade
//! psicométrica → fatores ponderados → resposta montada.

use chrono::{TimeZone, Utc};

use pilares_match::api::assemble_match;
use pilares_match::matching::{score_multi_factor, score_pillar_compatibility, MatchingConfig};
use pilares_match::pillars::{
    aggregate_candidate_pillars, aggregate_job_pillars, classify_archetype,
    classify_candidate_archetype, Archetype, QuestionResponse, DEFAULT_CANDIDATE_QUESTION_MAP,
    DEFAULT_JOB_QUESTION_MAP,
};
use pilares_match::{
    CandidateProfile, CultureFit, JobProfile, JobSkill, ResumeScores, SalaryRange, WorkModel,
};

fn job_questionnaire() -> Vec<QuestionResponse> {
    // Autonomia 4.0 / Liderança 2.5 / TrabalhoGrupo ~3.67 / Risco 3.0 / Ambição ~4.33.
    let per_pillar: [&[u8; 6]; 5] = [
        &[4, 4, 4, 4, 4, 4],
        &[2, 3, 2, 3, 2, 3],
        &[4, 4, 4, 3, 4, 3],
        &[3, 3, 3, 3, 3, 3],
        &[4, 4, 4, 4, 5, 5],
    ];
    DEFAULT_JOB_QUESTION_MAP
        .iter()
        .zip(per_pillar)
        .flat_map(|((_, questions), scores)| {
            questions
                .iter()
                .zip(scores)
                .map(|(id, score)| QuestionResponse::new(*id, *score))
        })
        .collect()
}

fn candidate_questionnaire() -> Vec<QuestionResponse> {
    // Compensation 4.0 / Ambiente 3.5 / Propósito 3.0 / Crescimento 4.25.
    let per_pillar: [&[u8; 4]; 4] = [
        &[4, 4, 4, 4],
        &[3, 4, 3, 4],
        &[3, 3, 3, 3],
        &[5, 4, 4, 4],
    ];
    DEFAULT_CANDIDATE_QUESTION_MAP
        .iter()
        .zip(per_pillar)
        .flat_map(|((_, questions), scores)| {
            questions
                .iter()
                .zip(scores)
                .map(|(id, score)| QuestionResponse::new(*id, *score))
        })
        .collect()
}

#[test]
fn questionnaires_flow_into_a_behavioral_match() {
    let job_scores =
        aggregate_job_pillars(&job_questionnaire(), DEFAULT_JOB_QUESTION_MAP).unwrap();
    let candidate_scores =
        aggregate_candidate_pillars(&candidate_questionnaire(), DEFAULT_CANDIDATE_QUESTION_MAP)
            .unwrap();

    assert!(job_scores.is_complete());
    assert!(candidate_scores.is_complete());
    assert_eq!(job_scores.autonomia, 4.0);
    assert_eq!(job_scores.lideranca, 2.5);
    assert_eq!(candidate_scores.crescimento, 4.25);

    // Ambos dominados por ambição/crescimento + autonomia → Estrategista.
    let job_archetype = classify_archetype(&job_scores);
    let candidate_archetype = classify_candidate_archetype(&candidate_scores);
    assert_eq!(job_archetype, Archetype::Estrategista);
    assert_eq!(candidate_archetype, Archetype::Estrategista);

    let compatibility = score_pillar_compatibility(
        &candidate_scores,
        candidate_archetype,
        &job_scores,
        job_archetype,
    )
    .unwrap();

    assert_eq!(compatibility.boost, 10);
    assert_eq!(compatibility.breakdown.len(), 4);
    assert!(compatibility.base_score > 90.0);
    assert_eq!(compatibility.score, 100);
}

#[test]
fn end_to_end_full_match_response() {
    let candidate_scores =
        aggregate_candidate_pillars(&candidate_questionnaire(), DEFAULT_CANDIDATE_QUESTION_MAP)
            .unwrap();
    let job_scores =
        aggregate_job_pillars(&job_questionnaire(), DEFAULT_JOB_QUESTION_MAP).unwrap();

    let candidate = CandidateProfile {
        id: Some("cand-42".into()),
        pillar_scores: Some(candidate_scores),
        skills: vec!["Python".into(), "AWS".into(), "Comunicação".into()],
        experience_years: Some(5.0),
        preferred_work_model: Some(WorkModel::Hybrid),
        location: Some("Campinas - SP".into()),
        salary_expectation: Some(SalaryRange::new(9000.0, 12000.0)),
        culture_fit: Some(CultureFit {
            work_style: 75.0,
            values: 85.0,
        }),
        resume_scores: Some(ResumeScores {
            technical: 80.0,
            soft_skills: 70.0,
        }),
    };

    let job = JobProfile {
        id: Some("vaga-13".into()),
        pillar_scores: Some(job_scores),
        required_skills: vec![
            JobSkill::required("python"),
            JobSkill::required("aws"),
            JobSkill::optional("Terraform"),
        ],
        min_experience_years: Some(4.0),
        work_model: Some(WorkModel::Hybrid),
        location: Some("campinas".into()),
        salary_range: Some(SalaryRange::new(8000.0, 13000.0)),
    };

    let matched_at = Utc.with_ymd_and_hms(2026, 8, 1, 9, 30, 0).unwrap();
    let response = assemble_match(
        &candidate,
        &job,
        &MatchingConfig::default(),
        matched_at,
        false,
    )
    .unwrap();

    let behavioral = response.behavioral.as_ref().unwrap();
    let qualification = response.qualification.as_ref().unwrap();

    assert_eq!(behavioral.candidate_archetype, Archetype::Estrategista);
    assert_eq!(behavioral.job_archetype, Archetype::Estrategista);
    assert_eq!(behavioral.boost, 10);

    // Habilidades 100, experiência 100, localização 100, salário 100,
    // cultura 80, currículo 75 → 0.75×100 + 0.15×80 + 0.10×75 = 94.5 → 95.
    assert_eq!(qualification.total, 95);
    assert_eq!(response.overall_score, 95);
    assert!(qualification.explanation.contains("excelente"));
    assert_eq!(
        qualification.factors_analyzed.matched_skills,
        vec!["python".to_string(), "aws".to_string()]
    );
    assert_eq!(
        qualification.factors_analyzed.matched_optional_skills,
        Vec::<String>::new()
    );
    assert_eq!(response.matched_at, matched_at);

    // Idempotência: mesma entrada, saída bit a bit idêntica.
    let again = assemble_match(
        &candidate,
        &job,
        &MatchingConfig::default(),
        matched_at,
        false,
    )
    .unwrap();
    assert_eq!(response, again);
}

#[test]
fn demo_match_is_flagged_but_scored_identically() {
    let candidate = CandidateProfile {
        skills: vec!["Excel".into()],
        experience_years: Some(2.0),
        ..CandidateProfile::default()
    };
    let job = JobProfile {
        required_skills: vec![JobSkill::required("Excel")],
        min_experience_years: Some(2.0),
        ..JobProfile::default()
    };
    let matched_at = Utc.with_ymd_and_hms(2026, 8, 1, 9, 30, 0).unwrap();

    let real = assemble_match(&candidate, &job, &MatchingConfig::default(), matched_at, false)
        .unwrap();
    let demo = assemble_match(&candidate, &job, &MatchingConfig::default(), matched_at, true)
        .unwrap();

    assert!(!real.is_demo_match);
    assert!(demo.is_demo_match);
    assert_eq!(real.overall_score, demo.overall_score);
    assert_eq!(real.qualification, demo.qualification);
}

#[test]
fn multi_factor_alone_handles_missing_facts() {
    let candidate = CandidateProfile {
        skills: vec!["vendas".into()],
        ..CandidateProfile::default()
    };
    let job = JobProfile {
        required_skills: vec![JobSkill::required("Comercial")],
        ..JobProfile::default()
    };

    let result = score_multi_factor(&candidate, &job).unwrap();
    // Único fator presente carrega todo o peso.
    assert_eq!(result.total, 100);
    assert!((result.effective_weights.skills - 1.0).abs() < 1e-9);
    assert!(result.experience.is_none());
}
