pub mod api;
pub mod error;
pub mod logging;
pub mod matching;
pub mod pillars;
pub mod skill_normalizer;

pub use error::MatchError;

use serde::{Deserialize, Serialize};

use pillars::{CandidatePillarScores, JobPillarScores};

/// Versão do motor, embutida nas respostas para rastreabilidade.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Modelo de trabalho da vaga ou preferido pelo candidato.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum WorkModel {
    #[serde(rename = "remoto")]
    #[strum(serialize = "remoto")]
    Remote,
    #[serde(rename = "híbrido")]
    #[strum(serialize = "híbrido", serialize = "hibrido")]
    Hybrid,
    #[serde(rename = "presencial")]
    #[strum(serialize = "presencial")]
    Onsite,
}

/// Nível de proficiência exigido para uma habilidade da vaga.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum SkillLevel {
    #[serde(rename = "básico")]
    #[strum(serialize = "básico", serialize = "basico")]
    Basic,
    #[serde(rename = "intermediário")]
    #[strum(serialize = "intermediário", serialize = "intermediario")]
    Intermediate,
    #[serde(rename = "avançado")]
    #[strum(serialize = "avançado", serialize = "avancado")]
    Advanced,
}

/// Faixa salarial mensal. `min <= max` é garantido na construção.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

impl SalaryRange {
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Habilidade exigida ou desejada por uma vaga.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSkill {
    pub name: String,
    pub required: bool,
    pub level: Option<SkillLevel>,
}

impl JobSkill {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            level: None,
        }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            level: None,
        }
    }
}

/// Alinhamento cultural já comparado pela camada de avaliação (0-100 por eixo).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CultureFit {
    pub work_style: f64,
    pub values: f64,
}

/// Sub-notas derivadas da análise de currículo (0-100 cada).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResumeScores {
    pub technical: f64,
    pub soft_skills: f64,
}

/// Perfil do candidato consumido pelo motor: vetor de pilares opcional mais
/// os fatos estruturados de currículo. Campo ausente significa fato
/// desconhecido, e o fator correspondente sai do cálculo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateProfile {
    pub id: Option<String>,
    pub pillar_scores: Option<CandidatePillarScores>,
    pub skills: Vec<String>,
    pub experience_years: Option<f64>,
    pub preferred_work_model: Option<WorkModel>,
    pub location: Option<String>,
    pub salary_expectation: Option<SalaryRange>,
    pub culture_fit: Option<CultureFit>,
    pub resume_scores: Option<ResumeScores>,
}

/// Perfil da vaga: vetor de pilares opcional mais os requisitos declarados
/// no anúncio.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobProfile {
    pub id: Option<String>,
    pub pillar_scores: Option<JobPillarScores>,
    pub required_skills: Vec<JobSkill>,
    pub min_experience_years: Option<f64>,
    pub work_model: Option<WorkModel>,
    pub location: Option<String>,
    pub salary_range: Option<SalaryRange>,
}
