pub mod aggregate;
pub mod archetype;

pub use aggregate::{
    aggregate_candidate_pillars, aggregate_job_pillars, QuestionResponse,
    DEFAULT_CANDIDATE_QUESTION_MAP, DEFAULT_JOB_QUESTION_MAP,
};
pub use archetype::{classify_archetype, classify_candidate_archetype, Archetype};

use serde::{Deserialize, Serialize};

/// Escala Likert: toda nota de pilar válida vive neste intervalo.
pub const SCALE_MIN: f64 = 1.0;
pub const SCALE_MAX: f64 = 5.0;

/// Lado ao qual um vetor de pilares pertence (para mensagens de erro).
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum PillarSide {
    #[strum(serialize = "candidato")]
    Candidate,
    #[strum(serialize = "vaga")]
    Job,
}

/// Vocabulário de pilares do candidato. A ordem de declaração é a ordem
/// canônica de desempate do classificador.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum CandidatePillar {
    #[strum(serialize = "Compensation")]
    Compensation,
    #[strum(serialize = "Ambiente")]
    Ambiente,
    #[serde(rename = "Propósito")]
    #[strum(serialize = "Propósito")]
    Proposito,
    #[strum(serialize = "Crescimento")]
    Crescimento,
}

/// Vocabulário de pilares da vaga. A ordem de declaração é a ordem canônica
/// de desempate do classificador.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum JobPillar {
    #[strum(serialize = "Autonomia")]
    Autonomia,
    #[serde(rename = "Liderança")]
    #[strum(serialize = "Liderança")]
    Lideranca,
    #[serde(rename = "TrabalhoGrupo")]
    #[strum(serialize = "TrabalhoGrupo")]
    TrabalhoGrupo,
    #[strum(serialize = "Risco")]
    Risco,
    #[serde(rename = "Ambição")]
    #[strum(serialize = "Ambição")]
    Ambicao,
}

/// Correspondência fixa candidato→vaga usada pela comparação cruzada de
/// pilares (ponte semântica da metodologia). O par sintético de risco
/// (Crescimento vs Risco) só entra quando o candidato carrega o sinal
/// derivado de tolerância a risco.
pub const CROSS_PILLAR_MAP: &[(CandidatePillar, JobPillar)] = &[
    (CandidatePillar::Compensation, JobPillar::Ambicao),
    (CandidatePillar::Ambiente, JobPillar::TrabalhoGrupo),
    (CandidatePillar::Proposito, JobPillar::Lideranca),
    (CandidatePillar::Crescimento, JobPillar::Autonomia),
];

/// Pilar da vaga correspondente a um pilar do candidato.
pub fn job_counterpart(pillar: CandidatePillar) -> JobPillar {
    CROSS_PILLAR_MAP
        .iter()
        .find(|(c, _)| *c == pillar)
        .map(|(_, j)| *j)
        .unwrap_or(JobPillar::Autonomia)
}

fn in_scale(value: f64) -> bool {
    (SCALE_MIN..=SCALE_MAX).contains(&value)
}

/// Vetor de notas do candidato. `0.0` significa "não avaliado", nunca nota
/// baixa; `risco` é o sinal opcional de tolerância a risco derivado de
/// Crescimento.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidatePillarScores {
    pub compensation: f64,
    pub ambiente: f64,
    pub proposito: f64,
    pub crescimento: f64,
    pub risco: Option<f64>,
}

impl CandidatePillarScores {
    pub fn new(compensation: f64, ambiente: f64, proposito: f64, crescimento: f64) -> Self {
        Self {
            compensation,
            ambiente,
            proposito,
            crescimento,
            risco: None,
        }
    }

    /// Deriva o sinal de tolerância a risco a partir de Crescimento,
    /// habilitando o quinto par na comparação cruzada.
    pub fn with_risk_signal(mut self) -> Self {
        self.risco = Some(self.crescimento);
        self
    }

    pub fn get(&self, pillar: CandidatePillar) -> f64 {
        match pillar {
            CandidatePillar::Compensation => self.compensation,
            CandidatePillar::Ambiente => self.ambiente,
            CandidatePillar::Proposito => self.proposito,
            CandidatePillar::Crescimento => self.crescimento,
        }
    }

    pub fn set(&mut self, pillar: CandidatePillar, value: f64) {
        match pillar {
            CandidatePillar::Compensation => self.compensation = value,
            CandidatePillar::Ambiente => self.ambiente = value,
            CandidatePillar::Proposito => self.proposito = value,
            CandidatePillar::Crescimento => self.crescimento = value,
        }
    }

    /// Entradas na ordem canônica (ordem de desempate do classificador).
    pub fn entries(&self) -> [(CandidatePillar, f64); 4] {
        [
            (CandidatePillar::Compensation, self.compensation),
            (CandidatePillar::Ambiente, self.ambiente),
            (CandidatePillar::Proposito, self.proposito),
            (CandidatePillar::Crescimento, self.crescimento),
        ]
    }

    pub fn missing_pillars(&self) -> Vec<CandidatePillar> {
        self.entries()
            .iter()
            .filter(|(_, v)| !in_scale(*v))
            .map(|(p, _)| *p)
            .collect()
    }

    /// Completo quando os quatro pilares obrigatórios estão em [1,5].
    pub fn is_complete(&self) -> bool {
        self.missing_pillars().is_empty()
    }
}

/// Vetor de notas da vaga. `0.0` significa "não avaliado".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPillarScores {
    pub autonomia: f64,
    pub lideranca: f64,
    pub trabalho_grupo: f64,
    pub risco: f64,
    pub ambicao: f64,
}

impl JobPillarScores {
    pub fn new(
        autonomia: f64,
        lideranca: f64,
        trabalho_grupo: f64,
        risco: f64,
        ambicao: f64,
    ) -> Self {
        Self {
            autonomia,
            lideranca,
            trabalho_grupo,
            risco,
            ambicao,
        }
    }

    pub fn get(&self, pillar: JobPillar) -> f64 {
        match pillar {
            JobPillar::Autonomia => self.autonomia,
            JobPillar::Lideranca => self.lideranca,
            JobPillar::TrabalhoGrupo => self.trabalho_grupo,
            JobPillar::Risco => self.risco,
            JobPillar::Ambicao => self.ambicao,
        }
    }

    pub fn set(&mut self, pillar: JobPillar, value: f64) {
        match pillar {
            JobPillar::Autonomia => self.autonomia = value,
            JobPillar::Lideranca => self.lideranca = value,
            JobPillar::TrabalhoGrupo => self.trabalho_grupo = value,
            JobPillar::Risco => self.risco = value,
            JobPillar::Ambicao => self.ambicao = value,
        }
    }

    /// Entradas na ordem canônica (ordem de desempate do classificador).
    pub fn entries(&self) -> [(JobPillar, f64); 5] {
        [
            (JobPillar::Autonomia, self.autonomia),
            (JobPillar::Lideranca, self.lideranca),
            (JobPillar::TrabalhoGrupo, self.trabalho_grupo),
            (JobPillar::Risco, self.risco),
            (JobPillar::Ambicao, self.ambicao),
        ]
    }

    pub fn missing_pillars(&self) -> Vec<JobPillar> {
        self.entries()
            .iter()
            .filter(|(_, v)| !in_scale(*v))
            .map(|(p, _)| *p)
            .collect()
    }

    /// Completo quando os cinco pilares estão em [1,5].
    pub fn is_complete(&self) -> bool {
        self.missing_pillars().is_empty()
    }
}
