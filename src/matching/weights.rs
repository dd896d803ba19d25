use serde::Serialize;

/// Pesos padrão dos seis fatores (decisão de produto, versionada junto da
/// matriz de arquétipos). Somam 1.0; consumidores podem substituí-los via
/// `MatchingConfig`, nunca editá-los aqui.
pub const DEFAULT_WEIGHTS: FactorWeights = FactorWeights {
    skills: 0.30,
    experience: 0.20,
    location: 0.10,
    salary: 0.15,
    culture: 0.15,
    resume: 0.10,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
    pub culture: f64,
    pub resume: f64,
}

/// Quais fatores têm fatos suficientes para serem avaliados nesta chamada.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FactorPresence {
    pub skills: bool,
    pub experience: bool,
    pub location: bool,
    pub salary: bool,
    pub culture: bool,
    pub resume: bool,
}

impl FactorPresence {
    pub fn any(&self) -> bool {
        self.skills || self.experience || self.location || self.salary || self.culture || self.resume
    }
}

impl FactorWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.location + self.salary + self.culture + self.resume
    }

    /// Redistribui proporcionalmente os pesos dos fatores ausentes entre os
    /// presentes (degradação graciosa de fatos faltantes). Fator ausente
    /// fica com peso 0; os presentes são renormalizados para somar 1.0.
    pub fn redistribute(&self, present: FactorPresence) -> FactorWeights {
        let keep = |on: bool, w: f64| if on { w } else { 0.0 };
        let kept = FactorWeights {
            skills: keep(present.skills, self.skills),
            experience: keep(present.experience, self.experience),
            location: keep(present.location, self.location),
            salary: keep(present.salary, self.salary),
            culture: keep(present.culture, self.culture),
            resume: keep(present.resume, self.resume),
        };

        let total = kept.sum();
        if total <= f64::EPSILON {
            return kept;
        }

        FactorWeights {
            skills: kept.skills / total,
            experience: kept.experience / total,
            location: kept.location / total,
            salary: kept.salary / total,
            culture: kept.culture / total,
            resume: kept.resume / total,
        }
    }
}
