use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{job_counterpart, CandidatePillarScores, JobPillar, JobPillarScores};

/// Revisão da matriz de arquétipos embutida nesta build (rastreabilidade
/// das respostas, junto de `ENGINE_VERSION`).
pub const RULE_VERSION: &str = "matriz-pilares-v3";

/// Os 13 arquétipos da metodologia. `Equilibrado` é o rótulo de fallback
/// quando o par dominante não tem entrada na matriz. `Guardião` e
/// `Idealista` são rótulos legados de revisões anteriores da matriz:
/// continuam no vocabulário (aparecem em resultados históricos e no
/// conjunto de adjacência) mas a matriz atual não os produz.
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
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Archetype {
    Protagonista,
    Construtor,
    #[serde(rename = "Visionário")]
    #[strum(serialize = "Visionário", serialize = "Visionario")]
    Visionario,
    Mobilizador,
    #[serde(rename = "Guardião")]
    #[strum(serialize = "Guardião", serialize = "Guardiao")]
    Guardiao,
    Explorador,
    Colaborador,
    Equilibrado,
    Estrategista,
    Transformador,
    Idealista,
    #[serde(rename = "Pragmático")]
    #[strum(serialize = "Pragmático", serialize = "Pragmatico")]
    Pragmatico,
    Proativo,
}

/// Matriz simétrica par-dominante → arquétipo: as 10 combinações não
/// ordenadas dos 5 pilares da vaga, cada uma com um arquétipo distinto.
/// Dados, não código: auditável e testável independente do scorer.
static ARCHETYPE_MATRIX: Lazy<HashMap<(JobPillar, JobPillar), Archetype>> = Lazy::new(|| {
    use Archetype::*;
    use JobPillar::*;

    HashMap::from([
        ((Autonomia, Lideranca), Protagonista),
        ((Autonomia, TrabalhoGrupo), Pragmatico),
        ((Autonomia, Risco), Explorador),
        ((Autonomia, Ambicao), Estrategista),
        ((Lideranca, TrabalhoGrupo), Mobilizador),
        ((Lideranca, Risco), Transformador),
        ((Lideranca, Ambicao), Visionario),
        ((TrabalhoGrupo, Risco), Colaborador),
        ((TrabalhoGrupo, Ambicao), Construtor),
        ((Risco, Ambicao), Proativo),
    ])
});

/// Pares de arquétipos tematicamente próximos (bônus de +5). Guardado em uma
/// direção; a consulta testa as duas.
static ADJACENT_ARCHETYPES: Lazy<HashSet<(Archetype, Archetype)>> = Lazy::new(|| {
    use Archetype::*;

    HashSet::from([
        (Protagonista, Transformador),
        (Construtor, Mobilizador),
        (Visionario, Estrategista),
        (Explorador, Proativo),
        (Colaborador, Mobilizador),
        (Guardiao, Colaborador),
        (Idealista, Visionario),
        (Pragmatico, Estrategista),
    ])
});

fn lookup_pair(p1: JobPillar, p2: JobPillar) -> Archetype {
    ARCHETYPE_MATRIX
        .get(&(p1, p2))
        .or_else(|| ARCHETYPE_MATRIX.get(&(p2, p1)))
        .copied()
        .unwrap_or(Archetype::Equilibrado)
}

/// Par de pilares dominante: ordenação estável decrescente sobre as entradas
/// na ordem canônica, de modo que empates preservam a precedência canônica e
/// o resultado é determinístico.
fn dominant_pair<P: Copy>(mut entries: Vec<(P, f64)>) -> (P, P) {
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    (entries[0].0, entries[1].0)
}

/// Classifica um vetor de pilares da vaga em um arquétipo. Função total e
/// determinística: par sem entrada na matriz cai em `Equilibrado`.
pub fn classify_archetype(scores: &JobPillarScores) -> Archetype {
    let (p1, p2) = dominant_pair(scores.entries().to_vec());
    lookup_pair(p1, p2)
}

/// Classifica o candidato: os dois pilares dominantes do vocabulário do
/// candidato são traduzidos para o espaço de pilares da vaga pela
/// correspondência cruzada e resolvidos na mesma matriz.
pub fn classify_candidate_archetype(scores: &CandidatePillarScores) -> Archetype {
    let (c1, c2) = dominant_pair(scores.entries().to_vec());
    lookup_pair(job_counterpart(c1), job_counterpart(c2))
}

/// Bônus de arquétipo: idênticos +10, adjacentes +5, senão 0.
pub fn boost_for(candidate: Archetype, job: Archetype) -> u32 {
    if candidate == job {
        10
    } else if ADJACENT_ARCHETYPES.contains(&(candidate, job))
        || ADJACENT_ARCHETYPES.contains(&(job, candidate))
    {
        5
    } else {
        0
    }
}
