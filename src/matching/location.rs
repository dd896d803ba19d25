use crate::skill_normalizer::fold;
use crate::WorkModel;

/// Avaliação do fator de localização: dois booleanos independentes com peso
/// igual (modelo de trabalho e geografia). Vaga remota curto-circuita o
/// critério geográfico.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationEvaluation {
    pub score: f64,
    pub work_model_match: bool,
    pub geo_match: bool,
    pub remote_shortcut: bool,
    pub details: String,
}

/// Compara localidades normalizadas ("São Paulo - SP" cobre "são paulo").
fn same_place(a: &str, b: &str) -> bool {
    let a = fold(a);
    let b = fold(b);
    !a.is_empty() && !b.is_empty() && (a == b || a.contains(&b) || b.contains(&a))
}

/// Avalia modelo de trabalho + geografia. `None` quando a vaga não informa
/// nem modelo nem localização (fato ausente).
pub fn evaluate_location(
    candidate_model: Option<WorkModel>,
    candidate_location: Option<&str>,
    job_model: Option<WorkModel>,
    job_location: Option<&str>,
) -> Option<LocationEvaluation> {
    if job_model.is_none() && job_location.is_none() {
        return None;
    }

    // Lado sem preferência declarada conta como compatível.
    let work_model_match = match (candidate_model, job_model) {
        (Some(c), Some(j)) => c == j,
        _ => true,
    };

    let remote_shortcut = job_model == Some(WorkModel::Remote);
    let geo_match = if remote_shortcut {
        true
    } else {
        match (candidate_location, job_location) {
            (Some(c), Some(j)) => same_place(c, j),
            _ => false,
        }
    };

    let score = match (work_model_match, geo_match) {
        (true, true) => 100.0,
        (true, false) | (false, true) => 50.0,
        (false, false) => 0.0,
    };

    let mut parts = Vec::new();
    parts.push(if work_model_match {
        "modelo de trabalho compatível".to_string()
    } else {
        format!(
            "modelo de trabalho divergente ({} vs {})",
            candidate_model.map(|m| m.to_string()).unwrap_or_else(|| "—".into()),
            job_model.map(|m| m.to_string()).unwrap_or_else(|| "—".into()),
        )
    });
    if remote_shortcut {
        parts.push("vaga remota: localização não restringe".into());
    } else if geo_match {
        parts.push("mesma região".into());
    } else {
        parts.push("regiões diferentes ou localização não informada".into());
    }

    Some(LocationEvaluation {
        score,
        work_model_match,
        geo_match,
        remote_shortcut,
        details: parts.join(" / "),
    })
}
