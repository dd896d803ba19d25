use crate::pillars::PillarSide;

/// Falhas de pré-condição do motor de compatibilidade.
///
/// Nenhuma variante representa falha de infraestrutura: repetir a chamada
/// com a mesma entrada produz o mesmo erro.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    /// Vetor de pilares incompleto no lado indicado. Pilar ausente não é
    /// equivalente a nota zero; o scorer recusa a chamada.
    #[error("vetor de pilares incompleto ({side}): pilares ausentes [{missing}]")]
    IncompletePillarVector { side: PillarSide, missing: String },

    /// Resposta fora da escala Likert 1-5.
    #[error("resposta fora da escala 1-5: {question_id}={score}")]
    InvalidScoreRange { question_id: String, score: u8 },

    /// Nenhum dado avaliável: sem vetores de pilares completos e sem fatos
    /// suficientes para qualquer fator ponderado.
    #[error("nenhum dado avaliável para calcular compatibilidade")]
    NoScorableData,
}
