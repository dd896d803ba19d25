use crate::SalaryRange;

/// Avaliação do fator salarial: grau de sobreposição entre a expectativa do
/// candidato e a faixa ofertada.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryEvaluation {
    pub score: f64,
    /// Fração da faixa esperada coberta pela oferta (None quando disjuntas).
    pub overlap_ratio: Option<f64>,
    pub details: String,
}

/// Piso de proximidade: nota no início da banda negociável. A nota decai
/// continuamente de 100 (cobertura total) até este piso quando as faixas
/// encostam, e do piso até 0 ao longo da banda quando se afastam.
const PROXIMITY_CEILING: f64 = 25.0;

/// Sobreposição escalada pela fração da faixa do candidato; faixas disjuntas
/// decaem dentro de uma banda de tolerância (`tolerance` × teto da oferta)
/// antes de zerar — proximidade ainda é negociável, distância não.
///
/// A função é monotônica não crescente conforme as faixas se afastam: uma
/// sobreposição mínima nunca pontua abaixo de faixas já disjuntas, e não há
/// salto ao cruzar a fronteira de faixas encostadas.
pub fn evaluate_salary(
    expected: SalaryRange,
    offered: SalaryRange,
    tolerance: f64,
) -> SalaryEvaluation {
    let overlap = offered.max.min(expected.max) - offered.min.max(expected.min);
    let band = tolerance * offered.max;

    if overlap >= 0.0 {
        let ratio = if expected.width() <= f64::EPSILON {
            1.0
        } else {
            (overlap / expected.width()).min(1.0)
        };
        let covered = ratio * 100.0;
        // Faixas que se tocam ainda estão dentro da banda negociável; sem o
        // piso a nota saltaria de ~0 para o topo da banda ao se afastarem.
        let floor = if band > 0.0 { PROXIMITY_CEILING } else { 0.0 };
        let score = covered.max(floor);
        let details = if covered >= floor {
            format!("faixas sobrepostas: {covered:.0}% da expectativa coberta pela oferta")
        } else {
            format!(
                "sobreposição mínima ({covered:.0}% da expectativa): proximidade negociável sustenta a nota"
            )
        };
        return SalaryEvaluation {
            score,
            overlap_ratio: Some(ratio),
            details,
        };
    }

    let gap = -overlap;
    if band > 0.0 && gap < band {
        let score = PROXIMITY_CEILING * (1.0 - gap / band);
        SalaryEvaluation {
            score,
            overlap_ratio: None,
            details: format!(
                "faixas próximas mas sem sobreposição (distância R${gap:.0}, banda negociável R${band:.0})"
            ),
        }
    } else {
        SalaryEvaluation {
            score: 0.0,
            overlap_ratio: None,
            details: format!("faixas disjuntas além da banda de tolerância (distância R${gap:.0})"),
        }
    }
}
