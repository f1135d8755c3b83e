use crate::core::labels::Label;
use crate::evaluation::confusion::ConfusionMatrix;
use crate::evaluation::error::EvalError;
use crate::evaluation::results::EvaluationInfo;

/// Everything a renderer needs to draw a confusion matrix: the (display
/// trimmed) matrix with its labels and per-cell sample ids, and the
/// evaluation metadata used for titles and drill-down queries.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrixPlot<L: Label> {
    pub matrix: ConfusionMatrix<L>,
    pub info: EvaluationInfo,
}

/// Rendering backend for confusion matrices.
///
/// Backends are swappable; the evaluation core only hands over data and
/// returns whatever artifact the backend produces. Errors raised while
/// building the matrix are returned through `Error`.
pub trait ConfusionMatrixRenderer<L: Label> {
    type Artifact;
    type Error: From<EvalError>;

    fn render(&self, plot: ConfusionMatrixPlot<L>) -> Result<Self::Artifact, Self::Error>;
}
