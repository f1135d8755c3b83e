pub mod core;
pub mod evaluation;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use crate::core::labels::Label;
pub use evaluation::{
    Average, ClassificationMetrics, ClassificationReport, ConfusionMatrix, EvalError,
    EvaluationResults,
};
