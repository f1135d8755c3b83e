pub mod confusion;
mod error;
mod estimators;
mod measurement;
pub mod metrics;
pub mod parameters;
pub mod render;
pub mod report;
pub mod results;

pub use confusion::{CellIds, ConfusionMatrix, ConfusionMatrixBuilder};
pub use error::{EvalError, Result};
pub use estimators::{Estimator, WeightedMeanEstimator};
pub use measurement::Measurement;
pub use metrics::{Average, ClassificationMetrics};
pub use render::{ConfusionMatrixPlot, ConfusionMatrixRenderer, TextTableRenderer};
pub use report::{ClassificationReport, ReportRow};
pub use results::{EvaluationInfo, EvaluationResults, EvaluationResultsBuilder, SerializedResults};
