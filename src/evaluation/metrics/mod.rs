mod average;
mod class_tally;
mod classification_metrics;
mod metrics_calculator;

pub use average::Average;
pub use class_tally::{ClassScores, ClassTally};
pub use classification_metrics::ClassificationMetrics;
pub(crate) use metrics_calculator::check_beta;
pub use metrics_calculator::{accuracy, metrics, precision_recall_fscore, support};
