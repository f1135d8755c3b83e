mod matrix_parameters;
mod metrics_parameters;
mod report_parameters;

pub use matrix_parameters::{ConfusionMatrixParameters, PlotParameters};
pub use metrics_parameters::MetricsParameters;
pub use report_parameters::ReportParameters;
