mod classification_report;
mod report_generator;

pub use classification_report::{
    ClassificationReport, MACRO_AVG, MICRO_AVG, ReportRow, WEIGHTED_AVG,
};
pub use report_generator::report;
