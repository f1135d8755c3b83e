mod evaluation_info;
mod evaluation_results;
mod serialized_results;

pub use evaluation_info::EvaluationInfo;
pub use evaluation_results::{EvaluationResults, EvaluationResultsBuilder};
pub use serialized_results::SerializedResults;
