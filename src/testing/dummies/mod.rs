mod results;

pub use results::{abac_results, owned};
