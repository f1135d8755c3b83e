use crate::evaluation::error::Result;
use crate::evaluation::metrics::Average;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

fn default_beta() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MetricsParameters {
    #[serde(default)]
    #[schemars(
        title = "Average",
        description = "Averaging strategy for precision, recall and F-beta"
    )]
    pub average: Average,

    #[serde(default = "default_beta")]
    #[schemars(
        title = "Beta",
        description = "Weight of recall relative to precision in the F-beta score",
        default = "default_beta"
    )]
    pub beta: f64,
}

impl Default for MetricsParameters {
    fn default() -> Self {
        Self {
            average: Average::default(),
            beta: default_beta(),
        }
    }
}

impl MetricsParameters {
    pub fn schema() -> Schema {
        schema_for!(MetricsParameters)
    }

    pub fn validate(&self) -> Result<()> {
        crate::evaluation::metrics::check_beta(self.beta)
    }
}
