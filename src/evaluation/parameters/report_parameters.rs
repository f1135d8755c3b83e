use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

fn default_digits() -> usize {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReportParameters {
    #[serde(default = "default_digits")]
    #[schemars(
        title = "Digits",
        description = "Number of decimals printed per score",
        default = "default_digits"
    )]
    pub digits: usize,
}

impl Default for ReportParameters {
    fn default() -> Self {
        Self {
            digits: default_digits(),
        }
    }
}

impl ReportParameters {
    pub fn schema() -> Schema {
        schema_for!(ReportParameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn digits_default_to_two() {
        assert_eq!(ReportParameters::default().digits, 2);
        let p: ReportParameters = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p, ReportParameters::default());
    }
}
