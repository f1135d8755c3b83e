use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct ConfusionMatrixParameters {
    #[serde(default)]
    #[schemars(
        title = "Include other",
        description = "Add a row/column collecting labels outside the selected classes?"
    )]
    pub include_other: bool,
}

impl ConfusionMatrixParameters {
    pub fn schema() -> Schema {
        schema_for!(ConfusionMatrixParameters)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PlotParameters {
    #[serde(default = "default_true")]
    #[schemars(
        title = "Include other",
        description = "Show extra columns for missing predictions and predictions outside the selected classes?",
        default = "default_true"
    )]
    pub include_other: bool,

    #[serde(default)]
    #[schemars(
        title = "Other label",
        description = "Column label for predictions outside the selected classes"
    )]
    pub other_label: Option<String>,
}

impl Default for PlotParameters {
    fn default() -> Self {
        Self {
            include_other: default_true(),
            other_label: None,
        }
    }
}

impl PlotParameters {
    pub fn schema() -> Schema {
        schema_for!(PlotParameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn matrix_defaults_exclude_other_and_plot_defaults_include_it() {
        assert!(!ConfusionMatrixParameters::default().include_other);
        assert!(PlotParameters::default().include_other);

        let p: PlotParameters = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p, PlotParameters::default());
    }

    #[test]
    fn plot_schema_has_default_true() {
        let v = serde_json::to_value(PlotParameters::schema()).unwrap();
        let field = v
            .get("properties")
            .and_then(|p| p.get("include_other"))
            .and_then(Value::as_object)
            .unwrap();
        assert_eq!(field.get("default").and_then(Value::as_bool), Some(true));
        assert_eq!(
            field.get("title").and_then(Value::as_str),
            Some("Include other")
        );
    }

    #[test]
    fn matrix_schema_is_object() {
        let v = serde_json::to_value(ConfusionMatrixParameters::schema()).unwrap();
        assert_eq!(v.get("type").and_then(Value::as_str), Some("object"));
    }
}
