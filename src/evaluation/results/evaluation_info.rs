use serde::{Deserialize, Serialize};

/// Caller metadata attached to an evaluation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationInfo {
    pub eval_key: Option<String>,
    pub gt_field: Option<String>,
    pub pred_field: Option<String>,
}

impl EvaluationInfo {
    /// Short human-readable heading, e.g. `"eval (gt vs pred)"`.
    pub fn title(&self) -> Option<String> {
        let fields = match (&self.gt_field, &self.pred_field) {
            (Some(gt), Some(pred)) => Some(format!("{gt} vs {pred}")),
            _ => None,
        };
        match (&self.eval_key, fields) {
            (Some(key), Some(fields)) => Some(format!("{key} ({fields})")),
            (Some(key), None) => Some(key.clone()),
            (None, fields) => fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(key: Option<&str>, gt: Option<&str>, pred: Option<&str>) -> EvaluationInfo {
        EvaluationInfo {
            eval_key: key.map(Into::into),
            gt_field: gt.map(Into::into),
            pred_field: pred.map(Into::into),
        }
    }

    #[test]
    fn title_variants() {
        assert_eq!(
            info(Some("e"), Some("gt"), Some("p")).title().as_deref(),
            Some("e (gt vs p)")
        );
        assert_eq!(info(Some("e"), None, Some("p")).title().as_deref(), Some("e"));
        assert_eq!(
            info(None, Some("gt"), Some("p")).title().as_deref(),
            Some("gt vs p")
        );
        assert_eq!(EvaluationInfo::default().title(), None);
    }
}
