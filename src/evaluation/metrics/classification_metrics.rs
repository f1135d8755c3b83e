use crate::evaluation::Measurement;
use serde::{Deserialize, Serialize};

/// Aggregate classification metrics for one label selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub fscore: f64,
    pub support: f64,
}

impl ClassificationMetrics {
    pub fn to_measurements(&self) -> Vec<Measurement> {
        vec![
            Measurement::new("accuracy", self.accuracy),
            Measurement::new("precision", self.precision),
            Measurement::new("recall", self.recall),
            Measurement::new("fscore", self.fscore),
            Measurement::new("support", self.support),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurements_keep_key_order() {
        let m = ClassificationMetrics {
            accuracy: 0.75,
            precision: 0.5,
            recall: 0.25,
            fscore: 0.125,
            support: 4.0,
        };
        let names: Vec<_> = m.to_measurements().into_iter().map(|m| m.name).collect();
        assert_eq!(names, ["accuracy", "precision", "recall", "fscore", "support"]);
    }

    #[test]
    fn serializes_with_flat_keys() {
        let v = serde_json::to_value(ClassificationMetrics::default()).unwrap();
        let obj = v.as_object().unwrap();
        let keys: Vec<_> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, ["accuracy", "precision", "recall", "fscore", "support"]);
    }
}
