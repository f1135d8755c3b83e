use crate::core::labels::Label;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Display, Write};

pub const MICRO_AVG: &str = "micro avg";
pub const MACRO_AVG: &str = "macro avg";
pub const WEIGHTED_AVG: &str = "weighted avg";

const HEADERS: [&str; 4] = ["precision", "recall", "f1-score", "support"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub precision: f64,
    pub recall: f64,
    #[serde(rename = "f1-score")]
    pub f1_score: f64,
    pub support: f64,
}

/// Per-class rows followed by the micro, macro and weighted aggregate rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport<L: Label> {
    pub classes: Vec<(L, ReportRow)>,
    pub micro_avg: ReportRow,
    pub macro_avg: ReportRow,
    pub weighted_avg: ReportRow,
}

impl<L: Label> ClassificationReport<L> {
    /// Report with a zeroed row per label and zeroed aggregates.
    pub fn zeroed(labels: &[L]) -> Self {
        Self {
            classes: labels
                .iter()
                .map(|l| (l.clone(), ReportRow::default()))
                .collect(),
            micro_avg: ReportRow::default(),
            macro_avg: ReportRow::default(),
            weighted_avg: ReportRow::default(),
        }
    }

    pub fn class(&self, label: &L) -> Option<&ReportRow> {
        self.classes
            .iter()
            .find_map(|(l, row)| (l == label).then_some(row))
    }

    fn averages(&self) -> [(&'static str, &ReportRow); 3] {
        [
            (MICRO_AVG, &self.micro_avg),
            (MACRO_AVG, &self.macro_avg),
            (WEIGHTED_AVG, &self.weighted_avg),
        ]
    }
}

impl<L: Label + Display> ClassificationReport<L> {
    /// Looks a row up by its map key: a class label or an aggregate key.
    pub fn get(&self, key: &str) -> Option<&ReportRow> {
        self.averages()
            .into_iter()
            .find_map(|(k, row)| (k == key).then_some(row))
            .or_else(|| {
                self.classes
                    .iter()
                    .find_map(|(l, row)| (l.to_string() == key).then_some(row))
            })
    }

    /// Ordered map keyed by class label, then the three aggregate keys.
    ///
    /// A class whose label displays as `"micro avg"`, `"macro avg"` or
    /// `"weighted avg"` is shadowed by the aggregate row of the same name.
    pub fn to_json_value(&self) -> Value {
        let mut map = Map::new();
        for (label, row) in &self.classes {
            let key = label.to_string();
            if self.averages().iter().any(|(k, _)| *k == key) {
                warn!("class {key:?} is shadowed by an aggregate row");
            }
            map.insert(key, serde_json::to_value(row).unwrap_or(Value::Null));
        }
        for (key, row) in self.averages() {
            map.insert(key.to_string(), serde_json::to_value(row).unwrap_or(Value::Null));
        }
        Value::Object(map)
    }

    /// Fixed-width text table with `digits` decimals per score.
    pub fn to_text(&self, digits: usize) -> String {
        let names: Vec<String> = self.classes.iter().map(|(l, _)| l.to_string()).collect();
        let width = names
            .iter()
            .map(|n| n.chars().count())
            .chain([WEIGHTED_AVG.len(), digits])
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        let _ = write!(out, "{:>width$} ", "");
        for h in HEADERS {
            let _ = write!(out, " {h:>9}");
        }
        out.push_str("\n\n");

        for (name, (_, row)) in names.iter().zip(&self.classes) {
            write_row(&mut out, name, row, width, digits);
        }
        out.push('\n');
        for (name, row) in self.averages() {
            write_row(&mut out, name, row, width, digits);
        }
        out
    }
}

fn write_row(out: &mut String, name: &str, row: &ReportRow, width: usize, digits: usize) {
    let _ = write!(out, "{name:>width$} ");
    for v in [row.precision, row.recall, row.f1_score] {
        let _ = write!(out, " {v:>9.digits$}");
    }
    let _ = writeln!(out, " {:>9}", format_support(row.support, digits));
}

fn format_support(support: f64, digits: usize) -> String {
    if support.fract() == 0.0 {
        format!("{support:.0}")
    } else {
        format!("{support:.digits$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClassificationReport<&'static str> {
        ClassificationReport {
            classes: vec![
                (
                    "cat",
                    ReportRow {
                        precision: 1.0,
                        recall: 0.5,
                        f1_score: 2.0 / 3.0,
                        support: 2.0,
                    },
                ),
                (
                    "dog",
                    ReportRow {
                        precision: 0.5,
                        recall: 1.0,
                        f1_score: 2.0 / 3.0,
                        support: 1.5,
                    },
                ),
            ],
            micro_avg: ReportRow {
                precision: 0.75,
                recall: 0.75,
                f1_score: 0.75,
                support: 3.5,
            },
            macro_avg: ReportRow::default(),
            weighted_avg: ReportRow::default(),
        }
    }

    #[test]
    fn zeroed_has_one_row_per_label() {
        let r = ClassificationReport::zeroed(&["a", "b"]);
        assert_eq!(r.classes.len(), 2);
        assert_eq!(r.class(&"b"), Some(&ReportRow::default()));
        assert_eq!(r.micro_avg, ReportRow::default());
    }

    #[test]
    fn get_finds_classes_and_aggregates() {
        let r = sample();
        assert_eq!(r.get("cat").unwrap().recall, 0.5);
        assert_eq!(r.get(MICRO_AVG).unwrap().support, 3.5);
        assert!(r.get("bird").is_none());
    }

    #[test]
    fn json_keys_are_ordered_and_use_f1_dash() {
        let v = sample().to_json_value();
        let obj = v.as_object().unwrap();
        let keys: Vec<_> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, ["cat", "dog", MICRO_AVG, MACRO_AVG, WEIGHTED_AVG]);
        assert!(obj["cat"].get("f1-score").is_some());
    }

    #[test]
    fn aggregate_keys_shadow_same_named_classes() {
        let mut r = sample();
        r.classes[0].0 = MICRO_AVG;
        let v = r.to_json_value();
        let obj = v.as_object().unwrap();
        let keys: Vec<_> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, [MICRO_AVG, "dog", MACRO_AVG, WEIGHTED_AVG]);
        assert_eq!(obj[MICRO_AVG]["support"], 3.5);
        assert_eq!(r.get(MICRO_AVG).unwrap().support, 3.5);
    }

    #[test]
    fn text_table_layout() {
        let text = sample().to_text(2);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "              precision    recall  f1-score   support"
        );
        assert_eq!(lines[1], "");
        assert_eq!(
            lines[2],
            "         cat       1.00      0.50      0.67         2"
        );
        assert_eq!(
            lines[3],
            "         dog       0.50      1.00      0.67      1.50"
        );
        assert_eq!(lines[4], "");
        assert!(lines[5].trim_start().starts_with(MICRO_AVG));
        assert_eq!(lines.len(), 8);
    }
}
