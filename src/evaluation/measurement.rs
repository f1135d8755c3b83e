use serde::Serialize;
use std::fmt;

/// One named entry of [`ClassificationMetrics`](crate::evaluation::ClassificationMetrics),
/// e.g. `accuracy` or `fscore`.
///
/// Displays as `name: value`; a formatter precision (`{:.4}`) applies to the
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub name: &'static str,
    pub value: f64,
}

impl Measurement {
    #[inline]
    pub fn new(name: &'static str, value: f64) -> Self {
        Self { name, value }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{}: {:.p$}", self.name, self.value),
            None => write!(f, "{}: {}", self.name, self.value),
        }
    }
}
