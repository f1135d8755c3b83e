use crate::core::labels::Label;
use crate::evaluation::error::EvalError;
use crate::evaluation::render::{ConfusionMatrixPlot, ConfusionMatrixRenderer};
use std::fmt::{Display, Write};

/// Renders a confusion matrix as a plain-text grid.
///
/// Rows are ground truth, columns are predictions. The first line carries the
/// evaluation key and field names when they are known.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTableRenderer {
    pub digits: usize,
}

impl<L: Label + Display> ConfusionMatrixRenderer<L> for TextTableRenderer {
    type Artifact = String;
    type Error = EvalError;

    fn render(&self, plot: ConfusionMatrixPlot<L>) -> Result<String, EvalError> {
        let digits = self.digits;
        let m = &plot.matrix;
        let cols: Vec<String> = m.labels().iter().map(|l| l.to_string()).collect();
        let cells: Vec<Vec<String>> = m
            .values()
            .iter()
            .map(|row| row.iter().map(|v| format!("{v:.digits$}")).collect())
            .collect();

        let label_width = cols.iter().map(|c| c.chars().count()).max().unwrap_or(0);
        let cell_width = cells
            .iter()
            .flatten()
            .map(String::len)
            .chain(std::iter::once(label_width))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        if let Some(title) = plot.info.title() {
            let _ = writeln!(out, "{title}");
        }
        let _ = write!(out, "{:>label_width$}", "");
        for c in &cols {
            let _ = write!(out, " {c:>cell_width$}");
        }
        out.push('\n');
        for (name, row) in cols.iter().zip(&cells) {
            let _ = write!(out, "{name:>label_width$}");
            for v in row {
                let _ = write!(out, " {v:>cell_width$}");
            }
            out.push('\n');
        }
        Ok(out)
    }
}
