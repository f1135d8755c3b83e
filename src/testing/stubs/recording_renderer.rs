use crate::core::labels::Label;
use crate::evaluation::{ConfusionMatrixPlot, ConfusionMatrixRenderer, EvalError};
use std::cell::RefCell;

/// Renderer that keeps every plot it receives and returns its index.
pub struct RecordingRenderer<L: Label> {
    pub plots: RefCell<Vec<ConfusionMatrixPlot<L>>>,
}

impl<L: Label> RecordingRenderer<L> {
    pub fn new() -> Self {
        Self {
            plots: RefCell::new(Vec::new()),
        }
    }

    pub fn last(&self) -> Option<ConfusionMatrixPlot<L>> {
        self.plots.borrow().last().cloned()
    }
}

impl<L: Label> Default for RecordingRenderer<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> ConfusionMatrixRenderer<L> for RecordingRenderer<L> {
    type Artifact = usize;
    type Error = EvalError;

    fn render(&self, plot: ConfusionMatrixPlot<L>) -> Result<usize, EvalError> {
        let mut plots = self.plots.borrow_mut();
        plots.push(plot);
        Ok(plots.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::abac_results;

    #[test]
    fn records_what_results_hand_over() {
        let renderer = RecordingRenderer::new();
        let r = abac_results();

        let first = r.plot_confusion_matrix(&renderer, None, true, None).unwrap();
        let subset = ["A".to_string()];
        let second = r
            .plot_confusion_matrix(&renderer, Some(&subset[..]), true, Some("rest".to_string()))
            .unwrap();
        assert_eq!((first, second), (0, 1));

        let plot = renderer.last().unwrap();
        assert_eq!(plot.info, *r.info());
        assert_eq!(plot.matrix.labels(), &["A", "rest"]);
        assert_eq!(plot.matrix.values(), &[vec![1.0, 1.0]]);
        let ids = plot.matrix.ids().unwrap();
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].len(), 2);
    }
}
