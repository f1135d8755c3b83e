use crate::core::labels::{Label, dedup_classes};
use crate::evaluation::confusion::{CellIds, ConfusionMatrix};
use crate::evaluation::error::{Result, check_len, check_paired};
use log::debug;
use std::collections::HashMap;

/// Tallies paired labels into a [`ConfusionMatrix`].
///
/// The caller's label list fixes the axis order. An "other" label, when set,
/// is appended (if absent) and receives every label that is not on the axis;
/// without it such samples are dropped. A missing label, when set, is
/// appended (if absent) as its own row/column.
///
/// [`build`](Self::build) fails with a shape error when the predictions,
/// weights or sample ids do not line up with the ground truth.
pub struct ConfusionMatrixBuilder<'a, L: Label> {
    ytrue: &'a [L],
    ypred: &'a [L],
    weights: Option<&'a [f64]>,
    ytrue_ids: Option<&'a [Option<String>]>,
    ypred_ids: Option<&'a [Option<String>]>,
    other_label: Option<L>,
    missing: Option<L>,
    tabulate_ids: bool,
}

impl<'a, L: Label> ConfusionMatrixBuilder<'a, L> {
    pub fn new(ytrue: &'a [L], ypred: &'a [L]) -> Self {
        Self {
            ytrue,
            ypred,
            weights: None,
            ytrue_ids: None,
            ypred_ids: None,
            other_label: None,
            missing: None,
            tabulate_ids: false,
        }
    }

    pub fn weights(mut self, weights: Option<&'a [f64]>) -> Self {
        self.weights = weights;
        self
    }

    pub fn sample_ids(
        mut self,
        ytrue_ids: Option<&'a [Option<String>]>,
        ypred_ids: Option<&'a [Option<String>]>,
    ) -> Self {
        self.ytrue_ids = ytrue_ids;
        self.ypred_ids = ypred_ids;
        self
    }

    pub fn include_other(mut self, other_label: Option<L>) -> Self {
        self.other_label = other_label;
        self
    }

    pub fn include_missing(mut self, missing: Option<L>) -> Self {
        self.missing = missing;
        self
    }

    pub fn tabulate_ids(mut self, tabulate_ids: bool) -> Self {
        self.tabulate_ids = tabulate_ids;
        self
    }

    pub fn build(self, labels: &[L]) -> Result<ConfusionMatrix<L>> {
        let n_samples = self.ytrue.len();
        check_paired(n_samples, self.ypred.len(), self.weights)?;
        check_len("ytrue_ids", n_samples, self.ytrue_ids.map(<[_]>::len))?;
        check_len("ypred_ids", n_samples, self.ypred_ids.map(<[_]>::len))?;

        let mut labels = dedup_classes(labels.iter().cloned());

        if let Some(other) = &self.other_label
            && !labels.contains(other)
        {
            labels.push(other.clone());
        }
        if let Some(missing) = &self.missing
            && !labels.contains(missing)
        {
            labels.push(missing.clone());
        }

        let n = labels.len();
        let mut values = vec![vec![0.0; n]; n];
        let mut ids: Option<CellIds> = self
            .tabulate_ids
            .then(|| vec![vec![Vec::new(); n]; n]);

        if n == 0 || self.ytrue.is_empty() {
            return Ok(ConfusionMatrix::new(labels, values, ids));
        }

        {
            let index: HashMap<&L, usize> =
                labels.iter().enumerate().map(|(i, l)| (l, i)).collect();
            let other_idx = self.other_label.as_ref().and_then(|o| index.get(o).copied());
            let lookup = |y: &L| index.get(y).copied().or(other_idx);

            let mut dropped = 0usize;
            for (i, (yt, yp)) in self.ytrue.iter().zip(self.ypred).enumerate() {
                let (Some(t), Some(p)) = (lookup(yt), lookup(yp)) else {
                    dropped += 1;
                    continue;
                };

                values[t][p] += self.weights.map_or(1.0, |w| w[i]);

                if let Some(cells) = ids.as_mut() {
                    let cell = &mut cells[t][p];
                    if let Some(Some(id)) = self.ytrue_ids.map(|v| &v[i]) {
                        cell.push(id.clone());
                    }
                    if let Some(Some(id)) = self.ypred_ids.map(|v| &v[i]) {
                        cell.push(id.clone());
                    }
                }
            }

            if dropped > 0 {
                debug!(
                    "confusion matrix dropped {dropped} of {} samples outside {n} labels",
                    n_samples
                );
            }
        }

        Ok(ConfusionMatrix::new(labels, values, ids))
    }
}
