use crate::core::labels::Label;

/// Per-cell sample identifiers, same shape as the matrix values.
pub type CellIds = Vec<Vec<Vec<String>>>;

/// Weighted confusion matrix.
///
/// Rows are ground truth, columns are predictions. `labels` names the
/// columns; rows are named by the first `values.len()` labels. A freshly
/// built matrix is square; [`trim_for_display`](Self::trim_for_display) may
/// leave it with fewer rows than columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix<L: Label> {
    labels: Vec<L>,
    values: Vec<Vec<f64>>,
    ids: Option<CellIds>,
}

impl<L: Label> ConfusionMatrix<L> {
    pub(crate) fn new(labels: Vec<L>, values: Vec<Vec<f64>>, ids: Option<CellIds>) -> Self {
        Self {
            labels,
            values,
            ids,
        }
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn row_labels(&self) -> &[L] {
        &self.labels[..self.values.len()]
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn ids(&self) -> Option<&CellIds> {
        self.ids.as_ref()
    }

    pub fn num_rows(&self) -> usize {
        self.values.len()
    }

    pub fn num_cols(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn row_sum(&self, row: usize) -> f64 {
        self.values.get(row).map_or(0.0, |r| r.iter().sum())
    }

    pub fn col_sum(&self, col: usize) -> f64 {
        self.values.iter().filter_map(|r| r.get(col)).sum()
    }

    pub fn total(&self) -> f64 {
        self.values.iter().flatten().sum()
    }

    pub fn into_parts(self) -> (Vec<L>, Vec<Vec<f64>>, Option<CellIds>) {
        (self.labels, self.values, self.ids)
    }

    /// Prepares a matrix built with "other"/"missing" buckets for display.
    ///
    /// Rows past `num_requested` (ground-truth "other"/"missing") are dropped.
    /// Extra columns past `num_requested` are kept only if they hold a
    /// non-zero total over the remaining rows. Labels and ids are pruned in
    /// lock-step with the columns.
    pub fn trim_for_display(mut self, num_requested: usize) -> Self {
        let num_labels = self.labels.len();
        if num_labels <= num_requested {
            return self;
        }

        self.values.truncate(num_requested);
        if let Some(ids) = self.ids.as_mut() {
            ids.truncate(num_requested);
        }

        let keep: Vec<bool> = (0..num_labels)
            .map(|col| col < num_requested || self.col_sum(col) != 0.0)
            .collect();

        if keep.iter().all(|&k| k) {
            return self;
        }

        self.labels = retain_by_mask(self.labels, &keep);
        self.values = self
            .values
            .into_iter()
            .map(|row| retain_by_mask(row, &keep))
            .collect();
        self.ids = self.ids.map(|ids| {
            ids.into_iter()
                .map(|row| retain_by_mask(row, &keep))
                .collect()
        });
        self
    }
}

fn retain_by_mask<T>(items: Vec<T>, keep: &[bool]) -> Vec<T> {
    items
        .into_iter()
        .zip(keep)
        .filter_map(|(item, &k)| k.then_some(item))
        .collect()
}
