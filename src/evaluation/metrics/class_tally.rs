use crate::core::labels::Label;
use crate::evaluation::error::{Result, check_paired};
use crate::evaluation::metrics::Average;
use std::collections::HashMap;

/// Precision, recall, F-beta and support for one class or one aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClassScores {
    pub precision: f64,
    pub recall: f64,
    pub fscore: f64,
    pub support: f64,
}

/// Weighted per-class counts restricted to a label list.
///
/// For each label `c`: `tp` is the weight of samples with `ytrue == ypred ==
/// c`, `pred` the weight predicted as `c` and `truth` the weight whose ground
/// truth is `c`. Samples whose labels are off the list only contribute to
/// the side that is on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassTally {
    tp: Vec<f64>,
    pred: Vec<f64>,
    truth: Vec<f64>,
}

#[inline]
fn ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 { num / den } else { 0.0 }
}

#[inline]
fn fbeta(tp: f64, pred: f64, truth: f64, beta: f64) -> f64 {
    let b2 = beta * beta;
    ratio((1.0 + b2) * tp, b2 * truth + pred)
}

fn mean(v: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = v.len();
    if n == 0 { 0.0 } else { v.sum::<f64>() / n as f64 }
}

impl ClassTally {
    pub fn new<L: Label>(
        ytrue: &[L],
        ypred: &[L],
        labels: &[L],
        weights: Option<&[f64]>,
    ) -> Result<Self> {
        check_paired(ytrue.len(), ypred.len(), weights)?;
        let k = labels.len();
        let mut tally = Self {
            tp: vec![0.0; k],
            pred: vec![0.0; k],
            truth: vec![0.0; k],
        };
        if k == 0 {
            return Ok(tally);
        }

        let index: HashMap<&L, usize> = labels.iter().enumerate().map(|(i, l)| (l, i)).collect();
        for (i, (yt, yp)) in ytrue.iter().zip(ypred).enumerate() {
            let w = weights.map_or(1.0, |w| w[i]);
            let t = index.get(yt).copied();
            let p = index.get(yp).copied();
            if let Some(t) = t {
                tally.truth[t] += w;
            }
            if let Some(p) = p {
                tally.pred[p] += w;
            }
            if let (Some(t), Some(p)) = (t, p)
                && t == p
            {
                tally.tp[t] += w;
            }
        }
        Ok(tally)
    }

    pub fn num_classes(&self) -> usize {
        self.tp.len()
    }

    pub fn total_support(&self) -> f64 {
        self.truth.iter().sum()
    }

    /// Scores for each class, in label order. Zero denominators score 0.
    pub fn per_class(&self, beta: f64) -> Vec<ClassScores> {
        (0..self.num_classes())
            .map(|c| ClassScores {
                precision: ratio(self.tp[c], self.pred[c]),
                recall: ratio(self.tp[c], self.truth[c]),
                fscore: fbeta(self.tp[c], self.pred[c], self.truth[c], beta),
                support: self.truth[c],
            })
            .collect()
    }

    pub fn average(&self, average: Average, beta: f64) -> ClassScores {
        let support = self.total_support();
        match average {
            Average::Micro => {
                let tp: f64 = self.tp.iter().sum();
                let pred: f64 = self.pred.iter().sum();
                ClassScores {
                    precision: ratio(tp, pred),
                    recall: ratio(tp, support),
                    fscore: fbeta(tp, pred, support, beta),
                    support,
                }
            }
            Average::Macro => {
                let per_class = self.per_class(beta);
                ClassScores {
                    precision: mean(per_class.iter().map(|s| s.precision)),
                    recall: mean(per_class.iter().map(|s| s.recall)),
                    fscore: mean(per_class.iter().map(|s| s.fscore)),
                    support,
                }
            }
            Average::Weighted => {
                let per_class = self.per_class(beta);
                let weighted = |f: fn(&ClassScores) -> f64| {
                    ratio(
                        per_class.iter().map(|s| f(s) * s.support).sum(),
                        support,
                    )
                };
                ClassScores {
                    precision: weighted(|s| s.precision),
                    recall: weighted(|s| s.recall),
                    fscore: weighted(|s| s.fscore),
                    support,
                }
            }
        }
    }
}
