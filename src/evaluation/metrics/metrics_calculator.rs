use crate::core::labels::Label;
use crate::evaluation::error::{EvalError, Result, check_len, check_paired};
use crate::evaluation::estimators::{Estimator, WeightedMeanEstimator};
use crate::evaluation::metrics::{Average, ClassScores, ClassTally, ClassificationMetrics};
use std::collections::HashSet;

/// Weighted accuracy over samples whose true **or** predicted label is in
/// `labels`. Returns `0.0` when nothing survives the restriction.
pub fn accuracy<L: Label>(
    ytrue: &[L],
    ypred: &[L],
    labels: &[L],
    weights: Option<&[f64]>,
) -> Result<f64> {
    check_paired(ytrue.len(), ypred.len(), weights)?;
    let labels: HashSet<&L> = labels.iter().collect();
    let mut est = WeightedMeanEstimator::default();
    for (i, (yt, yp)) in ytrue.iter().zip(ypred).enumerate() {
        if !labels.contains(yt) && !labels.contains(yp) {
            continue;
        }
        let w = weights.map_or(1.0, |w| w[i]);
        est.add_weighted(if yt == yp { 1.0 } else { 0.0 }, w);
    }
    Ok(est.estimation())
}

/// Weighted count of samples whose **true** label is in `labels`.
///
/// Narrower than the inclusion rule of [`accuracy`]: a sample predicted into
/// `labels` from outside does not count.
pub fn support<L: Label>(ytrue: &[L], labels: &[L], weights: Option<&[f64]>) -> Result<f64> {
    check_len("weights", ytrue.len(), weights.map(<[f64]>::len))?;
    let labels: HashSet<&L> = labels.iter().collect();
    Ok(ytrue
        .iter()
        .enumerate()
        .filter(|(_, y)| labels.contains(y))
        .map(|(i, _)| weights.map_or(1.0, |w| w[i]))
        .sum())
}

pub(crate) fn check_beta(beta: f64) -> Result<()> {
    if beta.is_finite() && beta >= 0.0 {
        Ok(())
    } else {
        Err(EvalError::InvalidParameter(format!(
            "beta must be a finite non-negative number, got {beta}"
        )))
    }
}

/// Precision, recall and F-beta under the given averaging mode, restricted
/// to `labels`. The returned `support` is the weighted true count over
/// `labels`.
pub fn precision_recall_fscore<L: Label>(
    ytrue: &[L],
    ypred: &[L],
    labels: &[L],
    weights: Option<&[f64]>,
    average: Average,
    beta: f64,
) -> Result<ClassScores> {
    check_beta(beta)?;
    Ok(ClassTally::new(ytrue, ypred, labels, weights)?.average(average, beta))
}

pub fn metrics<L: Label>(
    ytrue: &[L],
    ypred: &[L],
    labels: &[L],
    weights: Option<&[f64]>,
    average: Average,
    beta: f64,
) -> Result<ClassificationMetrics> {
    let scores = precision_recall_fscore(ytrue, ypred, labels, weights, average, beta)?;
    Ok(ClassificationMetrics {
        accuracy: accuracy(ytrue, ypred, labels, weights)?,
        precision: scores.precision,
        recall: scores.recall,
        fscore: scores.fscore,
        support: support(ytrue, labels, weights)?,
    })
}
