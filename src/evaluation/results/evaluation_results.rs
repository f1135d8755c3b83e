use crate::core::labels::{Label, clean, dedup_classes, derive_classes};
use crate::evaluation::confusion::{ConfusionMatrix, ConfusionMatrixBuilder};
use crate::evaluation::error::{EvalError, Result, check_len};
use crate::evaluation::metrics::{self, Average, ClassificationMetrics};
use crate::evaluation::parameters::MetricsParameters;
use crate::evaluation::render::{ConfusionMatrixPlot, ConfusionMatrixRenderer};
use crate::evaluation::report::{self, ClassificationReport};
use crate::evaluation::results::{EvaluationInfo, SerializedResults};
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Finished classification evaluation.
///
/// Holds the cleaned ground-truth and predicted labels with their optional
/// weights, confidences and sample ids. Missing labels have already been
/// replaced by the sentinel. Every accessor recomputes its output from these
/// arrays; nothing is cached and nothing is mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResults<L: Label> {
    ytrue: Vec<L>,
    ypred: Vec<L>,
    confs: Option<Vec<Option<f64>>>,
    weights: Option<Vec<f64>>,
    info: EvaluationInfo,
    ytrue_ids: Option<Vec<Option<String>>>,
    ypred_ids: Option<Vec<Option<String>>>,
    classes: Vec<L>,
    missing: L,
}

pub struct EvaluationResultsBuilder<L: Label> {
    ytrue: Vec<Option<L>>,
    ypred: Vec<Option<L>>,
    confs: Option<Vec<Option<f64>>>,
    weights: Option<Vec<f64>>,
    info: EvaluationInfo,
    ytrue_ids: Option<Vec<Option<String>>>,
    ypred_ids: Option<Vec<Option<String>>>,
    classes: Option<Vec<L>>,
    missing: Option<L>,
}

impl<L: Label> EvaluationResultsBuilder<L> {
    pub fn confs(mut self, confs: Vec<Option<f64>>) -> Self {
        self.confs = Some(confs);
        self
    }

    pub fn weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn eval_key<S: Into<String>>(mut self, eval_key: S) -> Self {
        self.info.eval_key = Some(eval_key.into());
        self
    }

    pub fn gt_field<S: Into<String>>(mut self, gt_field: S) -> Self {
        self.info.gt_field = Some(gt_field.into());
        self
    }

    pub fn pred_field<S: Into<String>>(mut self, pred_field: S) -> Self {
        self.info.pred_field = Some(pred_field.into());
        self
    }

    pub fn ytrue_ids(mut self, ids: Vec<Option<String>>) -> Self {
        self.ytrue_ids = Some(ids);
        self
    }

    pub fn ypred_ids(mut self, ids: Vec<Option<String>>) -> Self {
        self.ypred_ids = Some(ids);
        self
    }

    pub fn classes(mut self, classes: Vec<L>) -> Self {
        self.classes = Some(classes);
        self
    }

    pub fn missing(mut self, missing: L) -> Self {
        self.missing = Some(missing);
        self
    }

    /// Validates the parallel sequences and reconciles the label set.
    pub fn build(self) -> Result<EvaluationResults<L>> {
        let n = self.ytrue.len();
        check_len("ypred", n, Some(self.ypred.len()))?;
        check_len("confs", n, self.confs.as_ref().map(Vec::len))?;
        check_len("weights", n, self.weights.as_ref().map(Vec::len))?;
        check_len("ytrue_ids", n, self.ytrue_ids.as_ref().map(Vec::len))?;
        check_len("ypred_ids", n, self.ypred_ids.as_ref().map(Vec::len))?;

        if let Some(w) = self
            .weights
            .iter()
            .flatten()
            .find(|w| !w.is_finite() || **w < 0.0)
        {
            return Err(EvalError::InvalidParameter(format!(
                "weights must be finite and non-negative, got {w}"
            )));
        }

        let missing = self.missing.unwrap_or_else(L::missing);
        let (ytrue, missing_true) = clean(self.ytrue, &missing);
        let (ypred, missing_pred) = clean(self.ypred, &missing);
        let classes = derive_classes(
            &ytrue,
            &ypred,
            self.classes,
            &missing,
            missing_true || missing_pred,
        );

        Ok(EvaluationResults {
            ytrue,
            ypred,
            confs: self.confs,
            weights: self.weights,
            info: self.info,
            ytrue_ids: self.ytrue_ids,
            ypred_ids: self.ypred_ids,
            classes,
            missing,
        })
    }
}

impl<L: Label> EvaluationResults<L> {
    pub fn builder(ytrue: Vec<Option<L>>, ypred: Vec<Option<L>>) -> EvaluationResultsBuilder<L> {
        EvaluationResultsBuilder {
            ytrue,
            ypred,
            confs: None,
            weights: None,
            info: EvaluationInfo::default(),
            ytrue_ids: None,
            ypred_ids: None,
            classes: None,
            missing: None,
        }
    }

    pub fn new(ytrue: Vec<Option<L>>, ypred: Vec<Option<L>>) -> Result<Self> {
        Self::builder(ytrue, ypred).build()
    }

    pub fn len(&self) -> usize {
        self.ytrue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ytrue.is_empty()
    }

    pub fn ytrue(&self) -> &[L] {
        &self.ytrue
    }

    pub fn ypred(&self) -> &[L] {
        &self.ypred
    }

    pub fn confs(&self) -> Option<&[Option<f64>]> {
        self.confs.as_deref()
    }

    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    pub fn info(&self) -> &EvaluationInfo {
        &self.info
    }

    pub fn ytrue_ids(&self) -> Option<&[Option<String>]> {
        self.ytrue_ids.as_deref()
    }

    pub fn ypred_ids(&self) -> Option<&[Option<String>]> {
        self.ypred_ids.as_deref()
    }

    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    pub fn missing(&self) -> &L {
        &self.missing
    }

    /// Resolves the labels an operation works on: `classes` when given,
    /// otherwise the stored classes, without the missing sentinel unless
    /// `include_missing` is set. Repeated `classes` are kept once, in first
    /// occurrence order.
    pub fn labels(&self, classes: Option<&[L]>, include_missing: bool) -> Vec<L> {
        match classes {
            Some(classes) => dedup_classes(classes.iter().cloned()),
            None if include_missing => self.classes.clone(),
            None => self
                .classes
                .iter()
                .filter(|c| **c != self.missing)
                .cloned()
                .collect(),
        }
    }

    fn matrix_builder(&self) -> ConfusionMatrixBuilder<'_, L> {
        ConfusionMatrixBuilder::new(&self.ytrue, &self.ypred)
            .weights(self.weights())
            .sample_ids(self.ytrue_ids(), self.ypred_ids())
    }

    /// Confusion matrix over `classes` (stored classes, sentinel included, by
    /// default). With `include_other`, an extra row/column collects every
    /// label outside the selection.
    pub fn confusion_matrix(
        &self,
        classes: Option<&[L]>,
        include_other: bool,
    ) -> Result<ConfusionMatrix<L>> {
        let labels = self.labels(classes, true);
        self.matrix_builder()
            .include_other(include_other.then(L::other))
            .build(&labels)
    }

    /// Display-ready matrix with per-cell ids.
    ///
    /// With `include_other`, predictions outside the selection go to
    /// `other_label` (default [`Label::other`]) and missing predictions get
    /// their own column; those extra columns survive only when non-empty, and
    /// no extra ground-truth rows are shown.
    pub fn confusion_matrix_plot(
        &self,
        classes: Option<&[L]>,
        include_other: bool,
        other_label: Option<L>,
    ) -> Result<ConfusionMatrixPlot<L>> {
        let labels = self.labels(classes, true);
        let mut matrix = self
            .matrix_builder()
            .tabulate_ids(true)
            .include_other(include_other.then(|| other_label.unwrap_or_else(L::other)))
            .include_missing(include_other.then(|| self.missing.clone()))
            .build(&labels)?;

        if include_other {
            matrix = matrix.trim_for_display(labels.len());
        }

        Ok(ConfusionMatrixPlot {
            matrix,
            info: self.info.clone(),
        })
    }

    pub fn plot_confusion_matrix<R: ConfusionMatrixRenderer<L>>(
        &self,
        renderer: &R,
        classes: Option<&[L]>,
        include_other: bool,
        other_label: Option<L>,
    ) -> std::result::Result<R::Artifact, R::Error> {
        renderer.render(self.confusion_matrix_plot(classes, include_other, other_label)?)
    }

    pub fn metrics(
        &self,
        classes: Option<&[L]>,
        average: Average,
        beta: f64,
    ) -> Result<ClassificationMetrics> {
        let labels = self.labels(classes, false);
        metrics::metrics(
            &self.ytrue,
            &self.ypred,
            &labels,
            self.weights(),
            average,
            beta,
        )
    }

    pub fn metrics_with(
        &self,
        classes: Option<&[L]>,
        params: &MetricsParameters,
    ) -> Result<ClassificationMetrics> {
        params.validate()?;
        self.metrics(classes, params.average, params.beta)
    }

    pub fn report(&self, classes: Option<&[L]>) -> Result<ClassificationReport<L>> {
        let labels = self.labels(classes, false);
        report::report(&self.ytrue, &self.ypred, &labels, self.weights())
    }

    pub fn to_dict(&self) -> SerializedResults<L> {
        SerializedResults {
            ytrue: self.ytrue.iter().cloned().map(Some).collect(),
            ypred: self.ypred.iter().cloned().map(Some).collect(),
            confs: self.confs.clone(),
            weights: self.weights.clone(),
            eval_key: self.info.eval_key.clone(),
            gt_field: self.info.gt_field.clone(),
            pred_field: self.info.pred_field.clone(),
            ytrue_ids: self.ytrue_ids.clone(),
            ypred_ids: self.ypred_ids.clone(),
            classes: Some(self.classes.clone()),
            missing: Some(self.missing.clone()),
        }
    }

    pub fn from_dict(d: SerializedResults<L>) -> Result<Self> {
        EvaluationResultsBuilder {
            ytrue: d.ytrue,
            ypred: d.ypred,
            confs: d.confs,
            weights: d.weights,
            info: EvaluationInfo {
                eval_key: d.eval_key,
                gt_field: d.gt_field,
                pred_field: d.pred_field,
            },
            ytrue_ids: d.ytrue_ids,
            ypred_ids: d.ypred_ids,
            classes: d.classes,
            missing: d.missing,
        }
        .build()
    }
}

impl<L: Label + Display> EvaluationResults<L> {
    /// Writes the text report, or `No classes to analyze` when the label
    /// selection is empty.
    pub fn write_report<W: Write>(
        &self,
        mut w: W,
        classes: Option<&[L]>,
        digits: usize,
    ) -> Result<()> {
        let labels = self.labels(classes, false);
        if labels.is_empty() {
            warn!("no classes to analyze");
            writeln!(w, "No classes to analyze")?;
            return Ok(());
        }

        let report = report::report(&self.ytrue, &self.ypred, &labels, self.weights())?;
        writeln!(w, "{}", report.to_text(digits))?;
        Ok(())
    }

    pub fn print_report(&self, classes: Option<&[L]>, digits: usize) -> Result<()> {
        self.write_report(std::io::stdout().lock(), classes, digits)
    }
}

impl<L: Label + Serialize> EvaluationResults<L> {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_dict())?)
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut w, &self.to_dict())?;
        w.flush()?;
        Ok(())
    }
}

impl<L: Label + DeserializeOwned> EvaluationResults<L> {
    pub fn from_json(s: &str) -> Result<Self> {
        Self::from_dict(serde_json::from_str(s)?)
    }

    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let r = BufReader::new(File::open(path)?);
        Self::from_dict(serde_json::from_reader(r)?)
    }
}
