use crate::core::labels::{Label, dedup_classes};
use crate::evaluation::error::{Result, check_paired};
use crate::evaluation::metrics::{Average, ClassScores, ClassTally};
use crate::evaluation::report::{ClassificationReport, ReportRow};
use log::debug;

impl From<ClassScores> for ReportRow {
    fn from(s: ClassScores) -> Self {
        Self {
            precision: s.precision,
            recall: s.recall,
            f1_score: s.fscore,
            support: s.support,
        }
    }
}

/// Per-class precision/recall/F1/support restricted to `labels`, plus the
/// micro, macro and weighted aggregate rows.
///
/// With no labels or no samples every row is zero. Repeated labels get a
/// single row.
pub fn report<L: Label>(
    ytrue: &[L],
    ypred: &[L],
    labels: &[L],
    weights: Option<&[f64]>,
) -> Result<ClassificationReport<L>> {
    check_paired(ytrue.len(), ypred.len(), weights)?;
    let labels = dedup_classes(labels.iter().cloned());
    if ytrue.is_empty() || labels.is_empty() {
        debug!(
            "zeroed report: {} samples, {} labels",
            ytrue.len(),
            labels.len()
        );
        return Ok(ClassificationReport::zeroed(&labels));
    }

    let tally = ClassTally::new(ytrue, ypred, &labels, weights)?;
    let classes = labels
        .into_iter()
        .zip(tally.per_class(1.0).into_iter().map(ReportRow::from))
        .collect();

    Ok(ClassificationReport {
        classes,
        micro_avg: tally.average(Average::Micro, 1.0).into(),
        macro_avg: tally.average(Average::Macro, 1.0).into(),
        weighted_avg: tally.average(Average::Weighted, 1.0).into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const YTRUE: [&str; 4] = ["A", "B", "A", "C"];
    const YPRED: [&str; 4] = ["A", "B", "B", "C"];

    #[test]
    fn report_rows_follow_label_order() {
        let r = report(&YTRUE, &YPRED, &["C", "A"], None).unwrap();
        let names: Vec<_> = r.classes.iter().map(|(l, _)| *l).collect();
        assert_eq!(names, ["C", "A"]);
        assert_eq!(r.class(&"C").unwrap().f1_score, 1.0);
        assert_eq!(r.class(&"A").unwrap().recall, 0.5);
    }

    #[test]
    fn aggregate_support_is_total_true_weight() {
        let w = [1.0, 2.0, 3.0, 4.0];
        let r = report(&YTRUE, &YPRED, &["A", "B"], Some(&w[..])).unwrap();
        assert_eq!(r.micro_avg.support, 6.0);
        assert_eq!(r.macro_avg.support, 6.0);
        assert_eq!(r.weighted_avg.support, 6.0);
        assert_eq!(r.class(&"A").unwrap().support, 4.0);
    }

    #[test]
    fn empty_labels_give_only_zeroed_aggregates() {
        let r = report(&YTRUE, &YPRED, &[], None).unwrap();
        assert!(r.classes.is_empty());
        assert_eq!(r.micro_avg, ReportRow::default());
        assert_eq!(r.macro_avg, ReportRow::default());
        assert_eq!(r.weighted_avg, ReportRow::default());
    }

    #[test]
    fn empty_samples_zero_every_label() {
        let empty: [&str; 0] = [];
        let r = report(&empty, &empty, &["A", "B"], None).unwrap();
        assert_eq!(r.classes.len(), 2);
        assert!(r.classes.iter().all(|(_, row)| *row == ReportRow::default()));
    }

    #[test]
    fn unseen_label_scores_zero() {
        let r = report(&YTRUE, &YPRED, &["A", "Z"], None).unwrap();
        assert_eq!(r.class(&"Z"), Some(&ReportRow::default()));
    }

    #[test]
    fn repeated_labels_get_one_row() {
        let r = report(&YTRUE, &YPRED, &["A", "C", "A"], None).unwrap();
        let names: Vec<_> = r.classes.iter().map(|(l, _)| *l).collect();
        assert_eq!(names, ["A", "C"]);
        assert_eq!(r.class(&"A").unwrap().support, 2.0);
    }

    #[test]
    fn short_weights_are_rejected() {
        let w = [1.0; 3];
        assert!(report(&YTRUE, &YPRED, &["A"], Some(&w[..])).is_err());
    }
}
