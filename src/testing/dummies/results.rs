use crate::evaluation::EvaluationResults;

pub fn owned(labels: &[Option<&str>]) -> Vec<Option<String>> {
    labels.iter().map(|l| l.map(str::to_string)).collect()
}

/// `ytrue = [A, B, A, C]`, `ypred = [A, B, B, C]`, unweighted, with
/// evaluation metadata set.
pub fn abac_results() -> EvaluationResults<String> {
    let built = EvaluationResults::builder(
        owned(&[Some("A"), Some("B"), Some("A"), Some("C")]),
        owned(&[Some("A"), Some("B"), Some("B"), Some("C")]),
    )
    .eval_key("eval")
    .gt_field("ground_truth")
    .pred_field("predictions")
    .build();

    match built {
        Ok(results) => results,
        Err(e) => panic!("fixture must be well formed: {e}"),
    }
}
