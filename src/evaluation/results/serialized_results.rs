use serde::{Deserialize, Serialize};

/// Plain-data form of an evaluation, suitable for storage as JSON.
///
/// Exactly these keys are written; every key but `ytrue`/`ypred` may be
/// absent (or null) on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "L: Deserialize<'de>"))]
pub struct SerializedResults<L> {
    pub ytrue: Vec<Option<L>>,
    pub ypred: Vec<Option<L>>,
    #[serde(default)]
    pub confs: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
    #[serde(default)]
    pub eval_key: Option<String>,
    #[serde(default)]
    pub gt_field: Option<String>,
    #[serde(default)]
    pub pred_field: Option<String>,
    #[serde(default)]
    pub ytrue_ids: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub ypred_ids: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub classes: Option<Vec<L>>,
    #[serde(default)]
    pub missing: Option<L>,
}
