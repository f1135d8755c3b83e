use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("length mismatch for `{field}`: expected {expected}, got {actual}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;

/// Fails with [`EvalError::ShapeMismatch`] when a present parallel sequence
/// does not have `expected` entries.
pub(crate) fn check_len(field: &'static str, expected: usize, actual: Option<usize>) -> Result<()> {
    match actual {
        Some(actual) if actual != expected => Err(EvalError::ShapeMismatch {
            field,
            expected,
            actual,
        }),
        _ => Ok(()),
    }
}

/// Checks that `ypred` and `weights` line up with `ytrue`.
pub(crate) fn check_paired(ytrue: usize, ypred: usize, weights: Option<&[f64]>) -> Result<()> {
    check_len("ypred", ytrue, Some(ypred))?;
    check_len("weights", ytrue, weights.map(<[f64]>::len))
}
