mod label;
mod label_reconciler;

pub use label::{DEFAULT_MISSING, DEFAULT_OTHER, Label};
pub use label_reconciler::{clean, dedup_classes, derive_classes};
