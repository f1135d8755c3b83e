mod confusion_matrix;
mod confusion_matrix_builder;

pub use confusion_matrix::{CellIds, ConfusionMatrix};
pub use confusion_matrix_builder::ConfusionMatrixBuilder;
