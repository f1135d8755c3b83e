mod confusion_matrix_renderer;
mod text_table_renderer;

pub use confusion_matrix_renderer::{ConfusionMatrixPlot, ConfusionMatrixRenderer};
pub use text_table_renderer::TextTableRenderer;
