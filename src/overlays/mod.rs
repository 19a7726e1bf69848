mod error;
mod help;
mod task_input;
mod util;

pub use error::render_error_overlay;
pub use help::render_help_overlay;
pub use task_input::{TaskInputAction, TaskInputOverlay};
