mod board;
mod util;

pub use board::{BoardPanel, Drag, Hit};
pub use util::KeyHandleResult;
