use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};

pub fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
}

/// Outcome of a key press offered to the board panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandleResult {
    /// Key was handled; nothing changed that needs persisting.
    Consumed,
    /// Not a board key.
    Ignored,
    /// The board changed; the caller should save a fresh snapshot.
    Mutated,
    /// The user asked to add a task to the focused lane.
    AddTask,
}
