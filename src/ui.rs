use ratatui::Frame;

use crate::app::App;
use crate::overlays::{render_error_overlay, render_help_overlay};

/// Draws the board and whatever overlay is up. The error overlay goes
/// last so it stays on top when several are open at once.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let drag = app.drag.filter(|drag| drag.moved);
    app.panel.render(frame, area, &app.board, drag);

    if app.help_visible {
        render_help_overlay(frame, &app.panel.shortcuts());
    }
    if let Some(ref input) = app.input {
        input.render(frame);
    }
    if let Some(ref message) = app.error {
        render_error_overlay(frame, message);
    }
}
