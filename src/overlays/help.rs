use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::util::{centered_rect, shortcut_line};
use crate::util::Shortcut;

pub fn render_help_overlay(frame: &mut Frame, shortcuts: &[Shortcut]) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "  Board",
        Style::default().fg(Color::White),
    )));
    for shortcut in shortcuts {
        lines.push(shortcut_line(*shortcut));
    }

    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "  Global",
        Style::default().fg(Color::White),
    )));
    let global_shortcuts = [
        Shortcut::new("?", "Toggle help"),
        Shortcut::new("q", "Quit"),
    ];
    for shortcut in global_shortcuts {
        lines.push(shortcut_line(shortcut));
    }

    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "  Mouse",
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(Span::raw("    Drag a task to move it")));
    lines.push(Line::from(Span::raw("    Click + Add item to add one")));

    lines.push(Line::from(""));

    let content_height = lines.len() as u16 + 2;
    let overlay_width = 34u16;
    let overlay_height = content_height.min(frame.area().height.saturating_sub(4));

    let overlay_area = centered_rect(frame.area(), overlay_width, overlay_height);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}
