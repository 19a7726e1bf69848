use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::util::Shortcut;

pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

pub fn render_overlay_frame(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

pub fn shortcut_line(shortcut: Shortcut) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(
            format!("[{}]", shortcut.key),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(format!(" {}", shortcut.action)),
    ])
}
