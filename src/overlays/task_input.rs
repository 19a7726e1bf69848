use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::util::{centered_rect, render_overlay_frame};
use crate::task::Lane;

pub enum TaskInputAction {
    Consumed,
    Dismiss,
    Submit { text: String, lane: Lane },
}

/// Single-line input box for a new task in one lane.
///
/// The cursor counts characters, not bytes, so edits stay on char
/// boundaries for non-ASCII text. Enter submits the text exactly as
/// typed; deciding whether it is a valid task is the board's job.
pub struct TaskInputOverlay {
    text: String,
    cursor: usize,
    lane: Lane,
}

impl TaskInputOverlay {
    pub const fn new(lane: Lane) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            lane,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> TaskInputAction {
        match key.code {
            KeyCode::Esc => TaskInputAction::Dismiss,
            KeyCode::Enter => TaskInputAction::Submit {
                text: std::mem::take(&mut self.text),
                lane: self.lane,
            },
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let start = self.byte_index();
                    self.text.remove(start);
                }
                TaskInputAction::Consumed
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                TaskInputAction::Consumed
            }
            KeyCode::Right => {
                if self.cursor < self.text.chars().count() {
                    self.cursor += 1;
                }
                TaskInputAction::Consumed
            }
            KeyCode::Char(c) => {
                let at = self.byte_index();
                self.text.insert(at, c);
                self.cursor += 1;
                TaskInputAction::Consumed
            }
            _ => TaskInputAction::Consumed,
        }
    }

    /// Byte offset of the cursor's character position.
    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(index, _)| index)
    }

    pub fn render(&self, frame: &mut Frame) {
        let title = format!(" Add to {} ", self.lane.title());

        let overlay_width = 40u16;
        let overlay_height = 7u16;

        let overlay_area = centered_rect(frame.area(), overlay_width, overlay_height);
        let inner = render_overlay_frame(frame, overlay_area, &title, Color::Cyan);

        let rows = Layout::vertical([
            Constraint::Length(1), // pad
            Constraint::Length(1), // input
            Constraint::Length(1), // pad
            Constraint::Length(1), // hints
            Constraint::Min(0),    // pad
        ])
        .split(inner);

        let input_area = Rect {
            x: rows[1].x + 1,
            width: rows[1].width.saturating_sub(2),
            ..rows[1]
        };
        let available_width = input_area.width as usize;

        // keep the cursor inside the window even at the right edge
        let scroll = (self.cursor + 1).saturating_sub(available_width);
        let visible_text: String = self
            .text
            .chars()
            .skip(scroll)
            .take(available_width)
            .collect();
        let cursor_pos = self.cursor.saturating_sub(scroll);

        let input_line = Line::from(Span::styled(
            &visible_text,
            Style::default().fg(Color::White),
        ));
        frame.render_widget(Paragraph::new(input_line), input_area);

        let cursor_x = input_area.x + cursor_pos as u16;
        if cursor_x < input_area.x + input_area.width {
            frame.set_cursor_position((cursor_x, input_area.y));
        }

        let hints = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" Add "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]);
        let hints_area = Rect {
            x: rows[3].x + 1,
            width: rows[3].width.saturating_sub(2),
            ..rows[3]
        };
        frame.render_widget(
            Paragraph::new(hints).alignment(Alignment::Center),
            hints_area,
        );
    }
}
