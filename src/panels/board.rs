use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::util::{panel_block, KeyHandleResult};
use crate::board::Board;
use crate::task::Lane;
use crate::util::Shortcut;

#[derive(Debug, Clone, Copy)]
struct BoardFocus {
    lane: Lane,
    index: usize,
}

impl Default for BoardFocus {
    fn default() -> Self {
        Self {
            lane: Lane::Backlog,
            index: 0,
        }
    }
}

/// An in-flight mouse drag of one task.
///
/// `moved` stays false until the first drag report, so a plain click
/// never counts as a drag.
#[derive(Debug, Clone, Copy)]
pub struct Drag {
    pub from: Lane,
    pub index: usize,
    pub cursor: Position,
    pub moved: bool,
}

/// What the mouse points at, in board terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Task { lane: Lane, index: usize },
    AddButton(Lane),
    Lane(Lane),
}

/// Geometry of one rendered lane column, recorded during render so
/// mouse positions can be mapped back to tasks.
#[derive(Debug, Clone, Copy, Default)]
struct LaneArea {
    column: Rect,
    list: Rect,
    add_row: Rect,
    scroll: usize,
}

/// A row of a lane list as displayed, which during a drag is not the
/// same as the board: the dragged task is hidden in its own lane and a
/// ghost of it appears at the drop target.
enum DisplayRow<'a> {
    Task { board_index: usize, text: &'a str },
    Ghost(&'a str),
}

pub struct BoardPanel {
    focus: BoardFocus,
    areas: [LaneArea; 4],
    /// Visible task rows per lane (updated during render)
    page_size: usize,
}

impl Default for BoardPanel {
    fn default() -> Self {
        Self {
            focus: BoardFocus::default(),
            areas: [LaneArea::default(); 4],
            page_size: 10,
        }
    }
}

impl BoardPanel {
    pub fn focused_lane(&self) -> Lane {
        self.focus.lane
    }

    pub fn focus_task(&mut self, lane: Lane, index: usize) {
        self.focus = BoardFocus { lane, index };
    }

    pub fn focus_lane(&mut self, board: &Board, lane: Lane) {
        self.focus.lane = lane;
        self.clamp_focus(board);
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, board: &Board, drag: Option<Drag>) {
        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

        // Settle geometry first so the drop target and the ghost row
        // drawn for it agree within one frame.
        for lane in Lane::ALL {
            let column = columns[lane.index()];
            let title = format!(" {} ", lane.title());
            let block = panel_block(&title, self.focus.lane == lane);
            let inner = block.inner(column);
            frame.render_widget(block, column);

            let rows =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(inner);
            // last list row is reserved for the ellipsis indicator
            let visible = (rows[0].height as usize).saturating_sub(1);
            let displayed = board
                .lane_len(lane)
                .saturating_sub(usize::from(drag.is_some_and(|d| d.from == lane)));
            // While a drag is live each lane keeps its recorded scroll
            // (clamped to the rows still shown) so the view does not
            // snap to the top mid-drag.
            let scroll = if drag.is_some() {
                self.areas[lane.index()]
                    .scroll
                    .min(displayed.saturating_sub(visible))
            } else {
                scroll_offset(displayed, visible, self.render_cursor(board, lane, drag))
            };

            self.areas[lane.index()] = LaneArea {
                column,
                list: rows[0],
                add_row: rows[1],
                scroll,
            };
            self.page_size = visible.max(1);
        }

        let target = drag.and_then(|d| self.drop_target(board, d, d.cursor));

        for lane in Lane::ALL {
            self.render_lane_list(frame, board, lane, drag, target);
            render_add_row(
                frame,
                self.areas[lane.index()].add_row,
                self.focus.lane == lane,
            );
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, board: &mut Board) -> KeyHandleResult {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('j') => {
                self.move_down(board);
                KeyHandleResult::Consumed
            }
            KeyCode::Char('k') => {
                self.move_up();
                KeyHandleResult::Consumed
            }
            KeyCode::Down => {
                if shift {
                    self.reorder_down(board)
                } else {
                    self.move_down(board);
                    KeyHandleResult::Consumed
                }
            }
            KeyCode::Up => {
                if shift {
                    self.reorder_up(board)
                } else {
                    self.move_up();
                    KeyHandleResult::Consumed
                }
            }
            KeyCode::Char('J') => self.reorder_down(board),
            KeyCode::Char('K') => self.reorder_up(board),
            KeyCode::Char('h') => {
                self.focus_left(board);
                KeyHandleResult::Consumed
            }
            KeyCode::Char('l') => {
                self.focus_right(board);
                KeyHandleResult::Consumed
            }
            KeyCode::Left => {
                if shift {
                    self.move_sideways(board, self.focus.lane.left())
                } else {
                    self.focus_left(board);
                    KeyHandleResult::Consumed
                }
            }
            KeyCode::Right => {
                if shift {
                    self.move_sideways(board, self.focus.lane.right())
                } else {
                    self.focus_right(board);
                    KeyHandleResult::Consumed
                }
            }
            KeyCode::Char('H') => self.move_sideways(board, self.focus.lane.left()),
            KeyCode::Char('L') => self.move_sideways(board, self.focus.lane.right()),
            KeyCode::Tab => {
                if shift {
                    self.prev_lane(board);
                } else {
                    self.next_lane(board);
                }
                KeyHandleResult::Consumed
            }
            KeyCode::BackTab => {
                self.prev_lane(board);
                KeyHandleResult::Consumed
            }
            KeyCode::Char(',') | KeyCode::PageDown => {
                self.page_down(board);
                KeyHandleResult::Consumed
            }
            KeyCode::Char('.') | KeyCode::PageUp => {
                self.page_up();
                KeyHandleResult::Consumed
            }
            KeyCode::Char('a') => KeyHandleResult::AddTask,
            _ => KeyHandleResult::Ignored,
        }
    }

    pub fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut::new("Tab", "Cycle lane"),
            Shortcut::new("h/l ←/→", "Focus lane"),
            Shortcut::new("j/k ↑/↓", "Navigate"),
            Shortcut::new("J/K Shift+↑/↓", "Reorder"),
            Shortcut::new("H/L Shift+←/→", "Move task"),
            Shortcut::new(",/. PgDn/PgUp", "Page"),
            Shortcut::new("a", "Add task"),
        ]
    }

    // -- Mouse mapping --

    pub fn hit_test(&self, board: &Board, position: Position) -> Option<Hit> {
        let lane = self.lane_at(position)?;
        let area = self.areas[lane.index()];
        if area.add_row.contains(position) {
            return Some(Hit::AddButton(lane));
        }
        if area.list.contains(position) {
            let offset = (position.y - area.list.y) as usize;
            let visible = (area.list.height as usize).saturating_sub(1);
            if offset < visible {
                let row = offset + area.scroll;
                if row < board.lane_len(lane) {
                    return Some(Hit::Task { lane, index: row });
                }
            }
        }
        Some(Hit::Lane(lane))
    }

    /// Lane and insertion index a release at `position` would target.
    ///
    /// The index is in the coordinates of the target lane with the
    /// dragged task already taken out, ready for [`Board::move_task`].
    /// `None` means the position is outside every lane and the drag is
    /// dropped without effect.
    pub fn drop_target(
        &self,
        board: &Board,
        drag: Drag,
        position: Position,
    ) -> Option<(Lane, usize)> {
        let lane = self.lane_at(position)?;
        let area = self.areas[lane.index()];
        let mut rows = board.lane_len(lane);
        if lane == drag.from {
            rows = rows.saturating_sub(1);
        }
        Some((lane, drop_index(rows, area.list.y, area.scroll, position.y)))
    }

    fn lane_at(&self, position: Position) -> Option<Lane> {
        Lane::ALL
            .into_iter()
            .find(|lane| self.areas[lane.index()].column.contains(position))
    }

    // -- Focus/navigation methods --

    fn clamp_focus(&mut self, board: &Board) {
        let len = board.lane_len(self.focus.lane);
        if self.focus.index >= len {
            self.focus.index = len.saturating_sub(1);
        }
    }

    fn move_down(&mut self, board: &Board) {
        let len = board.lane_len(self.focus.lane);
        if len > 0 && self.focus.index + 1 < len {
            self.focus.index += 1;
        }
    }

    fn move_up(&mut self) {
        if self.focus.index > 0 {
            self.focus.index -= 1;
        }
    }

    fn page_down(&mut self, board: &Board) {
        let len = board.lane_len(self.focus.lane);
        if len > 0 {
            self.focus.index = (self.focus.index + self.page_size).min(len - 1);
        }
    }

    fn page_up(&mut self) {
        self.focus.index = self.focus.index.saturating_sub(self.page_size);
    }

    fn focus_left(&mut self, board: &Board) {
        if let Some(lane) = self.focus.lane.left() {
            self.focus.lane = lane;
            self.clamp_focus(board);
        }
    }

    fn focus_right(&mut self, board: &Board) {
        if let Some(lane) = self.focus.lane.right() {
            self.focus.lane = lane;
            self.clamp_focus(board);
        }
    }

    fn next_lane(&mut self, board: &Board) {
        self.focus.lane = self.focus.lane.right().unwrap_or(Lane::Backlog);
        self.clamp_focus(board);
    }

    fn prev_lane(&mut self, board: &Board) {
        self.focus.lane = self.focus.lane.left().unwrap_or(Lane::OnHold);
        self.clamp_focus(board);
    }

    fn reorder_down(&mut self, board: &mut Board) -> KeyHandleResult {
        let lane = self.focus.lane;
        if self.focus.index + 1 >= board.lane_len(lane) {
            return KeyHandleResult::Consumed;
        }
        board.move_task(lane, self.focus.index, lane, self.focus.index + 1);
        self.focus.index += 1;
        KeyHandleResult::Mutated
    }

    fn reorder_up(&mut self, board: &mut Board) -> KeyHandleResult {
        let lane = self.focus.lane;
        if self.focus.index == 0 || self.focus.index >= board.lane_len(lane) {
            return KeyHandleResult::Consumed;
        }
        board.move_task(lane, self.focus.index, lane, self.focus.index - 1);
        self.focus.index -= 1;
        KeyHandleResult::Mutated
    }

    fn move_sideways(&mut self, board: &mut Board, to: Option<Lane>) -> KeyHandleResult {
        let Some(to) = to else {
            return KeyHandleResult::Consumed;
        };
        let from = self.focus.lane;
        if self.focus.index >= board.lane_len(from) {
            return KeyHandleResult::Consumed;
        }
        // land at the same height where the target lane allows it
        let index = self.focus.index.min(board.lane_len(to));
        board.move_task(from, self.focus.index, to, index);
        self.focus = BoardFocus { lane: to, index };
        KeyHandleResult::Mutated
    }

    // -- Rendering helpers --

    fn render_cursor(&self, board: &Board, lane: Lane, drag: Option<Drag>) -> Option<usize> {
        if drag.is_none() && self.focus.lane == lane && board.lane_len(lane) > 0 {
            Some(self.focus.index)
        } else {
            None
        }
    }

    fn render_lane_list(
        &self,
        frame: &mut Frame,
        board: &Board,
        lane: Lane,
        drag: Option<Drag>,
        target: Option<(Lane, usize)>,
    ) {
        let lane_area = self.areas[lane.index()];
        let area = lane_area.list;
        if area.height == 0 {
            return;
        }

        let dragged_index = drag.filter(|d| d.from == lane).map(|d| d.index);
        let ghost = match (drag, target) {
            (Some(d), Some((to, index))) if to == lane => board
                .tasks(d.from)
                .get(d.index)
                .map(|task| (index, task.text.as_str())),
            _ => None,
        };

        let mut rows: Vec<DisplayRow> = board
            .tasks(lane)
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != dragged_index)
            .map(|(i, task)| DisplayRow::Task {
                board_index: i,
                text: &task.text,
            })
            .collect();
        if let Some((index, text)) = ghost {
            rows.insert(index.min(rows.len()), DisplayRow::Ghost(text));
        }

        if rows.is_empty() {
            let shrunk = Rect {
                height: area.height.saturating_sub(2),
                ..area
            };
            let centered = Layout::vertical([Constraint::Length(1)])
                .flex(ratatui::layout::Flex::Center)
                .split(shrunk)[0];
            let placeholder = Paragraph::new("(empty)")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, centered);
            return;
        }

        let cursor = self.render_cursor(board, lane, drag);
        let visible_height = (area.height as usize).saturating_sub(1);
        let scroll = lane_area.scroll;
        let has_more_below = scroll + visible_height < rows.len();

        let max_text_width = (area.width as usize).saturating_sub(3);

        let mut items: Vec<ListItem> = rows
            .iter()
            .skip(scroll)
            .take(visible_height)
            .map(|row| {
                let content = match row {
                    DisplayRow::Task { board_index, text } => {
                        let display_text = truncate_with_ellipsis(text, max_text_width);
                        if cursor == Some(*board_index) {
                            Line::from(vec![
                                Span::styled("> ", Style::default().fg(Color::Cyan)),
                                Span::styled(
                                    display_text,
                                    Style::default()
                                        .fg(Color::White)
                                        .add_modifier(Modifier::BOLD),
                                ),
                            ])
                        } else {
                            Line::from(vec![
                                Span::raw("  "),
                                Span::styled(display_text, Style::default().fg(Color::Gray)),
                            ])
                        }
                    }
                    DisplayRow::Ghost(text) => Line::from(vec![
                        Span::styled("> ", Style::default().fg(Color::Cyan)),
                        Span::styled(
                            truncate_with_ellipsis(text, max_text_width),
                            Style::default().fg(Color::Cyan),
                        ),
                    ]),
                };
                ListItem::new(content)
            })
            .collect();

        items.push(if has_more_below {
            ListItem::new(Line::from(Span::styled(
                "  ...",
                Style::default().fg(Color::DarkGray),
            )))
        } else {
            ListItem::new(Line::from(""))
        });

        frame.render_widget(List::new(items), area);
    }
}

fn render_add_row(frame: &mut Frame, area: Rect, focused: bool) {
    let color = if focused { Color::Gray } else { Color::DarkGray };
    let row = Paragraph::new(" + Add item").style(Style::default().fg(color));
    frame.render_widget(row, area);
}

/// Insertion index for a drop at `y` over a lane whose remaining rows
/// (dragged task excluded) start at `top` with `scroll` rows hidden.
///
/// The row nearest the pointer wins and the task lands before it; on
/// equal distance the earlier row wins. An empty lane takes index 0.
fn drop_index(rows: usize, top: u16, scroll: usize, y: u16) -> usize {
    let mut best_index = 0;
    let mut best_distance = i32::MAX;
    for row in 0..rows {
        let row_y = i32::from(top) + row as i32 - scroll as i32;
        let distance = (i32::from(y) - row_y).abs();
        if distance < best_distance {
            best_distance = distance;
            best_index = row;
        }
    }
    best_index
}

fn scroll_offset(total: usize, visible: usize, cursor: Option<usize>) -> usize {
    let Some(cursor) = cursor else { return 0 };
    if visible == 0 {
        return 0;
    }
    let max_offset = total.saturating_sub(visible);
    let margin = 2usize;
    // lowest offset that keeps the cursor `margin` rows off the bottom
    let from_bottom = cursor.saturating_sub(visible.saturating_sub(margin + 1));
    // highest offset that keeps it `margin` rows off the top
    let from_top = cursor.saturating_sub(margin);
    from_bottom.min(from_top).min(max_offset)
}

fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    let width = text.chars().count();
    if width <= max_width {
        return text.to_string();
    }
    if max_width < 3 {
        return ".".repeat(max_width);
    }
    let limit = max_width - 3; // room for "..."
    let mut result = String::new();
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if result.is_empty() {
            if word_width > limit {
                return "...".to_string();
            }
            result = word.to_string();
            used = word_width;
        } else if used + 1 + word_width <= limit {
            result.push(' ');
            result.push_str(word);
            used += 1 + word_width;
        } else {
            break;
        }
    }
    result.push_str("...");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn board_with(lane: Lane, texts: &[&str]) -> Board {
        let mut board = Board::default();
        for text in texts {
            assert!(board.append(lane, (*text).to_string()));
        }
        board
    }

    fn lane_texts(board: &Board, lane: Lane) -> Vec<&str> {
        board
            .tasks(lane)
            .iter()
            .map(|task| task.text.as_str())
            .collect()
    }

    /// Draws one frame so the panel records real lane geometry.
    ///
    /// On the 80x20 backend each column is 20 wide; task rows start at
    /// y 1 and the add row sits at y 18.
    fn draw(panel: &mut BoardPanel, board: &Board, drag: Option<Drag>) {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                panel.render(frame, area, board, drag);
            })
            .unwrap();
    }

    #[test]
    fn focus_starts_at_top_of_backlog() {
        let panel = BoardPanel::default();

        assert_eq!(panel.focused_lane(), Lane::Backlog);
        assert_eq!(panel.focus.index, 0);
    }

    #[test]
    fn j_and_k_stay_inside_the_lane() {
        let mut panel = BoardPanel::default();
        let mut board = board_with(Lane::Backlog, &["a", "b", "c"]);

        panel.handle_key(key(KeyCode::Char('j')), &mut board);
        panel.handle_key(key(KeyCode::Char('j')), &mut board);
        panel.handle_key(key(KeyCode::Char('j')), &mut board);
        assert_eq!(panel.focus.index, 2);

        panel.handle_key(key(KeyCode::Char('k')), &mut board);
        assert_eq!(panel.focus.index, 1);
    }

    #[test]
    fn reorder_down_moves_task_and_follows_it() {
        let mut panel = BoardPanel::default();
        let mut board = board_with(Lane::Backlog, &["a", "b", "c"]);

        let result = panel.handle_key(key(KeyCode::Char('J')), &mut board);

        assert_eq!(result, KeyHandleResult::Mutated);
        assert_eq!(lane_texts(&board, Lane::Backlog), vec!["b", "a", "c"]);
        assert_eq!(panel.focus.index, 1);
    }

    #[test]
    fn reorder_at_lane_bottom_changes_nothing() {
        let mut panel = BoardPanel::default();
        let mut board = board_with(Lane::Backlog, &["a", "b"]);
        panel.focus_task(Lane::Backlog, 1);

        let result = panel.handle_key(key(KeyCode::Char('J')), &mut board);

        assert_eq!(result, KeyHandleResult::Consumed);
        assert_eq!(lane_texts(&board, Lane::Backlog), vec!["a", "b"]);
    }

    #[test]
    fn move_right_carries_the_task_at_the_same_height() {
        let mut panel = BoardPanel::default();
        let mut board = board_with(Lane::Backlog, &["a", "b"]);
        assert!(board.append(Lane::InProgress, "x".to_string()));
        panel.focus_task(Lane::Backlog, 1);

        let result = panel.handle_key(key(KeyCode::Char('L')), &mut board);

        assert_eq!(result, KeyHandleResult::Mutated);
        assert_eq!(lane_texts(&board, Lane::InProgress), vec!["x", "b"]);
        assert_eq!(panel.focused_lane(), Lane::InProgress);
        assert_eq!(panel.focus.index, 1);
    }

    #[test]
    fn move_left_from_backlog_is_a_noop() {
        let mut panel = BoardPanel::default();
        let mut board = board_with(Lane::Backlog, &["a"]);

        let result = panel.handle_key(key(KeyCode::Char('H')), &mut board);

        assert_eq!(result, KeyHandleResult::Consumed);
        assert_eq!(lane_texts(&board, Lane::Backlog), vec!["a"]);
    }

    #[test]
    fn move_in_an_empty_lane_is_a_noop() {
        let mut panel = BoardPanel::default();
        let mut board = Board::default();

        let result = panel.handle_key(key(KeyCode::Char('L')), &mut board);

        assert_eq!(result, KeyHandleResult::Consumed);
        assert_eq!(board.total_len(), 0);
    }

    #[test]
    fn tab_cycles_through_all_lanes() {
        let mut panel = BoardPanel::default();
        let mut board = Board::default();

        for expected in [Lane::InProgress, Lane::Complete, Lane::OnHold, Lane::Backlog] {
            panel.handle_key(key(KeyCode::Tab), &mut board);
            assert_eq!(panel.focused_lane(), expected);
        }
    }

    #[test]
    fn focus_clamps_when_entering_a_shorter_lane() {
        let mut panel = BoardPanel::default();
        let mut board = board_with(Lane::Backlog, &["a", "b", "c"]);
        assert!(board.append(Lane::InProgress, "x".to_string()));
        panel.focus_task(Lane::Backlog, 2);

        panel.handle_key(key(KeyCode::Char('l')), &mut board);

        assert_eq!(panel.focused_lane(), Lane::InProgress);
        assert_eq!(panel.focus.index, 0);
    }

    #[test]
    fn a_requests_a_new_task() {
        let mut panel = BoardPanel::default();
        let mut board = Board::default();

        let result = panel.handle_key(key(KeyCode::Char('a')), &mut board);

        assert_eq!(result, KeyHandleResult::AddTask);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut panel = BoardPanel::default();
        let mut board = Board::default();

        let result = panel.handle_key(key(KeyCode::Char('z')), &mut board);

        assert_eq!(result, KeyHandleResult::Ignored);
    }

    #[test]
    fn shortcuts_name_every_bound_alias() {
        let panel = BoardPanel::default();

        let keys: Vec<&str> = panel.shortcuts().iter().map(|s| s.key).collect();
        let listed = keys.join(" ");
        for alias in ["↑/↓", "←/→", "Shift+↑/↓", "Shift+←/→", "PgDn", "PgUp"] {
            assert!(listed.contains(alias), "help omits {alias}: {listed}");
        }
    }

    #[test]
    fn drop_on_an_empty_lane_takes_index_zero() {
        assert_eq!(drop_index(0, 5, 0, 17), 0);
    }

    #[test]
    fn drop_lands_before_the_nearest_row() {
        // three rows at y 10, 11, 12
        assert_eq!(drop_index(3, 10, 0, 10), 0);
        assert_eq!(drop_index(3, 10, 0, 11), 1);
        assert_eq!(drop_index(3, 10, 0, 12), 2);
    }

    #[test]
    fn drop_above_and_below_the_rows_snaps_to_the_ends() {
        assert_eq!(drop_index(3, 10, 0, 2), 0);
        assert_eq!(drop_index(3, 10, 0, 40), 2);
    }

    #[test]
    fn drop_accounts_for_scrolled_rows() {
        // rows 0..10, three hidden above: row 3 sits at the top edge
        assert_eq!(drop_index(10, 5, 3, 5), 3);
        assert_eq!(drop_index(10, 5, 3, 7), 5);
    }

    #[test]
    fn drop_target_skips_the_dragged_task_in_its_own_lane() {
        let board = board_with(Lane::Backlog, &["a", "b", "c"]);
        let mut panel = BoardPanel::default();
        let drag = Drag {
            from: Lane::Backlog,
            index: 0,
            cursor: Position::new(5, 3),
            moved: true,
        };
        draw(&mut panel, &board, Some(drag));

        // with "a" lifted out the lane shows "b" at y 1 and "c" at y 2,
        // so y 3 is nearest "c" and targets the slot before it
        assert_eq!(
            panel.drop_target(&board, drag, Position::new(5, 3)),
            Some((Lane::Backlog, 1))
        );
    }

    #[test]
    fn drag_over_an_empty_lane_drops_at_the_top() {
        let board = board_with(Lane::Backlog, &["a"]);
        let mut panel = BoardPanel::default();
        let drag = Drag {
            from: Lane::Backlog,
            index: 0,
            cursor: Position::new(25, 9),
            moved: true,
        };
        draw(&mut panel, &board, Some(drag));

        assert_eq!(
            panel.drop_target(&board, drag, Position::new(25, 9)),
            Some((Lane::InProgress, 0))
        );
        // released outside every lane, the drag has no target
        assert_eq!(panel.drop_target(&board, drag, Position::new(90, 9)), None);
    }

    #[test]
    fn hit_test_maps_tasks_add_rows_and_bare_lanes() {
        let board = board_with(Lane::Backlog, &["a", "b"]);
        let mut panel = BoardPanel::default();
        draw(&mut panel, &board, None);

        assert_eq!(
            panel.hit_test(&board, Position::new(5, 2)),
            Some(Hit::Task {
                lane: Lane::Backlog,
                index: 1
            })
        );
        assert_eq!(
            panel.hit_test(&board, Position::new(5, 18)),
            Some(Hit::AddButton(Lane::Backlog))
        );
        assert_eq!(
            panel.hit_test(&board, Position::new(25, 5)),
            Some(Hit::Lane(Lane::InProgress))
        );
        assert_eq!(panel.hit_test(&board, Position::new(90, 5)), None);
    }

    #[test]
    fn a_live_drag_keeps_the_lane_scrolled() {
        let mut board = Board::default();
        for i in 0..30 {
            assert!(board.append(Lane::Backlog, format!("task {i}")));
        }
        let mut panel = BoardPanel::default();
        panel.focus_task(Lane::Backlog, 29);
        draw(&mut panel, &board, None);
        let before = panel.areas[Lane::Backlog.index()].scroll;
        assert!(before > 0);

        let drag = Drag {
            from: Lane::Backlog,
            index: 29,
            cursor: Position::new(5, 10),
            moved: true,
        };
        draw(&mut panel, &board, Some(drag));

        // the grabbed task is hidden, shortening the lane by one row
        let kept = panel.areas[Lane::Backlog.index()].scroll;
        assert_eq!(kept, before - 1);
        // y 10 is display row 9; the kept scroll maps it deep into the lane
        assert_eq!(
            panel.drop_target(&board, drag, Position::new(5, 10)),
            Some((Lane::Backlog, 9 + kept))
        );
    }

    #[test]
    fn scroll_offset_follows_the_cursor_down() {
        assert_eq!(scroll_offset(10, 5, None), 0);
        assert_eq!(scroll_offset(10, 5, Some(0)), 0);
        assert_eq!(scroll_offset(10, 5, Some(4)), 2);
        assert_eq!(scroll_offset(10, 5, Some(9)), 5);
    }

    #[test]
    fn truncation_breaks_on_words() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(
            truncate_with_ellipsis("a very long task description", 14),
            "a very long..."
        );
        assert_eq!(truncate_with_ellipsis("unbreakablelongword", 10), "...");
    }
}
