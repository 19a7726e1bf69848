use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::{error, warn};
use ratatui::layout::Position;

use crate::board::Board;
use crate::overlays::{TaskInputAction, TaskInputOverlay};
use crate::panels::{BoardPanel, Drag, Hit, KeyHandleResult};
use crate::snapshot;
use crate::storage::Storage;
use crate::task::Lane;

/// Shown when an added task is rejected for being empty.
const EMPTY_TASK_MESSAGE: &str = "Cannot add an empty task.";

pub struct App {
    pub should_quit: bool,
    pub board: Board,
    pub panel: BoardPanel,
    pub input: Option<TaskInputOverlay>,
    pub error: Option<String>,
    pub help_visible: bool,
    pub drag: Option<Drag>,
    storage: Storage,
}

impl App {
    pub fn new(board: Board, storage: Storage) -> Self {
        Self {
            should_quit: false,
            board,
            panel: BoardPanel::default(),
            input: None,
            error: None,
            help_visible: false,
            drag: None,
            storage,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // An open error takes the next key press, whatever it is.
        if self.error.is_some() {
            self.error = None;
            return;
        }
        if self.input.is_some() {
            self.handle_input_key(key);
            return;
        }
        if self.help_visible {
            self.help_visible = false;
            return;
        }
        if self.drag.is_some() {
            if key.code == KeyCode::Esc {
                self.drag = None;
            }
            return;
        }

        // Global shortcuts first
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.help_visible = true,
            _ => match self.panel.handle_key(key, &mut self.board) {
                KeyHandleResult::Mutated => self.save_board(),
                KeyHandleResult::AddTask => self.open_input(self.panel.focused_lane()),
                KeyHandleResult::Consumed | KeyHandleResult::Ignored => {}
            },
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let Some(input) = self.input.as_mut() else {
            return;
        };
        match input.handle_key(key) {
            TaskInputAction::Consumed => {}
            TaskInputAction::Dismiss => self.input = None,
            TaskInputAction::Submit { text, lane } => {
                self.input = None;
                self.append_task(lane, text);
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        // Overlays are keyboard driven; a click only dismisses the
        // transient ones.
        if self.error.is_some() || self.help_visible || self.input.is_some() {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.error = None;
                self.help_visible = false;
            }
            return;
        }

        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.panel.hit_test(&self.board, position) {
                    Some(Hit::Task { lane, index }) => {
                        self.panel.focus_task(lane, index);
                        self.drag = Some(Drag {
                            from: lane,
                            index,
                            cursor: position,
                            moved: false,
                        });
                    }
                    Some(Hit::AddButton(lane)) => self.open_input(lane),
                    Some(Hit::Lane(lane)) => self.panel.focus_lane(&self.board, lane),
                    None => {}
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.cursor = position;
                    drag.moved = true;
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(drag) = self.drag.take() {
                    if drag.moved {
                        self.finish_drag(drag, position);
                    }
                }
            }
            _ => {}
        }
    }

    fn finish_drag(&mut self, drag: Drag, position: Position) {
        let Some((to, index)) = self.panel.drop_target(&self.board, drag, position) else {
            return; // released outside the board
        };
        if to == drag.from && index == drag.index {
            return;
        }
        self.board.move_task(drag.from, drag.index, to, index);
        self.panel.focus_task(to, index);
        self.save_board();
    }

    fn open_input(&mut self, lane: Lane) {
        self.input = Some(TaskInputOverlay::new(lane));
    }

    fn append_task(&mut self, lane: Lane, text: String) {
        if self.board.append(lane, text) {
            self.panel.focus_task(lane, self.board.lane_len(lane) - 1);
            self.save_board();
        } else {
            warn!("rejected empty task for {}", lane.title());
            self.error = Some(EMPTY_TASK_MESSAGE.to_string());
        }
    }

    fn save_board(&mut self) {
        let snapshot = snapshot::encode(&self.board);
        if let Err(err) = self.storage.save(&snapshot) {
            error!("{err}");
            self.error = Some(format!("Saving failed: {err}"));
        }
    }
}
