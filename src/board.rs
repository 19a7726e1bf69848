use crate::task::{Lane, Task};

/// Ordered task lists for all four lanes.
///
/// The board is the in-memory source of truth for task order. Rendering
/// reads from it and the snapshot codec serializes it; nothing else
/// holds task state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    backlog: Vec<Task>,
    in_progress: Vec<Task>,
    complete: Vec<Task>,
    on_hold: Vec<Task>,
}

impl Board {
    pub fn tasks(&self, lane: Lane) -> &[Task] {
        match lane {
            Lane::Backlog => &self.backlog,
            Lane::InProgress => &self.in_progress,
            Lane::Complete => &self.complete,
            Lane::OnHold => &self.on_hold,
        }
    }

    fn tasks_mut(&mut self, lane: Lane) -> &mut Vec<Task> {
        match lane {
            Lane::Backlog => &mut self.backlog,
            Lane::InProgress => &mut self.in_progress,
            Lane::Complete => &mut self.complete,
            Lane::OnHold => &mut self.on_hold,
        }
    }

    /// Appends a task to the end of a lane.
    ///
    /// Empty text is the one invalid task; it is rejected and `false`
    /// is returned with the board untouched, so the caller can warn the
    /// user. Anything else, including whitespace, is stored verbatim.
    #[must_use]
    pub fn append(&mut self, lane: Lane, text: String) -> bool {
        if text.is_empty() {
            return false;
        }
        self.tasks_mut(lane).push(Task::new(text));
        true
    }

    /// Moves the task at `from_index` to position `to_index` of lane `to`.
    ///
    /// `to_index` addresses the target lane as it looks after the task
    /// has been taken out, so moving within one lane is a plain
    /// reorder. Indices past the end of the target lane append; a
    /// `from_index` past the end of the source lane is a no-op.
    pub fn move_task(&mut self, from: Lane, from_index: usize, to: Lane, to_index: usize) {
        if from_index >= self.lane_len(from) {
            return;
        }
        let task = self.tasks_mut(from).remove(from_index);
        let tasks = self.tasks_mut(to);
        let index = to_index.min(tasks.len());
        tasks.insert(index, task);
    }

    pub fn lane_len(&self, lane: Lane) -> usize {
        self.tasks(lane).len()
    }

    /// Total number of tasks across all lanes.
    pub fn total_len(&self) -> usize {
        Lane::ALL.iter().map(|&lane| self.lane_len(lane)).sum()
    }

    /// Inserts a task exactly as given, bypassing the empty-text check.
    /// Only the snapshot codec restores tasks this way.
    pub(crate) fn restore(&mut self, lane: Lane, task: Task) {
        self.tasks_mut(lane).push(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(lane: Lane, texts: &[&str]) -> Board {
        let mut board = Board::default();
        for text in texts {
            assert!(board.append(lane, (*text).to_string()));
        }
        board
    }

    #[test]
    fn append_pushes_to_end_of_lane() {
        let board = board_with(Lane::Backlog, &["wash dishes", "pay rent"]);

        let texts: Vec<&str> = board
            .tasks(Lane::Backlog)
            .iter()
            .map(|task| task.text.as_str())
            .collect();
        assert_eq!(texts, vec!["wash dishes", "pay rent"]);
        assert_eq!(board.lane_len(Lane::InProgress), 0);
    }

    #[test]
    fn append_rejects_empty_text() {
        let mut board = Board::default();

        assert!(!board.append(Lane::Backlog, String::new()));
        assert_eq!(board, Board::default());
    }

    #[test]
    fn append_keeps_whitespace_text() {
        let mut board = Board::default();

        assert!(board.append(Lane::Backlog, "   ".to_string()));
        assert_eq!(board.tasks(Lane::Backlog)[0].text, "   ");
    }

    #[test]
    fn move_task_between_lanes_inserts_at_index() {
        let mut board = board_with(Lane::Backlog, &["a", "b"]);
        assert!(board.append(Lane::InProgress, "c".to_string()));

        board.move_task(Lane::Backlog, 0, Lane::InProgress, 0);

        assert_eq!(board.tasks(Lane::Backlog)[0].text, "b");
        let texts: Vec<&str> = board
            .tasks(Lane::InProgress)
            .iter()
            .map(|task| task.text.as_str())
            .collect();
        assert_eq!(texts, vec!["a", "c"]);
        assert_eq!(board.total_len(), 3);
    }

    #[test]
    fn move_task_clamps_target_index_to_append() {
        let mut board = board_with(Lane::Backlog, &["a"]);
        assert!(board.append(Lane::Complete, "b".to_string()));

        board.move_task(Lane::Backlog, 0, Lane::Complete, 99);

        assert_eq!(board.lane_len(Lane::Backlog), 0);
        assert_eq!(board.tasks(Lane::Complete)[1].text, "a");
    }

    #[test]
    fn move_task_within_lane_reorders() {
        let mut board = board_with(Lane::Backlog, &["a", "b", "c"]);

        board.move_task(Lane::Backlog, 0, Lane::Backlog, 1);

        let texts: Vec<&str> = board
            .tasks(Lane::Backlog)
            .iter()
            .map(|task| task.text.as_str())
            .collect();
        assert_eq!(texts, vec!["b", "a", "c"]);
    }

    #[test]
    fn move_task_ignores_bad_source_index() {
        let mut board = board_with(Lane::Backlog, &["a"]);
        let before = board.clone();

        board.move_task(Lane::Backlog, 5, Lane::InProgress, 0);

        assert_eq!(board, before);
    }

    #[test]
    fn total_len_counts_every_lane() {
        let mut board = board_with(Lane::Backlog, &["a", "b"]);
        assert!(board.append(Lane::OnHold, "c".to_string()));

        assert_eq!(board.total_len(), 3);
    }
}
