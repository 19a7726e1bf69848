use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::task::{Lane, Task};

/// Flat persisted form of the board: one comma-joined string per lane.
///
/// The field names (after renaming) are the storage keys, so the file
/// on disk is a flat JSON object with exactly these four string values.
/// Missing keys read back as the empty string.
///
/// Joining on commas means a task whose text contains one cannot be
/// told apart from two tasks once stored. The format is kept verbatim
/// rather than growing an escaping scheme; see the round-trip tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub backlog: String,
    #[serde(rename = "in-progress", default)]
    pub in_progress: String,
    #[serde(default)]
    pub complete: String,
    #[serde(rename = "on-hold", default)]
    pub on_hold: String,
}

impl Snapshot {
    pub fn lane(&self, lane: Lane) -> &str {
        match lane {
            Lane::Backlog => &self.backlog,
            Lane::InProgress => &self.in_progress,
            Lane::Complete => &self.complete,
            Lane::OnHold => &self.on_hold,
        }
    }

    fn lane_mut(&mut self, lane: Lane) -> &mut String {
        match lane {
            Lane::Backlog => &mut self.backlog,
            Lane::InProgress => &mut self.in_progress,
            Lane::Complete => &mut self.complete,
            Lane::OnHold => &mut self.on_hold,
        }
    }
}

/// Serializes every lane of the board into its flat string form.
///
/// An empty lane becomes the empty string, a single task its own text.
pub fn encode(board: &Board) -> Snapshot {
    let mut snapshot = Snapshot::default();
    for lane in Lane::ALL {
        let texts: Vec<&str> = board
            .tasks(lane)
            .iter()
            .map(|task| task.text.as_str())
            .collect();
        *snapshot.lane_mut(lane) = texts.join(",");
    }
    snapshot
}

/// Rebuilds a board from its flat form.
///
/// Inverse of [`encode`] for any board whose task text contains no
/// comma. Splitting does not validate: commas written into a lane value
/// by hand come back as that many tasks, empty ones included.
pub fn decode(snapshot: &Snapshot) -> Board {
    let mut board = Board::default();
    for lane in Lane::ALL {
        let value = snapshot.lane(lane);
        if value.is_empty() {
            continue;
        }
        for text in value.split(',') {
            board.restore(lane, Task::new(text.to_string()));
        }
    }
    board
}
