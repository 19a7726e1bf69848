/// One of the four fixed lanes a task can live in.
///
/// Declaration order is board order (backlog, in-progress, complete,
/// on-hold) and display, storage and lane cycling all follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Backlog,
    InProgress,
    Complete,
    OnHold,
}

impl Lane {
    /// All lanes in board order.
    pub const ALL: [Lane; 4] = [
        Lane::Backlog,
        Lane::InProgress,
        Lane::Complete,
        Lane::OnHold,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Lane::Backlog => "Backlog",
            Lane::InProgress => "In Progress",
            Lane::Complete => "Complete",
            Lane::OnHold => "On Hold",
        }
    }

    /// Position of this lane in board order.
    pub fn index(self) -> usize {
        match self {
            Lane::Backlog => 0,
            Lane::InProgress => 1,
            Lane::Complete => 2,
            Lane::OnHold => 3,
        }
    }

    /// The neighboring lane to the left, if any.
    pub fn left(self) -> Option<Lane> {
        self.index().checked_sub(1).map(|i| Lane::ALL[i])
    }

    /// The neighboring lane to the right, if any.
    pub fn right(self) -> Option<Lane> {
        Lane::ALL.get(self.index() + 1).copied()
    }
}

/// A single task with a text description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub text: String,
}

impl Task {
    pub const fn new(text: String) -> Self {
        Self { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lanes_are_ordered_left_to_right() {
        assert_eq!(Lane::Backlog.right(), Some(Lane::InProgress));
        assert_eq!(Lane::OnHold.left(), Some(Lane::Complete));
        assert_eq!(Lane::Backlog.left(), None);
        assert_eq!(Lane::OnHold.right(), None);
    }

    #[test]
    fn lane_index_matches_board_order() {
        for (i, lane) in Lane::ALL.into_iter().enumerate() {
            assert_eq!(lane.index(), i);
        }
    }
}
