use super::{Command, Outcome};
use crate::BoardStore;

pub struct AddBoard {
    pub title: String,
}

impl Command for AddBoard {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        Outcome::Created(store.add_board(self.title.clone()))
    }

    fn description(&self) -> String {
        format!("Add board '{}'", self.title)
    }
}

pub struct UpdateBoard {
    pub board_id: String,
    pub title: String,
}

impl Command for UpdateBoard {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store.update_board(&self.board_id, self.title.clone()).into()
    }

    fn description(&self) -> String {
        format!("Rename board {} to '{}'", self.board_id, self.title)
    }
}

pub struct DeleteBoard {
    pub board_id: String,
}

impl Command for DeleteBoard {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store.delete_board(&self.board_id).into()
    }

    fn description(&self) -> String {
        format!("Delete board {}", self.board_id)
    }
}

pub struct DuplicateBoard {
    pub board_id: String,
}

impl Command for DuplicateBoard {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store.duplicate_board(&self.board_id).into()
    }

    fn description(&self) -> String {
        format!("Duplicate board {}", self.board_id)
    }
}

/// Hide a visible board or show a hidden one
pub struct ToggleBoardVisibility {
    pub board_id: String,
}

impl Command for ToggleBoardVisibility {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store
            .toggle_board_visibility(&self.board_id)
            .map(|_| ())
            .into()
    }

    fn description(&self) -> String {
        format!("Toggle visibility of board {}", self.board_id)
    }
}

/// Change which board is being viewed; `None` clears the selection
pub struct SetActiveBoard {
    pub board_id: Option<String>,
}

impl Command for SetActiveBoard {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store.set_active_board(self.board_id.as_deref()).into()
    }

    fn description(&self) -> String {
        match &self.board_id {
            Some(id) => format!("Set active board {}", id),
            None => "Clear active board".to_string(),
        }
    }
}

/// Mark the board's "done" list; `None` clears the marker
pub struct SetCompletedList {
    pub board_id: String,
    pub list_id: Option<String>,
}

impl Command for SetCompletedList {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store
            .set_completed_list(&self.board_id, self.list_id.as_deref())
            .into()
    }

    fn description(&self) -> String {
        match &self.list_id {
            Some(id) => format!("Set completed list of board {} to {}", self.board_id, id),
            None => format!("Clear completed list of board {}", self.board_id),
        }
    }
}
