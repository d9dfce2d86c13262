use super::{Command, Outcome};
use crate::{BoardStore, ListUpdate};

pub struct AddList {
    pub board_id: String,
    pub title: String,
}

impl Command for AddList {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store.add_list(&self.board_id, self.title.clone()).into()
    }

    fn description(&self) -> String {
        format!("Add list '{}' to board {}", self.title, self.board_id)
    }
}

/// Update list properties (title, color)
pub struct UpdateList {
    pub board_id: String,
    pub list_id: String,
    pub updates: ListUpdate,
}

impl Command for UpdateList {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store
            .update_list(&self.board_id, &self.list_id, self.updates.clone())
            .into()
    }

    fn description(&self) -> String {
        format!("Update list {}", self.list_id)
    }
}

pub struct DeleteList {
    pub board_id: String,
    pub list_id: String,
}

impl Command for DeleteList {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store.delete_list(&self.board_id, &self.list_id).into()
    }

    fn description(&self) -> String {
        format!("Delete list {}", self.list_id)
    }
}

pub struct DuplicateList {
    pub board_id: String,
    pub list_id: String,
}

impl Command for DuplicateList {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store.duplicate_list(&self.board_id, &self.list_id).into()
    }

    fn description(&self) -> String {
        format!("Duplicate list {}", self.list_id)
    }
}
