use super::{Command, Outcome};
use crate::{BoardStore, CardDraft, CardUpdate};

pub struct AddCard {
    pub board_id: String,
    pub list_id: String,
    pub draft: CardDraft,
}

impl Command for AddCard {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store
            .add_card(&self.board_id, &self.list_id, self.draft.clone())
            .into()
    }

    fn description(&self) -> String {
        format!("Add card '{}' to list {}", self.draft.title, self.list_id)
    }
}

/// Update card properties (title, value, contact details, tags, custom fields, checklist)
pub struct UpdateCard {
    pub board_id: String,
    pub list_id: String,
    pub card_id: String,
    pub updates: CardUpdate,
}

impl Command for UpdateCard {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store
            .update_card(
                &self.board_id,
                &self.list_id,
                &self.card_id,
                self.updates.clone(),
            )
            .into()
    }

    fn description(&self) -> String {
        "Update card".to_string()
    }
}

pub struct DeleteCard {
    pub board_id: String,
    pub list_id: String,
    pub card_id: String,
}

impl Command for DeleteCard {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store
            .delete_card(&self.board_id, &self.list_id, &self.card_id)
            .into()
    }

    fn description(&self) -> String {
        format!("Delete card {}", self.card_id)
    }
}

pub struct DuplicateCard {
    pub board_id: String,
    pub list_id: String,
    pub card_id: String,
}

impl Command for DuplicateCard {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store
            .duplicate_card(&self.board_id, &self.list_id, &self.card_id)
            .into()
    }

    fn description(&self) -> String {
        format!("Duplicate card {}", self.card_id)
    }
}

/// Move card to the end of another list
pub struct MoveCard {
    pub board_id: String,
    pub from_list_id: String,
    pub to_list_id: String,
    pub card_id: String,
}

impl Command for MoveCard {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        let moved = store.move_card(
            &self.board_id,
            &self.from_list_id,
            &self.to_list_id,
            &self.card_id,
        );
        match moved {
            Some(()) if self.from_list_id == self.to_list_id => Outcome::Unchanged,
            other => other.into(),
        }
    }

    fn description(&self) -> String {
        format!(
            "Move card {} from list {} to list {}",
            self.card_id, self.from_list_id, self.to_list_id
        )
    }
}

pub struct AddSubtask {
    pub board_id: String,
    pub list_id: String,
    pub card_id: String,
    pub title: String,
}

impl Command for AddSubtask {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store
            .add_subtask(
                &self.board_id,
                &self.list_id,
                &self.card_id,
                self.title.clone(),
            )
            .into()
    }

    fn description(&self) -> String {
        format!("Add checklist item '{}' to card {}", self.title, self.card_id)
    }
}

pub struct ToggleSubtask {
    pub board_id: String,
    pub list_id: String,
    pub card_id: String,
    pub subtask_id: String,
}

impl Command for ToggleSubtask {
    fn execute(&self, store: &mut BoardStore) -> Outcome {
        store
            .toggle_subtask(
                &self.board_id,
                &self.list_id,
                &self.card_id,
                &self.subtask_id,
            )
            .map(|_| ())
            .into()
    }

    fn description(&self) -> String {
        format!("Toggle checklist item {} on card {}", self.subtask_id, self.card_id)
    }
}
