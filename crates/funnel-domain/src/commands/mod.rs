use crate::BoardStore;

pub mod board_commands;
pub mod card_commands;
pub mod list_commands;

pub use board_commands::*;
pub use card_commands::*;
pub use list_commands::*;

/// Result of running a command against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The change was made.
    Applied,
    /// A new entity was created with this id.
    Created(String),
    /// Everything referenced exists but the command had nothing to do.
    Unchanged,
    /// A referenced board, list, card or checklist item does not exist; the
    /// state is unchanged.
    NotFound,
}

impl Outcome {
    /// Whether the state was modified and needs saving.
    pub fn is_change(&self) -> bool {
        matches!(self, Outcome::Applied | Outcome::Created(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound)
    }

    pub fn created_id(&self) -> Option<&str> {
        match self {
            Outcome::Created(id) => Some(id.as_str()),
            _ => None,
        }
    }
}

impl From<Option<()>> for Outcome {
    fn from(result: Option<()>) -> Self {
        result.map_or(Outcome::NotFound, |_| Outcome::Applied)
    }
}

impl From<Option<String>> for Outcome {
    fn from(result: Option<String>) -> Self {
        result.map_or(Outcome::NotFound, Outcome::Created)
    }
}

/// A single mutation of the board state.
///
/// Commands carry the intent of one UI action so it can be logged and written
/// through to storage in one place.
pub trait Command: Send + Sync {
    fn execute(&self, store: &mut BoardStore) -> Outcome;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}
