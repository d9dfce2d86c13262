//! The whole board state as one serializable value.
//!
//! Field names match the blob written by the browser app
//! (`{"boards": [...], "activeBoard": "..."}`), so an existing blob loads
//! unchanged.

use crate::{Board, BoardId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    #[serde(default)]
    pub boards: Vec<Board>,

    /// The board currently being viewed.
    #[serde(default)]
    pub active_board: Option<BoardId>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty() && self.active_board.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funnel_core::SequentialGenerator;

    #[test]
    fn test_empty_state() {
        let state = BoardState::new();
        assert!(state.is_empty());
    }

    #[test]
    fn test_field_names_match_stored_blob() {
        let ids = SequentialGenerator::new("b");
        let state = BoardState {
            boards: vec![Board::new(&ids, "Sales".to_string())],
            active_board: Some("b-1".to_string()),
        };

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["activeBoard"], "b-1");
        assert_eq!(value["boards"][0]["title"], "Sales");
        assert_eq!(value["boards"][0]["hidden"], false);
        assert!(value["boards"][0]["completedListId"].is_null());
        assert!(value["boards"][0]["createdAt"].is_string());
    }

    #[test]
    fn test_partial_blob_defaults() {
        let state: BoardState = serde_json::from_str(r#"{"boards": []}"#).unwrap();
        assert!(state.active_board.is_none());
        assert!(state.is_empty());
    }
}
