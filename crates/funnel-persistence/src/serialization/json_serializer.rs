use crate::traits::Serializer;
use funnel_core::{FunnelError, FunnelResult};

/// Pretty-printed JSON for the persisted board state
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> FunnelResult<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(|e| FunnelError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> FunnelResult<T> {
        serde_json::from_slice(bytes).map_err(|e| FunnelError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funnel_domain::{BoardState, BoardStore, CardDraft, CustomField};

    fn populated_state() -> BoardState {
        let mut store = BoardStore::new();
        let board = store.add_board("Sales".to_string());
        let list = store.add_list(&board, "Todo".to_string()).unwrap();
        let mut draft = CardDraft::titled("Lead A").with_value(100.0);
        draft
            .custom_fields
            .insert("Segment".to_string(), CustomField::Text("Retail".to_string()));
        draft
            .custom_fields
            .insert("Budget".to_string(), CustomField::Number(Some(5000.0)));
        draft
            .custom_fields
            .insert("Signed".to_string(), CustomField::Boolean(true));
        store.add_card(&board, &list, draft).unwrap();
        store.set_active_board(Some(board.as_str()));
        store.into_state()
    }

    #[test]
    fn test_state_survives_serialization() {
        let serializer = JsonSerializer;
        let state = populated_state();

        let bytes = serializer.serialize(&state).unwrap();
        let restored: BoardState = serializer.deserialize(&bytes).unwrap();

        assert_eq!(restored, state);
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let serializer = JsonSerializer;
        let state = populated_state();

        let once = serializer.serialize(&state).unwrap();
        let reloaded: BoardState = serializer.deserialize(&once).unwrap();
        let twice = serializer.serialize(&reloaded).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_garbage_is_serialization_error() {
        let serializer = JsonSerializer;
        let result: FunnelResult<BoardState> = serializer.deserialize(b"not json");
        assert!(matches!(result, Err(FunnelError::Serialization(_))));
    }
}
