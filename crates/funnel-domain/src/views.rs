//! Read-only figures computed from the current state on every call.

use crate::{Board, BoardState, Card, List, Tag, TeamMember};

/// Sum of card values in a list.
pub fn list_total(list: &List) -> f64 {
    list.cards.iter().map(|c| c.value).sum()
}

/// Sum of card values across every list of a board.
pub fn board_total(board: &Board) -> f64 {
    board.lists.iter().map(list_total).sum()
}

/// Percentage of checklist items done, `0.0` for an empty checklist.
pub fn checklist_progress(card: &Card) -> f64 {
    let total = card.checklist.len();
    if total == 0 {
        return 0.0;
    }
    card.completed_subtasks() as f64 / total as f64 * 100.0
}

/// Boards not marked hidden, in stored order.
pub fn visible_boards(state: &BoardState) -> Vec<&Board> {
    state.boards.iter().filter(|b| !b.hidden).collect()
}

pub fn is_completed_list(board: &Board, list: &List) -> bool {
    board.completed_list_id.as_deref() == Some(list.id.as_str())
}

/// Percentage of a board's cards sitting in its completed list.
///
/// `0.0` when the board has no cards or no resolvable completed list.
pub fn board_completion(board: &Board) -> f64 {
    let total = board.card_count();
    match board.completed_list() {
        Some(done) if total > 0 => done.cards.len() as f64 / total as f64 * 100.0,
        _ => 0.0,
    }
}

/// Tags a card refers to, in the card's order. Ids with no matching tag are
/// skipped.
pub fn resolve_tags<'a>(card: &Card, tags: &'a [Tag]) -> Vec<&'a Tag> {
    card.tag_ids
        .iter()
        .filter_map(|id| tags.iter().find(|t| &t.id == id))
        .collect()
}

pub fn resolve_responsible<'a>(card: &Card, members: &'a [TeamMember]) -> Option<&'a TeamMember> {
    let id = card.responsible_id.as_deref()?;
    members.iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardStore, CardDraft};
    use funnel_core::{IdGenerator, SequentialGenerator};

    fn card_with_value(ids: &dyn IdGenerator, value: f64) -> Card {
        Card::new(ids, CardDraft::titled("Lead").with_value(value))
    }

    #[test]
    fn test_list_total_exact_sum() {
        let ids = SequentialGenerator::new("v");
        let mut list = List::new(&ids, "Todo".to_string());
        for value in [10.5, 0.0, 20.0] {
            list.push_card(card_with_value(&ids, value));
        }
        assert_eq!(list_total(&list), 30.5);
    }

    #[test]
    fn test_list_total_empty() {
        let ids = SequentialGenerator::new("v");
        let list = List::new(&ids, "Todo".to_string());
        assert_eq!(list_total(&list), 0.0);
    }

    #[test]
    fn test_progress_without_subtasks_is_zero() {
        let ids = SequentialGenerator::new("v");
        let card = card_with_value(&ids, 0.0);
        let progress = checklist_progress(&card);
        assert!(!progress.is_nan());
        assert_eq!(progress, 0.0);
    }

    #[test]
    fn test_progress_partial() {
        let ids = SequentialGenerator::new("v");
        let mut card = card_with_value(&ids, 0.0);
        let first = card.add_subtask(&ids, "Call".to_string());
        card.add_subtask(&ids, "Email".to_string());
        card.add_subtask(&ids, "Visit".to_string());
        card.add_subtask(&ids, "Close".to_string());
        card.toggle_subtask(&first);

        assert_eq!(checklist_progress(&card), 25.0);
    }

    #[test]
    fn test_visible_boards() {
        let mut store = BoardStore::new();
        let shown = store.add_board("Shown".to_string());
        let hidden = store.add_board("Hidden".to_string());
        store.toggle_board_visibility(&hidden);

        let visible = visible_boards(store.state());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, shown);
    }

    #[test]
    fn test_completion_metrics() {
        let mut store = BoardStore::new();
        let board = store.add_board("Sales".to_string());
        let open = store.add_list(&board, "Open".to_string()).unwrap();
        let won = store.add_list(&board, "Won".to_string()).unwrap();
        for title in ["A", "B", "C"] {
            store.add_card(&board, &open, CardDraft::titled(title).with_value(10.0));
        }
        store.add_card(&board, &won, CardDraft::titled("D").with_value(70.0));

        assert_eq!(board_completion(store.board(&board).unwrap()), 0.0);

        store.set_completed_list(&board, Some(won.as_str()));
        let b = store.board(&board).unwrap();
        assert!(is_completed_list(b, b.list(&won).unwrap()));
        assert!(!is_completed_list(b, b.list(&open).unwrap()));
        assert_eq!(board_completion(b), 25.0);
        assert_eq!(board_total(b), 100.0);
    }

    #[test]
    fn test_dangling_references_are_skipped() {
        let ids = SequentialGenerator::new("v");
        let mut card = card_with_value(&ids, 0.0);
        card.tag_ids = vec!["t2".to_string(), "gone".to_string(), "t1".to_string()];
        card.responsible_id = Some("m9".to_string());

        let tags = vec![
            Tag {
                id: "t1".to_string(),
                name: "Hot".to_string(),
                color: "red".to_string(),
            },
            Tag {
                id: "t2".to_string(),
                name: "B2B".to_string(),
                color: "blue".to_string(),
            },
        ];
        let names: Vec<_> = resolve_tags(&card, &tags).iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["B2B", "Hot"]);

        let members = vec![TeamMember {
            id: "m1".to_string(),
            name: "Ana".to_string(),
        }];
        assert!(resolve_responsible(&card, &members).is_none());
        card.responsible_id = Some("m1".to_string());
        assert_eq!(resolve_responsible(&card, &members).unwrap().name, "Ana");
    }
}
