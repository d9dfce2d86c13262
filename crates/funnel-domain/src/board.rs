use chrono::{DateTime, Utc};
use funnel_core::IdGenerator;
use serde::{Deserialize, Serialize};

use crate::{copy_title, List, ListId};

pub type BoardId = String;

/// A pipeline: an ordered row of lists, optionally with one list marked as
/// the "done" column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub lists: Vec<List>,
    #[serde(default)]
    pub hidden: bool,
    /// Weak reference into `lists`. A stale id reads as "no completed list".
    #[serde(default)]
    pub completed_list_id: Option<ListId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn new(ids: &dyn IdGenerator, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: ids.generate_id(),
            title,
            lists: Vec::new(),
            hidden: false,
            completed_list_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
        self.touch();
    }

    pub fn toggle_hidden(&mut self) -> bool {
        self.hidden = !self.hidden;
        self.touch();
        self.hidden
    }

    pub fn list(&self, list_id: &str) -> Option<&List> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    pub fn list_mut(&mut self, list_id: &str) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| l.id == list_id)
    }

    pub fn has_list(&self, list_id: &str) -> bool {
        self.lists.iter().any(|l| l.id == list_id)
    }

    /// The completed list, if the marker points at a list this board still has.
    pub fn completed_list(&self) -> Option<&List> {
        self.completed_list_id
            .as_deref()
            .and_then(|id| self.list(id))
    }

    pub fn set_completed_list(&mut self, list_id: Option<ListId>) {
        self.completed_list_id = list_id;
        self.touch();
    }

    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| l.cards.len()).sum()
    }

    /// Deep copy with fresh ids for every list, card and checklist item.
    ///
    /// Only the board title is suffixed. A valid completed-list marker follows
    /// the copied list; a stale one is carried over unchanged.
    pub fn duplicate(&self, ids: &dyn IdGenerator) -> Self {
        let now = Utc::now();
        let lists: Vec<List> = self.lists.iter().map(|l| l.with_fresh_ids(ids)).collect();
        let completed_list_id = match self.completed_list_id.as_deref() {
            Some(old) => match self.lists.iter().position(|l| l.id == old) {
                Some(index) => Some(lists[index].id.clone()),
                None => Some(old.to_string()),
            },
            None => None,
        };

        Self {
            id: ids.generate_id(),
            title: copy_title(&self.title),
            lists,
            hidden: self.hidden,
            completed_list_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, CardDraft};
    use funnel_core::SequentialGenerator;

    fn pipeline(ids: &dyn IdGenerator) -> Board {
        let mut board = Board::new(ids, "Sales".to_string());
        let mut todo = List::new(ids, "Todo".to_string());
        todo.push_card(Card::new(ids, CardDraft::titled("Lead A")));
        let done = List::new(ids, "Won".to_string());
        board.completed_list_id = Some(done.id.clone());
        board.lists = vec![todo, done];
        board
    }

    #[test]
    fn test_toggle_hidden() {
        let ids = SequentialGenerator::new("b");
        let mut board = Board::new(&ids, "Sales".to_string());
        assert!(!board.hidden);
        assert!(board.toggle_hidden());
        assert!(!board.toggle_hidden());
    }

    #[test]
    fn test_stale_completed_list_reads_as_none() {
        let ids = SequentialGenerator::new("b");
        let mut board = pipeline(&ids);
        assert_eq!(board.completed_list().unwrap().title, "Won");

        board.lists.pop();
        assert!(board.completed_list_id.is_some());
        assert!(board.completed_list().is_none());
    }

    #[test]
    fn test_duplicate_remaps_completed_list() {
        let ids = SequentialGenerator::new("b");
        let board = pipeline(&ids);
        let copy = board.duplicate(&ids);

        assert_eq!(copy.title, "Sales (Cópia)");
        assert_ne!(copy.id, board.id);
        assert_eq!(copy.lists[0].title, "Todo");
        assert_ne!(copy.lists[1].id, board.lists[1].id);
        assert_eq!(copy.completed_list().unwrap().title, "Won");
        assert_eq!(copy.completed_list_id.as_ref(), Some(&copy.lists[1].id));
        assert_eq!(copy.lists[0].cards[0].title, "Lead A");
        assert_ne!(copy.lists[0].cards[0].id, board.lists[0].cards[0].id);
    }
}
