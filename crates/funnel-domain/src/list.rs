use funnel_core::IdGenerator;
use serde::{Deserialize, Serialize};

use crate::{copy_title, Card, CardId, FieldUpdate};

pub type ListId = String;

/// A column of a board. Card order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUpdate {
    pub title: Option<String>,
    pub color: FieldUpdate<String>,
}

impl List {
    pub fn new(ids: &dyn IdGenerator, title: String) -> Self {
        Self {
            id: ids.generate_id(),
            title,
            cards: Vec::new(),
            color: None,
        }
    }

    pub fn update(&mut self, updates: ListUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        updates.color.apply_to(&mut self.color);
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    pub fn card_mut(&mut self, card_id: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == card_id)
    }

    pub fn push_card(&mut self, card: Card) -> CardId {
        let id = card.id.clone();
        self.cards.push(card);
        id
    }

    /// Detach a card, keeping the order of the rest.
    pub fn take_card(&mut self, card_id: &str) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == card_id)?;
        Some(self.cards.remove(index))
    }

    /// Copy with a suffixed title where every card and checklist item gets a
    /// fresh id. Card contents and timestamps are kept.
    pub fn duplicate(&self, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate_id(),
            title: copy_title(&self.title),
            cards: self.cards.iter().map(|c| c.with_fresh_ids(ids)).collect(),
            color: self.color.clone(),
        }
    }

    /// Copy with fresh ids throughout but the title unchanged.
    pub(crate) fn with_fresh_ids(&self, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate_id(),
            cards: self.cards.iter().map(|c| c.with_fresh_ids(ids)).collect(),
            ..self.clone()
        }
    }
}
