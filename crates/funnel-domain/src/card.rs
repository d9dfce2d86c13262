use chrono::{DateTime, Utc};
use funnel_core::IdGenerator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{copy_title, CustomField, FieldUpdate, MemberId, TagId};

pub type CardId = String;
pub type SubtaskId = String;

/// Checklist entry on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: SubtaskId,
    #[serde(alias = "text")]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Subtask {
    pub fn new(ids: &dyn IdGenerator, title: String) -> Self {
        Self {
            id: ids.generate_id(),
            title,
            completed: false,
            description: None,
        }
    }

    fn with_fresh_id(&self, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate_id(),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_id: Option<MemberId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<TagId>,
    #[serde(default)]
    pub custom_fields: BTreeMap<String, CustomField>,
    #[serde(default, alias = "subtasks")]
    pub checklist: Vec<Subtask>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Card contents supplied by the caller when adding a card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardDraft {
    pub title: String,
    pub description: Option<String>,
    pub value: f64,
    pub phone: Option<String>,
    pub responsible_id: Option<MemberId>,
    pub scheduled_date: Option<String>,
    pub scheduled_time: Option<String>,
    pub tag_ids: Vec<TagId>,
    pub custom_fields: BTreeMap<String, CustomField>,
    pub checklist: Vec<Subtask>,
}

impl CardDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }
}

/// Partial card update; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardUpdate {
    pub title: Option<String>,
    pub description: FieldUpdate<String>,
    pub value: Option<f64>,
    pub phone: FieldUpdate<String>,
    pub responsible_id: FieldUpdate<MemberId>,
    pub scheduled_date: FieldUpdate<String>,
    pub scheduled_time: FieldUpdate<String>,
    pub tag_ids: Option<Vec<TagId>>,
    pub custom_fields: Option<BTreeMap<String, CustomField>>,
    pub checklist: Option<Vec<Subtask>>,
}

impl Card {
    pub fn new(ids: &dyn IdGenerator, draft: CardDraft) -> Self {
        let now = Utc::now();
        Self {
            id: ids.generate_id(),
            title: draft.title,
            description: draft.description,
            value: finite_value(draft.value),
            phone: draft.phone,
            responsible_id: draft.responsible_id,
            scheduled_date: draft.scheduled_date,
            scheduled_time: draft.scheduled_time,
            tag_ids: draft.tag_ids,
            custom_fields: draft.custom_fields,
            checklist: draft.checklist,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, updates: CardUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        updates.description.apply_to(&mut self.description);
        if let Some(value) = updates.value {
            self.value = finite_value(value);
        }
        updates.phone.apply_to(&mut self.phone);
        updates.responsible_id.apply_to(&mut self.responsible_id);
        updates.scheduled_date.apply_to(&mut self.scheduled_date);
        updates.scheduled_time.apply_to(&mut self.scheduled_time);
        if let Some(tag_ids) = updates.tag_ids {
            self.tag_ids = tag_ids;
        }
        if let Some(custom_fields) = updates.custom_fields {
            self.custom_fields = custom_fields;
        }
        if let Some(checklist) = updates.checklist {
            self.checklist = checklist;
        }
        self.touch();
    }

    pub fn add_subtask(&mut self, ids: &dyn IdGenerator, title: String) -> SubtaskId {
        let subtask = Subtask::new(ids, title);
        let id = subtask.id.clone();
        self.checklist.push(subtask);
        self.touch();
        id
    }

    /// Flip a checklist item and return its new state.
    pub fn toggle_subtask(&mut self, subtask_id: &str) -> Option<bool> {
        let subtask = self.checklist.iter_mut().find(|s| s.id == subtask_id)?;
        subtask.completed = !subtask.completed;
        let completed = subtask.completed;
        self.touch();
        Some(completed)
    }

    /// Titled copy with fresh timestamps, as made by "duplicate card".
    pub fn duplicate(&self, ids: &dyn IdGenerator) -> Self {
        let now = Utc::now();
        Self {
            title: copy_title(&self.title),
            created_at: now,
            updated_at: now,
            ..self.with_fresh_ids(ids)
        }
    }

    /// Verbatim copy that only swaps the card and checklist ids.
    pub fn with_fresh_ids(&self, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.generate_id(),
            checklist: self
                .checklist
                .iter()
                .map(|s| s.with_fresh_id(ids))
                .collect(),
            ..self.clone()
        }
    }

    pub fn completed_subtasks(&self) -> usize {
        self.checklist.iter().filter(|s| s.completed).count()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// JSON has no NaN or infinity, so a non-finite value would make the saved
/// state unreadable. Such values are stored as 0.
fn finite_value(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!("Replacing non-finite card value {} with 0", value);
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funnel_core::SequentialGenerator;
    use serde_json::json;

    fn lead(ids: &dyn IdGenerator) -> Card {
        let mut draft = CardDraft::titled("Lead A").with_value(100.0);
        draft.tag_ids = vec!["hot".to_string()];
        draft.checklist = vec![Subtask::new(ids, "Call".to_string())];
        Card::new(ids, draft)
    }

    #[test]
    fn test_new_card_defaults() {
        let ids = SequentialGenerator::new("c");
        let card = Card::new(&ids, CardDraft::titled("Lead"));
        assert_eq!(card.id, "c-1");
        assert_eq!(card.value, 0.0);
        assert!(card.tag_ids.is_empty());
        assert!(card.custom_fields.is_empty());
        assert!(card.checklist.is_empty());
        assert_eq!(card.created_at, card.updated_at);
    }

    #[test]
    fn test_non_finite_values_become_zero() {
        let ids = SequentialGenerator::new("c");
        let card = Card::new(&ids, CardDraft::titled("Lead").with_value(f64::NAN));
        assert_eq!(card.value, 0.0);

        let mut card = Card::new(&ids, CardDraft::titled("Lead").with_value(10.0));
        card.update(CardUpdate {
            value: Some(f64::INFINITY),
            ..Default::default()
        });
        assert_eq!(card.value, 0.0);

        card.update(CardUpdate {
            value: Some(f64::NEG_INFINITY),
            ..Default::default()
        });
        assert_eq!(card.value, 0.0);
    }

    #[test]
    fn test_update_merges_and_touches() {
        let ids = SequentialGenerator::new("c");
        let mut card = lead(&ids);
        card.phone = Some("555".to_string());
        let before = card.updated_at;

        card.update(CardUpdate {
            value: Some(250.0),
            phone: FieldUpdate::Clear,
            ..Default::default()
        });

        assert_eq!(card.title, "Lead A");
        assert_eq!(card.value, 250.0);
        assert_eq!(card.phone, None);
        assert_eq!(card.tag_ids, vec!["hot".to_string()]);
        assert!(card.updated_at >= before);
    }

    #[test]
    fn test_duplicate_refreshes_ids_and_title() {
        let ids = SequentialGenerator::new("c");
        let card = lead(&ids);
        let copy = card.duplicate(&ids);

        assert_ne!(copy.id, card.id);
        assert_eq!(copy.title, "Lead A (Cópia)");
        assert_eq!(copy.value, 100.0);
        assert_eq!(copy.tag_ids, card.tag_ids);
        assert_ne!(copy.checklist[0].id, card.checklist[0].id);
        assert_eq!(copy.checklist[0].title, "Call");
    }

    #[test]
    fn test_toggle_subtask() {
        let ids = SequentialGenerator::new("c");
        let mut card = lead(&ids);
        let subtask_id = card.checklist[0].id.clone();

        assert_eq!(card.toggle_subtask(&subtask_id), Some(true));
        assert_eq!(card.completed_subtasks(), 1);
        assert_eq!(card.toggle_subtask(&subtask_id), Some(false));
        assert_eq!(card.toggle_subtask("missing"), None);
    }

    #[test]
    fn test_deserialize_legacy_subtasks_key() {
        let card: Card = serde_json::from_value(json!({
            "id": "k1",
            "title": "Lead",
            "subtasks": [{ "id": "s1", "text": "Send proposal", "completed": true }],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(card.value, 0.0);
        assert_eq!(card.checklist.len(), 1);
        assert_eq!(card.checklist[0].title, "Send proposal");
        assert!(card.checklist[0].completed);
    }
}
