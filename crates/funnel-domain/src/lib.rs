pub mod board;
pub mod card;
pub mod commands;
pub mod custom_field;
pub mod field_update;
pub mod list;
pub mod snapshot;
pub mod store;
pub mod tag;
pub mod views;

pub use board::{Board, BoardId};
pub use card::{Card, CardDraft, CardId, CardUpdate, Subtask, SubtaskId};
pub use custom_field::{CustomField, FieldKind};
pub use field_update::FieldUpdate;
pub use list::{List, ListId, ListUpdate};
pub use snapshot::BoardState;
pub use store::BoardStore;
pub use tag::{MemberId, Tag, TagId, TeamMember};

/// Appended to the title of a duplicated board, list or card.
pub const COPY_SUFFIX: &str = " (Cópia)";

pub(crate) fn copy_title(title: &str) -> String {
    format!("{}{}", title, COPY_SUFFIX)
}
