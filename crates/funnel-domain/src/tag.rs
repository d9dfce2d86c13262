use serde::{Deserialize, Serialize};

pub type TagId = String;
pub type MemberId = String;

/// Label owned by the tag directory; cards hold only its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub color: String,
}

/// Team member a card can be assigned to through `responsibleId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
}
