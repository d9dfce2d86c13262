//! Identifier generation for boards, lists, cards and checklist items.
//!
//! Ids are opaque strings. Generators never check for collisions against ids
//! already in use, and callers must not rely on any ordering between them.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh entity identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate_id(&self) -> String;
}

/// Random UUID v4 ids rendered without hyphens.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic `prefix-N` ids, counting from 1.
#[derive(Debug)]
pub struct SequentialGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialGenerator {
    fn generate_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

/// Generate an id with the default generator.
pub fn generate_id() -> String {
    UuidGenerator.generate_id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_distinct() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_uuid_id_has_no_hyphens() {
        let id = UuidGenerator.generate_id();
        assert_eq!(id.len(), 32);
        assert!(!id.contains('-'));
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialGenerator::new("card");
        assert_eq!(ids.generate_id(), "card-1");
        assert_eq!(ids.generate_id(), "card-2");
        assert_eq!(ids.generate_id(), "card-3");
    }
}
