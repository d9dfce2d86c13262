use crate::serialization::JsonSerializer;
use crate::traits::{PersistenceMetadata, PersistenceStore, Serializer, StoreSnapshot};
use funnel_core::{FunnelResult, IdGenerator, UuidGenerator};
use funnel_domain::commands::{Command, Outcome};
use funnel_domain::{BoardState, BoardStore};
use uuid::Uuid;

/// The board store bound to a persistence backend.
///
/// Every applied command is written through to storage before `execute`
/// returns. A failed write leaves the in-memory change in place and is
/// reported to the caller; nothing is retried.
pub struct Workspace<S: PersistenceStore> {
    store: BoardStore,
    persistence: S,
    serializer: JsonSerializer,
    instance_id: Uuid,
}

impl<S: PersistenceStore> Workspace<S> {
    /// Load the stored state, or start empty when nothing has been saved
    pub async fn open(persistence: S) -> FunnelResult<Self> {
        Self::open_with(persistence, Box::new(UuidGenerator)).await
    }

    pub async fn open_with(persistence: S, ids: Box<dyn IdGenerator>) -> FunnelResult<Self> {
        let serializer = JsonSerializer;
        let state: BoardState = match persistence.load().await? {
            Some((snapshot, metadata)) => {
                tracing::debug!(
                    "Loaded state saved at {} from {}",
                    metadata.saved_at,
                    persistence.location()
                );
                serializer.deserialize(&snapshot.data)?
            }
            None => {
                tracing::debug!("Nothing stored at {}, starting empty", persistence.location());
                BoardState::new()
            }
        };

        Ok(Self {
            store: BoardStore::with_id_generator(state, ids),
            persistence,
            serializer,
            instance_id: Uuid::new_v4(),
        })
    }

    pub fn boards(&self) -> &BoardStore {
        &self.store
    }

    pub fn persistence(&self) -> &S {
        &self.persistence
    }

    /// Apply a command and persist the result.
    ///
    /// `Outcome::NotFound` and `Outcome::Unchanged` leave the state untouched,
    /// so nothing is written.
    pub async fn execute(&mut self, command: Box<dyn Command>) -> FunnelResult<Outcome> {
        let description = command.description();
        tracing::debug!("Executing: {}", description);

        let outcome = command.execute(&mut self.store);
        if !outcome.is_change() {
            tracing::debug!("No change ({:?}): {}", outcome, description);
            return Ok(outcome);
        }

        if let Err(e) = self.save().await {
            tracing::error!(
                "Failed to persist '{}' to {}: {}",
                description,
                self.persistence.location(),
                e
            );
            return Err(e);
        }

        Ok(outcome)
    }

    /// Write the full current state to storage
    pub async fn save(&self) -> FunnelResult<PersistenceMetadata> {
        let data = self.serializer.serialize(self.store.state())?;
        let snapshot = StoreSnapshot {
            data,
            metadata: PersistenceMetadata::new(self.instance_id),
        };
        self.persistence.save(snapshot).await
    }

    /// Replace the in-memory state with what storage currently holds
    pub async fn reload(&mut self) -> FunnelResult<()> {
        let state = match self.persistence.load().await? {
            Some((snapshot, _)) => self.serializer.deserialize(&snapshot.data)?,
            None => BoardState::new(),
        };
        self.store.replace_state(state);
        Ok(())
    }
}
