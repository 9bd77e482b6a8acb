//! Read boundary for already-committed weekly slots.

use crate::error::PersistenceError;
use crate::types::ExistingSlot;

/// Source of the weekly slots currently committed for a room.
pub trait ExistingSlotRepository {
    /// Load every slot committed for `room_id`, regardless of calendar
    /// period — period filtering, when requested, happens in conflict
    /// detection, not here.
    fn load(&self, room_id: &str) -> Result<Vec<ExistingSlot>, PersistenceError>;
}

/// Repository backed by a plain in-memory slot list. Used by tests and by
/// callers that stage slots without a database.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlotRepository {
    slots: Vec<ExistingSlot>,
}

impl InMemorySlotRepository {
    pub fn new(slots: Vec<ExistingSlot>) -> Self {
        InMemorySlotRepository { slots }
    }

    pub fn insert(&mut self, slot: ExistingSlot) {
        self.slots.push(slot);
    }
}

impl ExistingSlotRepository for InMemorySlotRepository {
    fn load(&self, room_id: &str) -> Result<Vec<ExistingSlot>, PersistenceError> {
        Ok(self
            .slots
            .iter()
            .filter(|slot| slot.room_id == room_id)
            .cloned()
            .collect())
    }
}
