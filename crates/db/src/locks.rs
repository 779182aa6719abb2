//! Per-slot admission serialization.
//!
//! The booking flow is a check-then-act sequence over shared capacity: read
//! the free count, decide, write the booking. Holding a slot's lock across
//! that whole sequence keeps two submissions against the same slot from both
//! observing enough capacity. Different slots lock independently.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct SlotLockMap {
    slots: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl SlotLockMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for one time slot, creating it on first use.
    /// The guard must be held until the admission write has completed.
    pub async fn acquire(&self, time_slot_id: Uuid) -> OwnedMutexGuard<()> {
        let slot = {
            let mut slots = self.slots.lock().await;
            Arc::clone(slots.entry(time_slot_id).or_default())
        };
        slot.lock_owned().await
    }
}
