//! Record Slot
//!
//! The single-record store: maintains the record/timer pair and answers
//! the four operations (read, write, clear, expire). One slot backs one
//! storage key; the shared mutex serializes every operation against it,
//! timer-driven expiry included.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::error::{Result, SlotError};
use crate::slot::{requested_ttl, ExpiryTimer, Storage};

// == Public Constants ==
/// Confirmation body returned by every successful clear
pub const DELETE_ACK: &str = "DELETE SUCCESS";

/// Shared handle serializing all operations against one slot.
pub type SharedSlot = Arc<Mutex<RecordSlot>>;

// == Record Slot ==
/// One optional record paired with one optional expiry timer.
pub struct RecordSlot {
    /// Storage key the record is persisted under
    key: String,
    /// Injected storage substrate
    storage: Arc<dyn Storage>,
    /// The slot's single outstanding wake-up, if any
    timer: ExpiryTimer,
}

impl RecordSlot {
    // == Constructor ==
    /// Creates an empty slot over `key` backed by `storage`.
    pub fn new(key: impl Into<String>, storage: Arc<dyn Storage>) -> Self {
        Self {
            key: key.into(),
            storage,
            timer: ExpiryTimer::new(),
        }
    }

    /// Wraps the slot in the shared handle every operation must go through.
    pub fn into_shared(self) -> SharedSlot {
        Arc::new(Mutex::new(self))
    }

    // == Read ==
    /// Fetches the current record.
    ///
    /// Returns the stored payload, or `SlotError::NotFound` when the slot
    /// is empty. No side effects.
    pub async fn read(&self) -> Result<Value> {
        match self.storage.get(&self.key).await? {
            Some(payload) => Ok(payload),
            None => Err(SlotError::NotFound),
        }
    }

    // == Write ==
    /// Replaces the record with `payload` and echoes it back.
    ///
    /// The replace is total: no fields of a prior record survive. A
    /// positive numeric `expire` field on the payload schedules expiry
    /// that many seconds out, superseding any outstanding schedule. A
    /// write without one cancels any timer left over from an earlier
    /// write, so an untimed record is never deleted by a stale deadline.
    /// A TTL whose deadline cannot be represented is treated as no TTL.
    ///
    /// `slot` must be the shared handle this slot lives in; the scheduled
    /// wake-up re-acquires it before mutating state.
    pub async fn write(&mut self, payload: Value, slot: SharedSlot) -> Result<Value> {
        self.storage.put(&self.key, payload.clone()).await?;

        let schedule = requested_ttl(&payload)
            .and_then(|ttl| Instant::now().checked_add(ttl).map(|deadline| (ttl, deadline)));

        match schedule {
            Some((ttl, deadline)) => {
                let generation = self.timer.replace();
                debug!(key = %self.key, ttl_secs = ttl.as_secs_f64(), "expiry scheduled");

                self.timer.arm(tokio::spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    let mut guard = slot.lock().await;
                    // A replace or cancel since we were scheduled wins.
                    if !guard.timer.is_current(generation) {
                        return;
                    }
                    if let Err(err) = guard.expire().await {
                        warn!(error = %err, "expiry failed");
                    }
                }));
            }
            None => self.timer.cancel(),
        }

        Ok(payload)
    }

    // == Clear ==
    /// Removes the record and cancels any outstanding timer.
    ///
    /// Both halves are unconditional no-ops when already absent, so clear
    /// is idempotent and always returns the same confirmation body.
    pub async fn clear(&mut self) -> Result<&'static str> {
        self.storage.delete(&self.key).await?;
        self.timer.cancel();
        Ok(DELETE_ACK)
    }

    // == Expire ==
    /// Timer-fired transition: removes the record without producing a
    /// client-visible response.
    pub async fn expire(&mut self) -> Result<()> {
        self.timer.disarm();
        self.storage.delete(&self.key).await?;
        info!(key = %self.key, "record expired");
        Ok(())
    }

    /// True while a wake-up is scheduled against the record.
    pub fn has_timer(&self) -> bool {
        self.timer.is_armed()
    }
}
