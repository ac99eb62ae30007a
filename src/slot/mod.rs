//! Slot Module
//!
//! The single-record store: one optional payload slot paired with one
//! optional expiry timer, backed by an injected storage substrate.

mod record;
mod storage;
mod store;
mod timer;


// Re-export public types
pub use record::{requested_ttl, EXPIRE_FIELD};
pub use storage::{MemoryStorage, Storage};
pub use store::{RecordSlot, SharedSlot, DELETE_ACK};
pub use timer::ExpiryTimer;
