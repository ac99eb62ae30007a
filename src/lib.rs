//! slotkv - A single-record key-value endpoint
//!
//! Serves exactly one logical record over HTTP verbs, with optional
//! TTL auto-expiry scheduled at write time.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod slot;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, SlotError};
pub use slot::{MemoryStorage, RecordSlot, SharedSlot, Storage};
