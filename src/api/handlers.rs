//! API Handlers
//!
//! HTTP request handlers mapping each verb onto a slot operation.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::config::Config;
use crate::error::{Result, SlotError};
use crate::models::{Envelope, HealthResponse};
use crate::slot::{MemoryStorage, RecordSlot, SharedSlot};

/// Application state shared across all handlers.
///
/// Holds the single record slot behind its shared mutex; every request
/// and every timer fire goes through the same handle.
#[derive(Clone)]
pub struct AppState {
    /// The one slot this endpoint serves
    pub slot: SharedSlot,
}

impl AppState {
    /// Creates a new AppState owning the given slot.
    pub fn new(slot: RecordSlot) -> Self {
        Self {
            slot: slot.into_shared(),
        }
    }

    /// Creates a new AppState from configuration, backed by in-memory storage.
    pub fn from_config(config: &Config) -> Self {
        let storage = Arc::new(MemoryStorage::new());
        Self::new(RecordSlot::new(config.record_key.clone(), storage))
    }
}

/// Handler for GET /
///
/// Returns the stored payload, or the 404 envelope when the slot is empty.
pub async fn read_handler(State(state): State<AppState>) -> Result<Json<Envelope>> {
    let slot = state.slot.lock().await;
    let payload = slot.read().await?;

    Ok(Json(Envelope::ok(payload)))
}

/// Handler for POST /
///
/// Replaces the record with the request body and echoes it back. A
/// positive numeric `expire` field schedules auto-expiry that many
/// seconds out.
pub async fn write_handler(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Envelope>> {
    let shared = state.slot.clone();
    let mut slot = state.slot.lock().await;
    let echoed = slot.write(payload, shared).await?;

    Ok(Json(Envelope::ok(echoed)))
}

/// Handler for DELETE /
///
/// Removes the record and cancels any outstanding expiry; idempotent.
pub async fn clear_handler(State(state): State<AppState>) -> Result<Json<Envelope>> {
    let mut slot = state.slot.lock().await;
    let ack = slot.clear().await?;

    Ok(Json(Envelope::ok(ack)))
}

/// Fallback for any verb other than GET/POST/DELETE on the record route.
pub async fn method_not_allowed_handler() -> SlotError {
    SlotError::MethodNotAllowed
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
