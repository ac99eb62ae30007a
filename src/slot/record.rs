//! Record Module
//!
//! The record is an arbitrary JSON payload accepted as-is; the only field
//! the store itself interprets is the optional TTL carried on the payload.

use std::time::Duration;

use serde_json::Value;

// == Public Constants ==
/// Payload field holding the requested time-to-live in seconds
pub const EXPIRE_FIELD: &str = "expire";

/// Extracts the requested TTL from a write payload.
///
/// Only a positive numeric `expire` field schedules expiry; a missing,
/// zero, negative, or non-numeric value means the record never expires.
/// Values too large to represent as a duration also mean no expiry.
pub fn requested_ttl(payload: &Value) -> Option<Duration> {
    let seconds = payload.get(EXPIRE_FIELD)?.as_f64()?;
    if seconds > 0.0 {
        Duration::try_from_secs_f64(seconds).ok()
    } else {
        None
    }
}
