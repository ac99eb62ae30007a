//! Response models for the record endpoint API
//!
//! Every client-facing outcome is wrapped in the same three-field
//! envelope; the health probe is the one exception.

pub mod responses;

pub use responses::{Envelope, ErrorBody, HealthResponse};
