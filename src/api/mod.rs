//! API Module
//!
//! HTTP handlers and routing for the record endpoint.
//!
//! # Endpoints
//! - `GET /` - Read the stored record
//! - `POST /` - Replace the record (optional `expire` field schedules TTL)
//! - `DELETE /` - Remove the record and cancel its timer
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
