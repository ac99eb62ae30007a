//! Error types for the record endpoint
//!
//! Provides unified error handling using thiserror. Every error converts
//! into the three-field response envelope, with the transport status code
//! mirroring the embedded `responseStatus`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::Envelope;

// == Slot Error Enum ==
/// Unified error type for the record endpoint.
#[derive(Error, Debug)]
pub enum SlotError {
    /// No record is currently stored
    #[error("Not found")]
    NotFound,

    /// Request used a verb other than GET/POST/DELETE
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Storage or timer substrate call failed; fatal for the operation
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl SlotError {
    /// Machine-readable code carried in the envelope's `errorCode` field.
    pub fn error_code(&self) -> &'static str {
        match self {
            SlotError::NotFound => "NOT_FOUND",
            SlotError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            SlotError::Storage(_) => "STORAGE_FAILURE",
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for SlotError {
    fn into_response(self) -> Response {
        let status = match &self {
            SlotError::NotFound => StatusCode::NOT_FOUND,
            SlotError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SlotError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(Envelope::error(
            status.as_u16(),
            self.error_code(),
            &self.to_string(),
        ));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the record endpoint.
pub type Result<T> = std::result::Result<T, SlotError>;
