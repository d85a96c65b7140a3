//! Error types for the items API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently
//! distinguish "the item does not exist" from "the server returned an
//! unexpected status." Other non-2xx responses land in `Api` with the
//! message taken from the server's `{error}` envelope when it decodes,
//! or a generic fallback when it does not.

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by `ItemsApi` and surfaced by the controller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested item does not exist.
    #[error("Item not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The HTTP round-trip itself failed (connection refused, timeout).
    #[error("network error: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request: {0}")]
    Encode(String),
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// Message from the server's `{error}` envelope, or `fallback` if the body
/// is not an envelope.
pub(crate) fn envelope_message(body: &str, fallback: String) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error)
        .unwrap_or(fallback)
}
