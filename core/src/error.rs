//! Error types for the inventory client.
//!
//! # Design
//! `ApiError` covers everything that can go wrong around a network call: the
//! request could not be serialized, the host failed to deliver it, the server
//! answered with a non-2xx status, or the body did not match the schema.
//! `ValidationError` covers input rejected before any request is built; the
//! app layer turns those into user-facing alerts.

use thiserror::Error;

/// Errors returned by `InventoryClient` and the host transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The host could not complete the round-trip (connection refused, etc).
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Input rejected on the client before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid name and quantity.")]
    InvalidInput,

    #[error("Please select {0}.")]
    NoSelection(&'static str),

    #[error("Please select only one ingredient to edit.")]
    MultipleSelection,

    #[error("The name of an existing ingredient cannot be changed.")]
    ReadOnlyName,
}
