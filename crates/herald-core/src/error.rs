// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Herald channel engine.

use thiserror::Error;

/// The primary error type used across Herald crates and collaborator traits.
#[derive(Debug, Error)]
pub enum HeraldError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// A user-supplied value was rejected before any mutation took place.
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// No channel with the given id exists in the current collection.
    #[error("channel not found: {id}")]
    ChannelNotFound { id: String },

    /// A conflicting call for the same target is still awaiting its result.
    #[error("an operation is already in flight for {target}")]
    InFlight { target: String },

    /// A deletion was confirmed or cancelled while none was staged.
    #[error("no deletion is awaiting confirmation")]
    NoPendingDelete,

    /// The natural-language intent service failed or rejected the prompt.
    #[error("intent source error: {message}")]
    IntentSource {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The notification transport failed to deliver a test message.
    #[error("test send failed: {message}")]
    TestSend {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl HeraldError {
    /// Shorthand for a validation failure on a single field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Shorthand for a lookup miss on a channel id.
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Self::ChannelNotFound { id: id.to_string() }
    }
}
