// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The structured intent produced by the natural-language service.
//!
//! Wire shape:
//!
//! ```json
//! {
//!   "action": "DISABLE",
//!   "target": { "type": "PagerDuty" },
//!   "confirmationMessage": "Okay, I've disabled the PagerDuty channel(s)."
//! }
//! ```
//!
//! `action` and `confirmationMessage` are required; `target` may be omitted.
//! Anything that does not fit this shape is downgraded to [`Action::Unknown`]
//! with [`FALLBACK_MESSAGE`] by [`Intent::parse_or_fallback`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;
use tracing::warn;

use crate::criteria::TargetCriteria;

/// Reply used whenever an intent cannot be understood.
pub const FALLBACK_MESSAGE: &str =
    "I'm sorry, I ran into a technical issue. Please try your request again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Filter,
    Enable,
    Disable,
    Delete,
    Unknown,
}

/// A validated intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetCriteria>,
    pub confirmation_message: String,
}

/// Why a payload was rejected.
#[derive(Debug, Error)]
pub enum IntentParseError {
    #[error("intent is not valid JSON of the expected shape: {0}")]
    Json(#[from] serde_json::Error),

    #[error("intent must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("intent has no action")]
    MissingAction,

    #[error("unknown intent action: {0}")]
    UnknownAction(String),

    #[error("intent has no confirmation message")]
    MissingMessage,
}

/// Loosely typed mirror of the wire shape, so missing fields are reported
/// individually instead of as a serde error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIntent {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    target: Option<TargetCriteria>,
    #[serde(default)]
    confirmation_message: Option<String>,
}

impl Intent {
    /// The intent substituted for anything malformed.
    pub fn fallback() -> Self {
        Self {
            action: Action::Unknown,
            target: None,
            confirmation_message: FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Parse raw service output, tolerating a surrounding Markdown code fence.
    pub fn parse(text: &str) -> Result<Self, IntentParseError> {
        let value: serde_json::Value = serde_json::from_str(strip_code_fence(text))?;
        Self::from_value(value)
    }

    /// Validate an already-decoded JSON value.
    ///
    /// Only objects are accepted; serde would otherwise read a JSON array
    /// positionally into the struct fields.
    pub fn from_value(value: serde_json::Value) -> Result<Self, IntentParseError> {
        let kind = json_kind(&value);
        if kind != "object" {
            return Err(IntentParseError::NotAnObject(kind));
        }
        let raw: RawIntent = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    /// [`parse`](Self::parse), replacing any failure with [`Intent::fallback`].
    pub fn parse_or_fallback(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|e| {
            warn!(error = %e, "malformed intent replaced with UNKNOWN");
            Self::fallback()
        })
    }

    fn from_raw(raw: RawIntent) -> Result<Self, IntentParseError> {
        let tag = raw
            .action
            .filter(|a| !a.trim().is_empty())
            .ok_or(IntentParseError::MissingAction)?;
        let action =
            Action::from_str(tag.trim()).map_err(|_| IntentParseError::UnknownAction(tag.clone()))?;
        let confirmation_message = raw
            .confirmation_message
            .filter(|m| !m.trim().is_empty())
            .ok_or(IntentParseError::MissingMessage)?;
        Ok(Self {
            action,
            target: raw.target,
            confirmation_message,
        })
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Strip a leading ```` ```json ```` (or bare ```` ``` ````) fence and a
/// trailing ```` ``` ````.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    body.strip_suffix("```").unwrap_or(body).trim()
}
