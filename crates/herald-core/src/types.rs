// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel data model shared by every Herald crate.
//!
//! Wire names follow the JSON contract used by the intent service and seed
//! files: type and status values are the display strings (`"PagerDuty"`,
//! `"OK"`), channel fields are camelCase.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Opaque, immutable identifier of a channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub String);

impl ChannelId {
    /// Allocate a fresh random id for a newly created channel.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChannelId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ChannelId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Delivery mechanism of a channel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum ChannelType {
    Email,
    Slack,
    PagerDuty,
    Webhook,
    #[strum(serialize = "SMS")]
    #[serde(rename = "SMS")]
    Sms,
}

impl ChannelType {
    /// The wire name, also used for text search and sorting.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Email => "Email",
            ChannelType::Slack => "Slack",
            ChannelType::PagerDuty => "PagerDuty",
            ChannelType::Webhook => "Webhook",
            ChannelType::Sms => "SMS",
        }
    }
}

/// Last known delivery health of a channel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum ChannelStatus {
    #[strum(serialize = "OK")]
    #[serde(rename = "OK")]
    Ok,
    Pending,
    Error,
}

impl ChannelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelStatus::Ok => "OK",
            ChannelStatus::Pending => "Pending",
            ChannelStatus::Error => "Error",
        }
    }
}

/// A key/value tag attached to a channel. Duplicate keys are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    pub value: String,
}

impl Label {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

/// A configured destination for alerts.
///
/// The muted state is never stored as a flag: it is derived from
/// `muted_until` against the caller's notion of "now".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: ChannelId,
    pub display_name: String,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    pub enabled: bool,
    pub status: ChannelStatus,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted_until: Option<DateTime<Utc>>,
}

impl Channel {
    /// Effective mute: an expiry is present and still in the future.
    pub fn is_muted(&self, now: DateTime<Utc>) -> bool {
        self.muted_until.is_some_and(|until| until > now)
    }

    /// An expiry is present but has already passed and must be cleared.
    pub fn mute_expired(&self, now: DateTime<Utc>) -> bool {
        self.muted_until.is_some_and(|until| until <= now)
    }
}

/// Structured filter predicates, AND-combined with the free-text search term.
///
/// `None` for type or status means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(rename = "type")]
    pub channel_type: Option<ChannelType>,
    pub status: Option<ChannelStatus>,
    pub muted_only: bool,
}

impl FilterState {
    /// Number of predicates currently narrowing the view.
    pub fn active_count(&self) -> usize {
        usize::from(self.channel_type.is_some())
            + usize::from(self.status.is_some())
            + usize::from(self.muted_only)
    }
}

/// Column a view can be ordered by.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    DisplayName,
    Type,
    Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction. Defaults to display name, ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// The sort that results from selecting `key`.
    ///
    /// Re-selecting the active key flips the direction; a new key starts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.reversed(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Ascending,
            }
        }
    }
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A short notification emitted after a mutation or an external call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}
