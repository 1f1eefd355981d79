// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Target criteria: which channels an intent refers to.

use herald_core::{Channel, ChannelStatus, ChannelType};
use serde::{Deserialize, Serialize};

/// Exact key/value pair a channel must carry among its labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCriterion {
    pub key: String,
    pub value: String,
}

/// Optional per-field constraints, AND-combined.
///
/// An absent field, or a blank display name, constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<ChannelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ChannelStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelCriterion>,
}

impl TargetCriteria {
    /// The display-name constraint, if it is non-blank.
    pub fn name_term(&self) -> Option<&str> {
        self.display_name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.name_term().is_none()
            && self.channel_type.is_none()
            && self.status.is_none()
            && self.label.is_none()
    }

    pub fn matches(&self, channel: &Channel) -> bool {
        if let Some(term) = self.name_term()
            && !channel
                .display_name
                .to_lowercase()
                .contains(&term.to_lowercase())
        {
            return false;
        }
        if self.channel_type.is_some_and(|t| t != channel.channel_type) {
            return false;
        }
        if self.status.is_some_and(|s| s != channel.status) {
            return false;
        }
        match &self.label {
            Some(wanted) => channel
                .labels
                .iter()
                .any(|l| l.key == wanted.key && l.value == wanted.value),
            None => true,
        }
    }

    /// Every channel of `collection` these criteria match, in collection order.
    pub fn select<'a>(&self, collection: &'a [Channel]) -> Vec<&'a Channel> {
        collection.iter().filter(|c| self.matches(c)).collect()
    }
}
