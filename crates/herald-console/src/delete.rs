// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-step deletion: stage, then confirm or cancel.

use std::collections::HashSet;

use herald_core::{Channel, ChannelId};
use serde::Serialize;

/// Channels staged for deletion, awaiting an explicit decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteRequest {
    pub channels: Vec<Channel>,
}

impl DeleteRequest {
    pub fn ids(&self) -> HashSet<ChannelId> {
        self.channels.iter().map(|c| c.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Question put to the user before deleting.
    pub fn prompt(&self) -> String {
        match self.channels.as_slice() {
            [only] => format!(
                "Are you sure you want to delete the channel \"{}\"? \
                 This action cannot be undone.",
                only.display_name
            ),
            many => format!(
                "Are you sure you want to delete the {} selected channels? \
                 This action cannot be undone.",
                many.len()
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteDecision {
    Confirm,
    Cancel,
}

/// Notification text after `count` channels were deleted.
pub(crate) fn deleted_message(count: usize) -> String {
    if count > 1 {
        format!("{count} channels deleted.")
    } else {
        "Channel deleted successfully.".to_string()
    }
}
