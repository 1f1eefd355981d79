// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Maps a validated intent onto the current collection.
//!
//! Resolution never mutates anything. It computes the target set and the
//! [`Effect`] the caller should apply.

use std::collections::HashSet;

use herald_core::{Channel, ChannelId, FilterState};
use herald_store::BulkOp;
use tracing::debug;

use crate::intent::{Action, Intent};

/// What applying a resolved intent should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the search term and filters. The mute filter is reset.
    ApplyFilter {
        search_term: String,
        filters: FilterState,
    },
    /// Enable or disable every listed channel.
    Bulk { ids: HashSet<ChannelId>, op: BulkOp },
    /// Stage these channels for deletion; nothing is removed until confirmed.
    ConfirmDelete { channels: Vec<Channel> },
    /// A mutating intent matched no channel.
    NoMatch,
    /// Nothing to do beyond showing the confirmation message.
    Explain,
}

impl Effect {
    pub fn is_mutating(&self) -> bool {
        matches!(self, Effect::Bulk { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub intent: Intent,
    /// Matched channels, in collection order.
    pub targets: Vec<Channel>,
    pub effect: Effect,
}

impl Resolution {
    /// Text shown back to the user.
    pub fn reply(&self) -> &str {
        &self.intent.confirmation_message
    }

    pub fn target_ids(&self) -> HashSet<ChannelId> {
        self.targets.iter().map(|c| c.id.clone()).collect()
    }
}

/// Resolve `intent` against `collection`.
///
/// Without a target object the target set is empty. A present but empty target
/// object matches every channel.
pub fn resolve(intent: Intent, collection: &[Channel]) -> Resolution {
    let targets: Vec<Channel> = match &intent.target {
        Some(criteria) => criteria.select(collection).into_iter().cloned().collect(),
        None => Vec::new(),
    };

    let effect = match intent.action {
        Action::Filter => {
            let criteria = intent.target.clone().unwrap_or_default();
            Effect::ApplyFilter {
                search_term: criteria.name_term().unwrap_or_default().to_string(),
                filters: FilterState {
                    channel_type: criteria.channel_type,
                    status: criteria.status,
                    muted_only: false,
                },
            }
        }
        Action::Enable | Action::Disable | Action::Delete if targets.is_empty() => Effect::NoMatch,
        Action::Enable => Effect::Bulk {
            ids: targets.iter().map(|c| c.id.clone()).collect(),
            op: BulkOp::Enable,
        },
        Action::Disable => Effect::Bulk {
            ids: targets.iter().map(|c| c.id.clone()).collect(),
            op: BulkOp::Disable,
        },
        Action::Delete => Effect::ConfirmDelete {
            channels: targets.clone(),
        },
        Action::Unknown => Effect::Explain,
    };

    debug!(
        action = %intent.action,
        targets = targets.len(),
        "intent resolved"
    );

    Resolution {
        intent,
        targets,
        effect,
    }
}
