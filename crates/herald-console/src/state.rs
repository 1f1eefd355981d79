// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! View state owned by the console between events.

use std::collections::HashSet;

use herald_core::{ChannelId, ChannelStatus, ChannelType, FilterState};
use herald_query::Query;

use crate::delete::DeleteRequest;

/// A partial filter update. `None` leaves a field as it is; `Some(None)`
/// resets type or status to "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub channel_type: Option<Option<ChannelType>>,
    pub status: Option<Option<ChannelStatus>>,
    pub muted_only: Option<bool>,
}

impl FilterPatch {
    pub fn merge_into(self, filters: FilterState) -> FilterState {
        FilterState {
            channel_type: self.channel_type.unwrap_or(filters.channel_type),
            status: self.status.unwrap_or(filters.status),
            muted_only: self.muted_only.unwrap_or(filters.muted_only),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ViewState {
    pub query: Query,
    pub selection: HashSet<ChannelId>,
    pub pending_delete: Option<DeleteRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_merges_only_given_fields() {
        let current = FilterState {
            channel_type: Some(ChannelType::Slack),
            status: Some(ChannelStatus::Error),
            muted_only: true,
        };
        let patch = FilterPatch {
            status: Some(None),
            ..FilterPatch::default()
        };
        assert_eq!(
            patch.merge_into(current),
            FilterState {
                channel_type: Some(ChannelType::Slack),
                status: None,
                muted_only: true,
            }
        );
    }
}
