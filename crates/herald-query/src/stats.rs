// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Summary counts over a filtered view, and the filter shortcuts behind them.

use chrono::{DateTime, Utc};
use herald_core::{Channel, ChannelStatus, FilterState};
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    /// Status OK and not currently muted.
    pub ok: usize,
    /// Status Error, muted or not.
    pub error: usize,
    pub muted: usize,
}

/// Count the channels of a filtered (pre-pagination) view.
pub fn summarize(channels: &[Channel], now: DateTime<Utc>) -> Stats {
    channels.iter().fold(
        Stats {
            total: channels.len(),
            ..Stats::default()
        },
        |mut stats, c| {
            let muted = c.is_muted(now);
            if muted {
                stats.muted += 1;
            }
            match c.status {
                ChannelStatus::Ok if !muted => stats.ok += 1,
                ChannelStatus::Error => stats.error += 1,
                _ => {}
            }
            stats
        },
    )
}

/// A clickable stat that narrows the view to the channels it counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StatShortcut {
    Total,
    Ok,
    Error,
    Muted,
}

impl StatShortcut {
    /// Rewrite `filters` for this shortcut. The type filter is kept.
    pub fn apply(self, filters: FilterState) -> FilterState {
        let (status, muted_only) = match self {
            StatShortcut::Total => (None, false),
            StatShortcut::Ok => (Some(ChannelStatus::Ok), false),
            StatShortcut::Error => (Some(ChannelStatus::Error), false),
            StatShortcut::Muted => (None, true),
        };
        FilterState {
            channel_type: filters.channel_type,
            status,
            muted_only,
        }
    }
}
