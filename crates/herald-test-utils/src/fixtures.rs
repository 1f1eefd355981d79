// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixture channels.

use herald_core::{Channel, ChannelId, ChannelStatus, ChannelType};

pub use herald_store::seed::sample_channels;

/// An enabled, unlabelled, unmuted channel.
pub fn channel(id: &str, name: &str, channel_type: ChannelType, status: ChannelStatus) -> Channel {
    Channel {
        id: ChannelId::from(id),
        display_name: name.to_string(),
        channel_type,
        enabled: true,
        status,
        labels: Vec::new(),
        muted_until: None,
    }
}
