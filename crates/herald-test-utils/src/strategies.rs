// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Proptest strategies over the channel model.
//!
//! Mute expiries are generated relative to the wall clock at generation time,
//! within a few hours either side, so both live and expired mutes show up.

use std::ops::Range;

use chrono::{Duration, Utc};
use herald_core::{Channel, ChannelId, ChannelStatus, ChannelType, Label, SortKey};
use proptest::prelude::*;

pub fn arb_channel_type() -> impl Strategy<Value = ChannelType> {
    prop_oneof![
        Just(ChannelType::Email),
        Just(ChannelType::Slack),
        Just(ChannelType::PagerDuty),
        Just(ChannelType::Webhook),
        Just(ChannelType::Sms),
    ]
}

pub fn arb_status() -> impl Strategy<Value = ChannelStatus> {
    prop_oneof![
        Just(ChannelStatus::Ok),
        Just(ChannelStatus::Pending),
        Just(ChannelStatus::Error),
    ]
}

pub fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::DisplayName),
        Just(SortKey::Type),
        Just(SortKey::Status),
    ]
}

pub fn arb_label() -> impl Strategy<Value = Label> {
    ("[a-z]{1,6}", "[a-z0-9-]{1,6}").prop_map(|(k, v)| Label::new(k, v))
}

/// A channel with an arbitrary id; use [`arb_collection`] for unique ids.
pub fn arb_channel() -> impl Strategy<Value = Channel> {
    (
        "[a-z0-9]{1,8}",
        "[A-Za-z ]{1,16}",
        arb_channel_type(),
        any::<bool>(),
        arb_status(),
        prop::collection::vec(arb_label(), 0..3),
        prop::option::of(-7200i64..7200),
    )
        .prop_map(|(id, name, channel_type, enabled, status, labels, mute)| Channel {
            id: ChannelId::from(id),
            display_name: name,
            channel_type,
            enabled,
            status,
            labels,
            muted_until: mute.map(|secs| Utc::now() + Duration::seconds(secs)),
        })
}

/// A collection of `len` channels with ids `"0"`, `"1"`, ... in order.
pub fn arb_collection(len: Range<usize>) -> impl Strategy<Value = Vec<Channel>> {
    prop::collection::vec(arb_channel(), len).prop_map(|channels| {
        channels
            .into_iter()
            .enumerate()
            .map(|(i, c)| Channel {
                id: ChannelId::from(i.to_string()),
                ..c
            })
            .collect()
    })
}
