// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in sample collection used when no seed file is supplied.

use chrono::{DateTime, Duration, Utc};
use herald_core::{Channel, ChannelId, ChannelStatus, ChannelType, Label};

struct SeedChannel {
    id: &'static str,
    name: &'static str,
    channel_type: ChannelType,
    enabled: bool,
    status: ChannelStatus,
    labels: &'static [(&'static str, &'static str)],
    muted_for_minutes: Option<i64>,
}

const SEED: &[SeedChannel] = &[
    SeedChannel {
        id: "1",
        name: "Production Alerts",
        channel_type: ChannelType::PagerDuty,
        enabled: true,
        status: ChannelStatus::Ok,
        labels: &[("team", "sre"), ("severity", "critical")],
        muted_for_minutes: None,
    },
    SeedChannel {
        id: "2",
        name: "Dev Team On-Call",
        channel_type: ChannelType::Slack,
        enabled: true,
        status: ChannelStatus::Ok,
        labels: &[("team", "backend")],
        muted_for_minutes: None,
    },
    SeedChannel {
        id: "3",
        name: "Customer Support Email",
        channel_type: ChannelType::Email,
        enabled: true,
        status: ChannelStatus::Ok,
        labels: &[("team", "support")],
        muted_for_minutes: None,
    },
    SeedChannel {
        id: "4",
        name: "Billing Webhook",
        channel_type: ChannelType::Webhook,
        enabled: false,
        status: ChannelStatus::Ok,
        labels: &[("service", "billing")],
        muted_for_minutes: None,
    },
    SeedChannel {
        id: "5",
        name: "CEO SMS Alerts",
        channel_type: ChannelType::Sms,
        enabled: true,
        status: ChannelStatus::Pending,
        labels: &[("severity", "critical"), ("escalation", "level-3")],
        muted_for_minutes: None,
    },
    SeedChannel {
        id: "6",
        name: "Marketing Email Group",
        channel_type: ChannelType::Email,
        enabled: true,
        status: ChannelStatus::Ok,
        labels: &[("team", "marketing")],
        muted_for_minutes: Some(60),
    },
    SeedChannel {
        id: "7",
        name: "Data Science Slack",
        channel_type: ChannelType::Slack,
        enabled: true,
        status: ChannelStatus::Error,
        labels: &[("team", "data")],
        muted_for_minutes: None,
    },
];

/// The seven sample channels, with mute expiries relative to `now`.
///
/// "Marketing Email Group" is muted for one hour from `now`.
pub fn sample_channels(now: DateTime<Utc>) -> Vec<Channel> {
    SEED.iter()
        .map(|s| Channel {
            id: ChannelId::from(s.id),
            display_name: s.name.to_string(),
            channel_type: s.channel_type,
            enabled: s.enabled,
            status: s.status,
            labels: s.labels.iter().map(|(k, v)| Label::new(*k, *v)).collect(),
            muted_until: s.muted_for_minutes.map(|m| now + Duration::minutes(m)),
        })
        .collect()
}
