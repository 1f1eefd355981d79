// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification transport used for test sends.

use async_trait::async_trait;

use crate::error::HeraldError;
use crate::types::Channel;

/// Delivers a test notification through a channel.
///
/// Latency and failure policy belong to the transport; the engine only
/// observes the outcome.
#[async_trait]
pub trait TestSender: Send + Sync {
    async fn send_test(&self, channel: &Channel) -> Result<(), HeraldError>;
}
