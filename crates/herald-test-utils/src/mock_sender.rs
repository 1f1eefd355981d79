// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test-send transport for deterministic tests.
//!
//! Succeeds unless the channel was marked with [`MockTestSender::fail_for`].
//! A gated sender parks every send until released, so tests can observe the
//! in-flight window.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use herald_core::{Channel, ChannelId, HeraldError, TestSender};
use tokio::sync::{Mutex, Notify, Semaphore};

pub struct MockTestSender {
    failing: Mutex<HashSet<ChannelId>>,
    sent: Mutex<Vec<ChannelId>>,
    gate: Option<Arc<Semaphore>>,
    entered: Notify,
}

impl MockTestSender {
    pub fn new() -> Self {
        Self {
            failing: Mutex::new(HashSet::new()),
            sent: Mutex::new(Vec::new()),
            gate: None,
            entered: Notify::new(),
        }
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    /// Make every future send through `id` fail.
    pub async fn fail_for(&self, id: impl Into<ChannelId>) {
        self.failing.lock().await.insert(id.into());
    }

    /// Resolves once a send has entered the transport.
    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }

    /// Ids of every send attempt, in call order.
    pub async fn sent(&self) -> Vec<ChannelId> {
        self.sent.lock().await.clone()
    }
}

impl Default for MockTestSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TestSender for MockTestSender {
    async fn send_test(&self, channel: &Channel) -> Result<(), HeraldError> {
        self.sent.lock().await.push(channel.id.clone());
        self.entered.notify_one();
        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|e| HeraldError::Internal(e.to_string()))?;
            permit.forget();
        }
        if self.failing.lock().await.contains(&channel.id) {
            return Err(HeraldError::TestSend {
                message: format!("simulated failure for {}", channel.id),
                source: None,
            });
        }
        Ok(())
    }
}
