// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for console-level integration testing.
//!
//! `ConsoleHarness` assembles a store, a console, and the mock collaborators,
//! and keeps handles to each so tests can drive events and then assert on the
//! collection and the toasts.

use std::sync::Arc;

use chrono::Utc;
use herald_console::{Console, ConsoleSettings};
use herald_core::{Channel, ChannelId};
use herald_store::ChannelStore;

use crate::fixtures::sample_channels;
use crate::mock_intent::ScriptedIntentSource;
use crate::mock_sender::MockTestSender;
use crate::notifier::RecordingNotifier;

/// Builder for creating console test environments.
pub struct ConsoleHarnessBuilder {
    channels: Option<Vec<Channel>>,
    settings: ConsoleSettings,
    intents: ScriptedIntentSource,
    sender: MockTestSender,
}

impl ConsoleHarnessBuilder {
    fn new() -> Self {
        Self {
            channels: None,
            settings: ConsoleSettings::default(),
            intents: ScriptedIntentSource::new(),
            sender: MockTestSender::new(),
        }
    }

    /// Seed the store with `channels` instead of the sample collection.
    pub fn with_channels(mut self, channels: Vec<Channel>) -> Self {
        self.channels = Some(channels);
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.settings.page_size = page_size;
        self
    }

    pub fn with_settings(mut self, settings: ConsoleSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_intent_source(mut self, intents: ScriptedIntentSource) -> Self {
        self.intents = intents;
        self
    }

    pub fn with_test_sender(mut self, sender: MockTestSender) -> Self {
        self.sender = sender;
        self
    }

    pub fn build(self) -> ConsoleHarness {
        let channels = self
            .channels
            .unwrap_or_else(|| sample_channels(Utc::now()));
        let store = Arc::new(ChannelStore::new(channels));
        let notifier = Arc::new(RecordingNotifier::new());
        let intents = Arc::new(self.intents);
        let sender = Arc::new(self.sender);

        let console = Console::new(Arc::clone(&store), self.settings, notifier.clone())
            .with_intent_source(intents.clone())
            .with_test_sender(sender.clone());

        ConsoleHarness {
            console: Arc::new(console),
            store,
            notifier,
            intents,
            sender,
        }
    }
}

/// A console wired to mock collaborators.
pub struct ConsoleHarness {
    pub console: Arc<Console>,
    pub store: Arc<ChannelStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub intents: Arc<ScriptedIntentSource>,
    pub sender: Arc<MockTestSender>,
}

impl ConsoleHarness {
    pub fn builder() -> ConsoleHarnessBuilder {
        ConsoleHarnessBuilder::new()
    }

    /// A harness over the sample collection with default settings.
    pub fn sample() -> Self {
        Self::builder().build()
    }

    /// Look up a channel in the current snapshot.
    pub fn channel(&self, id: &str) -> Option<Channel> {
        self.store.get(&ChannelId::from(id))
    }

    pub fn ids(raw: &[&str]) -> Vec<ChannelId> {
        raw.iter().map(|s| ChannelId::from(*s)).collect()
    }
}
