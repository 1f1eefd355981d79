// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Herald integration tests.
//!
//! Provides fixture channels, proptest strategies, and mock collaborators for
//! fast, deterministic tests without external services.
//!
//! # Components
//!
//! - [`RecordingNotifier`] - Captures every toast for assertions
//! - [`ScriptedIntentSource`] - Intent service with pre-configured replies
//! - [`MockTestSender`] - Test transport with per-channel failures and a gate
//! - [`ConsoleHarness`] - A console wired to all of the above

pub mod fixtures;
pub mod harness;
pub mod mock_intent;
pub mod mock_sender;
pub mod notifier;
pub mod strategies;

pub use harness::ConsoleHarness;
pub use mock_intent::ScriptedIntentSource;
pub use mock_sender::MockTestSender;
pub use notifier::RecordingNotifier;
