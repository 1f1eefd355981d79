// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits for the services the engine calls out to.
//!
//! Async collaborators use `#[async_trait]` so they can be held as
//! `Arc<dyn Trait>` behind the console.

pub mod intent;
pub mod notifier;
pub mod sender;

pub use intent::IntentSource;
pub use notifier::Notifier;
pub use sender::TestSender;
