// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel store for Herald.
//!
//! Owns the in-memory channel collection and every operation that changes
//! it: single-channel lifecycle, bulk actions, and the periodic mute-expiry
//! sweep.

pub mod bulk;
pub mod lifecycle;
pub mod mute;
pub mod scheduler;
pub mod seed;
pub mod store;

pub use bulk::BulkOp;
pub use lifecycle::{ChannelDraft, ChannelEdit, DISPLAY_NAME_REQUIRED};
pub use mute::MuteDuration;
pub use scheduler::{MuteScheduler, sweep_expired};
pub use seed::sample_channels;
pub use store::{ChannelStore, Mutation};
