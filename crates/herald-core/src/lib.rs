// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Herald channel engine.
//!
//! This crate provides the channel data model, the error type, and the
//! collaborator traits used throughout the Herald workspace.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::HeraldError;
pub use types::{
    Channel, ChannelId, ChannelStatus, ChannelType, FilterState, Label, Severity, SortConfig,
    SortDirection, SortKey, Toast,
};

pub use traits::{IntentSource, Notifier, TestSender};
