// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read side of Herald: turns a channel collection into the page a user sees
//! and the summary counts above it.

pub mod engine;
pub mod stats;

pub use engine::{Query, View, clamp_page, paginate, sort_channels, total_pages, view};
pub use stats::{StatShortcut, Stats, summarize};
