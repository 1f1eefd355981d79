// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Event-driven controller for Herald.
//!
//! [`Console`] owns the view state (search, filters, sort, page, selection),
//! the staged deletion, in-flight test sends, and the assistant boundary, and
//! emits a toast for every user-visible outcome.

pub mod assistant;
pub mod console;
pub mod delete;
pub mod sending;
pub mod settings;
pub mod state;

pub use assistant::{ASSISTANT_ERROR_REPLY, ASSISTANT_ERROR_TOAST, ChatReply};
pub use console::Console;
pub use delete::{DeleteDecision, DeleteRequest};
pub use sending::SendOutcome;
pub use settings::ConsoleSettings;
pub use state::FilterPatch;
