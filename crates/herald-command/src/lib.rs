// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command layer for Herald.
//!
//! Parses the structured intents returned by the natural-language service,
//! matches their target criteria against the channel collection, and decides
//! which effect to apply.

pub mod criteria;
pub mod intent;
pub mod resolver;

pub use criteria::{LabelCriterion, TargetCriteria};
pub use intent::{Action, FALLBACK_MESSAGE, Intent, IntentParseError};
pub use resolver::{Effect, Resolution, resolve};
