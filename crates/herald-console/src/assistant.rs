// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Natural-language assistant boundary.
//!
//! A prompt goes to the [`IntentSource`](herald_core::IntentSource), the raw
//! reply is parsed (malformed payloads become UNKNOWN), resolved against the
//! current snapshot, and its effect applied. Only one command runs at a time.

use std::sync::atomic::{AtomicBool, Ordering};

use herald_command::{Effect, Intent, Resolution, resolve};
use herald_core::{HeraldError, Toast};
use serde::Serialize;
use tracing::{info, warn};

use crate::console::Console;

/// Reply shown when the intent service itself fails.
pub const ASSISTANT_ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Notification emitted when the intent service fails.
pub const ASSISTANT_ERROR_TOAST: &str = "An error occurred with the AI assistant.";

/// The assistant's answer to one prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub text: String,
    /// Whether the service failed and nothing was applied.
    pub failed: bool,
}

struct CommandSlot<'a>(&'a AtomicBool);

impl<'a> CommandSlot<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, HeraldError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| HeraldError::InFlight {
                target: "assistant".into(),
            })?;
        Ok(Self(flag))
    }
}

impl Drop for CommandSlot<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Console {
    /// Run one natural-language command.
    ///
    /// Fails with [`HeraldError::InFlight`] while another prompt is being
    /// processed. A failing intent service is not an error here: it yields an
    /// apologetic reply and an error toast with the collection untouched.
    pub async fn submit_prompt(&self, prompt: &str) -> Result<ChatReply, HeraldError> {
        let intents = self
            .intents
            .clone()
            .ok_or_else(|| HeraldError::Config("no intent source configured".into()))?;
        let _slot = CommandSlot::acquire(&self.command_in_flight)?;

        let raw = match intents.resolve(prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "intent source failed");
                self.notify(Toast::error(ASSISTANT_ERROR_TOAST));
                return Ok(ChatReply {
                    text: ASSISTANT_ERROR_REPLY.to_string(),
                    failed: true,
                });
            }
        };

        let resolution = self.execute_intent(Intent::parse_or_fallback(&raw));
        Ok(ChatReply {
            text: resolution.reply().to_string(),
            failed: false,
        })
    }

    pub fn command_in_flight(&self) -> bool {
        self.command_in_flight.load(Ordering::Acquire)
    }

    /// Resolve `intent` against the latest snapshot and apply its effect.
    ///
    /// Deletions are only staged; see [`resolve_delete`](Self::resolve_delete).
    pub fn execute_intent(&self, intent: Intent) -> Resolution {
        let resolution = resolve(intent, &self.store.snapshot());
        match &resolution.effect {
            Effect::ApplyFilter {
                search_term,
                filters,
            } => {
                let mut state = self.lock_state();
                state.query.search_term = search_term.clone();
                state.query.filters = *filters;
                state.query.page = 1;
            }
            Effect::Bulk { ids, op } => {
                let affected = self.store.apply_bulk(ids, *op);
                info!(%op, affected, "assistant bulk action applied");
            }
            Effect::ConfirmDelete { channels } => {
                self.stage_delete(crate::delete::DeleteRequest {
                    channels: channels.clone(),
                });
            }
            Effect::NoMatch | Effect::Explain => {}
        }
        self.refresh();
        resolution
    }
}
