// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test sends with a per-channel in-flight mark.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use herald_core::{ChannelId, HeraldError, Toast};
use tracing::{info, warn};

use crate::console::Console;

/// How a test send ended. Either way exactly one toast was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Delivered,
    Failed,
}

/// Removes the in-flight mark when dropped, including when the send future
/// is dropped before completing.
struct InFlightMark<'a> {
    set: &'a Mutex<HashSet<ChannelId>>,
    id: ChannelId,
}

impl<'a> InFlightMark<'a> {
    fn acquire(set: &'a Mutex<HashSet<ChannelId>>, id: &ChannelId) -> Result<Self, HeraldError> {
        let inserted = set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone());
        if !inserted {
            return Err(HeraldError::InFlight {
                target: id.to_string(),
            });
        }
        Ok(Self {
            set,
            id: id.clone(),
        })
    }
}

impl Drop for InFlightMark<'_> {
    fn drop(&mut self) {
        self.set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.id);
    }
}

impl Console {
    /// Send a test notification through channel `id`.
    ///
    /// A second call for the same channel while the first is outstanding is
    /// rejected with [`HeraldError::InFlight`]. Transport failures are reported
    /// through a toast, not as an error.
    pub async fn send_test(&self, id: &ChannelId) -> Result<SendOutcome, HeraldError> {
        let sender = self
            .sender
            .clone()
            .ok_or_else(|| HeraldError::Config("no test sender configured".into()))?;
        let channel = self.store.get(id).ok_or_else(|| HeraldError::not_found(id))?;
        let _mark = InFlightMark::acquire(&self.sending, id)?;

        match sender.send_test(&channel).await {
            Ok(()) => {
                info!(id = %id, "test notification delivered");
                self.notify(Toast::success(format!(
                    "Test notification sent successfully to \"{}\".",
                    channel.display_name
                )));
                Ok(SendOutcome::Delivered)
            }
            Err(e) => {
                warn!(id = %id, error = %e, "test notification failed");
                self.notify(Toast::error(format!(
                    "Failed to send test notification to \"{}\".",
                    channel.display_name
                )));
                Ok(SendOutcome::Failed)
            }
        }
    }

    pub fn is_sending(&self, id: &ChannelId) -> bool {
        self.sending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(id)
    }
}
