// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Periodic mute-expiry sweep.
//!
//! Each tick re-reads the latest snapshot and clears `muted_until` on every
//! channel whose mute has expired, committing all of them as one replacement.
//! The background task is owned by [`MuteScheduler`] and torn down through a
//! [`CancellationToken`].

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::store::{ChannelStore, Mutation};

/// Clear every expired mute in one batch, returning how many were cleared.
///
/// Nothing is committed when no mute has expired.
pub fn sweep_expired(store: &ChannelStore, now: DateTime<Utc>) -> usize {
    store.update(|channels| {
        let expired = channels.iter().filter(|c| c.mute_expired(now)).count();
        if expired == 0 {
            return Mutation::Unchanged(0);
        }
        let next = channels
            .iter()
            .map(|c| {
                let mut c = c.clone();
                if c.mute_expired(now) {
                    c.muted_until = None;
                }
                c
            })
            .collect();
        Mutation::Commit {
            channels: next,
            value: expired,
        }
    })
}

struct RunningSweep {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// Owns the background sweep task for one store.
///
/// Starting an already running scheduler replaces the old timer; dropping the
/// scheduler cancels it.
pub struct MuteScheduler {
    store: Arc<ChannelStore>,
    interval: Duration,
    running: Option<RunningSweep>,
}

impl MuteScheduler {
    pub fn new(store: Arc<ChannelStore>, interval: Duration) -> Self {
        Self {
            store,
            interval,
            running: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|r| !r.handle.is_finished())
    }

    /// Spawn the sweep loop on the current tokio runtime.
    ///
    /// A previously started loop is cancelled first, so restarts never leave
    /// two timers behind.
    pub fn start(&mut self) {
        if let Some(previous) = self.running.take() {
            previous.cancel.cancel();
            debug!("previous mute sweep cancelled on restart");
        }

        let cancel = CancellationToken::new();
        let store = Arc::clone(&self.store);
        let period = self.interval;
        let task_cancel = cancel.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // Skip the first immediate tick.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let cleared = sweep_expired(&store, Utc::now());
                        if cleared > 0 {
                            info!(cleared, "expired mutes cleared");
                        } else {
                            debug!("mute sweep: nothing expired");
                        }
                    }
                    _ = task_cancel.cancelled() => {
                        debug!("mute sweep task shutting down");
                        break;
                    }
                }
            }
        });

        info!(interval_ms = period.as_millis() as u64, "mute scheduler started");
        self.running = Some(RunningSweep { cancel, handle });
    }

    /// Cancel the sweep loop and wait for it to exit.
    pub async fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };
        running.cancel.cancel();
        if let Err(e) = running.handle.await {
            warn!(error = %e, "mute sweep task ended abnormally");
        }
        info!("mute scheduler stopped");
    }
}

impl Drop for MuteScheduler {
    fn drop(&mut self) {
        if let Some(running) = self.running.take() {
            running.cancel.cancel();
        }
    }
}
