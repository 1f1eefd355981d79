// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `herald watch`: run the mute-expiry sweep until a shutdown signal.

use std::sync::Arc;

use chrono::Utc;
use herald_config::HeraldConfig;
use herald_core::HeraldError;
use herald_store::{ChannelStore, MuteScheduler};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::shutdown;

pub async fn run_watch(store: Arc<ChannelStore>, config: &HeraldConfig) -> Result<(), HeraldError> {
    let cancel = shutdown::install_signal_handler();
    watch_until(store, config.scheduler.sweep_interval(), cancel).await;
    Ok(())
}

/// Sweep on `interval` and log every committed change until `cancel` fires.
pub async fn watch_until(
    store: Arc<ChannelStore>,
    interval: std::time::Duration,
    cancel: CancellationToken,
) {
    let mut scheduler = MuteScheduler::new(Arc::clone(&store), interval);
    let mut revisions = store.subscribe();
    scheduler.start();

    let now = Utc::now();
    let muted = store.snapshot().iter().filter(|c| c.is_muted(now)).count();
    info!(
        channels = store.len(),
        muted,
        interval_ms = interval.as_millis() as u64,
        "watching mute expiry"
    );

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            changed = revisions.changed() => {
                if changed.is_err() {
                    break;
                }
                let revision = *revisions.borrow_and_update();
                let now = Utc::now();
                let still_muted = store.snapshot().iter().filter(|c| c.is_muted(now)).count();
                info!(revision, still_muted, "mute state changed");
            }
        }
    }

    scheduler.stop().await;
    info!("watch stopped");
}
