// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `herald intent`: apply a structured intent to the collection.
//!
//! The payload is the JSON the assistant service would return. Malformed
//! payloads degrade to the UNKNOWN fallback reply. A DELETE is staged and only
//! carried out with `--yes`; otherwise it is cancelled after printing the
//! confirmation prompt. When the collection came from a file, mutations are
//! written back to it.

use std::path::Path;

use herald_command::{Effect, Intent};
use herald_console::{Console, DeleteDecision};
use herald_core::HeraldError;
use tracing::info;

use crate::seed;

pub fn run_intent(
    console: &Console,
    payload: &str,
    confirm: bool,
    json: bool,
    channels_path: Option<&Path>,
) -> Result<(), HeraldError> {
    let revision = console.store().revision();
    let intent = Intent::parse_or_fallback(payload);
    let resolution = console.execute_intent(intent);

    println!("{}", resolution.reply());

    match &resolution.effect {
        Effect::ConfirmDelete { .. } => {
            if let Some(request) = console.pending_delete() {
                println!("{}", request.prompt());
                let decision = if confirm {
                    DeleteDecision::Confirm
                } else {
                    println!("Not deleted. Re-run with --yes to confirm.");
                    DeleteDecision::Cancel
                };
                console.resolve_delete(decision)?;
            }
        }
        Effect::ApplyFilter { .. } => {
            for channel in &console.current_view().all_matching {
                println!("  {} ({})", channel.display_name, channel.channel_type);
            }
        }
        Effect::NoMatch => println!("No channels matched."),
        Effect::Bulk { .. } | Effect::Explain => {}
    }

    let snapshot = console.store().snapshot();
    if let Some(path) = channels_path
        && console.store().revision() != revision
    {
        seed::save_channels(path, &snapshot)?;
        info!(path = %path.display(), "collection saved");
    }

    if json {
        let out = serde_json::to_string_pretty(snapshot.as_slice())
            .map_err(|e| HeraldError::Internal(format!("cannot encode channels: {e}")))?;
        println!("{out}");
    }
    Ok(())
}
