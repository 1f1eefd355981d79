// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loading the channel collection the binary operates on.

use std::collections::HashSet;
use std::path::Path;

use chrono::Utc;
use herald_core::{Channel, HeraldError};
use herald_store::sample_channels;
use tracing::{debug, info};

/// Read a JSON array of channels from `path`, or fall back to the built-in
/// sample set when no path is given.
pub fn load_channels(path: Option<&Path>) -> Result<Vec<Channel>, HeraldError> {
    let Some(path) = path else {
        debug!("no channel file given, using the sample collection");
        return Ok(sample_channels(Utc::now()));
    };

    let content = std::fs::read_to_string(path).map_err(|e| {
        HeraldError::Config(format!("cannot read channel file {}: {e}", path.display()))
    })?;
    let channels = parse_channels(&content)
        .map_err(|e| HeraldError::Config(format!("{}: {e}", path.display())))?;
    info!(path = %path.display(), channels = channels.len(), "channel file loaded");
    Ok(channels)
}

/// Parse a seed collection. Ids must be unique.
pub fn parse_channels(content: &str) -> Result<Vec<Channel>, HeraldError> {
    let channels: Vec<Channel> = serde_json::from_str(content)
        .map_err(|e| HeraldError::Config(format!("invalid channel JSON: {e}")))?;

    let mut seen = HashSet::new();
    for channel in &channels {
        if !seen.insert(&channel.id) {
            return Err(HeraldError::Config(format!(
                "duplicate channel id {}",
                channel.id
            )));
        }
    }
    Ok(channels)
}

/// Persist the collection back to `path` as pretty JSON.
pub fn save_channels(path: &Path, channels: &[Channel]) -> Result<(), HeraldError> {
    let json = serde_json::to_string_pretty(channels)
        .map_err(|e| HeraldError::Internal(format!("cannot encode channels: {e}")))?;
    std::fs::write(path, json).map_err(|e| {
        HeraldError::Config(format!("cannot write channel file {}: {e}", path.display()))
    })?;
    debug!(path = %path.display(), channels = channels.len(), "channel file written");
    Ok(())
}
