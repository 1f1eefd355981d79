// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use herald_config::HeraldConfig;
use herald_store::MuteDuration;

/// The slice of configuration the console reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleSettings {
    pub page_size: usize,
    /// Local clock hour "until tomorrow morning" mutes expire at.
    pub morning_hour: u32,
    /// Duration used when a mute is requested without one.
    pub default_mute: MuteDuration,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self::from(&HeraldConfig::default())
    }
}

impl From<&HeraldConfig> for ConsoleSettings {
    fn from(config: &HeraldConfig) -> Self {
        Self {
            page_size: config.console.page_size.max(1),
            morning_hour: config.mute.morning_hour,
            default_mute: MuteDuration::Minutes(config.mute.default_minutes),
        }
    }
}
