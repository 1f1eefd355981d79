// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Herald channel engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported at startup instead of silently falling back to a default.

use serde::{Deserialize, Serialize};

/// Top-level Herald configuration.
///
/// Every section is optional and defaults to the values the console ships with.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HeraldConfig {
    /// Console view and logging settings.
    #[serde(default)]
    pub console: ConsoleConfig,

    /// Mute-expiry sweep settings.
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    /// Mute duration settings.
    #[serde(default)]
    pub mute: MuteConfig,
}

/// Console view and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Number of channels shown per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            log_level: default_log_level(),
        }
    }
}

fn default_page_size() -> usize {
    7
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Mute-expiry sweep configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Interval between sweeps, in milliseconds.
    #[serde(default = "default_sweep_interval_ms")]
    pub sweep_interval_ms: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            sweep_interval_ms: default_sweep_interval_ms(),
        }
    }
}

impl SchedulerConfig {
    pub fn sweep_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.sweep_interval_ms)
    }
}

fn default_sweep_interval_ms() -> u64 {
    5_000
}

/// Mute duration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MuteConfig {
    /// Duration preselected when a mute is requested without one.
    #[serde(default = "default_mute_minutes")]
    pub default_minutes: u32,

    /// Local hour used by the "until tomorrow morning" mute.
    #[serde(default = "default_morning_hour")]
    pub morning_hour: u32,
}

impl Default for MuteConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_mute_minutes(),
            morning_hour: default_morning_hour(),
        }
    }
}

fn default_mute_minutes() -> u32 {
    30
}

fn default_morning_hour() -> u32 {
    9
}
