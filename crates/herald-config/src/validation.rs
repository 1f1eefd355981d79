// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints serde cannot express: positive page sizes,
//! a sweep interval that will not spin, and a valid clock hour.

use crate::diagnostic::ConfigError;
use crate::model::HeraldConfig;

/// Smallest sweep interval accepted, in milliseconds.
pub const MIN_SWEEP_INTERVAL_MS: u64 = 10;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &HeraldConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.console.page_size == 0 {
        errors.push(ConfigError::Validation {
            message: "console.page_size must be at least 1".to_string(),
        });
    }

    let level = config.console.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "console.log_level `{}` is not one of {}",
                config.console.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.scheduler.sweep_interval_ms < MIN_SWEEP_INTERVAL_MS {
        errors.push(ConfigError::Validation {
            message: format!(
                "scheduler.sweep_interval_ms must be at least {MIN_SWEEP_INTERVAL_MS}, got {}",
                config.scheduler.sweep_interval_ms
            ),
        });
    }

    if config.mute.default_minutes == 0 {
        errors.push(ConfigError::Validation {
            message: "mute.default_minutes must be at least 1".to_string(),
        });
    }

    if config.mute.morning_hour > 23 {
        errors.push(ConfigError::Validation {
            message: format!(
                "mute.morning_hour must be between 0 and 23, got {}",
                config.mute.morning_hour
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
