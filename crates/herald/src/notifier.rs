// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Toasts rendered to stderr.

use std::io::IsTerminal;

use herald_core::{Notifier, Severity, Toast};

/// Whether stdout output should be colored.
pub fn use_color(plain: bool) -> bool {
    !plain && std::io::stdout().is_terminal()
}

/// Prints each toast on its own stderr line, prefixed by severity.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier {
    use_color: bool,
}

impl TerminalNotifier {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, toast: Toast) {
        eprintln!("{}", format_toast(&toast, self.use_color));
    }
}

fn format_toast(toast: &Toast, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        match toast.severity {
            Severity::Success => format!("{} {}", "✓".green(), toast.message),
            Severity::Error => format!("{} {}", "✗".red(), toast.message.red()),
        }
    } else {
        match toast.severity {
            Severity::Success => format!("[OK] {}", toast.message),
            Severity::Error => format!("[FAIL] {}", toast.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_toasts_carry_severity_tags() {
        assert_eq!(
            format_toast(&Toast::success("Channel unmuted."), false),
            "[OK] Channel unmuted."
        );
        assert_eq!(format_toast(&Toast::error("boom"), false), "[FAIL] boom");
    }

    #[test]
    fn plain_flag_disables_color() {
        assert!(!use_color(true));
    }
}
