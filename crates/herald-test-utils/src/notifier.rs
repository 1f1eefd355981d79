// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notifier that records every toast.

use std::sync::{Mutex, PoisonError};

use herald_core::{Notifier, Severity, Toast};

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every toast received so far, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.toasts().into_iter().map(|t| t.message).collect()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts().pop()
    }

    pub fn count(&self) -> usize {
        self.toasts().len()
    }

    pub fn error_count(&self) -> usize {
        self.toasts()
            .iter()
            .filter(|t| t.severity == Severity::Error)
            .count()
    }

    pub fn clear(&self) {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Toast::success("first"));
        notifier.notify(Toast::error("second"));
        assert_eq!(notifier.messages(), vec!["first", "second"]);
        assert_eq!(notifier.error_count(), 1);
        assert_eq!(notifier.last().map(|t| t.severity), Some(Severity::Error));

        notifier.clear();
        assert_eq!(notifier.count(), 0);
    }
}
