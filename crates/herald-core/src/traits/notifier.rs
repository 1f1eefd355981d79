// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fire-and-forget sink for user-facing notifications.

use crate::types::Toast;

/// Receives toasts emitted after mutations. Nothing is returned to the engine.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// A notifier that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _toast: Toast) {}
}
