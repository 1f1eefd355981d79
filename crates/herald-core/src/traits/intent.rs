// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Natural-language intent service (text in, structured JSON out).

use async_trait::async_trait;

use crate::error::HeraldError;

/// Translates a free-text request into the raw JSON text of an intent.
///
/// Implementations own the model, prompt, and transport. The returned text is
/// parsed leniently by the command layer, so a malformed payload is not an
/// error at this seam; only transport or service failures are.
#[async_trait]
pub trait IntentSource: Send + Sync {
    /// Resolve `prompt` into the raw intent payload.
    async fn resolve(&self, prompt: &str) -> Result<String, HeraldError>;
}
