// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent service with scripted replies.
//!
//! Replies are popped from a FIFO queue. When the queue is empty the source
//! fails, which exercises the console's error path.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use herald_core::{HeraldError, IntentSource};
use tokio::sync::{Mutex, Semaphore};

pub struct ScriptedIntentSource {
    replies: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedIntentSource {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Pre-load successful raw replies.
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| Ok(r.into())).collect()),
            ..Self::new()
        }
    }

    /// Hold every reply until [`release`](Self::release) is called.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    /// Let `n` held replies through.
    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    pub async fn push_reply(&self, raw: impl Into<String>) {
        self.replies.lock().await.push_back(Ok(raw.into()));
    }

    /// Queue a service failure.
    pub async fn push_failure(&self, message: impl Into<String>) {
        self.replies.lock().await.push_back(Err(message.into()));
    }

    /// Every prompt received so far.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

impl Default for ScriptedIntentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IntentSource for ScriptedIntentSource {
    async fn resolve(&self, prompt: &str) -> Result<String, HeraldError> {
        self.prompts.lock().await.push(prompt.to_string());
        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|e| HeraldError::Internal(e.to_string()))?;
            permit.forget();
        }
        match self.replies.lock().await.pop_front() {
            Some(Ok(raw)) => Ok(raw),
            Some(Err(message)) => Err(HeraldError::IntentSource {
                message,
                source: None,
            }),
            None => Err(HeraldError::IntentSource {
                message: "no scripted reply left".into(),
                source: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_in_order_then_fails() {
        let source = ScriptedIntentSource::with_replies(["one", "two"]);
        assert_eq!(source.resolve("a").await.unwrap(), "one");
        assert_eq!(source.resolve("b").await.unwrap(), "two");
        assert!(source.resolve("c").await.is_err());
        assert_eq!(source.prompts().await, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn queued_failure_is_an_intent_source_error() {
        let source = ScriptedIntentSource::new();
        source.push_failure("quota exceeded").await;
        let err = source.resolve("x").await.unwrap_err();
        assert!(matches!(
            err,
            HeraldError::IntentSource { message, .. } if message == "quota exceeded"
        ));
    }
}
