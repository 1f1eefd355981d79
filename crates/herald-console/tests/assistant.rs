// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assistant boundary: prompt in, effect applied, reply out.

use std::sync::Arc;

use herald_command::FALLBACK_MESSAGE;
use herald_console::{ASSISTANT_ERROR_REPLY, ASSISTANT_ERROR_TOAST, DeleteDecision};
use herald_core::{ChannelStatus, ChannelType, HeraldError, Severity};
use herald_test_utils::{ConsoleHarness, ScriptedIntentSource};

fn harness_with(replies: &[&str]) -> ConsoleHarness {
    ConsoleHarness::builder()
        .with_intent_source(ScriptedIntentSource::with_replies(replies.iter().copied()))
        .build()
}

#[tokio::test]
async fn disable_intent_applies_to_matching_channels() {
    let h = harness_with(&[
        r#"{"action":"DISABLE","target":{"type":"Slack","status":"Error"},"confirmationMessage":"Disabled the failing Slack channel."}"#,
    ]);
    let reply = h
        .console
        .submit_prompt("disable the slack channel with an error")
        .await
        .unwrap();

    assert_eq!(reply.text, "Disabled the failing Slack channel.");
    assert!(!reply.failed);
    assert!(!h.channel("7").unwrap().enabled);
    assert!(h.channel("2").unwrap().enabled, "healthy Slack channel untouched");
}

#[tokio::test]
async fn filter_intent_rewrites_view_state() {
    let h = harness_with(&[
        r#"```json
{"action":"FILTER","target":{"status":"Error"},"confirmationMessage":"Here are all the channels with an error status."}
```"#,
    ]);
    h.console.set_search_term("something else");
    h.console.submit_prompt("show me errors").await.unwrap();

    let query = h.console.query();
    assert!(query.search_term.is_empty());
    assert_eq!(query.filters.status, Some(ChannelStatus::Error));
    assert!(!query.filters.muted_only);
    let view = h.console.current_view();
    assert_eq!(view.all_matching.len(), 1);
    assert_eq!(view.all_matching[0].channel_type, ChannelType::Slack);
    assert_eq!(h.store.revision(), 0, "filtering never mutates");
}

#[tokio::test]
async fn delete_intent_is_staged_until_confirmed() {
    let h = harness_with(&[
        r#"{"action":"DELETE","target":{"label":{"key":"team","value":"marketing"}},"confirmationMessage":"Deleting the marketing channel."}"#,
    ]);
    h.console.submit_prompt("delete the marketing channel").await.unwrap();

    let pending = h.console.pending_delete().expect("staged");
    assert_eq!(pending.channels.len(), 1);
    assert!(h.channel("6").is_some());

    h.console.resolve_delete(DeleteDecision::Confirm).unwrap();
    assert!(h.channel("6").is_none());
}

#[tokio::test]
async fn delete_with_no_match_stages_nothing() {
    let h = harness_with(&[
        r#"{"action":"DELETE","target":{"displayName":"nonexistent"},"confirmationMessage":"Done."}"#,
    ]);
    let reply = h.console.submit_prompt("delete nonexistent").await.unwrap();
    assert_eq!(reply.text, "Done.");
    assert!(h.console.pending_delete().is_none());
}

#[tokio::test]
async fn malformed_reply_becomes_unknown() {
    let h = harness_with(&["{}"]);
    let reply = h.console.submit_prompt("???").await.unwrap();
    assert_eq!(reply.text, FALLBACK_MESSAGE);
    assert!(!reply.failed);
    assert_eq!(h.store.revision(), 0);
    assert_eq!(h.notifier.count(), 0);
}

#[tokio::test]
async fn array_reply_mutates_nothing() {
    let h = harness_with(&[r#"["DELETE", {}, "Deleting everything."]"#]);
    let reply = h.console.submit_prompt("delete everything").await.unwrap();
    assert_eq!(reply.text, FALLBACK_MESSAGE);
    assert!(h.console.pending_delete().is_none());
    assert_eq!(h.store.len(), 7);
    assert_eq!(h.store.revision(), 0);
}

#[tokio::test]
async fn service_failure_toasts_and_apologizes() {
    let h = harness_with(&[]);
    let reply = h.console.submit_prompt("enable everything").await.unwrap();

    assert!(reply.failed);
    assert_eq!(reply.text, ASSISTANT_ERROR_REPLY);
    let toast = h.notifier.last().unwrap();
    assert_eq!(toast.message, ASSISTANT_ERROR_TOAST);
    assert_eq!(toast.severity, Severity::Error);
    assert_eq!(h.store.revision(), 0);
    assert!(!h.console.command_in_flight());
}

#[tokio::test]
async fn second_prompt_is_rejected_while_one_is_in_flight() {
    let h = ConsoleHarness::builder()
        .with_intent_source(
            ScriptedIntentSource::with_replies([
                r#"{"action":"ENABLE","target":{"type":"Webhook"},"confirmationMessage":"Enabled."}"#,
            ])
            .gated(),
        )
        .build();

    let console = Arc::clone(&h.console);
    let first = tokio::spawn(async move { console.submit_prompt("enable webhooks").await });

    while !h.console.command_in_flight() {
        tokio::task::yield_now().await;
    }
    let second = h.console.submit_prompt("again").await;
    assert!(matches!(second, Err(HeraldError::InFlight { .. })));

    h.intents.release(1);
    let reply = first.await.unwrap().unwrap();
    assert_eq!(reply.text, "Enabled.");
    assert!(h.channel("4").unwrap().enabled);
    assert!(!h.console.command_in_flight());
}
