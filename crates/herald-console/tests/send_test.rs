// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test sends: one toast per send, and no overlapping sends per channel.

use std::sync::Arc;

use herald_console::SendOutcome;
use herald_core::{ChannelId, HeraldError, Severity};
use herald_test_utils::{ConsoleHarness, MockTestSender};

#[tokio::test]
async fn successful_send_emits_one_success_toast() {
    let h = ConsoleHarness::sample();
    let outcome = h.console.send_test(&ChannelId::from("1")).await.unwrap();

    assert_eq!(outcome, SendOutcome::Delivered);
    assert_eq!(h.notifier.count(), 1);
    assert_eq!(
        h.notifier.last().map(|t| t.message),
        Some("Test notification sent successfully to \"Production Alerts\".".to_string())
    );
}

#[tokio::test]
async fn failed_send_emits_one_error_toast() {
    let h = ConsoleHarness::sample();
    h.sender.fail_for("7").await;
    let outcome = h.console.send_test(&ChannelId::from("7")).await.unwrap();

    assert_eq!(outcome, SendOutcome::Failed);
    let toasts = h.notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].severity, Severity::Error);
    assert_eq!(toasts[0].message, "Failed to send test notification to \"Data Science Slack\".");
    assert!(!h.console.is_sending(&ChannelId::from("7")));
}

#[tokio::test]
async fn overlapping_send_for_same_channel_is_rejected() {
    let h = ConsoleHarness::builder()
        .with_test_sender(MockTestSender::new().gated())
        .build();
    let id = ChannelId::from("2");

    let console = Arc::clone(&h.console);
    let task_id = id.clone();
    let first = tokio::spawn(async move { console.send_test(&task_id).await });

    h.sender.wait_entered().await;
    assert!(h.console.is_sending(&id));
    let second = h.console.send_test(&id).await;
    assert!(matches!(second, Err(HeraldError::InFlight { target }) if target == "2"));

    h.sender.release(1);
    assert_eq!(first.await.unwrap().unwrap(), SendOutcome::Delivered);
    assert!(!h.console.is_sending(&id));
    assert_eq!(h.notifier.count(), 1, "the rejected call emits nothing");
}

#[tokio::test]
async fn different_channels_can_send_concurrently() {
    let h = ConsoleHarness::builder()
        .with_test_sender(MockTestSender::new().gated())
        .build();
    let first = ChannelId::from("1");
    let second = ChannelId::from("3");

    let sends = async {
        tokio::join!(h.console.send_test(&first), h.console.send_test(&second))
    };
    let release = async {
        while !(h.console.is_sending(&first) && h.console.is_sending(&second)) {
            tokio::task::yield_now().await;
        }
        h.sender.release(2);
    };
    let ((a, b), ()) = tokio::join!(sends, release);
    assert_eq!(a.unwrap(), SendOutcome::Delivered);
    assert_eq!(b.unwrap(), SendOutcome::Delivered);
    assert_eq!(h.notifier.count(), 2);
}

#[tokio::test]
async fn unknown_channel_is_not_found() {
    let h = ConsoleHarness::sample();
    let err = h.console.send_test(&ChannelId::from("missing")).await.unwrap_err();
    assert!(matches!(err, HeraldError::ChannelNotFound { .. }));
    assert!(h.sender.sent().await.is_empty());
}
