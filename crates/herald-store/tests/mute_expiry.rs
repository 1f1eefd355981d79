// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mute expiry through the background scheduler, and sweep/bulk properties.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use herald_core::{ChannelId, ChannelStatus, ChannelType};
use herald_store::bulk::{self, BulkOp, retain_surviving};
use herald_store::{ChannelStore, MuteScheduler, sweep_expired};
use herald_test_utils::fixtures::channel;
use herald_test_utils::strategies::arb_collection;
use proptest::prelude::*;

#[tokio::test]
async fn near_expired_mute_is_cleared_by_the_scheduler() {
    let mut muted = channel("1", "Production Alerts", ChannelType::PagerDuty, ChannelStatus::Ok);
    muted.muted_until = Some(Utc::now() + chrono::Duration::milliseconds(1));
    let store = Arc::new(ChannelStore::new(vec![muted]));
    let mut rx = store.subscribe();

    let mut scheduler = MuteScheduler::new(Arc::clone(&store), Duration::from_millis(20));
    scheduler.start();

    tokio::time::timeout(Duration::from_secs(2), rx.changed())
        .await
        .expect("sweep committed within the timeout")
        .expect("store alive");
    scheduler.stop().await;

    let c = store.get(&ChannelId::from("1")).unwrap();
    assert!(c.muted_until.is_none());
    assert!(!c.is_muted(Utc::now()));
}

#[tokio::test]
async fn live_mutes_survive_ticks() {
    let mut muted = channel("1", "Marketing", ChannelType::Email, ChannelStatus::Ok);
    muted.muted_until = Some(Utc::now() + chrono::Duration::hours(1));
    let store = Arc::new(ChannelStore::new(vec![muted]));

    let mut scheduler = MuteScheduler::new(Arc::clone(&store), Duration::from_millis(10));
    scheduler.start();
    tokio::time::sleep(Duration::from_millis(60)).await;
    scheduler.stop().await;

    assert_eq!(store.revision(), 0, "no-op sweeps never commit");
    assert!(store.get(&ChannelId::from("1")).unwrap().muted_until.is_some());
}

#[tokio::test]
async fn dropping_the_scheduler_stops_sweeping() {
    let store = Arc::new(ChannelStore::default());
    let mut scheduler = MuteScheduler::new(Arc::clone(&store), Duration::from_millis(10));
    scheduler.start();
    drop(scheduler);
    assert_eq!(
        Arc::strong_count(&store),
        2,
        "task still holds the store until it observes cancellation"
    );
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(Arc::strong_count(&store), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn sweep_leaves_no_expired_mute(collection in arb_collection(0..25)) {
        let now = Utc::now();
        let store = ChannelStore::new(collection.clone());
        let cleared = sweep_expired(&store, now);

        let snapshot = store.snapshot();
        prop_assert!(snapshot.iter().all(|c| !c.mute_expired(now)));
        prop_assert_eq!(cleared, collection.iter().filter(|c| c.mute_expired(now)).count());
        for (before, after) in collection.iter().zip(snapshot.iter()) {
            if !before.mute_expired(now) {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn bulk_delete_removes_exactly_the_targets(
        collection in arb_collection(0..25),
        picks in prop::collection::vec(any::<bool>(), 25),
        extra_selected in prop::collection::vec(any::<bool>(), 25),
    ) {
        let targets: HashSet<ChannelId> = collection
            .iter()
            .zip(&picks)
            .filter(|(_, pick)| **pick)
            .map(|(c, _)| c.id.clone())
            .collect();
        let mut selection: HashSet<ChannelId> = collection
            .iter()
            .zip(&extra_selected)
            .filter(|(_, pick)| **pick)
            .map(|(c, _)| c.id.clone())
            .collect();

        let next = bulk::apply(&collection, &targets, BulkOp::Delete);
        retain_surviving(&mut selection, &next);

        prop_assert_eq!(next.len(), collection.len() - targets.len());
        prop_assert!(next.iter().all(|c| !targets.contains(&c.id)));
        let survivors: Vec<_> = collection
            .iter()
            .filter(|c| !targets.contains(&c.id))
            .cloned()
            .collect();
        prop_assert_eq!(&next, &survivors);
        prop_assert!(selection.iter().all(|id| !targets.contains(id)));
    }
}
