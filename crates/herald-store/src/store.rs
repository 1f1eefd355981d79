// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The authoritative in-memory channel collection.
//!
//! Readers take lock-free snapshots through [`ArcSwap`]. Writers serialize on
//! a single lock, compute a whole new collection from the snapshot current at
//! the start of the write, and swap it in as one step. A reader therefore
//! always observes either the previous or the next version, never a mix, and a
//! sweep tick cannot interleave with a read-compute-write sequence.

use std::collections::HashSet;
use std::convert::Infallible;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use arc_swap::ArcSwap;
use herald_core::{Channel, ChannelId};
use tokio::sync::watch;
use tracing::debug;

use crate::bulk::{self, BulkOp};

/// Result of a write closure: either a replacement collection or no change.
#[derive(Debug)]
pub enum Mutation<T> {
    /// Swap in `channels` and hand `value` back to the caller.
    Commit { channels: Vec<Channel>, value: T },
    /// Leave the collection (and its revision) untouched.
    Unchanged(T),
}

/// Owner of the channel collection.
///
/// Every committed change bumps a revision number that dependents can
/// observe through [`ChannelStore::subscribe`].
pub struct ChannelStore {
    current: ArcSwap<Vec<Channel>>,
    writer: Mutex<()>,
    revision: watch::Sender<u64>,
}

impl ChannelStore {
    /// Create a store seeded with `channels` at revision 0.
    pub fn new(channels: Vec<Channel>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            current: ArcSwap::from_pointee(channels),
            writer: Mutex::new(()),
            revision,
        }
    }

    /// The current collection. Cheap: clones an `Arc`, not the channels.
    pub fn snapshot(&self) -> Arc<Vec<Channel>> {
        self.current.load_full()
    }

    /// Look up one channel by id in the current snapshot.
    pub fn get(&self, id: &ChannelId) -> Option<Channel> {
        self.current.load().iter().find(|c| &c.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }

    /// Revision of the collection currently published.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Subscribe to revision changes. The receiver sees the latest revision.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Replace the whole collection.
    pub fn replace(&self, channels: Vec<Channel>) {
        let _guard = self.lock_writer();
        self.commit(channels);
    }

    /// Compute a change against the current snapshot and commit it atomically.
    pub fn update<T>(&self, f: impl FnOnce(&[Channel]) -> Mutation<T>) -> T {
        match self.try_update(|channels| Ok::<_, Infallible>(f(channels))) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Like [`update`](Self::update), but the closure may reject the change.
    ///
    /// On `Err` nothing is committed.
    pub fn try_update<T, E>(
        &self,
        f: impl FnOnce(&[Channel]) -> Result<Mutation<T>, E>,
    ) -> Result<T, E> {
        let _guard = self.lock_writer();
        let snapshot = self.current.load_full();
        match f(&snapshot)? {
            Mutation::Commit { channels, value } => {
                self.commit(channels);
                Ok(value)
            }
            Mutation::Unchanged(value) => Ok(value),
        }
    }

    /// Apply a bulk operation to every channel whose id is in `ids`.
    ///
    /// Returns how many channels the operation touched. An empty id set, or
    /// one that matches nothing, commits nothing.
    pub fn apply_bulk(&self, ids: &HashSet<ChannelId>, op: BulkOp) -> usize {
        self.update(|channels| {
            let affected = bulk::affected(channels, ids);
            if affected == 0 {
                return Mutation::Unchanged(0);
            }
            Mutation::Commit {
                channels: bulk::apply(channels, ids, op),
                value: affected,
            }
        })
    }

    fn commit(&self, channels: Vec<Channel>) {
        let len = channels.len();
        self.current.store(Arc::new(channels));
        self.revision.send_modify(|rev| *rev += 1);
        debug!(revision = self.revision(), channels = len, "channel collection replaced");
    }

    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ChannelStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl std::fmt::Debug for ChannelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelStore")
            .field("channels", &self.len())
            .field("revision", &self.revision())
            .finish()
    }
}
