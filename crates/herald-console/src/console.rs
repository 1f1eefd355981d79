// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The console: one method per user event.
//!
//! View state lives behind a `std::sync::Mutex` that is never held across an
//! `.await`. After every mutation and every query-state change the current
//! page is clamped against the fresh view, so a page that emptied out falls
//! back to the last non-empty one.

use std::collections::HashSet;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local, Utc};
use herald_core::traits::IntentSource;
use herald_core::{
    Channel, ChannelId, FilterState, HeraldError, Notifier, SortConfig, SortKey, TestSender, Toast,
};
use herald_query::{Query, StatShortcut, Stats, View, summarize, view};
use herald_store::{
    BulkOp, ChannelDraft, ChannelEdit, ChannelStore, MuteDuration, bulk::retain_surviving,
};
use tracing::{debug, info};

use crate::delete::{DeleteDecision, DeleteRequest, deleted_message};
use crate::settings::ConsoleSettings;
use crate::state::{FilterPatch, ViewState};

/// Controller over one [`ChannelStore`].
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
pub struct Console {
    pub(crate) store: Arc<ChannelStore>,
    pub(crate) settings: ConsoleSettings,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) sender: Option<Arc<dyn TestSender>>,
    pub(crate) intents: Option<Arc<dyn IntentSource>>,
    pub(crate) state: Mutex<ViewState>,
    pub(crate) sending: Mutex<HashSet<ChannelId>>,
    pub(crate) command_in_flight: AtomicBool,
}

impl Console {
    pub fn new(
        store: Arc<ChannelStore>,
        settings: ConsoleSettings,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            settings,
            notifier,
            sender: None,
            intents: None,
            state: Mutex::new(ViewState::default()),
            sending: Mutex::new(HashSet::new()),
            command_in_flight: AtomicBool::new(false),
        }
    }

    /// Attach the transport used by [`send_test`](Self::send_test).
    pub fn with_test_sender(mut self, sender: Arc<dyn TestSender>) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Attach the natural-language service used by
    /// [`submit_prompt`](Self::submit_prompt).
    pub fn with_intent_source(mut self, intents: Arc<dyn IntentSource>) -> Self {
        self.intents = Some(intents);
        self
    }

    pub fn store(&self) -> &Arc<ChannelStore> {
        &self.store
    }

    pub fn settings(&self) -> ConsoleSettings {
        self.settings
    }

    // --- query state ---

    pub fn query(&self) -> Query {
        self.lock_state().query.clone()
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        let mut state = self.lock_state();
        state.query.search_term = term.into();
        state.query.page = 1;
    }

    pub fn set_filters(&self, patch: FilterPatch) {
        let mut state = self.lock_state();
        state.query.filters = patch.merge_into(state.query.filters);
        state.query.page = 1;
    }

    /// Reset the search term and every filter.
    pub fn clear_filters(&self) {
        let mut state = self.lock_state();
        state.query.search_term.clear();
        state.query.filters = FilterState::default();
        state.query.page = 1;
    }

    /// Select a sort column. Re-selecting the active column flips direction.
    pub fn sort_by(&self, key: SortKey) -> SortConfig {
        let mut state = self.lock_state();
        state.query.sort = state.query.sort.toggled(key);
        state.query.sort
    }

    /// Move to `page`, clamped to the pages that exist. Returns the page shown.
    pub fn go_to_page(&self, page: usize) -> usize {
        self.lock_state().query.page = page;
        self.current_view().page
    }

    pub fn apply_stat_shortcut(&self, shortcut: StatShortcut) -> FilterState {
        let mut state = self.lock_state();
        state.query.filters = shortcut.apply(state.query.filters);
        state.query.page = 1;
        state.query.filters
    }

    /// Recompute the view against the latest snapshot, clamping the page.
    pub fn current_view(&self) -> View {
        self.current_view_at(Utc::now())
    }

    pub fn current_view_at(&self, now: DateTime<Utc>) -> View {
        let snapshot = self.store.snapshot();
        let mut state = self.lock_state();
        let computed = view(&snapshot, &state.query, self.settings.page_size, now);
        if computed.page != state.query.page {
            debug!(from = state.query.page, to = computed.page, "page clamped");
            state.query.page = computed.page;
        }
        computed
    }

    /// Summary counts over the filtered, unpaginated view.
    pub fn stats(&self) -> Stats {
        let now = Utc::now();
        summarize(&self.current_view_at(now).all_matching, now)
    }

    // --- selection ---

    pub fn select(&self, id: &ChannelId, selected: bool) {
        let mut state = self.lock_state();
        if selected {
            state.selection.insert(id.clone());
        } else {
            state.selection.remove(id);
        }
    }

    /// Select every channel of the filtered view, or clear the selection.
    pub fn select_all(&self, selected: bool) {
        let ids: HashSet<ChannelId> = if selected {
            self.current_view()
                .all_matching
                .into_iter()
                .map(|c| c.id)
                .collect()
        } else {
            HashSet::new()
        };
        self.lock_state().selection = ids;
    }

    pub fn clear_selection(&self) {
        self.lock_state().selection.clear();
    }

    pub fn selection(&self) -> HashSet<ChannelId> {
        self.lock_state().selection.clone()
    }

    // --- lifecycle ---

    pub fn create_channel(&self, draft: ChannelDraft) -> Result<Channel, HeraldError> {
        let created = self.store.create(draft)?;
        self.notify(Toast::success("Notification channel created successfully."));
        self.refresh();
        Ok(created)
    }

    pub fn update_channel(
        &self,
        id: &ChannelId,
        edit: ChannelEdit,
    ) -> Result<Channel, HeraldError> {
        let updated = self.store.edit(id, edit)?;
        self.notify(Toast::success("Notification channel updated successfully."));
        self.refresh();
        Ok(updated)
    }

    pub fn toggle_channel(&self, id: &ChannelId) -> Result<bool, HeraldError> {
        let enabled = self.store.toggle(id)?;
        self.refresh();
        Ok(enabled)
    }

    /// Mute `id` for `duration`, or for the configured default when `None`.
    pub fn mute_channel(
        &self,
        id: &ChannelId,
        duration: Option<MuteDuration>,
    ) -> Result<Channel, HeraldError> {
        self.mute_channel_at(id, duration, Local::now())
    }

    /// [`mute_channel`](Self::mute_channel) with an explicit local "now".
    pub fn mute_channel_at(
        &self,
        id: &ChannelId,
        duration: Option<MuteDuration>,
        now: DateTime<Local>,
    ) -> Result<Channel, HeraldError> {
        let duration = duration.unwrap_or(self.settings.default_mute);
        let until = duration.expires_at(&now, self.settings.morning_hour)?;
        let muted = self.store.mute(id, until)?;
        self.notify(Toast::success(format!(
            "Channel \"{}\" muted.",
            muted.display_name
        )));
        self.refresh();
        Ok(muted)
    }

    pub fn unmute_channel(&self, id: &ChannelId) -> Result<Channel, HeraldError> {
        let unmuted = self.store.unmute(id)?;
        self.notify(Toast::success("Channel unmuted."));
        self.refresh();
        Ok(unmuted)
    }

    /// A "Copy of ..." draft to be completed and passed to
    /// [`create_channel`](Self::create_channel).
    pub fn clone_channel(&self, id: &ChannelId) -> Result<ChannelDraft, HeraldError> {
        self.store.clone_draft(id)
    }

    // --- bulk ---

    pub fn bulk_enable(&self) -> usize {
        self.bulk_toggle(BulkOp::Enable)
    }

    pub fn bulk_disable(&self) -> usize {
        self.bulk_toggle(BulkOp::Disable)
    }

    fn bulk_toggle(&self, op: BulkOp) -> usize {
        let selection = self.selection();
        if selection.is_empty() {
            return 0;
        }
        let affected = self.store.apply_bulk(&selection, op);
        info!(%op, affected, "bulk action applied");
        self.notify(Toast::success(format!(
            "{affected} channels {}.",
            op.past_tense()
        )));
        self.clear_selection();
        self.refresh();
        affected
    }

    /// Stage the selected channels for deletion.
    pub fn bulk_delete(&self) -> Option<DeleteRequest> {
        let selection = self.selection();
        let snapshot = self.store.snapshot();
        let channels: Vec<Channel> = snapshot
            .iter()
            .filter(|c| selection.contains(&c.id))
            .cloned()
            .collect();
        if channels.is_empty() {
            return None;
        }
        Some(self.stage_delete(DeleteRequest { channels }))
    }

    // --- deletion ---

    /// Stage `ids` for deletion. Unknown ids are skipped; staging nothing is
    /// an error.
    pub fn request_delete(&self, ids: &[ChannelId]) -> Result<DeleteRequest, HeraldError> {
        let snapshot = self.store.snapshot();
        let channels: Vec<Channel> = snapshot
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect();
        if channels.is_empty() {
            let missing = ids
                .first()
                .map(ChannelId::to_string)
                .unwrap_or_default();
            return Err(HeraldError::not_found(missing));
        }
        Ok(self.stage_delete(DeleteRequest { channels }))
    }

    pub fn pending_delete(&self) -> Option<DeleteRequest> {
        self.lock_state().pending_delete.clone()
    }

    /// Act on the staged deletion. Returns how many channels were removed.
    pub fn resolve_delete(&self, decision: DeleteDecision) -> Result<usize, HeraldError> {
        let request = self
            .lock_state()
            .pending_delete
            .take()
            .ok_or(HeraldError::NoPendingDelete)?;

        if decision == DeleteDecision::Cancel {
            debug!(channels = request.len(), "deletion cancelled");
            return Ok(0);
        }

        let deleted = self.store.apply_bulk(&request.ids(), BulkOp::Delete);
        let snapshot = self.store.snapshot();
        retain_surviving(&mut self.lock_state().selection, &snapshot);
        if deleted > 0 {
            info!(deleted, "channels deleted");
            self.notify(Toast::success(deleted_message(deleted)));
        }
        self.refresh();
        Ok(deleted)
    }

    pub(crate) fn stage_delete(&self, request: DeleteRequest) -> DeleteRequest {
        debug!(channels = request.len(), "deletion staged");
        self.lock_state().pending_delete = Some(request.clone());
        request
    }

    // --- internals ---

    pub(crate) fn notify(&self, toast: Toast) {
        self.notifier.notify(toast);
    }

    /// Re-clamp the current page against the latest collection.
    pub(crate) fn refresh(&self) {
        self.current_view();
    }

    pub(crate) fn lock_state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("store", &self.store)
            .field("settings", &self.settings)
            .field("has_sender", &self.sender.is_some())
            .field("has_intent_source", &self.intents.is_some())
            .finish()
    }
}
