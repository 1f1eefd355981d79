// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-channel lifecycle: create, edit, toggle, mute, unmute, clone.
//!
//! Every operation goes through [`ChannelStore::try_update`], so identity is
//! preserved and the collection is replaced in one step.

use chrono::{DateTime, Utc};
use herald_core::{Channel, ChannelId, ChannelStatus, ChannelType, HeraldError, Label};
use tracing::info;

use crate::store::{ChannelStore, Mutation};

/// Message attached to a rejected save with a blank display name.
pub const DISPLAY_NAME_REQUIRED: &str = "Display name is required.";

/// Fields supplied when creating a channel (or produced by cloning one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelDraft {
    pub display_name: String,
    pub channel_type: ChannelType,
    pub enabled: bool,
    pub labels: Vec<Label>,
}

/// Editable fields of an existing channel.
///
/// Id, status, and mute expiry are not editable and survive the edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEdit {
    pub display_name: String,
    pub channel_type: ChannelType,
    pub enabled: bool,
    pub labels: Vec<Label>,
}

impl From<&Channel> for ChannelEdit {
    fn from(channel: &Channel) -> Self {
        Self {
            display_name: channel.display_name.clone(),
            channel_type: channel.channel_type,
            enabled: channel.enabled,
            labels: channel.labels.clone(),
        }
    }
}

/// Reject a display name that is empty once trimmed.
pub fn validate_display_name(name: &str) -> Result<(), HeraldError> {
    if name.trim().is_empty() {
        return Err(HeraldError::validation("display_name", DISPLAY_NAME_REQUIRED));
    }
    Ok(())
}

/// Drop labels whose key or value is blank.
pub fn sanitize_labels(labels: Vec<Label>) -> Vec<Label> {
    labels
        .into_iter()
        .filter(|l| !l.key.trim().is_empty() && !l.value.trim().is_empty())
        .collect()
}

impl ChannelStore {
    /// Create a channel from `draft` and put it at the front of the collection.
    ///
    /// New channels start `Pending` with no mute.
    pub fn create(&self, draft: ChannelDraft) -> Result<Channel, HeraldError> {
        validate_display_name(&draft.display_name)?;
        let channel = Channel {
            id: ChannelId::generate(),
            display_name: draft.display_name,
            channel_type: draft.channel_type,
            enabled: draft.enabled,
            status: ChannelStatus::Pending,
            labels: sanitize_labels(draft.labels),
            muted_until: None,
        };

        let created = self.update(|channels| {
            let mut next = Vec::with_capacity(channels.len() + 1);
            next.push(channel.clone());
            next.extend_from_slice(channels);
            Mutation::Commit {
                channels: next,
                value: channel,
            }
        });
        info!(id = %created.id, name = %created.display_name, "channel created");
        Ok(created)
    }

    /// Overwrite the editable fields of channel `id`.
    ///
    /// A blank display name rejects the whole edit before anything changes.
    pub fn edit(&self, id: &ChannelId, edit: ChannelEdit) -> Result<Channel, HeraldError> {
        validate_display_name(&edit.display_name)?;
        let labels = sanitize_labels(edit.labels);
        let updated = self.modify_one(id, |c| {
            c.display_name = edit.display_name;
            c.channel_type = edit.channel_type;
            c.enabled = edit.enabled;
            c.labels = labels;
        })?;
        info!(id = %id, "channel updated");
        Ok(updated)
    }

    /// Flip `enabled` on channel `id`, returning the new value.
    pub fn toggle(&self, id: &ChannelId) -> Result<bool, HeraldError> {
        let updated = self.modify_one(id, |c| c.enabled = !c.enabled)?;
        Ok(updated.enabled)
    }

    /// Mute channel `id` until `until`, replacing any existing mute.
    pub fn mute(&self, id: &ChannelId, until: DateTime<Utc>) -> Result<Channel, HeraldError> {
        let updated = self.modify_one(id, |c| c.muted_until = Some(until))?;
        info!(id = %id, until = %until, "channel muted");
        Ok(updated)
    }

    /// Remove any mute from channel `id`.
    pub fn unmute(&self, id: &ChannelId) -> Result<Channel, HeraldError> {
        let updated = self.modify_one(id, |c| c.muted_until = None)?;
        info!(id = %id, "channel unmuted");
        Ok(updated)
    }

    /// A creation draft copying channel `id`, named `"Copy of <name>"`.
    ///
    /// Nothing is created until the draft is passed to [`create`](Self::create).
    pub fn clone_draft(&self, id: &ChannelId) -> Result<ChannelDraft, HeraldError> {
        let source = self.get(id).ok_or_else(|| HeraldError::not_found(id))?;
        Ok(ChannelDraft {
            display_name: format!("Copy of {}", source.display_name),
            channel_type: source.channel_type,
            enabled: source.enabled,
            labels: source.labels,
        })
    }

    fn modify_one(
        &self,
        id: &ChannelId,
        f: impl FnOnce(&mut Channel),
    ) -> Result<Channel, HeraldError> {
        self.try_update(|channels| {
            let index = channels
                .iter()
                .position(|c| &c.id == id)
                .ok_or_else(|| HeraldError::not_found(id))?;
            let mut next = channels.to_vec();
            f(&mut next[index]);
            let value = next[index].clone();
            Ok(Mutation::Commit {
                channels: next,
                value,
            })
        })
    }
}
