// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bulk enable/disable/delete over a set of channel ids.

use std::collections::HashSet;

use herald_core::{Channel, ChannelId};

/// Operation applied to every selected channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BulkOp {
    Enable,
    Disable,
    Delete,
}

impl BulkOp {
    /// Past-tense verb used in notifications ("3 channels disabled.").
    pub fn past_tense(&self) -> &'static str {
        match self {
            BulkOp::Enable => "enabled",
            BulkOp::Disable => "disabled",
            BulkOp::Delete => "deleted",
        }
    }
}

/// New collection with `op` applied to every channel whose id is in `ids`.
///
/// Channels outside the set are cloned unchanged; an empty set yields an
/// equal collection.
pub fn apply(collection: &[Channel], ids: &HashSet<ChannelId>, op: BulkOp) -> Vec<Channel> {
    match op {
        BulkOp::Delete => collection
            .iter()
            .filter(|c| !ids.contains(&c.id))
            .cloned()
            .collect(),
        BulkOp::Enable | BulkOp::Disable => {
            let enabled = op == BulkOp::Enable;
            collection
                .iter()
                .map(|c| {
                    if ids.contains(&c.id) {
                        Channel {
                            enabled,
                            ..c.clone()
                        }
                    } else {
                        c.clone()
                    }
                })
                .collect()
        }
    }
}

/// Number of channels in `collection` whose id is in `ids`.
pub fn affected(collection: &[Channel], ids: &HashSet<ChannelId>) -> usize {
    if ids.is_empty() {
        return 0;
    }
    collection.iter().filter(|c| ids.contains(&c.id)).count()
}

/// Drop every selected id that no longer exists in `collection`.
pub fn retain_surviving(selection: &mut HashSet<ChannelId>, collection: &[Channel]) {
    let surviving: HashSet<&ChannelId> = collection.iter().map(|c| &c.id).collect();
    selection.retain(|id| surviving.contains(id));
}

#[cfg(test)]
mod tests {
    use herald_core::{ChannelStatus, ChannelType};
    use herald_test_utils::fixtures::{channel, sample_channels};

    use super::*;

    fn ids(raw: &[&str]) -> HashSet<ChannelId> {
        raw.iter().map(|s| ChannelId::from(*s)).collect()
    }

    #[test]
    fn disable_touches_only_selected() {
        let collection = vec![
            channel("1", "Production Alerts", ChannelType::PagerDuty, ChannelStatus::Ok),
            channel("2", "Dev Team On-Call", ChannelType::Slack, ChannelStatus::Error),
        ];
        let next = apply(&collection, &ids(&["1"]), BulkOp::Disable);
        assert!(!next[0].enabled);
        assert_eq!(next[1], collection[1]);
    }

    #[test]
    fn enable_sets_flag_on_disabled_channels() {
        let mut collection = sample_channels(chrono::Utc::now());
        for c in &mut collection {
            c.enabled = false;
        }
        let next = apply(&collection, &ids(&["2", "3"]), BulkOp::Enable);
        let enabled: Vec<&str> = next
            .iter()
            .filter(|c| c.enabled)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(enabled, vec!["2", "3"]);
    }

    #[test]
    fn delete_removes_exactly_the_targets() {
        let collection = sample_channels(chrono::Utc::now());
        let next = apply(&collection, &ids(&["1", "4", "nope"]), BulkOp::Delete);
        assert_eq!(next.len(), collection.len() - 2);
        for c in &next {
            let original = collection.iter().find(|o| o.id == c.id).unwrap();
            assert_eq!(c, original, "survivors must be unchanged");
        }
    }

    #[test]
    fn empty_id_set_returns_equal_collection() {
        let collection = sample_channels(chrono::Utc::now());
        for op in [BulkOp::Enable, BulkOp::Disable, BulkOp::Delete] {
            assert_eq!(apply(&collection, &HashSet::new(), op), collection);
        }
        assert_eq!(affected(&collection, &HashSet::new()), 0);
    }

    #[test]
    fn selection_loses_deleted_ids() {
        let collection = sample_channels(chrono::Utc::now());
        let mut selection = ids(&["1", "2", "3"]);
        let next = apply(&collection, &ids(&["2"]), BulkOp::Delete);
        retain_surviving(&mut selection, &next);
        assert_eq!(selection, ids(&["1", "3"]));
    }

    #[test]
    fn past_tense_matches_notification_wording() {
        assert_eq!(BulkOp::Enable.past_tense(), "enabled");
        assert_eq!(BulkOp::Delete.to_string(), "delete");
    }
}
