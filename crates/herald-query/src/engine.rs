// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The view pipeline: search, filter, sort, paginate.
//!
//! Every function here is pure. Given the same collection, query, and `now`,
//! [`view`] always yields the same result.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use herald_core::{Channel, FilterState, SortConfig, SortDirection, SortKey};
use serde::Serialize;

/// Everything that shapes a view besides the collection itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub search_term: String,
    pub filters: FilterState,
    pub sort: SortConfig,
    /// 1-based page index requested by the caller.
    pub page: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filters: FilterState::default(),
            sort: SortConfig::default(),
            page: 1,
        }
    }
}

/// One computed page plus the full ordered match list it was cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub page_items: Vec<Channel>,
    pub all_matching: Vec<Channel>,
    /// The page actually shown, after clamping.
    pub page: usize,
    pub total_pages: usize,
}

/// Compute the visible page of `collection` for `query`.
///
/// The requested page is clamped into `1..=total_pages`, so a page that
/// emptied out after a mutation falls back to the last non-empty one.
pub fn view(collection: &[Channel], query: &Query, page_size: usize, now: DateTime<Utc>) -> View {
    let mut all_matching = filter_channels(collection, &query.search_term, &query.filters, now);
    sort_channels(&mut all_matching, query.sort);

    let total = total_pages(all_matching.len(), page_size);
    let page = clamp_page(query.page, total);
    let page_items = paginate(&all_matching, page, page_size).to_vec();

    View {
        page_items,
        all_matching,
        page,
        total_pages: total,
    }
}

/// Case-insensitive substring match on display name, type name, or any
/// `key:value` label. An empty term matches everything.
pub fn matches_search(channel: &Channel, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    channel.display_name.to_lowercase().contains(&needle)
        || channel.channel_type.as_str().to_lowercase().contains(&needle)
        || channel
            .labels
            .iter()
            .any(|l| l.to_string().to_lowercase().contains(&needle))
}

pub fn matches_filters(channel: &Channel, filters: &FilterState, now: DateTime<Utc>) -> bool {
    if filters.channel_type.is_some_and(|t| t != channel.channel_type) {
        return false;
    }
    if filters.status.is_some_and(|s| s != channel.status) {
        return false;
    }
    !filters.muted_only || channel.is_muted(now)
}

/// Channels matching both the search term and the filters, in collection order.
pub fn filter_channels(
    collection: &[Channel],
    term: &str,
    filters: &FilterState,
    now: DateTime<Utc>,
) -> Vec<Channel> {
    collection
        .iter()
        .filter(|c| matches_search(c, term) && matches_filters(c, filters, now))
        .cloned()
        .collect()
}

/// Stable sort by the configured key and direction.
///
/// Type and status compare by their wire names. Ties keep their relative
/// order in both directions.
pub fn sort_channels(channels: &mut [Channel], sort: SortConfig) {
    channels.sort_by(|a, b| {
        let ord = compare_by_key(a, b, sort.key);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

fn compare_by_key(a: &Channel, b: &Channel, key: SortKey) -> Ordering {
    match key {
        SortKey::DisplayName => a.display_name.cmp(&b.display_name),
        SortKey::Type => a.channel_type.as_str().cmp(b.channel_type.as_str()),
        SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

/// Number of pages needed for `len` items; zero when there are no items.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// The nearest valid page: 1 when empty, otherwise within `1..=total`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// The slice `[(page-1)*size, page*size)` of `items`, truncated at the end.
pub fn paginate(items: &[Channel], page: usize, page_size: usize) -> &[Channel] {
    let size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use herald_core::{ChannelStatus, ChannelType, Label};
    use herald_test_utils::fixtures::{channel, sample_channels};

    use super::*;

    fn names(channels: &[Channel]) -> Vec<&str> {
        channels.iter().map(|c| c.display_name.as_str()).collect()
    }

    #[test]
    fn search_matches_name_type_and_label() {
        let mut c = channel("1", "Production Alerts", ChannelType::PagerDuty, ChannelStatus::Ok);
        c.labels.push(Label::new("team", "sre"));

        assert!(matches_search(&c, "production"));
        assert!(matches_search(&c, "pagerduty"));
        assert!(matches_search(&c, "TEAM:S"));
        assert!(matches_search(&c, ""));
        assert!(!matches_search(&c, "slack"));
    }

    #[test]
    fn filters_are_and_combined() {
        let now = Utc::now();
        let collection = sample_channels(now);
        let filters = FilterState {
            channel_type: Some(ChannelType::Email),
            status: Some(ChannelStatus::Ok),
            muted_only: true,
        };
        let hits = filter_channels(&collection, "", &filters, now);
        assert_eq!(names(&hits), vec!["Marketing Email Group"]);
    }

    #[test]
    fn sort_by_type_uses_wire_names() {
        let mut collection = vec![
            channel("1", "a", ChannelType::Webhook, ChannelStatus::Ok),
            channel("2", "b", ChannelType::Sms, ChannelStatus::Ok),
            channel("3", "c", ChannelType::PagerDuty, ChannelStatus::Ok),
        ];
        sort_channels(&mut collection, SortConfig::new(SortKey::Type, SortDirection::Ascending));
        let types: Vec<&str> = collection.iter().map(|c| c.channel_type.as_str()).collect();
        assert_eq!(types, vec!["PagerDuty", "SMS", "Webhook"]);
    }

    #[test]
    fn descending_keeps_ties_in_prior_order() {
        let mut collection = vec![
            channel("1", "first", ChannelType::Slack, ChannelStatus::Ok),
            channel("2", "second", ChannelType::Email, ChannelStatus::Error),
            channel("3", "third", ChannelType::Slack, ChannelStatus::Ok),
        ];
        sort_channels(&mut collection, SortConfig::new(SortKey::Status, SortDirection::Descending));
        assert_eq!(names(&collection), vec!["first", "third", "second"]);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let now = Utc::now();
        let collection = sample_channels(now);
        let query = Query {
            page: 9,
            ..Query::default()
        };
        let v = view(&collection, &query, 3, now);
        assert_eq!(v.total_pages, 3);
        assert_eq!(v.page, 3);
        assert_eq!(v.page_items.len(), 1);
    }

    #[test]
    fn empty_result_reports_page_one() {
        let now = Utc::now();
        let query = Query {
            search_term: "no such channel".into(),
            page: 4,
            ..Query::default()
        };
        let v = view(&sample_channels(now), &query, 7, now);
        assert_eq!(v.total_pages, 0);
        assert_eq!(v.page, 1);
        assert!(v.page_items.is_empty());
    }

    #[test]
    fn clamp_and_total_pages() {
        assert_eq!(total_pages(0, 7), 0);
        assert_eq!(total_pages(7, 7), 1);
        assert_eq!(total_pages(8, 7), 2);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(5, 0), 1);
        assert_eq!(clamp_page(2, 3), 2);
    }

    #[test]
    fn view_serializes_camel_case() {
        let now = Utc::now();
        let v = view(&sample_channels(now), &Query::default(), 2, now);
        let json = serde_json::to_value(&v).unwrap();
        assert!(json.get("pageItems").is_some());
        assert_eq!(json["totalPages"], 4);
    }
}
