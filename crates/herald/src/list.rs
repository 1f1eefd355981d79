// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `herald list`: one page of the filtered, sorted collection.

use chrono::{DateTime, Utc};
use clap::Args;
use herald_console::{Console, FilterPatch};
use herald_core::{Channel, ChannelStatus, ChannelType, HeraldError, SortDirection, SortKey};
use herald_query::View;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive search over name, type, and labels.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only channels of this type (Email, Slack, PagerDuty, Webhook, SMS).
    #[arg(long = "type", value_name = "TYPE")]
    pub channel_type: Option<ChannelType>,

    /// Only channels with this status (OK, Pending, Error).
    #[arg(long)]
    pub status: Option<ChannelStatus>,

    /// Only channels that are currently muted.
    #[arg(long)]
    pub muted: bool,

    /// Sort column (displayName, type, status).
    #[arg(long, default_value = "displayName")]
    pub sort: SortKey,

    /// Sort descending.
    #[arg(long)]
    pub desc: bool,

    /// Page to show; out-of-range pages are clamped.
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run_list(console: &Console, args: &ListArgs, use_color: bool) -> Result<(), HeraldError> {
    apply_args(console, args);
    let now = Utc::now();
    let view = console.current_view_at(now);

    if args.json {
        let json = serde_json::to_string_pretty(&view)
            .map_err(|e| HeraldError::Internal(format!("cannot encode view: {e}")))?;
        println!("{json}");
    } else {
        print_view(&view, now, use_color);
    }
    Ok(())
}

/// Translate command-line flags into console events.
fn apply_args(console: &Console, args: &ListArgs) {
    let term = args.search.trim();
    if !term.is_empty() {
        console.set_search_term(term);
    }
    console.set_filters(FilterPatch {
        channel_type: Some(args.channel_type),
        status: Some(args.status),
        muted_only: Some(args.muted),
    });

    let mut sort = console.query().sort;
    if sort.key != args.sort {
        sort = console.sort_by(args.sort);
    }
    if args.desc && sort.direction == SortDirection::Ascending {
        console.sort_by(args.sort);
    }
    console.go_to_page(args.page);
}

fn print_view(view: &View, now: DateTime<Utc>, use_color: bool) {
    println!();
    if view.all_matching.is_empty() {
        println!("  No channels match the current search and filters.");
        println!();
        return;
    }

    println!(
        "  {:<28} {:<10} {:<8} {:<8} {:<6} LABELS",
        "NAME", "TYPE", "STATUS", "ENABLED", "MUTED"
    );
    println!("  {}", "-".repeat(78));
    for channel in &view.page_items {
        println!("  {}", format_row(channel, now, use_color));
    }
    println!();
    println!(
        "  Page {} of {} ({} matching)",
        view.page,
        view.total_pages,
        view.all_matching.len()
    );
    println!();
}

fn format_row(channel: &Channel, now: DateTime<Utc>, use_color: bool) -> String {
    let labels = channel
        .labels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let status = format!("{:<8}", channel.status.as_str());
    let status = if use_color {
        use colored::Colorize;
        match channel.status {
            ChannelStatus::Ok => status.green().to_string(),
            ChannelStatus::Pending => status.yellow().to_string(),
            ChannelStatus::Error => status.red().to_string(),
        }
    } else {
        status
    };

    format!(
        "{:<28} {:<10} {} {:<8} {:<6} {}",
        channel.display_name,
        channel.channel_type.as_str(),
        status,
        if channel.enabled { "yes" } else { "no" },
        if channel.is_muted(now) { "yes" } else { "" },
        labels
    )
}
