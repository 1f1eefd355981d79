// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `herald stats`: summary counts.

use herald_console::Console;
use herald_core::HeraldError;
use herald_query::Stats;

pub fn run_stats(console: &Console, json: bool, use_color: bool) -> Result<(), HeraldError> {
    let stats = console.stats();
    if json {
        let out = serde_json::to_string_pretty(&stats)
            .map_err(|e| HeraldError::Internal(format!("cannot encode stats: {e}")))?;
        println!("{out}");
    } else {
        print_stats(&stats, use_color);
    }
    Ok(())
}

fn print_stats(stats: &Stats, use_color: bool) {
    println!();
    println!("  herald stats");
    println!("  {}", "-".repeat(35));
    println!("    Total:   {}", stats.total);
    if use_color {
        use colored::Colorize;
        println!("    OK:      {}", stats.ok.to_string().green());
        println!("    Error:   {}", stats.error.to_string().red());
        println!("    Muted:   {}", stats.muted.to_string().yellow());
    } else {
        println!("    OK:      {}", stats.ok);
        println!("    Error:   {}", stats.error);
        println!("    Muted:   {}", stats.muted);
    }
    println!();
}
