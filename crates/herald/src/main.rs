// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Herald - notification channel console.
//!
//! This is the binary entry point. It loads configuration, seeds an in-memory
//! channel store, and runs one subcommand against it.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod intent;
mod list;
mod notifier;
mod seed;
mod shutdown;
mod stats;
mod watch;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use herald_config::HeraldConfig;
use herald_console::{Console, ConsoleSettings};
use herald_core::HeraldError;
use herald_store::ChannelStore;

/// Herald - query, mute, and bulk-manage notification channels.
#[derive(Parser, Debug)]
#[command(name = "herald", version, about, long_about = None)]
struct Cli {
    /// JSON file holding the channel collection (defaults to the built-in sample set).
    #[arg(long, global = true, value_name = "PATH")]
    channels: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List channels matching a search and filters, one page at a time.
    List(list::ListArgs),
    /// Show summary counts for the whole collection.
    Stats {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Apply a structured intent (as returned by the assistant) to the collection.
    Intent {
        /// Intent JSON, e.g. '{"action":"DISABLE","target":{"type":"Slack"},"confirmationMessage":"Done."}'.
        payload: String,
        /// Confirm a DELETE without prompting.
        #[arg(long)]
        yes: bool,
        /// Print the resulting collection as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Run the mute-expiry sweep until interrupted.
    Watch,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match herald_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            herald_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.console.log_level);

    if let Err(e) = run(cli, config).await {
        eprintln!("herald: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: HeraldConfig) -> Result<(), HeraldError> {
    let channels = seed::load_channels(cli.channels.as_deref())?;
    let store = Arc::new(ChannelStore::new(channels));
    let use_color = notifier::use_color(cli.plain);
    let console = Console::new(
        Arc::clone(&store),
        ConsoleSettings::from(&config),
        Arc::new(notifier::TerminalNotifier::new(use_color)),
    );

    match cli.command {
        Some(Commands::List(args)) => list::run_list(&console, &args, use_color),
        Some(Commands::Stats { json }) => stats::run_stats(&console, json, use_color),
        Some(Commands::Intent { payload, yes, json }) => {
            intent::run_intent(&console, &payload, yes, json, cli.channels.as_deref())
        }
        Some(Commands::Watch) => watch::run_watch(store, &config).await,
        None => {
            println!("herald: use --help for available commands");
            Ok(())
        }
    }
}

/// Initializes the tracing subscriber with the given log level.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("herald={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_flags_parse() {
        let cli = Cli::try_parse_from([
            "herald", "list", "--type", "slack", "--status", "error", "--sort", "status", "--desc",
            "--page", "2",
        ])
        .expect("valid list invocation");
        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.page, 2);
        assert!(args.desc);
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config =
            herald_config::load_and_validate_str("").expect("default config should be valid");
        assert_eq!(config.console.page_size, 7);
    }
}
