//! Histloom CLI: the `histloom` command.
//!
//! Fetches one subject's public push events and replays them into a
//! synthetic git repository: one branch per origin project, capped,
//! all branches merged into `main` at the end. Exit code 0 on success
//! (reconciliation is best-effort), 1 on any fatal error.

mod cli;

use clap::Parser;
use cli::Cli;
use histloom_feed::FeedClient;
use histloom_git::GitStore;
use histloom_synth::synthesize;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::info!(user = %cli.user, "fetching public events");
    let client = FeedClient::new().with_base_url(cli.feed_base_url.as_str());
    let events = match client.fetch(&cli.user) {
        Ok(events) => events,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    tracing::info!(count = events.len(), "replaying push events");

    let mut store = match GitStore::create(&cli.output) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let summary = match synthesize(&mut store, &events, cli.max_timelines) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                eprintln!("error: failed to render summary: {err}");
                std::process::exit(1);
            }
        }
    } else {
        println!(
            "synthesized {} changes across {} timelines into {} ({} events dropped)",
            summary.changes_recorded,
            summary.timelines_created,
            cli.output.display(),
            summary.events_dropped
        );
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
