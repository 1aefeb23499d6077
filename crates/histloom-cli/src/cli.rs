use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "histloom",
    about = "Weave a user's public push activity into one synthetic git repository",
    version
)]
pub struct Cli {
    /// GitHub login whose public events drive the synthetic history
    #[arg(long)]
    pub user: String,

    /// Output directory for the synthesized repository (recreated from scratch)
    #[arg(long, default_value = "combined_activity_repo")]
    pub output: PathBuf,

    /// Maximum number of distinct timelines (branches) to create
    #[arg(long, default_value_t = histloom_synth::DEFAULT_MAX_TIMELINES)]
    pub max_timelines: usize,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Base URL of the public-events endpoint (mirrors, local fixtures)
    #[arg(long, default_value = "https://api.github.com", hide = true)]
    pub feed_base_url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
