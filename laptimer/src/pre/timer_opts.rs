use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    author = "Alexander Heilmeier <alexander.heilmeier@tum.de>",
    name = "lap-timer",
    about = "A race duration and lap timer overlay written in Rust"
)]
pub struct TimerOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug printing (e.g. rejected inputs)
    #[clap(short, long)]
    pub debug: bool,

    /// Activate GUI - the timer is shown in an overlay window instead of the console
    #[clap(short, long)]
    pub gui: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set race duration in seconds (overrides the parameter file)
    #[clap(short, long)]
    pub race_duration: Option<u64>,

    /// Set path to the timer parameter file (OPTIONAL: if not set, defaults are used)
    #[clap(short, long)]
    pub parfile_path: Option<PathBuf>,

    /// Set console polling interval in milliseconds (only relevant in console mode)
    #[clap(short = 'i', long, default_value = "50")]
    pub poll_interval_ms: u64,

    /// Set path of the race summary written on exit (only relevant in console mode)
    #[clap(short, long)]
    pub summary_path: Option<PathBuf>,
}
