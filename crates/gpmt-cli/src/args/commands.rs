use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        name = "gp_log_collector",
        about = "Collect coordinator log files into a compressed archive"
    )]
    LogCollector {
        #[arg(
            short = 'o',
            long = "output",
            help = "Output archive name (e.g., my_logs.tar.gz)"
        )]
        output: Option<String>,

        #[arg(
            long = "dir",
            help = "Working directory for the archive (defaults to current directory)"
        )]
        working_dir: Option<PathBuf>,
    },

    #[command(
        name = "analyze_session",
        about = "Analyze active and recent database sessions"
    )]
    AnalyzeSession,

    #[command(
        name = "gpstatscheck",
        about = "Check for missing or stale table statistics"
    )]
    StatsCheck,

    #[command(about = "Print the gpmt version")]
    Version,
}
