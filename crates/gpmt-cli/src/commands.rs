use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;
use gpmt_db::ConnectionParams;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    let params = ConnectionParams {
        hostname: cli.hostname,
        port: cli.port,
        database: cli.database,
        username: cli.username,
        password: cli.password,
    };

    match command {
        Commands::LogCollector {
            output,
            working_dir,
        } => handlers::log_collector::handle(&params, output, working_dir),

        Commands::AnalyzeSession => handlers::analyze_session::handle(),

        Commands::StatsCheck => handlers::stats_check::handle(),

        Commands::Version => {
            println!("gpmt {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn show_guidance() {
    println!("gpmt - Greenplum cluster diagnostics\n");
    println!("Available commands:");
    println!("  gp_log_collector  Collect coordinator log files into a compressed archive");
    println!("  analyze_session   Analyze active and recent database sessions");
    println!("  gpstatscheck      Check for missing or stale table statistics");
    println!("  version           Print the gpmt version\n");
    println!("For more options:");
    println!("  gpmt --help");
}
