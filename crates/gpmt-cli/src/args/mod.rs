mod commands;

pub use commands::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "gpmt")]
#[command(about = "Greenplum Magic Tool: cluster diagnostics and log collection", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        short = 'v',
        global = true,
        help = "Enable verbose or debug logging"
    )]
    pub verbose: bool,

    #[arg(
        long,
        default_value = "localhost",
        global = true,
        help = "Hostname where the database is hosted"
    )]
    pub hostname: String,

    #[arg(
        long,
        default_value_t = 5432,
        global = true,
        help = "Port number of the coordinator database"
    )]
    pub port: u16,

    #[arg(
        long,
        default_value = "template1",
        global = true,
        help = "Database name to connect to"
    )]
    pub database: String,

    #[arg(
        long,
        default_value = "gpadmin",
        global = true,
        help = "Username that is used to connect to the database"
    )]
    pub username: String,

    #[arg(
        long,
        default_value = "",
        global = true,
        help = "Password for the user"
    )]
    pub password: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
