//! CLI entry point for the `treach` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use transit_reach::cli::commands;

#[derive(Parser)]
#[command(
    name = "treach",
    about = "transit-reach CLI — bounded reachability queries over station networks"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about an edge list file
    Info {
        /// Path to the edge list file
        file: PathBuf,
    },
    /// List station names
    Stations {
        /// Path to the edge list file
        file: PathBuf,
        /// Maximum stations to show
        #[arg(long, default_value = "50")]
        limit: usize,
    },
    /// Show the connections of one station
    Neighbors {
        /// Path to the edge list file
        file: PathBuf,
        /// Station name (case-sensitive)
        station: String,
    },
    /// Find all stations within a distance of a start station
    Reachable {
        /// Path to the edge list file
        file: PathBuf,
        /// Starting station name (case-sensitive)
        start: String,
        /// Maximum cumulative travel distance
        max_distance: f64,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Stations { file, limit } => commands::cmd_stations(&file, limit, json),
        Commands::Neighbors { file, station } => commands::cmd_neighbors(&file, &station, json),
        Commands::Reachable {
            file,
            start,
            max_distance,
        } => commands::cmd_reachable(&file, &start, max_distance, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            transit_reach::TransitError::Io(_) => 1,
            transit_reach::TransitError::InvalidWeight(_) => 2,
        };
        process::exit(code);
    }
}
