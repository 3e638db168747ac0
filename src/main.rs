//! Track Charts CLI
//!
//! Builds chart data (top artists, genre distribution, popular albums)
//! from a static track catalog and writes it as a JSON report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use track_charts::aggregator::{SortOrder, TrackSortKey};
use track_charts::commands::{
    display_schema, display_version, execute_list, execute_report, validate_args,
    validate_catalog_file, ListArgs, ReportArgs,
};
use track_charts::utils::config::{DEFAULT_CATALOG_PATH, DEFAULT_REPORT_PATH};

/// Track Charts - rankings from a static track catalog
#[derive(Parser, Debug)]
#[command(name = "track-charts")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the chart report for a catalog
    Report {
        /// Catalog JSON document
        #[arg(short, long, env = "TRACK_CHARTS_CATALOG", default_value = DEFAULT_CATALOG_PATH)]
        input: PathBuf,

        /// Output path for JSON report
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Search and sort the track listing
    List {
        /// Catalog JSON document
        #[arg(short, long, env = "TRACK_CHARTS_CATALOG", default_value = DEFAULT_CATALOG_PATH)]
        input: PathBuf,

        /// Case-insensitive search on track, artist and album names
        #[arg(short, long)]
        query: Option<String>,

        /// Column to sort by
        #[arg(long, value_enum, default_value_t = TrackSortKey::Name)]
        sort: TrackSortKey,

        /// Sort direction
        #[arg(long, value_enum, default_value_t = SortOrder::Asc)]
        order: SortOrder,

        /// Maximum number of rows to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Validate a catalog JSON file
    Validate {
        /// Path to catalog JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display report schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Report {
            input,
            output,
            summary,
        } => {
            let args = ReportArgs {
                input,
                output_json: output,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_report(args)?;
        }

        Commands::List {
            input,
            query,
            sort,
            order,
            limit,
        } => {
            execute_list(ListArgs {
                input,
                query,
                sort_by: sort,
                order,
                limit,
            })?;
        }

        Commands::Validate { file } => {
            validate_catalog_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_input_falls_back_to_catalog_env() {
        let cli = Cli::command();
        for name in ["report", "list"] {
            let sub = cli.find_subcommand(name).unwrap();
            let input = sub
                .get_arguments()
                .find(|arg| arg.get_id() == "input")
                .unwrap();
            assert_eq!(input.get_env(), Some(OsStr::new("TRACK_CHARTS_CATALOG")));
        }
    }

    #[test]
    fn test_list_parses_sort_flags() {
        let cli = Cli::try_parse_from([
            "track-charts", "list", "-i", "data.json", "-q", "pop", "--sort", "duration",
            "--order", "desc", "-l", "5",
        ])
        .unwrap();

        match cli.command {
            Commands::List { query, sort, order, limit, .. } => {
                assert_eq!(query.as_deref(), Some("pop"));
                assert_eq!(sort, TrackSortKey::Duration);
                assert_eq!(order, SortOrder::Desc);
                assert_eq!(limit, Some(5));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
