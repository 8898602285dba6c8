//! CLI argument definitions for the vaccination ETL.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use vax_cli::pipeline::{DEFAULT_OUT_DIR, DEFAULT_RAW_DIR, PipelineConfig};

#[derive(Parser)]
#[command(
    name = "vax-etl",
    version,
    about = "COVID-19 vaccination ETL - derive dashboard tables from raw country data",
    long_about = "Load the raw vaccination CSV, clean it, and write three derived tables:\n\
                  country_daily_metrics.csv, global_time_series.csv and\n\
                  top_countries_latest.csv.\n\n\
                  Without a subcommand the ETL runs with the given --raw-dir/--out-dir."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub run: RunArgs,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parses the process arguments, exiting with a usage error on failure.
    pub fn parse_args() -> Self {
        Self::try_parse_args_from(std::env::args_os()).unwrap_or_else(|error| error.exit())
    }

    /// Parses `args` like [`Parser::try_parse_from`].
    ///
    /// The top-level run flags only apply when no subcommand is given, so a
    /// subcommand after any of them is rejected instead of silently dropping
    /// them.
    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut command = Cli::command();
        let matches = command.try_get_matches_from_mut(args)?;
        if let Some(subcommand) = matches.subcommand_name() {
            let shadowed = command
                .get_arguments()
                .filter(|arg| !arg.is_global_set())
                .find(|arg| {
                    matches.value_source(arg.get_id().as_str()) == Some(ValueSource::CommandLine)
                })
                .map(|arg| arg.get_long().unwrap_or(arg.get_id().as_str()).to_string());
            if let Some(flag) = shadowed {
                let message = format!(
                    "--{flag} cannot be used before the '{subcommand}' subcommand; pass it after '{subcommand}'"
                );
                return Err(command.error(ErrorKind::ArgumentConflict, message));
            }
        }
        Cli::from_arg_matches(&matches)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the ETL and write the derived tables.
    Run(RunArgs),

    /// Print a data quality report for the raw input.
    Quality(QualityArgs),
}

#[derive(Args, Clone)]
pub struct RunArgs {
    /// Directory holding the raw CSV files.
    #[arg(long = "raw-dir", value_name = "DIR", default_value = DEFAULT_RAW_DIR)]
    pub raw_dir: PathBuf,

    /// Directory the derived tables are written to.
    #[arg(long = "out-dir", value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Read this CSV instead of discovering one in --raw-dir.
    ///
    /// Use it when the raw directory holds several candidate files and none
    /// is named like `country_vaccinations*.csv`.
    #[arg(long = "input-file", value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Derive and summarise the tables without writing them.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl From<&RunArgs> for PipelineConfig {
    fn from(args: &RunArgs) -> Self {
        Self {
            raw_dir: args.raw_dir.clone(),
            out_dir: args.out_dir.clone(),
            input_file: args.input_file.clone(),
            dry_run: args.dry_run,
        }
    }
}

#[derive(Args)]
pub struct QualityArgs {
    /// Directory holding the raw CSV files.
    #[arg(long = "raw-dir", value_name = "DIR", default_value = DEFAULT_RAW_DIR)]
    pub raw_dir: PathBuf,

    /// Read this CSV instead of discovering one in --raw-dir.
    #[arg(long = "input-file", value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
