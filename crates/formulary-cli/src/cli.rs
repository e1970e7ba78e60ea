//! CLI argument definitions for the formulary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use formulary_query::DEFAULT_PAGE_SIZE;

#[derive(Parser)]
#[command(
    name = "formulary",
    version,
    about = "Contraceptive drug catalog and drug-interaction lookup",
    long_about = "Browse a curated catalog of contraceptive drugs and look up\n\
                  known drug-drug interactions, both sourced from a tabular\n\
                  working-set export of the upstream spreadsheet."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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

#[derive(Subcommand)]
pub enum Command {
    /// Browse one page of the drug catalog, optionally filtered.
    Catalog(CatalogArgs),

    /// Look up known interactions between two drugs.
    Interactions(InteractionArgs),

    /// Print the recognized catalog columns and their display labels.
    Schema,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Path to the catalog CSV export.
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Substring filter on the trade-name column.
    #[arg(long = "keyword", value_name = "TEXT")]
    pub keyword: Option<String>,

    /// Substring filter on the drug-group column (e.g. COC, POP).
    #[arg(long = "group", value_name = "TEXT")]
    pub group: Option<String>,

    /// 1-indexed page to show.
    #[arg(long = "page", value_name = "N", default_value_t = 1)]
    pub page: usize,

    /// Rows per page.
    #[arg(long = "page-size", value_name = "N", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Parser)]
pub struct InteractionArgs {
    /// Path to the interaction CSV export.
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// First drug of the queried pair (order does not matter).
    #[arg(value_name = "DRUG_A")]
    pub drug_a: String,

    /// Second drug of the queried pair.
    #[arg(value_name = "DRUG_B")]
    pub drug_b: String,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
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
