//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use unisearch_core::SortOrder;

#[derive(Parser)]
#[command(name = "unisearch")]
#[command(
    author,
    version,
    about = "Inspect, parse and build unified search filters"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Config file (defaults to $UNISEARCH_CONFIG or the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List known filter definitions
    Filters,

    /// Parse a query string into typed filters and a search query
    Parse(ParseArgs),

    /// Build a query string from filter flags
    Build(BuildArgs),
}

#[derive(Args)]
pub struct ParseArgs {
    /// Query string, e.g. "term=report&since=2025-01-01"
    pub query: String,

    /// Number of results per provider
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Pagination cursor
    #[arg(long)]
    pub cursor: Option<String>,

    /// Restrict to provider (repeatable)
    #[arg(long = "provider")]
    pub providers: Vec<String>,

    /// Sort order
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Search term
    #[arg(short, long)]
    pub term: Option<String>,

    /// Lower date bound (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// Upper date bound (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Limit to the last N days (fractions allowed)
    #[arg(long, group = "period")]
    pub last_days: Option<f64>,

    /// Limit to today
    #[arg(long, group = "period")]
    pub today: bool,

    /// Limit to this week (starting Monday)
    #[arg(long, group = "period")]
    pub this_week: bool,

    /// Limit to this month
    #[arg(long, group = "period")]
    pub this_month: bool,

    /// Limit to this year
    #[arg(long, group = "period")]
    pub this_year: bool,

    /// Filter by user id
    #[arg(long, conflicts_with = "person")]
    pub user: Option<String>,

    /// Filter by person as TYPE:ID (user, group or email)
    #[arg(long)]
    pub person: Option<String>,

    /// Match titles only
    #[arg(long)]
    pub title_only: bool,

    /// Restrict to a location
    #[arg(long)]
    pub places: Option<String>,

    /// Restrict to a provider
    #[arg(long)]
    pub provider: Option<String>,

    /// Extra filter as NAME=VALUE, typed by its definition (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Relevance,
    Date,
    Title,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Relevance => SortOrder::Relevance,
            SortArg::Date => SortOrder::Date,
            SortArg::Title => SortOrder::Title,
        }
    }
}
