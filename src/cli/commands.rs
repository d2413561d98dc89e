use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "salescope", about = "Monthly sales analytics over product transactions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the JSON API over HTTP
    Serve {
        /// Listen address (defaults to SALESCOPE_BIND or 0.0.0.0:3000)
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    /// Load the seed transactions into the database
    Init {
        /// Seed JSON URL (defaults to SALESCOPE_SEED_URL)
        #[arg(long, conflicts_with = "file")]
        url: Option<String>,
        /// Read the seed JSON from a local file instead
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List transactions for a month, with optional search and paging
    Transactions(QueryArgs),
    /// Total sale amount and sold/unsold counts for a month
    Stats(MonthArgs),
    /// Price-range histogram for a month
    BarChart(MonthArgs),
    /// Items per category for a month
    PieChart(MonthArgs),
    /// Listing, statistics, histogram and categories in one response
    Combined(QueryArgs),
}

#[derive(Args)]
pub struct MonthArgs {
    /// Month number (1-12) or name
    #[arg(long)]
    pub month: String,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Month number (1-12) or name
    #[arg(long)]
    pub month: Option<String>,
    /// Matches title or description text, or an exact price
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub per_page: Option<i64>,
}
