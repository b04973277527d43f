//! CLI argument definitions and parsing structures.

use super::types::{ColumnMove, FranchiseId, PlayerId, SortDirection, StatKind, Year};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Source arguments shared between commands
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Stats API base URL (or set `BBSTATS_API_URL` env var).
    #[clap(long)]
    pub api_url: Option<String>,

    /// Force refresh from the API, overwriting the cache.
    #[clap(long)]
    pub refresh: bool,
}

/// Table view arguments shared between the team and player commands.
///
/// Every option maps onto one view action; they are applied in a fixed order:
/// columns, removes, adds, moves, sort, minimum.
#[derive(Debug, Default, Args)]
pub struct ViewArgs {
    /// Batting or pitching table.
    #[clap(long, value_enum, default_value_t = StatKind::Batting)]
    pub stats: StatKind,

    /// Minimum value for the filter column (empty string shows every row).
    #[clap(long)]
    pub min: Option<String>,

    /// Column to sort by.
    #[clap(long)]
    pub sort: Option<String>,

    /// Sort direction used with `--sort`.
    #[clap(long, value_enum, default_value_t = SortDirection::Desc)]
    pub direction: SortDirection,

    /// Replace the visible columns (comma separated): `--columns Name,HR,RBI`.
    #[clap(long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Add a column (repeatable): `--add G --add SB`.
    #[clap(long = "add")]
    pub add: Vec<String>,

    /// Remove a column (repeatable).
    #[clap(long = "remove")]
    pub remove: Vec<String>,

    /// Move a column to a 1-based position (repeatable): `--move HR:1`.
    #[clap(long = "move")]
    pub moves: Vec<ColumnMove>,

    /// Write the filtered table to `baseballData.csv` in DIR (default: current dir).
    #[clap(long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
    pub export: Option<PathBuf>,

    /// Output the rendered table as JSON instead of text.
    #[clap(long)]
    pub json: bool,

    /// Keep the table open and read actions from stdin (`help` lists them).
    #[clap(long, short)]
    pub interactive: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "bbstats", about = "Baseball statistics tables from the stats API")]
pub struct Bbstats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the active franchises and their abbreviations.
    Franchises {
        #[clap(flatten)]
        source: SourceArgs,
    },

    /// Show a team's batting or pitching table for a season.
    ///
    /// The team is checked against the franchise list before any stats are fetched.
    Team {
        /// Franchise abbreviation, e.g. NYY.
        team: FranchiseId,

        /// Season year (defaults to the current year).
        #[clap(long, short)]
        year: Option<Year>,

        /// Last season to include (inclusive).
        #[clap(long)]
        end_year: Option<Year>,

        #[clap(flatten)]
        view: ViewArgs,

        #[clap(flatten)]
        source: SourceArgs,
    },

    /// Show a player's career batting or pitching table.
    Player {
        /// Player id, e.g. troutmi01 (use `lookup` to find it).
        player: PlayerId,

        #[clap(flatten)]
        view: ViewArgs,

        #[clap(flatten)]
        source: SourceArgs,
    },

    /// Find the player id for a player name.
    Lookup {
        /// Full player name, e.g. "Mike Trout".
        name: String,

        #[clap(flatten)]
        source: SourceArgs,
    },
}
