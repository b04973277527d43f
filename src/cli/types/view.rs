//! Table selection and ordering types shared by the CLI and the view engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BbError;

/// Which statistics table to load for a team or player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    /// Batting lines
    #[default]
    Batting,
    /// Pitching lines
    Pitching,
}

impl StatKind {
    /// Path segment used by the stats API (`teambatting`, `playerpitching`, ...).
    pub fn endpoint_suffix(&self) -> &'static str {
        match self {
            StatKind::Batting => "batting",
            StatKind::Pitching => "pitching",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatKind::Batting => "Batting",
            StatKind::Pitching => "Pitching",
        };
        write!(f, "{}", s)
    }
}

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    Asc,
    /// Largest first
    #[default]
    Desc,
}

impl SortDirection {
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SortDirection {
    type Err = BbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" | "up" => Ok(SortDirection::Asc),
            "desc" | "descending" | "down" => Ok(SortDirection::Desc),
            _ => Err(BbError::InvalidAction {
                input: format!("sort direction {s:?}"),
            }),
        }
    }
}

/// A `FIELD:POSITION` column move given on the command line (`--move HR:1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMove {
    pub field: String,
    pub position: usize,
}

impl FromStr for ColumnMove {
    type Err = BbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Field names like "SO/W" never contain ':' but may contain other
        // punctuation, so split on the last colon only.
        let invalid = || BbError::InvalidColumnMove {
            spec: s.to_string(),
        };
        let (field, position) = s.rsplit_once(':').ok_or_else(invalid)?;
        if field.is_empty() {
            return Err(invalid());
        }
        let position = position.trim().parse().map_err(|_| invalid())?;
        Ok(Self {
            field: field.to_string(),
            position,
        })
    }
}
