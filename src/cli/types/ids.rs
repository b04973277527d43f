//! ID types for franchises and players.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BbError;

/// Type-safe wrapper for franchise abbreviations (`franchID`, e.g. `NYY`).
///
/// Franchise IDs are upper-case on the API side, so parsing normalises the
/// input to keep `nyy` and `NYY` the same team.
///
/// # Examples
///
/// ```rust
/// use bbstats::FranchiseId;
///
/// let team: FranchiseId = "nyy".parse().unwrap();
/// assert_eq!(team.as_str(), "NYY");
/// assert_eq!(team.to_string(), "NYY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FranchiseId(pub String);

impl FranchiseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FranchiseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FranchiseId {
    type Err = BbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(BbError::InvalidFranchiseId { id: s.to_string() });
        }
        Ok(Self::new(s))
    }
}

/// Type-safe wrapper for player IDs (baseball-reference keys like `troutmi01`).
///
/// This is the canonical identifier for player pages: names are not unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = BbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if id.is_empty() || id.contains(char::is_whitespace) || id.contains('/') {
            return Err(BbError::InvalidPlayerId { id: s.to_string() });
        }
        Ok(Self(id.to_string()))
    }
}
