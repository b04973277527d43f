//! Season year type.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{BbError, Result};

/// How many past seasons the year picker offers.
pub const SELECTABLE_SEASONS: i32 = 100;

/// Type-safe wrapper for season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Year(pub i32);

impl Year {
    pub fn new(year: i32) -> Self {
        Self(year)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }

    /// The current calendar year.
    pub fn current() -> Self {
        Self(chrono::Local::now().year())
    }

    /// Years a team page can be opened for: the last hundred seasons up to `latest`.
    pub fn selectable_range(latest: Year) -> RangeInclusive<i32> {
        (latest.0 - SELECTABLE_SEASONS)..=latest.0
    }

    /// Check that `self` is one of the selectable seasons ending at `latest`.
    pub fn ensure_selectable(self, latest: Year) -> Result<Self> {
        let range = Self::selectable_range(latest);
        if range.contains(&self.0) {
            Ok(self)
        } else {
            Err(BbError::InvalidYear {
                year: self.0,
                first: *range.start(),
                last: *range.end(),
            })
        }
    }
}

impl Default for Year {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectable_range() {
        let range = Year::selectable_range(Year::new(2024));
        assert_eq!(*range.start(), 1924);
        assert_eq!(*range.end(), 2024);
    }

    #[test]
    fn test_ensure_selectable() {
        let latest = Year::new(2024);
        assert!(Year::new(2024).ensure_selectable(latest).is_ok());
        assert!(Year::new(1924).ensure_selectable(latest).is_ok());

        match Year::new(1923).ensure_selectable(latest).unwrap_err() {
            BbError::InvalidYear { year, first, last } => {
                assert_eq!(year, 1923);
                assert_eq!(first, 1924);
                assert_eq!(last, 2024);
            }
            e => panic!("Expected InvalidYear, got {e:?}"),
        }
        assert!(Year::new(2025).ensure_selectable(latest).is_err());
    }

    #[test]
    fn test_year_parse_and_display() {
        let year: Year = " 2001 ".parse().unwrap();
        assert_eq!(year.as_i32(), 2001);
        assert_eq!(year.to_string(), "2001");
        assert!("two thousand".parse::<Year>().is_err());
    }

    #[test]
    fn test_default_is_current_year() {
        assert_eq!(Year::default(), Year::current());
        assert!(Year::current().as_i32() >= 2024);
    }
}
