//! Baseball Statistics Tables
//!
//! A Rust library and CLI for browsing team and player statistics served by a
//! baseball stats API, with an interactive table view on top.
//!
//! ## Features
//!
//! - **Record Source**: Typed client for the stats API with a two-tier response cache
//! - **Table Views**: Sort, filter by a minimum value, and add, remove or reorder columns
//! - **Link Columns**: Player names and franchise ids link to their own pages
//! - **CSV Export**: Write exactly the rows the table currently shows
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bbstats::{
//!     api::{HttpRecordSource, RecordSource},
//!     cli::SourceArgs,
//!     FranchiseId, StatKind, Year,
//! };
//!
//! # async fn example() -> bbstats::Result<()> {
//! let source = HttpRecordSource::from_args(&SourceArgs {
//!     api_url: None,
//!     refresh: false,
//! })?;
//! let records = source
//!     .fetch_team_stats(StatKind::Batting, &FranchiseId::new("NYY"), Some(Year::new(2022)), None)
//!     .await?;
//! println!("{} rows", records.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a stats API other than the local default:
//! ```bash
//! export BBSTATS_API_URL=http://127.0.0.1:8000/api/v1
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod view;

// Re-export commonly used types
pub use cli::types::{FranchiseId, PlayerId, SortDirection, StatKind, Year};
pub use crate::core::http::API_URL_ENV_VAR;
pub use error::{BbError, Result};
