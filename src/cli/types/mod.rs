//! Type-safe wrappers and enums for baseball statistics data.

pub mod ids;
pub mod time;
pub mod view;

pub use ids::{FranchiseId, PlayerId};
pub use time::Year;
pub use view::{ColumnMove, SortDirection, StatKind};
