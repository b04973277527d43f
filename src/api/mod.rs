//! Stats API access: wire types and the HTTP record source

pub mod franchises;
pub mod source;
pub mod types;

pub use franchises::find_franchise;
pub use source::{HttpRecordSource, RecordSource};
pub use types::{Franchise, Link, Record, RecordSet, Route, Value};
