//! Franchise lookups.

use tracing::debug;

use super::{source::RecordSource, types::Franchise};
use crate::{cli::types::FranchiseId, error::Result};

/// Look `team` up in the franchise list.
///
/// Returns `Ok(None)` when the list loads but has no such franchise, which
/// the host reports as an unknown abbreviation.
pub async fn find_franchise<S: RecordSource>(
    source: &S,
    team: &FranchiseId,
) -> Result<Option<Franchise>> {
    let franchises = source.fetch_franchises().await?;
    debug!(count = franchises.len(), %team, "loaded franchises");
    Ok(franchises.into_iter().find(|f| f.id == *team))
}

/// Franchises sorted by display name.
pub fn sorted_by_name(mut franchises: Vec<Franchise>) -> Vec<Franchise> {
    franchises.sort_by(|a, b| a.name.cmp(&b.name));
    franchises
}
