//! Franchise listing and player id lookup.

use std::io::{self, Write};

use crate::{
    api::{franchises::sorted_by_name, types::Franchise, RecordSource},
    Result,
};

/// Write one `ID  Name` line per franchise, sorted by name.
pub fn write_franchises<W: Write>(franchises: Vec<Franchise>, out: &mut W) -> Result<()> {
    let franchises = sorted_by_name(franchises);
    let width = franchises
        .iter()
        .map(|f| f.id.as_str().len())
        .max()
        .unwrap_or(0);
    for f in &franchises {
        writeln!(out, "{:<width$}  {}", f.id.as_str(), f.name, width = width)?;
    }
    writeln!(out, "{} franchises", franchises.len())?;
    Ok(())
}

/// Entry point for `bbstats franchises`.
pub async fn handle_franchises<S: RecordSource>(source: &S) -> Result<()> {
    let franchises = source.fetch_franchises().await?;
    let mut out = io::stdout().lock();
    write_franchises(franchises, &mut out)
}

/// Entry point for `bbstats lookup`.
pub async fn handle_lookup<S: RecordSource>(source: &S, name: &str) -> Result<()> {
    let id = source.resolve_player_id(name.trim()).await?;
    println!("{}: {}", name.trim(), id);
    Ok(())
}
