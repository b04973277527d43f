//! Player page: one player's season-by-season batting or pitching table.

use std::io::{self, Write};

use tracing::{debug, warn};

use super::common::{link_franchises, records_or_empty, Page, TablePreset};
use super::present;
use crate::{
    api::RecordSource,
    cli::{
        types::{PlayerId, StatKind},
        ViewArgs,
    },
    view::TableView,
    Result,
};

/// Message shown when a player has no lines of the requested kind.
pub fn no_player_data_message(kind: StatKind) -> &'static str {
    match kind {
        StatKind::Batting => "There is no batting data for this player",
        StatKind::Pitching => "There is no pitching data for this player",
    }
}

/// Load a player's table. The title falls back to the id when the name
/// lookup fails.
pub async fn load_player_page<S: RecordSource>(
    source: &S,
    player: &PlayerId,
    kind: StatKind,
) -> Result<Page> {
    let name = match source.resolve_player_name(player).await {
        Ok(name) => name,
        Err(e) => {
            warn!(%player, error = %e, "player name lookup failed");
            player.to_string()
        }
    };
    let title = format!("{} {}", name, kind);

    let mut records = records_or_empty(
        source.fetch_player_stats(kind, player).await,
        "player stats",
    );
    if records.is_empty() {
        return Ok(Page::Empty {
            title,
            message: no_player_data_message(kind),
        });
    }

    let linked = link_franchises(&mut records);
    debug!(rows = records.len(), linked, "loaded player table");

    let view = TableView::new(records, TablePreset::player(kind).config());
    Ok(Page::Table { title, view })
}

/// Entry point for `bbstats player`.
pub async fn handle_player<S: RecordSource>(
    source: &S,
    player: PlayerId,
    args: &ViewArgs,
) -> Result<()> {
    let page = load_player_page(source, &player, args.stats).await?;
    let mut out = io::stdout().lock();
    present(page, args, &mut out)?;
    out.flush()?;
    Ok(())
}
