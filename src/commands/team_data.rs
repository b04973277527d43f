//! Team page: one franchise's batting or pitching table for a season.

use std::io::{self, Write};

use tracing::debug;

use super::common::{link_player_names, records_or_empty, Page, TablePreset};
use super::present;
use crate::{
    api::{find_franchise, RecordSource},
    cli::{
        types::{FranchiseId, StatKind, Year},
        ViewArgs,
    },
    view::TableView,
    BbError, Result,
};

pub const UNKNOWN_TEAM_MESSAGE: &str = "There is no team with this abbreviation";
pub const NO_TEAM_DATA_MESSAGE: &str = "There is no data for this year";

/// Check the season bounds: the start year must be selectable and the end
/// year, if any, must not come before it.
pub fn validate_years(
    year: Option<Year>,
    end_year: Option<Year>,
    latest: Year,
) -> Result<(Year, Option<Year>)> {
    let start = year.unwrap_or(latest).ensure_selectable(latest)?;
    if let Some(end) = end_year {
        if end < start {
            return Err(BbError::InvalidYearRange {
                start: start.as_i32(),
                end: end.as_i32(),
            });
        }
        end.ensure_selectable(latest)?;
    }
    Ok((start, end_year))
}

/// Resolve the franchise, then load its table.
///
/// An unknown franchise yields [`Page::NotFound`] without requesting any stats.
pub async fn load_team_page<S: RecordSource>(
    source: &S,
    team: &FranchiseId,
    year: Option<Year>,
    end_year: Option<Year>,
    kind: StatKind,
) -> Result<Page> {
    let (start, end_year) = validate_years(year, end_year, Year::current())?;

    let Some(franchise) = find_franchise(source, team).await? else {
        return Ok(Page::NotFound(UNKNOWN_TEAM_MESSAGE));
    };

    let title = match end_year {
        Some(end) if end != start => format!("{} {}-{} {}", franchise.name, start, end, kind),
        _ => format!("{} {} {}", franchise.name, start, kind),
    };

    let mut records = records_or_empty(
        source
            .fetch_team_stats(kind, team, Some(start), end_year)
            .await,
        "team stats",
    );
    if records.is_empty() {
        return Ok(Page::Empty {
            title,
            message: NO_TEAM_DATA_MESSAGE,
        });
    }

    let linked = link_player_names(&mut records);
    debug!(rows = records.len(), linked, "loaded team table");

    let view = TableView::new(records, TablePreset::team(kind).config());
    Ok(Page::Table { title, view })
}

/// Entry point for `bbstats team`.
pub async fn handle_team<S: RecordSource>(
    source: &S,
    team: FranchiseId,
    year: Option<Year>,
    end_year: Option<Year>,
    args: &ViewArgs,
) -> Result<()> {
    let page = load_team_page(source, &team, year, end_year, args.stats).await?;
    let mut out = io::stdout().lock();
    present(page, args, &mut out)?;
    out.flush()?;
    Ok(())
}

