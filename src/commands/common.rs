//! Common utilities and helper functions shared across commands.
//!
//! Table presets for the team and player pages, fetch fallbacks, and the code
//! that turns [`ViewArgs`] into view actions and prints the result.

use std::io::Write;

use tracing::warn;

use crate::{
    api::types::{Link, RecordSet, Route},
    cli::{
        types::{FranchiseId, PlayerId, StatKind},
        ViewArgs,
    },
    view::{parse_threshold, Action, TableView, ViewConfig},
    Result,
};

/// Initial layout of one kind of table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablePreset {
    pub visible: &'static [&'static str],
    pub filter: &'static str,
    pub sort: &'static str,
    pub link: &'static str,
}

pub const TEAM_BATTING: TablePreset = TablePreset {
    visible: &["Name", "PA", "HR", "RBI", "OPS+"],
    filter: "PA",
    sort: "PA",
    link: "Name",
};

pub const TEAM_PITCHING: TablePreset = TablePreset {
    visible: &["Pos", "Name", "IP", "ERA", "ERA+"],
    filter: "IP",
    sort: "IP",
    link: "Name",
};

pub const PLAYER_BATTING: TablePreset = TablePreset {
    visible: &["Year", "Team", "LG", "G", "AB", "HR", "RBI"],
    filter: "G",
    sort: "Year",
    link: "Team",
};

pub const PLAYER_PITCHING: TablePreset = TablePreset {
    visible: &["Year", "Team", "LG", "G", "IP", "ERA"],
    filter: "G",
    sort: "Year",
    link: "Team",
};

impl TablePreset {
    pub fn team(kind: StatKind) -> Self {
        match kind {
            StatKind::Batting => TEAM_BATTING,
            StatKind::Pitching => TEAM_PITCHING,
        }
    }

    pub fn player(kind: StatKind) -> Self {
        match kind {
            StatKind::Batting => PLAYER_BATTING,
            StatKind::Pitching => PLAYER_PITCHING,
        }
    }

    pub fn config(&self) -> ViewConfig {
        ViewConfig::new(self.visible.iter().copied(), self.sort)
            .with_filter(self.filter)
            .with_link(self.link)
    }
}

/// What a team or player command ends up showing.
#[derive(Debug)]
pub enum Page {
    /// Nothing to show beyond a message (unknown team).
    NotFound(&'static str),
    /// The lookup worked but the record request came back empty or failed.
    Empty { title: String, message: &'static str },
    Table { title: String, view: TableView },
}

/// Use the fetched records, or an empty set if the request failed.
pub fn records_or_empty(result: Result<RecordSet>, what: &str) -> RecordSet {
    result.unwrap_or_else(|e| {
        warn!(error = %e, "failed to fetch {}", what);
        RecordSet::default()
    })
}

/// Link `Name` to the player page for rows that carry a `playerID`.
pub fn link_player_names(records: &mut RecordSet) -> usize {
    records.set_links("Name", |r| {
        let id = r.get("playerID")?.to_string();
        if id.is_empty() {
            return None;
        }
        Some(Link {
            text: r.get("Name").map(|n| n.to_string()).unwrap_or_else(|| id.clone()),
            target: Route::Player(PlayerId::new(id)),
        })
    })
}

/// Show the franchise id in `Team` and link it to the team page.
pub fn link_franchises(records: &mut RecordSet) -> usize {
    records.set_links("Team", |r| {
        let id = r.get("franchID")?.to_string();
        if id.is_empty() {
            return None;
        }
        Some(Link {
            text: id.clone(),
            target: Route::Team(FranchiseId::new(id)),
        })
    })
}

/// Translate the view flags into actions, in order: columns, removes, adds,
/// moves, sort, minimum.
pub fn view_actions(view: &TableView, args: &ViewArgs) -> Result<Vec<Action>> {
    let mut actions = Vec::new();

    if let Some(columns) = &args.columns {
        for current in view.columns() {
            if !columns.contains(current) {
                actions.push(Action::RemoveColumn(current.clone()));
            }
        }
        for (idx, field) in columns.iter().enumerate() {
            actions.push(Action::AddColumn(field.clone()));
            actions.push(Action::RepositionColumn {
                field: field.clone(),
                position: idx + 1,
            });
        }
    }

    actions.extend(args.remove.iter().cloned().map(Action::RemoveColumn));
    actions.extend(args.add.iter().cloned().map(Action::AddColumn));
    actions.extend(args.moves.iter().map(|m| Action::RepositionColumn {
        field: m.field.clone(),
        position: m.position,
    }));

    if let Some(field) = &args.sort {
        actions.push(Action::SortBy {
            field: field.clone(),
            direction: args.direction,
        });
    }
    if let Some(min) = &args.min {
        actions.push(Action::SetThreshold(parse_threshold(min)?));
    }

    Ok(actions)
}

/// Apply the view flags to `view`, stopping at the first rejected action.
pub fn apply_view_args(view: &mut TableView, args: &ViewArgs) -> Result<()> {
    for action in view_actions(view, args)? {
        view.dispatch(action)?;
    }
    Ok(())
}

/// Print the table (text or JSON) and write the export if requested.
pub fn emit<W: Write>(view: &TableView, title: &str, args: &ViewArgs, out: &mut W) -> Result<()> {
    let rendered = view.render();
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rendered)?)?;
    } else {
        writeln!(out, "{}", title)?;
        write!(out, "{}", rendered.to_text())?;
    }

    if let Some(dir) = &args.export {
        if rendered.export_enabled {
            let snapshot = view.export_snapshot();
            let path = snapshot.save(dir)?;
            writeln!(out, "✓ Exported {} rows to {}", snapshot.rows.len(), path.display())?;
        } else {
            warn!("this table has no filter column, export is not offered");
        }
    }
    Ok(())
}
