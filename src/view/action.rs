//! View actions and the reducer that applies them.
//!
//! Every change to a table view is expressed as an [`Action`] and applied by
//! [`reduce`], which computes the next [`ViewState`] from the current one.
//! Actions that cannot be applied return an error and leave the state alone.

use std::str::FromStr;

use tracing::debug;

use super::{SortSpec, ViewState};
use crate::{
    api::types::RecordSet,
    cli::types::SortDirection,
    error::{BbError, Result},
};

/// A user request against a table view.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Set the minimum value for the filter column; `None` shows every row.
    SetThreshold(Option<f64>),
    SortBy {
        field: String,
        direction: SortDirection,
    },
    RemoveColumn(String),
    AddColumn(String),
    /// Move a visible column to a 1-based position, clamped to the column count.
    RepositionColumn { field: String, position: usize },
}

/// Parse a threshold as typed into the filter box. Blank input clears the threshold.
pub fn parse_threshold(input: &str) -> Result<Option<f64>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(BbError::InvalidThreshold {
            value: input.to_string(),
        }),
    }
}

impl FromStr for Action {
    type Err = BbError;

    /// Parse one line of the interactive session:
    ///
    /// - `sort <field> [asc|desc]`
    /// - `filter [<number>]`
    /// - `add <field>` / `remove <field>`
    /// - `move <field> <position>`
    ///
    /// Field names are everything between the verb and the trailing argument,
    /// so names with spaces work for `add` and `remove`.
    fn from_str(line: &str) -> Result<Self> {
        let invalid = || BbError::InvalidAction {
            input: line.trim().to_string(),
        };
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(v, r)| (v, r.trim()))
            .unwrap_or((line, ""));

        match verb.to_lowercase().as_str() {
            "filter" | "min" => Ok(Action::SetThreshold(parse_threshold(rest)?)),
            "add" if !rest.is_empty() => Ok(Action::AddColumn(rest.to_string())),
            "remove" | "rm" if !rest.is_empty() => Ok(Action::RemoveColumn(rest.to_string())),
            "sort" if !rest.is_empty() => match rest.rsplit_once(char::is_whitespace) {
                Some((field, dir)) if dir.parse::<SortDirection>().is_ok() => Ok(Action::SortBy {
                    field: field.trim().to_string(),
                    direction: dir.parse()?,
                }),
                _ => Ok(Action::SortBy {
                    field: rest.to_string(),
                    direction: SortDirection::Desc,
                }),
            },
            "move" => {
                let (field, position) = rest.rsplit_once(char::is_whitespace).ok_or_else(invalid)?;
                let position = position.parse().map_err(|_| invalid())?;
                Ok(Action::RepositionColumn {
                    field: field.trim().to_string(),
                    position,
                })
            }
            _ => Err(invalid()),
        }
    }
}

/// Order of record indices for `sort`, starting from `current`.
///
/// The sort is stable, so rows that tie keep their previous relative order.
pub fn sorted_order(records: &RecordSet, current: &[usize], sort: &SortSpec) -> Vec<usize> {
    let rows = records.records();
    let mut order = current.to_vec();
    order.sort_by(|&a, &b| {
        let ordering = match (rows[a].get(&sort.field), rows[b].get(&sort.field)) {
            (Some(x), Some(y)) => x.natural_cmp(y),
            (None, Some(_)) => std::cmp::Ordering::Less,
            (Some(_), None) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        };
        sort.direction.apply(ordering)
    });
    order
}

/// Compute the state that results from applying `action` to `state`.
pub fn reduce(records: &RecordSet, state: &ViewState, action: &Action) -> Result<ViewState> {
    let mut next = state.clone();

    match action {
        Action::SetThreshold(threshold) => {
            if let Some(t) = threshold {
                if !t.is_finite() {
                    return Err(BbError::InvalidThreshold {
                        value: t.to_string(),
                    });
                }
            }
            if let Some(filter) = next.filter.as_mut() {
                filter.threshold = *threshold;
            }
        }

        Action::SortBy { field, direction } => {
            if !records.has_field(field) {
                return Err(BbError::UnknownField {
                    field: field.clone(),
                });
            }
            next.sort = SortSpec {
                field: field.clone(),
                direction: *direction,
            };
            next.order = sorted_order(records, &state.order, &next.sort);
        }

        Action::RemoveColumn(field) => {
            next.columns.retain(|c| c != field);
        }

        Action::AddColumn(field) => {
            if !records.has_field(field) {
                return Err(BbError::UnknownField {
                    field: field.clone(),
                });
            }
            if !next.columns.contains(field) {
                next.columns.push(field.clone());
            }
        }

        Action::RepositionColumn { field, position } => {
            let current = next
                .columns
                .iter()
                .position(|c| c == field)
                .ok_or_else(|| BbError::ColumnNotVisible {
                    field: field.clone(),
                })?;
            let target = (*position).clamp(1, next.columns.len());
            let column = next.columns.remove(current);
            next.columns.insert(target - 1, column);
        }
    }

    debug!(?action, columns = ?next.columns, "applied view action");
    Ok(next)
}
