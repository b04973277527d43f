//! Render model for a table view and its plain-text layout.

use rayon::prelude::*;
use serde::Serialize;

use super::TableView;
use crate::{
    api::types::{Record, Value},
    cli::types::SortDirection,
};

/// Below this many rows the cells are built on the current thread.
const PARALLEL_ROW_THRESHOLD: usize = 512;

/// Entry of a column header's menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum MenuItem {
    SortAscending,
    SortDescending,
    RemoveColumn,
    /// Position selector; `current` is the column's 1-based position.
    Position { current: usize, choices: Vec<usize> },
}

impl MenuItem {
    pub fn label(&self) -> String {
        match self {
            MenuItem::SortAscending => "Sort Ascending".to_string(),
            MenuItem::SortDescending => "Sort Descending".to_string(),
            MenuItem::RemoveColumn => "Remove Column".to_string(),
            MenuItem::Position { current, choices } => {
                format!("Change Col # (now {} of {})", current, choices.len())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderCell {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<SortDirection>,
    pub menu: Vec<MenuItem>,
}

/// The minimum-value input shown above the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterControl {
    pub label: String,
    pub field: String,
    pub threshold: Option<f64>,
}

/// Everything needed to draw one table view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterControl>,
    /// Export is offered alongside the filter control.
    pub export_enabled: bool,
    pub headers: Vec<HeaderCell>,
    /// Fields offered by the trailing "Add Column" header.
    pub add_column: Vec<String>,
    /// Body rows; each ends with an empty cell under the "Add Column" header.
    pub rows: Vec<Vec<Value>>,
}

fn row_cells(record: &Record, columns: &[String]) -> Vec<Value> {
    columns
        .iter()
        .map(|c| record.get(c).cloned().unwrap_or(Value::Null))
        .chain(std::iter::once(Value::Null))
        .collect()
}

impl TableView {
    /// Menu for a visible column; `None` if `field` is not shown.
    pub fn column_menu(&self, field: &str) -> Option<Vec<MenuItem>> {
        let index = self.state.columns.iter().position(|c| c == field)?;
        Some(self.menu_at(index))
    }

    fn menu_at(&self, index: usize) -> Vec<MenuItem> {
        let field = &self.state.columns[index];
        let sort = &self.state.sort;
        let mut menu = Vec::with_capacity(4);
        if !(sort.field == *field && sort.direction == SortDirection::Asc) {
            menu.push(MenuItem::SortAscending);
        }
        if !(sort.field == *field && sort.direction == SortDirection::Desc) {
            menu.push(MenuItem::SortDescending);
        }
        menu.push(MenuItem::RemoveColumn);
        menu.push(MenuItem::Position {
            current: index + 1,
            choices: (1..=self.state.columns.len()).collect(),
        });
        menu
    }

    /// Build the render model for the current state.
    pub fn render(&self) -> RenderedTable {
        let columns = &self.state.columns;
        let headers = columns
            .iter()
            .enumerate()
            .map(|(idx, field)| HeaderCell {
                field: field.clone(),
                sorted: (self.state.sort.field == *field).then_some(self.state.sort.direction),
                menu: self.menu_at(idx),
            })
            .collect();

        let rows = self.records.records();
        let visible = self.visible_indices();
        let body: Vec<Vec<Value>> = if visible.len() >= PARALLEL_ROW_THRESHOLD {
            visible
                .par_iter()
                .map(|&i| row_cells(&rows[i], columns))
                .collect()
        } else {
            visible.iter().map(|&i| row_cells(&rows[i], columns)).collect()
        };

        let filter = self.state.filter.as_ref().map(|f| FilterControl {
            label: format!("Min {} Filter", f.field),
            field: f.field.clone(),
            threshold: f.threshold,
        });

        RenderedTable {
            export_enabled: filter.is_some(),
            filter,
            headers,
            add_column: self.addable_fields().into_iter().map(String::from).collect(),
            rows: body,
        }
    }
}

impl RenderedTable {
    /// Lay the table out as aligned text columns.
    ///
    /// The active sort column carries a `^` (ascending) or `v` (descending)
    /// marker and the trailing "Add Column" header is drawn as `+`.
    pub fn to_text(&self) -> String {
        let mut titles: Vec<String> = self
            .headers
            .iter()
            .map(|h| match h.sorted {
                Some(SortDirection::Asc) => format!("{} ^", h.field),
                Some(SortDirection::Desc) => format!("{} v", h.field),
                None => h.field.clone(),
            })
            .collect();
        titles.push("+".to_string());

        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect();

        let mut widths: Vec<usize> = titles.iter().map(|t| t.chars().count()).collect();
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        if let Some(filter) = &self.filter {
            let threshold = filter.threshold.map(|t| t.to_string()).unwrap_or_default();
            out.push_str(&format!("{}: {}\n", filter.label, threshold));
        }

        out.push_str(&format_line(&titles, &widths));
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&format_line(&rule, &widths));
        for row in &cells {
            out.push_str(&format_line(row, &widths));
        }

        out.push_str(&format!("{} rows\n", self.rows.len()));
        if !self.add_column.is_empty() {
            out.push_str(&format!("Add column: {}\n", self.add_column.join(", ")));
        }
        out
    }
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n", line.trim_end())
}
