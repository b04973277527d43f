//! Tabular view engine.
//!
//! A [`TableView`] holds a [`RecordSet`] together with the transient state a
//! user builds up while looking at it: which columns are visible and in what
//! order, the minimum value for the filter column, and the sort column and
//! direction. The records themselves are never reordered; sorting maintains a
//! separate index into them.
//!
//! All state changes go through [`TableView::dispatch`], which applies one
//! [`Action`] at a time via the [`reduce`] function.
//!
//! # Examples
//!
//! ```rust
//! use bbstats::api::types::RecordSet;
//! use bbstats::view::{Action, TableView, ViewConfig};
//! use serde_json::json;
//!
//! let records = RecordSet::from_json(json!([
//!     {"Year": 2001, "G": 50, "Team": "A"},
//!     {"Year": 2002, "G": 10, "Team": "B"},
//! ]))
//! .unwrap();
//!
//! let config = ViewConfig::new(["Year", "Team"], "Year")
//!     .with_filter("G")
//!     .with_threshold(Some(20.0));
//! let mut view = TableView::new(records, config);
//! assert_eq!(view.visible_indices(), vec![0]);
//!
//! view.dispatch(Action::AddColumn("G".to_string())).unwrap();
//! assert_eq!(view.columns(), &["Year", "Team", "G"]);
//! ```

pub mod action;
pub mod export;
pub mod render;


use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    api::types::{Record, RecordSet},
    cli::types::SortDirection,
    error::Result,
};

pub use action::{parse_threshold, reduce, sorted_order, Action};
pub use export::{ExportSnapshot, EXPORT_FILE_NAME};
pub use render::{FilterControl, HeaderCell, MenuItem, RenderedTable};

/// Threshold a fresh view starts with.
pub const DEFAULT_THRESHOLD: f64 = 1.0;

/// Initial configuration supplied by the page hosting the table.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub visible_fields: Vec<String>,
    pub filter_field: Option<String>,
    pub sort_field: String,
    pub link_field: Option<String>,
    pub threshold: Option<f64>,
}

impl ViewConfig {
    pub fn new<I, S>(visible_fields: I, sort_field: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            visible_fields: visible_fields.into_iter().map(Into::into).collect(),
            filter_field: None,
            sort_field: sort_field.into(),
            link_field: None,
            threshold: Some(DEFAULT_THRESHOLD),
        }
    }

    pub fn with_filter(mut self, field: impl Into<String>) -> Self {
        self.filter_field = Some(field.into());
        self
    }

    pub fn with_link(mut self, field: impl Into<String>) -> Self {
        self.link_field = Some(field.into());
        self
    }

    pub fn with_threshold(mut self, threshold: Option<f64>) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Minimum-value predicate on one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSpec {
    pub field: String,
    pub threshold: Option<f64>,
}

impl FilterSpec {
    /// A record passes when its value for the filter column reads as a number
    /// that is at least the threshold. Without a threshold every record passes.
    pub fn passes(&self, record: &Record) -> bool {
        match self.threshold {
            None => true,
            Some(threshold) => record
                .get(&self.field)
                .and_then(|v| v.as_f64())
                .is_some_and(|v| v >= threshold),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Everything about a view that user actions can change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub columns: Vec<String>,
    pub filter: Option<FilterSpec>,
    pub sort: SortSpec,
    /// Record indices in display order (before filtering).
    pub order: Vec<usize>,
}

/// An interactive table over one record set.
#[derive(Debug, Clone)]
pub struct TableView {
    records: RecordSet,
    link_field: Option<String>,
    state: ViewState,
}

impl TableView {
    /// Build a view and apply the initial sort (descending).
    pub fn new(records: RecordSet, config: ViewConfig) -> Self {
        let mut columns: Vec<String> = Vec::with_capacity(config.visible_fields.len());
        for field in config.visible_fields {
            if !records.has_field(&field) {
                warn!(%field, "visible field not in record set, skipping");
            } else if !columns.contains(&field) {
                columns.push(field);
            }
        }

        let filter = match config.filter_field {
            Some(field) if records.has_field(&field) || records.is_empty() => Some(FilterSpec {
                field,
                threshold: config.threshold,
            }),
            Some(field) => {
                warn!(%field, "filter field not in record set, filtering disabled");
                None
            }
            None => None,
        };

        if !records.is_empty() && !records.has_field(&config.sort_field) {
            warn!(field = %config.sort_field, "sort field not in record set");
        }
        let sort = SortSpec {
            field: config.sort_field,
            direction: SortDirection::Desc,
        };
        let identity: Vec<usize> = (0..records.len()).collect();
        let order = sorted_order(&records, &identity, &sort);

        debug!(
            records = records.len(),
            fields = records.fields().len(),
            ?columns,
            "created table view"
        );

        Self {
            records,
            link_field: config.link_field,
            state: ViewState {
                columns,
                filter,
                sort,
                order,
            },
        }
    }

    /// Apply one action. On error the view is unchanged.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        self.state = reduce(&self.records, &self.state, &action)?;
        Ok(())
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn columns(&self) -> &[String] {
        &self.state.columns
    }

    pub fn filter(&self) -> Option<&FilterSpec> {
        self.state.filter.as_ref()
    }

    pub fn sort(&self) -> &SortSpec {
        &self.state.sort
    }

    pub fn link_field(&self) -> Option<&str> {
        self.link_field.as_deref()
    }

    /// Indices of the records that pass the filter, in display order.
    pub fn visible_indices(&self) -> Vec<usize> {
        let rows = self.records.records();
        self.state
            .order
            .iter()
            .copied()
            .filter(|&i| self.state.filter.as_ref().map_or(true, |f| f.passes(&rows[i])))
            .collect()
    }

    /// Records that pass the filter, in display order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &Record> + '_ {
        let rows = self.records.records();
        self.visible_indices().into_iter().map(move |i| &rows[i])
    }

    /// Fields that can be added back, in schema order.
    pub fn addable_fields(&self) -> Vec<&str> {
        self.records
            .fields()
            .iter()
            .filter(|f| !self.state.columns.contains(f))
            .map(|f| f.as_str())
            .collect()
    }
}
