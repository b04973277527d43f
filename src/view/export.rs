//! CSV export of the rows a view currently shows.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::info;

use super::TableView;
use crate::{api::types::Record, error::Result};

/// File name every export is written to.
pub const EXPORT_FILE_NAME: &str = "baseballData.csv";

/// The filtered rows of a view, with the link column reduced to plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSnapshot {
    /// Visible columns in display order; the CSV header row.
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl TableView {
    /// Snapshot the rows that pass the filter, in display order.
    pub fn export_snapshot(&self) -> ExportSnapshot {
        let link_field = self.link_field.as_deref();
        let rows = self
            .visible_rows()
            .map(|record| {
                let mut row = record.clone();
                if let Some(value) = link_field.and_then(|f| row.get_mut(f)) {
                    *value = value.to_plain();
                }
                row
            })
            .collect();

        ExportSnapshot {
            headers: self.state.columns.clone(),
            rows,
        }
    }
}

impl ExportSnapshot {
    /// Write the header row and one line per row. Missing cells are empty.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(
                self.headers
                    .iter()
                    .map(|h| row.get(h).map(|v| v.to_string()).unwrap_or_default()),
            )?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write [`EXPORT_FILE_NAME`] into `dir`, creating it if needed.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(EXPORT_FILE_NAME);
        let file = fs::File::create(&path)?;
        self.write_csv(file)?;
        info!(path = %path.display(), rows = self.rows.len(), "exported table");
        Ok(path)
    }
}
