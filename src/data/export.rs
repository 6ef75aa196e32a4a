//! Export encoding: align all series into one row-per-index table and write
//! it as a spreadsheet workbook or CSV.
//!
//! Series may have unequal lengths; cells past the end of a series are
//! empty (missing), never zero. The shared x column carries the indices of
//! the longest series; on a length tie the first-declared series wins,
//! which is the same index run either way.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::data::series::{SampleStore, SeriesRef};
use crate::error::PlotError;

/// File format for raw data export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

/// One table row: the shared x index and one optional cell per series.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub x: u64,
    pub cells: Vec<Option<f64>>,
}

/// Flat row-aligned table ready for writing.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names: `x` followed by the series names in declaration order.
    pub header: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Build the aligned table for the given series, in the given column order.
///
/// The row count is the length of the longest series; an empty store yields
/// a header-only table with zero data rows.
pub fn build_table(store: &SampleStore, order: &[SeriesRef]) -> Table {
    let mut header = Vec::with_capacity(order.len() + 1);
    header.push("x".to_string());
    header.extend(order.iter().map(|s| s.0.clone()));

    let max_len = order.iter().map(|s| store.length(s)).max().unwrap_or(0);
    let mut rows = Vec::with_capacity(max_len);
    for x in 0..max_len as u64 {
        let cells = order
            .iter()
            .map(|s| {
                store
                    .values(s)
                    .and_then(|values| values.get(x as usize))
                    .copied()
            })
            .collect();
        rows.push(TableRow { x, cells });
    }
    Table { header, rows }
}

/// Write the table as CSV to any writer. Missing cells become empty fields.
pub fn write_csv<W: Write>(writer: W, table: &Table) -> Result<(), PlotError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&table.header)?;
    for row in &table.rows {
        let mut record = Vec::with_capacity(table.header.len());
        record.push(row.x.to_string());
        for cell in &row.cells {
            record.push(cell.map(|v| v.to_string()).unwrap_or_default());
        }
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the table as CSV to a file path.
pub fn write_csv_path<P: AsRef<Path>>(path: P, table: &Table) -> Result<(), PlotError> {
    let file = std::fs::File::create(path)?;
    write_csv(file, table)
}

/// Write the table as a single-sheet spreadsheet workbook.
///
/// All series share one sheet; missing cells are left blank. Splitting
/// series across per-series sheets breaks row alignment for consumers, so
/// it is deliberately not done.
pub fn write_xlsx_path<P: AsRef<Path>>(path: P, table: &Table) -> Result<(), PlotError> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Data")?;
    for (col, name) in table.header.iter().enumerate() {
        sheet.write_string(0, col as u16, name.as_str())?;
    }
    for (r, row) in table.rows.iter().enumerate() {
        let r = (r + 1) as u32;
        sheet.write_number(r, 0, row.x as f64)?;
        for (c, cell) in row.cells.iter().enumerate() {
            if let Some(value) = cell {
                sheet.write_number(r, (c + 1) as u16, *value)?;
            }
        }
    }
    workbook.save(path.as_ref())?;
    Ok(())
}

/// Write `table` to `path` in the requested format and return the path.
///
/// Failures surface as errors and leave the in-memory data untouched;
/// nothing is marked as saved here.
pub fn write_table<P: AsRef<Path>>(
    path: P,
    format: ExportFormat,
    table: &Table,
) -> Result<PathBuf, PlotError> {
    let path = path.as_ref();
    debug!(
        "exporting {} rows x {} columns to {:?} ({:?})",
        table.row_count(),
        table.column_count(),
        path,
        format
    );
    match format {
        ExportFormat::Csv => write_csv_path(path, table)?,
        ExportFormat::Xlsx => write_xlsx_path(path, table)?,
    }
    info!("exported data to {:?}", path);
    Ok(path.to_path_buf())
}

/// Timestamped default file name, e.g. `contplot_20250622_212100.xlsx`.
pub fn default_export_filename(format: ExportFormat) -> String {
    format!(
        "contplot_{}.{}",
        chrono::Local::now().format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}
