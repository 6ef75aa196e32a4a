//! Crate error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the host application.
///
/// Buffer and view operations are pure in-memory and infallible; everything
/// here is about export I/O or host-side resources. Export failures leave
/// the in-memory sample data untouched, so a retry is always possible.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The user dismissed the save dialog; not fatal, no data lost.
    #[error("no export file selected")]
    NoFileSelected,

    /// Filesystem-level failure while writing an export.
    #[error("export I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or write failure.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook build or write failure.
    #[error("workbook export failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// A decorative resource (e.g. a window icon) could not be loaded.
    /// Hosts must log this and continue with a default, never abort startup.
    #[error("failed to load resource {path:?}: {reason}")]
    ResourceLoad { path: PathBuf, reason: String },

    /// Configuration could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}
