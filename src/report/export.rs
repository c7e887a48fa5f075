//! Downloadable report archive.
//!
//! Packages the two report texts and the chart into a single ZIP artifact.
//! Pure packaging: no numeric or parsing logic, nothing persisted server-side.

use std::io::{Cursor, Write};

use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::model::ReportBundle;

pub const SUMMARY_ENTRY: &str = "summary_report.txt";
pub const DAILY_ENTRY: &str = "daily_report.txt";
pub const CHART_ENTRY: &str = "daily_intake_graph.png";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),
}

/// Produce the archive bytes: exactly three entries, two plain-text reports
/// and the chart PNG.
pub fn to_zip(bundle: &ReportBundle) -> Result<Vec<u8>, ExportError> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = ZipWriter::new(&mut cursor);
        let options = SimpleFileOptions::default();

        writer.start_file(SUMMARY_ENTRY, options)?;
        writer.write_all(bundle.summary_text.as_bytes())?;

        writer.start_file(DAILY_ENTRY, options)?;
        writer.write_all(bundle.daily_text.as_bytes())?;

        writer.start_file(CHART_ENTRY, options)?;
        writer.write_all(&bundle.chart_png)?;

        writer.finish()?;
    }
    Ok(cursor.into_inner())
}
