use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::io::paths::atomic_write;
use crate::io::tasks_io::StoreError;

/// Default export filename, `Daily_Status_<ddMMyyyy>.<ext>`.
pub fn default_export_name(ext: &str, today: NaiveDate) -> String {
    format!("Daily_Status_{}.{}", today.format("%d%m%Y"), ext)
}

/// Write an export file atomically at the given path.
pub fn write_export(path: &Path, content: &str) -> Result<(), StoreError> {
    atomic_write(path, content.as_bytes()).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write HTML to a kept temp file for the browser to pick up. The file
/// outlives the process on purpose; the browser reads it after we exit.
pub fn write_temp_html(html: &str) -> std::io::Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix("eod-preview-")
        .suffix(".html")
        .tempfile()?;
    file.write_all(html.as_bytes())?;
    file.flush()?;
    let (_, path) = file.keep().map_err(|e| e.error)?;
    Ok(path)
}

/// Hand a file to the default browser / opener.
pub fn open_in_browser(path: &Path) -> std::io::Result<()> {
    open::that(path)
}
