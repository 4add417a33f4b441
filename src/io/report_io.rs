use std::fs;
use std::path::Path;

use crate::io::paths::atomic_write;
use crate::io::tasks_io::StoreError;
use crate::model::report::TestReport;

/// Load the working test report. A missing file is a blank report.
pub fn load_report(path: &Path) -> Result<TestReport, StoreError> {
    if !path.exists() {
        return Ok(TestReport::default());
    }
    let content = fs::read_to_string(path).map_err(|e| StoreError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn save_report(path: &Path, report: &TestReport) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(report).map_err(StoreError::Serialize)?;
    atomic_write(path, content.as_bytes()).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
