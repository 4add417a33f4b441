use chrono::NaiveDate;

use crate::model::report::{TestReport, TestResultEntry};

/// Error type for report operations
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("malformed date '{0}' (expected dd/MM/yyyy)")]
    BadDate(String),
    #[error("unknown {field}: {value}")]
    UnknownVocab { field: &'static str, value: String },
    #[error("no item at position {0}")]
    BadIndex(usize),
}

/// Partial update for the details fields. `None` leaves a field alone;
/// an empty string clears it.
#[derive(Debug, Clone, Default)]
pub struct DetailsPatch {
    pub title: Option<String>,
    pub project_name: Option<String>,
    pub version: Option<String>,
    pub test_type: Option<String>,
    pub browser: Option<String>,
    pub change_id: Option<String>,
    pub environment: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub tester: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CommentsPatch {
    pub notes: Option<String>,
    pub remarks: Option<String>,
    pub conclusion: Option<String>,
}

// ---------------------------------------------------------------------------
// Details and comments
// ---------------------------------------------------------------------------

/// Apply a details patch. Every field is validated before anything is
/// written, so a failed patch leaves the report untouched. Dates arrive
/// `dd/MM/yyyy` and are stored `yyyy-MM-dd`.
pub fn apply_details(report: &mut TestReport, patch: DetailsPatch) -> Result<(), ReportError> {
    check_vocab("test type", &patch.test_type, &report.vocab.test_types)?;
    check_vocab("browser", &patch.browser, &report.vocab.browsers)?;
    check_vocab("environment", &patch.environment, &report.vocab.environments)?;
    check_vocab("status", &patch.status, &report.vocab.statuses)?;
    let start = patch.start_date.map(|d| store_date(&d)).transpose()?;
    let end = patch.end_date.map(|d| store_date(&d)).transpose()?;

    let details = &mut report.details;
    set_field(&mut details.title, patch.title);
    set_field(&mut details.project_name, patch.project_name);
    set_field(&mut details.version, patch.version);
    set_field(&mut details.test_type, patch.test_type);
    set_field(&mut details.browser, patch.browser);
    set_field(&mut details.change_id, patch.change_id);
    set_field(&mut details.environment, patch.environment);
    set_field(&mut details.start_date, start);
    set_field(&mut details.end_date, end);
    set_field(&mut details.tester, patch.tester);
    set_field(&mut details.status, patch.status);
    Ok(())
}

pub fn apply_comments(report: &mut TestReport, patch: CommentsPatch) {
    let comments = &mut report.comments;
    set_field(&mut comments.notes, patch.notes);
    set_field(&mut comments.remarks, patch.remarks);
    set_field(&mut comments.conclusion, patch.conclusion);
}

fn set_field(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn check_vocab(
    field: &'static str,
    value: &Option<String>,
    allowed: &[String],
) -> Result<(), ReportError> {
    match value {
        Some(v) if !v.is_empty() && !allowed.iter().any(|a| a == v) => {
            Err(ReportError::UnknownVocab {
                field,
                value: v.clone(),
            })
        }
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// `dd/MM/yyyy` input form → `yyyy-MM-dd` stored form.
pub fn store_date(input: &str) -> Result<String, ReportError> {
    NaiveDate::parse_from_str(input, "%d/%m/%Y")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| ReportError::BadDate(input.to_string()))
}

/// Stored form back to display form. Anything unparsable (including an
/// empty field) passes through unchanged so rendering never fails on it.
pub fn display_date(stored: &str) -> String {
    match NaiveDate::parse_from_str(stored, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => stored.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Results, test cases, issues (indices are 1-based, as displayed)
// ---------------------------------------------------------------------------

/// Append a result row. Ticket and status must be non-empty; row numbers
/// are derived from position, so nothing is assigned here.
pub fn add_result(report: &mut TestReport, entry: TestResultEntry) -> Result<(), ReportError> {
    let ticket_id = entry.ticket_id.trim().to_string();
    if ticket_id.is_empty() {
        return Err(ReportError::EmptyField("ticket id"));
    }
    let status = entry.status.trim().to_string();
    if status.is_empty() {
        return Err(ReportError::EmptyField("status"));
    }
    report.results.push(TestResultEntry {
        ticket_id,
        status,
        ..entry
    });
    Ok(())
}

pub fn remove_result(report: &mut TestReport, index: usize) -> Result<TestResultEntry, ReportError> {
    let slot = slot(report.results.len(), index)?;
    Ok(report.results.remove(slot))
}

pub fn add_test_case(report: &mut TestReport, text: &str) -> Result<(), ReportError> {
    push_line(&mut report.test_cases, text, "test case")
}

pub fn remove_test_case(report: &mut TestReport, index: usize) -> Result<String, ReportError> {
    let slot = slot(report.test_cases.len(), index)?;
    Ok(report.test_cases.remove(slot))
}

pub fn add_issue(report: &mut TestReport, text: &str) -> Result<(), ReportError> {
    push_line(&mut report.issues, text, "issue")
}

pub fn remove_issue(report: &mut TestReport, index: usize) -> Result<String, ReportError> {
    let slot = slot(report.issues.len(), index)?;
    Ok(report.issues.remove(slot))
}

fn push_line(list: &mut Vec<String>, text: &str, what: &'static str) -> Result<(), ReportError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ReportError::EmptyField(what));
    }
    list.push(text.to_string());
    Ok(())
}

fn slot(len: usize, index: usize) -> Result<usize, ReportError> {
    if index == 0 || index > len {
        return Err(ReportError::BadIndex(index));
    }
    Ok(index - 1)
}
