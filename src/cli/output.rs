use serde::Serialize;

use crate::model::report::{Priority, ResultKind, TestReport};
use crate::model::task::{Status, TaskEntry};
use crate::ops::report_ops::display_date;
use crate::util::unicode::{display_width, pad_to_width};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct EntryJson {
    pub index: usize,
    pub main_project: String,
    pub sub_project: String,
    pub task: String,
    pub status: Status,
    pub task_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn entry_to_json(index: usize, entry: &TaskEntry) -> EntryJson {
    EntryJson {
        index,
        main_project: entry.main_project.clone(),
        sub_project: entry.sub_project.clone(),
        task: entry.task.clone(),
        status: entry.status,
        task_type: entry.task_type.clone(),
        label: entry.label.clone(),
        comment: entry.comment.clone(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// One entry as a single list line, in the same shape the text export
/// uses: `[main][sub] task - Status (Type) [Label] - comment`.
pub fn format_entry_line(entry: &TaskEntry) -> String {
    let mut line = format!(
        "[{}][{}] {} - {}",
        entry.main_project, entry.sub_project, entry.task, entry.status
    );
    if entry.has_visible_type() {
        line.push_str(&format!(" ({})", entry.task_type));
    }
    if let Some(ref label) = entry.label {
        line.push_str(&format!(" [{}]", label));
    }
    if let Some(ref comment) = entry.comment {
        line.push_str(&format!(" - {}", comment));
    }
    line
}

/// The full report state as printable lines.
pub fn format_report(report: &TestReport) -> Vec<String> {
    let d = &report.details;
    let mut lines = vec![
        format!("Title:         {}", report.display_title()),
        format!("Project:       {} {}", d.project_name, d.version),
        format!("Type of Test:  {}", d.test_type),
        format!("Browser:       {}", d.browser),
        format!("Change ID:     {}", d.change_id),
        format!("Environment:   {}", d.environment),
        format!(
            "Dates:         {} to {}",
            display_date(&d.start_date),
            display_date(&d.end_date)
        ),
        format!("Tester:        {}", d.tester),
        format!("Status:        {}", d.status),
    ];

    lines.push(String::new());
    lines.push("Test Cases Executed:".to_string());
    if report.test_cases.is_empty() {
        lines.push("  (none)".to_string());
    }
    for (i, case) in report.test_cases.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, case));
    }

    lines.push(String::new());
    lines.push("Results:".to_string());
    if report.results.is_empty() {
        lines.push("  (none)".to_string());
    } else {
        lines.extend(format_result_table(report));
    }

    lines.push(String::new());
    lines.push("Issues Identified:".to_string());
    if report.issues.is_empty() {
        lines.push("  (none)".to_string());
    }
    for (i, issue) in report.issues.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, issue));
    }

    lines.push(String::new());
    lines.push("Comments:".to_string());
    lines.push(format!("  notes:      {}", report.comments.notes));
    lines.push(format!("  remarks:    {}", report.comments.remarks));
    lines.push(format!("  conclusion: {}", report.comments.conclusion));

    lines
}

/// Result rows as an aligned table. Widths are display cells, so wide
/// characters in ticket IDs don't skew the columns.
fn format_result_table(report: &TestReport) -> Vec<String> {
    let headers = ["No", "Ticket", "Type", "Status", "Priority"];
    let rows: Vec<[String; 5]> = report
        .results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            [
                (i + 1).to_string(),
                r.ticket_id.clone(),
                r.kind.as_str().to_string(),
                r.status.clone(),
                r.priority.as_str().to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 5];
    for (w, header) in widths.iter_mut().zip(headers) {
        *w = header.len();
    }
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(display_width(cell));
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let render_row = |cells: [&str; 5]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| pad_to_width(cell, w))
            .collect();
        format!("  {}", padded.join("  ").trim_end())
    };
    lines.push(render_row(headers));
    for row in &rows {
        lines.push(render_row([&row[0], &row[1], &row[2], &row[3], &row[4]]));
    }
    lines
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a status string into Status
pub fn parse_status(s: &str) -> Result<Status, String> {
    match s {
        "completed" => Ok(Status::Completed),
        "in-progress" => Ok(Status::InProgress),
        "to-be-done" => Ok(Status::ToBeDone),
        "blocked" => Ok(Status::Blocked),
        _ => Err(format!(
            "unknown status '{}' (expected: completed, in-progress, to-be-done, blocked)",
            s
        )),
    }
}

/// Parse a result row type into ResultKind
pub fn parse_result_kind(s: &str) -> Result<ResultKind, String> {
    match s {
        "bug" => Ok(ResultKind::Bug),
        "change-request" => Ok(ResultKind::ChangeRequest),
        "feature" => Ok(ResultKind::Feature),
        _ => Err(format!(
            "unknown type '{}' (expected: bug, change-request, feature)",
            s
        )),
    }
}

/// Parse a priority string into Priority
pub fn parse_priority(s: &str) -> Result<Priority, String> {
    match s {
        "high" => Ok(Priority::High),
        "medium" => Ok(Priority::Medium),
        "low" => Ok(Priority::Low),
        _ => Err(format!(
            "unknown priority '{}' (expected: high, medium, low)",
            s
        )),
    }
}
