use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a test-result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultKind {
    Bug,
    #[serde(rename = "Change Request")]
    ChangeRequest,
    Feature,
}

impl ResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Bug => "Bug",
            ResultKind::ChangeRequest => "Change Request",
            ResultKind::Feature => "Feature",
        }
    }

    /// Cell color in the rendered results table.
    pub fn color(&self) -> &'static str {
        match self {
            ResultKind::Bug => "#EF5350",
            ResultKind::ChangeRequest => "#42A5F5",
            ResultKind::Feature => "#66BB6A",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the results table. The 1-based `No` column is derived from
/// list position, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResultEntry {
    pub ticket_id: String,
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub status: String,
    pub priority: Priority,
}

/// Report metadata. Dates are stored `yyyy-MM-dd` and rendered
/// `dd/MM/yyyy`; everything defaults to empty and the renderer decides
/// what an empty field looks like.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDetails {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub test_type: String,
    #[serde(default)]
    pub browser: String,
    #[serde(default)]
    pub change_id: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub tester: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportComments {
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub conclusion: String,
}

/// Selection vocabularies for the details fields. Stored with the report
/// so a hand-edited file can extend them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportVocab {
    #[serde(default = "default_browsers")]
    pub browsers: Vec<String>,
    #[serde(default = "default_environments")]
    pub environments: Vec<String>,
    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,
    #[serde(default = "default_test_types")]
    pub test_types: Vec<String>,
}

impl Default for ReportVocab {
    fn default() -> Self {
        ReportVocab {
            browsers: default_browsers(),
            environments: default_environments(),
            statuses: default_statuses(),
            test_types: default_test_types(),
        }
    }
}

fn default_browsers() -> Vec<String> {
    ["Chrome", "Firefox", "Edge", "Safari"]
        .map(str::to_string)
        .to_vec()
}

fn default_environments() -> Vec<String> {
    ["DEV", "QA", "UAT", "PROD"].map(str::to_string).to_vec()
}

fn default_statuses() -> Vec<String> {
    ["Passed", "Fail", "Blocked"].map(str::to_string).to_vec()
}

fn default_test_types() -> Vec<String> {
    [
        "Manual - Regression",
        "Manual - Smoke",
        "Automation",
        "Performance",
    ]
    .map(str::to_string)
    .to_vec()
}

/// The whole report store (report.json).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestReport {
    #[serde(default)]
    pub details: ReportDetails,
    #[serde(default)]
    pub test_cases: Vec<String>,
    #[serde(default)]
    pub results: Vec<TestResultEntry>,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub comments: ReportComments,
    #[serde(default)]
    pub vocab: ReportVocab,
}

impl TestReport {
    /// Header title with the fixed fallback for an unset field.
    pub fn display_title(&self) -> &str {
        if self.details.title.is_empty() {
            "Test Report"
        } else {
            &self.details.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_loads_defaults_and_vocab() {
        let report: TestReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report, TestReport::default());
        assert_eq!(report.vocab.browsers, ["Chrome", "Firefox", "Edge", "Safari"]);
        assert_eq!(report.vocab.environments, ["DEV", "QA", "UAT", "PROD"]);
        assert_eq!(report.vocab.statuses, ["Passed", "Fail", "Blocked"]);
        assert_eq!(
            report.vocab.test_types,
            [
                "Manual - Regression",
                "Manual - Smoke",
                "Automation",
                "Performance"
            ]
        );
        assert_eq!(report.display_title(), "Test Report");
    }

    #[test]
    fn test_result_entry_wire_form() {
        let entry = TestResultEntry {
            ticket_id: "JIRA-42".into(),
            kind: ResultKind::ChangeRequest,
            status: "Fail".into(),
            priority: Priority::High,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ticket_id": "JIRA-42",
                "type": "Change Request",
                "status": "Fail",
                "priority": "High",
            })
        );
        let back: TestResultEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_kind_colors() {
        assert_eq!(ResultKind::Bug.color(), "#EF5350");
        assert_eq!(ResultKind::ChangeRequest.color(), "#42A5F5");
        assert_eq!(ResultKind::Feature.color(), "#66BB6A");
    }
}
