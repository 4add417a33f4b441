use serde::{Deserialize, Serialize};

/// The task type that renders without a type suffix.
pub const TASK_TYPE_NORMAL: &str = "Normal";

/// One recorded status line: what was done, under which project, and how
/// far it got. Serialized as-is into tasks.json; `label` and `comment`
/// keys are omitted entirely when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    pub main_project: String,
    pub sub_project: String,
    /// Free-text description; becomes the bullet text in the rendered mail.
    pub task: String,
    pub status: Status,
    /// "Normal" means no visible type. Missing in files written by old
    /// versions, so it defaults on load.
    #[serde(default = "default_task_type")]
    pub task_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

fn default_task_type() -> String {
    TASK_TYPE_NORMAL.to_string()
}

impl TaskEntry {
    /// True when renderers should append the " (type)" suffix.
    /// The comparison is exact and case-sensitive: "normal" is a
    /// visible type, "Normal" is not.
    pub fn has_visible_type(&self) -> bool {
        self.task_type != TASK_TYPE_NORMAL
    }
}

/// Where a task stands. Old files used "Pending" for in-progress work
/// and spelled the names out with spaces; the aliases absorb both forms
/// on load, and the canonical names are written back on the next save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Completed,
    #[serde(alias = "Pending", alias = "In Progress")]
    InProgress,
    #[serde(alias = "To Be Done")]
    ToBeDone,
    Blocked,
}

impl Status {
    /// Fixed color used wherever the status is rendered in HTML.
    pub fn color(&self) -> &'static str {
        match self {
            Status::Completed => "#5e8f59",
            Status::InProgress => "#c06530",
            Status::ToBeDone => "#029de6",
            Status::Blocked => "#ff0000",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "Completed",
            Status::InProgress => "InProgress",
            Status::ToBeDone => "ToBeDone",
            Status::Blocked => "Blocked",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_as_canonical_name() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"InProgress\""
        );
        assert_eq!(
            serde_json::to_string(&Status::ToBeDone).unwrap(),
            "\"ToBeDone\""
        );
    }

    #[test]
    fn test_status_aliases_absorb_legacy_spellings() {
        let s: Status = serde_json::from_str("\"Pending\"").unwrap();
        assert_eq!(s, Status::InProgress);
        let s: Status = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(s, Status::InProgress);
        let s: Status = serde_json::from_str("\"To Be Done\"").unwrap();
        assert_eq!(s, Status::ToBeDone);
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        assert!(serde_json::from_str::<Status>("\"Done\"").is_err());
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(Status::Completed.color(), "#5e8f59");
        assert_eq!(Status::InProgress.color(), "#c06530");
        assert_eq!(Status::ToBeDone.color(), "#029de6");
        assert_eq!(Status::Blocked.color(), "#ff0000");
    }

    #[test]
    fn test_missing_task_type_defaults_to_normal() {
        let entry: TaskEntry = serde_json::from_str(
            r#"{"main_project":"Alpha","sub_project":"API","task":"Fix","status":"Completed"}"#,
        )
        .unwrap();
        assert_eq!(entry.task_type, TASK_TYPE_NORMAL);
        assert!(!entry.has_visible_type());
    }

    #[test]
    fn test_unset_label_and_comment_are_not_serialized() {
        let entry = TaskEntry {
            main_project: "Alpha".into(),
            sub_project: "API".into(),
            task: "Fix".into(),
            status: Status::Completed,
            task_type: TASK_TYPE_NORMAL.into(),
            label: None,
            comment: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("label"));
        assert!(!json.contains("comment"));
    }
}
