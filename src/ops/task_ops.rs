use crate::model::config::Config;
use crate::model::task::{Status, TaskEntry, TASK_TYPE_NORMAL};

/// Error type for entry operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("unknown main project: {0}")]
    UnknownMainProject(String),
    #[error("unknown sub-project under {main}: {sub}")]
    UnknownSubProject { main: String, sub: String },
    #[error("unknown label: {0}")]
    UnknownLabel(String),
    #[error("a label requires a comment")]
    LabelRequiresComment,
    #[error("unknown task type: {0}")]
    UnknownTaskType(String),
    #[error("no entry at position {0}")]
    BadIndex(usize),
    #[error("cannot move the first entry up")]
    CannotMoveUp,
    #[error("cannot move the last entry down")]
    CannotMoveDown,
}

/// An unvalidated entry as collected from the CLI. [`validate_entry`]
/// turns it into a [`TaskEntry`] or says why it can't.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub main_project: String,
    pub sub_project: String,
    pub task: String,
    pub status: Status,
    pub task_type: String,
    pub label: Option<String>,
    pub comment: Option<String>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check a draft against the configured vocabularies. Whitespace-only
/// optional fields count as absent; an empty task type means "Normal".
pub fn validate_entry(draft: EntryDraft, config: &Config) -> Result<TaskEntry, TaskError> {
    let main = draft.main_project.trim().to_string();
    if main.is_empty() {
        return Err(TaskError::EmptyField("main project"));
    }
    let subs = config
        .sub_projects(&main)
        .ok_or_else(|| TaskError::UnknownMainProject(main.clone()))?;

    let sub = draft.sub_project.trim().to_string();
    if sub.is_empty() {
        return Err(TaskError::EmptyField("sub-project"));
    }
    if !subs.iter().any(|s| s == &sub) {
        return Err(TaskError::UnknownSubProject { main, sub });
    }

    let task = draft.task.trim().to_string();
    if task.is_empty() {
        return Err(TaskError::EmptyField("task"));
    }

    let label = normalize_opt(draft.label);
    let comment = normalize_opt(draft.comment);
    if let Some(ref label) = label {
        if config.label_color(label).is_none() {
            return Err(TaskError::UnknownLabel(label.clone()));
        }
        if comment.is_none() {
            return Err(TaskError::LabelRequiresComment);
        }
    }

    let task_type = draft.task_type.trim().to_string();
    let task_type = if task_type.is_empty() {
        TASK_TYPE_NORMAL.to_string()
    } else if task_type == TASK_TYPE_NORMAL || config.task_types.iter().any(|t| t == &task_type) {
        task_type
    } else {
        return Err(TaskError::UnknownTaskType(task_type));
    };

    Ok(TaskEntry {
        main_project: main,
        sub_project: sub,
        task,
        status: draft.status,
        task_type,
        label,
        comment,
    })
}

fn normalize_opt(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// List operations (indices are 1-based, as displayed by `list`)
// ---------------------------------------------------------------------------

pub fn add(
    entries: &mut Vec<TaskEntry>,
    draft: EntryDraft,
    config: &Config,
) -> Result<(), TaskError> {
    entries.push(validate_entry(draft, config)?);
    Ok(())
}

pub fn replace(
    entries: &mut [TaskEntry],
    index: usize,
    draft: EntryDraft,
    config: &Config,
) -> Result<(), TaskError> {
    let slot = slot(entries.len(), index)?;
    entries[slot] = validate_entry(draft, config)?;
    Ok(())
}

pub fn remove(entries: &mut Vec<TaskEntry>, index: usize) -> Result<TaskEntry, TaskError> {
    let slot = slot(entries.len(), index)?;
    Ok(entries.remove(slot))
}

pub fn move_up(entries: &mut [TaskEntry], index: usize) -> Result<(), TaskError> {
    let slot = slot(entries.len(), index)?;
    if slot == 0 {
        return Err(TaskError::CannotMoveUp);
    }
    entries.swap(slot - 1, slot);
    Ok(())
}

pub fn move_down(entries: &mut [TaskEntry], index: usize) -> Result<(), TaskError> {
    let slot = slot(entries.len(), index)?;
    if slot + 1 == entries.len() {
        return Err(TaskError::CannotMoveDown);
    }
    entries.swap(slot, slot + 1);
    Ok(())
}

pub fn clear(entries: &mut Vec<TaskEntry>) {
    entries.clear();
}

fn slot(len: usize, index: usize) -> Result<usize, TaskError> {
    if index == 0 || index > len {
        return Err(TaskError::BadIndex(index));
    }
    Ok(index - 1)
}
