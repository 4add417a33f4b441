use chrono::NaiveDate;

use crate::model::config::Config;
use crate::model::task::TaskEntry;

/// Mail subject for a given day.
pub fn subject(today: NaiveDate) -> String {
    format!("Daily Status {}", today.format("%d/%m/%Y"))
}

/// Plain-text status document: flat entry lines in input order between a
/// dated greeting and a short signature. `today` is injected so output
/// is reproducible.
pub fn render_text(entries: &[TaskEntry], config: &Config, today: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Daily Status Update - {}\n\n",
        today.format("%d/%m/%Y")
    ));
    out.push_str(&format!("Hi {},\n\n", config.recipient));
    out.push_str(&format!(
        "Please find the below status update for today ({}):\n\n",
        today.format("%d%m%Y")
    ));
    for entry in entries {
        out.push_str(&text_line(entry));
        out.push('\n');
    }
    out.push_str("\nThanks,\n");
    let sig = &config.signature;
    for field in [&sig.name, &sig.mobile, &sig.email] {
        if !field.is_empty() {
            out.push_str(field);
            out.push('\n');
        }
    }
    out
}

fn text_line(entry: &TaskEntry) -> String {
    let type_part = if entry.has_visible_type() {
        format!(" ({})", entry.task_type)
    } else {
        String::new()
    };
    let label_part = entry
        .label
        .as_ref()
        .map(|l| format!(" [{}]", l))
        .unwrap_or_default();
    let comment_part = entry
        .comment
        .as_ref()
        .map(|c| format!(" - {}", c))
        .unwrap_or_default();
    format!(
        "[{}][{}] {} - {}{}{}{}",
        entry.main_project, entry.sub_project, entry.task, entry.status, type_part, label_part,
        comment_part
    )
}
