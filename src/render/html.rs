use crate::model::config::Config;
use crate::model::task::TaskEntry;
use crate::ops::group::GroupedTasks;

/// Error type for rendering
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("label '{0}' has no configured color")]
    UnknownLabelColor(String),
}

const BODY_OPEN: &str =
    "<!DOCTYPE html><html><body style=\"font-family: Calibri; color: #000; background-color: #fff;\">";

/// Render the mail body without a signature (the clipboard form).
pub fn render_body(grouped: &GroupedTasks<'_>, config: &Config) -> Result<String, RenderError> {
    render_document(grouped, config, None)
}

/// Render the full document, optionally with a pre-rendered signature
/// block placed before `</body>`. Output is deterministic for a given
/// grouping and config.
pub fn render_document(
    grouped: &GroupedTasks<'_>,
    config: &Config,
    signature: Option<&str>,
) -> Result<String, RenderError> {
    let mut out = String::new();
    out.push_str(BODY_OPEN);
    out.push('\n');
    out.push_str(&format!("<p>Hi {},</p>\n", config.recipient));
    out.push_str("<p>Please find below today's task updates:</p>\n");
    for (i, (main, subs)) in grouped.iter().enumerate() {
        out.push_str(&format!("<h4><u>{}. {}</u></h4>\n", i + 1, main));
        for (j, (sub, tasks)) in subs.iter().enumerate() {
            out.push_str(&format!("<h5>{}.{} {}</h5>\n<ul>\n", i + 1, j + 1, sub));
            for entry in tasks {
                out.push_str(&task_item(entry, config)?);
                out.push('\n');
            }
            out.push_str("</ul>\n");
        }
    }
    if let Some(sig) = signature {
        out.push_str(sig);
        out.push('\n');
    }
    out.push_str("</body></html>");
    Ok(out)
}

/// One `<li>` for a task: the colored status (with its type suffix),
/// the linked task text, and the label/comment subpoint if any.
fn task_item(entry: &TaskEntry, config: &Config) -> Result<String, RenderError> {
    let status_text = if entry.has_visible_type() {
        format!("{} ({})", entry.status, entry.task_type)
    } else {
        entry.status.to_string()
    };
    let mut item = format!(
        "<li><span style=\"color:{}\">{}</span> - {}",
        entry.status.color(),
        status_text,
        autolink(&entry.task)
    );
    if let Some(subpoint) = subpoint(entry, config)? {
        item.push_str(&subpoint);
    }
    item.push_str("</li>");
    Ok(item)
}

/// The nested annotation list under a task. Label and comment each get
/// their own colored span; either may stand alone. A label whose color
/// is missing from config is an error, not a default.
fn subpoint(entry: &TaskEntry, config: &Config) -> Result<Option<String>, RenderError> {
    let label_span = match &entry.label {
        Some(label) => {
            let color = config
                .label_color(label)
                .ok_or_else(|| RenderError::UnknownLabelColor(label.clone()))?;
            Some(format!("<span style=\"color:{}\">{}</span>", color, label))
        }
        None => None,
    };
    let comment_span = entry
        .comment
        .as_ref()
        .map(|c| format!("<span style=\"color:#666666\">{}</span>", autolink(c)));
    let inner = match (label_span, comment_span) {
        (Some(label), Some(comment)) => format!("{} - {}", label, comment),
        (Some(label), None) => label,
        (None, Some(comment)) => comment,
        (None, None) => return Ok(None),
    };
    Ok(Some(format!("<ul><li>{}</li></ul>", inner)))
}

/// Wrap URL-looking tokens in anchors. Texts without "http" anywhere
/// pass through byte-identical; otherwise the text is split on ASCII
/// whitespace and rejoined with single spaces, with every token that
/// starts with "http" wrapped. No URL validation beyond the prefix.
pub fn autolink(text: &str) -> String {
    if !text.contains("http") {
        return text.to_string();
    }
    text.split_ascii_whitespace()
        .map(|token| {
            if token.starts_with("http") {
                format!("<a href=\"{token}\">{token}</a>")
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
