//! End-to-end pipeline tests: drafts are validated against a config,
//! grouped, and rendered into the mail document and its companions.

use chrono::NaiveDate;
use eodmail::io::export::default_export_name;
use eodmail::mail::cf_html::ClipboardContent;
use eodmail::model::config::Config;
use eodmail::model::task::{Status, TaskEntry};
use eodmail::ops::group::group;
use eodmail::ops::task_ops::{validate_entry, EntryDraft};
use eodmail::render::html::{render_body, render_document};
use eodmail::render::signature::{render_signature, SignatureMode};
use eodmail::render::text;
use pretty_assertions::assert_eq;

fn pipeline_config() -> Config {
    let config: Config = toml::from_str(
        r##"
        recipient = "Priya"

        [projects]
        Alpha = ["API", "UI"]
        Beta = ["Core"]

        [labels]
        "Client Call" = "#aa00ff"

        [signature]
        name = "Asha Nair"
        mobile = "+91 98765 43210"
        email = "asha@example.com"
        company = "Caparizon Software Ltd"
        website = "https://caparizon.com"
        "##,
    )
    .unwrap();
    config.validate().unwrap();
    config
}

fn draft(main: &str, sub: &str, task: &str, status: Status, task_type: &str) -> EntryDraft {
    EntryDraft {
        main_project: main.to_string(),
        sub_project: sub.to_string(),
        task: task.to_string(),
        status,
        task_type: task_type.to_string(),
        label: None,
        comment: None,
    }
}

/// The day's entries as they would exist after four `add` commands.
fn sample_entries(config: &Config) -> Vec<TaskEntry> {
    let mut flagged = draft("Alpha", "API", "Fix flaky login", Status::InProgress, "");
    flagged.label = Some("Client Call".to_string());
    flagged.comment = Some("retest after the deploy".to_string());

    let mut linked = draft("Beta", "Core", "Baseline load test", Status::Blocked, "Test");
    linked.comment = Some("see https://ci.example/run/91".to_string());

    [
        draft(
            "Alpha",
            "API",
            "Implemented cursor pagination",
            Status::Completed,
            "Dev",
        ),
        flagged,
        draft("Alpha", "UI", "Polish empty states", Status::ToBeDone, ""),
        linked,
    ]
    .into_iter()
    .map(|d| validate_entry(d, config).unwrap())
    .collect()
}

// ============================================================================
// Full document
// ============================================================================

#[test]
fn full_document_with_signature() {
    let config = pipeline_config();
    let entries = sample_entries(&config);
    let grouped = group(&entries);
    let signature = render_signature(&config, SignatureMode::Standard);
    let html = render_document(&grouped, &config, Some(&signature)).unwrap();

    assert_eq!(
        html,
        "<!DOCTYPE html><html><body style=\"font-family: Calibri; color: #000; background-color: #fff;\">\n\
         <p>Hi Priya,</p>\n\
         <p>Please find below today's task updates:</p>\n\
         <h4><u>1. Alpha</u></h4>\n\
         <h5>1.1 API</h5>\n\
         <ul>\n\
         <li><span style=\"color:#5e8f59\">Completed (Dev)</span> - Implemented cursor pagination</li>\n\
         <li><span style=\"color:#c06530\">InProgress</span> - Fix flaky login\
         <ul><li><span style=\"color:#aa00ff\">Client Call</span> - \
         <span style=\"color:#666666\">retest after the deploy</span></li></ul></li>\n\
         </ul>\n\
         <h5>1.2 UI</h5>\n\
         <ul>\n\
         <li><span style=\"color:#029de6\">ToBeDone</span> - Polish empty states</li>\n\
         </ul>\n\
         <h4><u>2. Beta</u></h4>\n\
         <h5>2.1 Core</h5>\n\
         <ul>\n\
         <li><span style=\"color:#ff0000\">Blocked (Test)</span> - Baseline load test\
         <ul><li><span style=\"color:#666666\">see \
         <a href=\"https://ci.example/run/91\">https://ci.example/run/91</a></span></li></ul></li>\n\
         </ul>\n\
         <p><br>--<br>Thanks & Regards,\
         <br><b>Asha Nair</b>\
         <br>Caparizon Software Ltd\
         <br>Mobile: +91 98765 43210\
         <br><a href=\"mailto:asha@example.com\">asha@example.com</a>\
         <br><a href=\"https://caparizon.com\">caparizon.com</a></p>\n\
         </body></html>"
    );
}

// ============================================================================
// Clipboard companion
// ============================================================================

#[test]
fn clipboard_body_skips_the_signature() {
    let config = pipeline_config();
    let entries = sample_entries(&config);
    let grouped = group(&entries);

    let signature = render_signature(&config, SignatureMode::Standard);
    let full = render_document(&grouped, &config, Some(&signature)).unwrap();
    let body = render_body(&grouped, &config).unwrap();

    assert!(full.contains("Thanks & Regards,"));
    assert!(!body.contains("Thanks & Regards,"));

    let content = ClipboardContent::from_html(body.clone());
    let start = offset(&content.cf_html, "StartFragment:");
    let end = offset(&content.cf_html, "EndFragment:");
    assert_eq!(&content.cf_html[start..end], body.as_bytes());

    assert!(content.text.contains("Fix flaky login"));
    assert!(!content.text.contains('<'));
}

fn offset(buf: &[u8], key: &str) -> usize {
    let text = std::str::from_utf8(buf).unwrap();
    let start = text.find(key).unwrap() + key.len();
    text[start..start + 8].parse().unwrap()
}

// ============================================================================
// Grouping and numbering
// ============================================================================

#[test]
fn numbering_follows_first_seen_order() {
    let config = pipeline_config();
    let entries: Vec<TaskEntry> = [
        draft("Beta", "Core", "one", Status::Completed, ""),
        draft("Alpha", "API", "two", Status::Completed, ""),
        draft("Beta", "Core", "three", Status::Completed, ""),
        draft("Alpha", "UI", "four", Status::Completed, ""),
    ]
    .into_iter()
    .map(|d| validate_entry(d, &config).unwrap())
    .collect();

    let html = render_body(&group(&entries), &config).unwrap();
    assert!(html.contains("<h4><u>1. Beta</u></h4>"));
    assert!(html.contains("<h4><u>2. Alpha</u></h4>"));
    assert!(html.contains("<h5>2.2 UI</h5>"));

    let beta = html.find("1. Beta").unwrap();
    let alpha = html.find("2. Alpha").unwrap();
    assert!(beta < alpha);
}

// ============================================================================
// Companions share the day
// ============================================================================

#[test]
fn subject_and_export_name_share_the_date() {
    let day = NaiveDate::from_ymd_opt(2026, 8, 21).unwrap();
    assert_eq!(text::subject(day), "Daily Status 21/08/2026");
    assert_eq!(default_export_name("html", day), "Daily_Status_21082026.html");
    assert_eq!(default_export_name("txt", day), "Daily_Status_21082026.txt");
}

#[test]
fn text_export_lists_every_entry() {
    let config = pipeline_config();
    let entries = sample_entries(&config);
    let day = NaiveDate::from_ymd_opt(2026, 8, 21).unwrap();

    let doc = text::render_text(&entries, &config, day);
    assert!(doc.starts_with("Daily Status Update - 21/08/2026\n"));
    assert!(doc.contains("Hi Priya,"));
    for entry in &entries {
        assert!(doc.contains(&entry.task));
    }
    assert!(doc.contains("[Alpha][API] Fix flaky login - InProgress [Client Call] - retest after the deploy"));
}
