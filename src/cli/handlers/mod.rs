mod init;
pub use init::cmd_init;

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;

/// Global override for the data directory (set by -C flag)
static DATA_DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{config_io, export, paths, report_io, tasks_io};
use crate::mail::cf_html::ClipboardContent;
use crate::mail::clipboard::{ClipboardSink, SystemClipboard};
use crate::mail::dispatch;
use crate::mail::dispatch::{DispatchOutcome, ExternalMailClient, MailRequest, SystemOpener};
use crate::model::config::Config;
use crate::model::report::TestResultEntry;
use crate::ops::{group, notify, report_ops, task_ops};
use crate::render::html;
use crate::render::report::render_report;
use crate::render::signature::{render_signature, SignatureMode};
use crate::render::text;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    // Store -C override for data_dir()
    if let Some(dir) = cli.data_dir {
        DATA_DIR_OVERRIDE.lock().unwrap().replace(dir);
    }

    match cli.command {
        Commands::Init(args) => cmd_init(args),

        // Task list
        Commands::Add(args) => cmd_add(args),
        Commands::List => cmd_list(json),
        Commands::Edit(args) => cmd_edit(args),
        Commands::Delete(args) => cmd_delete(args),
        Commands::Move(args) => cmd_move(args),
        Commands::Clear(args) => cmd_clear(args),

        // Mail output
        Commands::Preview(args) => cmd_preview(args),
        Commands::Export(args) => cmd_export(args),
        Commands::Copy => cmd_copy(),
        Commands::Send => cmd_send(),
        Commands::Remind(args) => cmd_remind(args),

        // Test report
        Commands::Report(args) => cmd_report(args, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn data_dir() -> PathBuf {
    paths::resolve_data_dir(DATA_DIR_OVERRIDE.lock().unwrap().as_deref())
}

fn load_config(dir: &std::path::Path) -> Result<Config, config_io::ConfigIoError> {
    config_io::load_config(&paths::config_path(dir))
}

fn entry_draft(args: EntryArgs) -> Result<task_ops::EntryDraft, Box<dyn std::error::Error>> {
    let status = parse_status(&args.status).map_err(Box::<dyn std::error::Error>::from)?;
    Ok(task_ops::EntryDraft {
        main_project: args.main,
        sub_project: args.sub,
        task: args.task,
        status,
        task_type: args.task_type.unwrap_or_default(),
        label: args.label,
        comment: args.comment,
    })
}

// ---------------------------------------------------------------------------
// Task list handlers
// ---------------------------------------------------------------------------

fn cmd_add(args: EntryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dir = data_dir();
    let config = load_config(&dir)?;
    let tasks_path = paths::tasks_path(&dir);
    let mut entries = tasks_io::load_tasks(&tasks_path)?;

    task_ops::add(&mut entries, entry_draft(args)?, &config)?;
    tasks_io::save_tasks(&tasks_path, &entries)?;
    println!("added entry {}", entries.len());
    Ok(())
}

fn cmd_list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let entries = tasks_io::load_tasks(&paths::tasks_path(&data_dir()))?;

    if json {
        let items: Vec<EntryJson> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| entry_to_json(i + 1, entry))
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        if entries.is_empty() {
            println!("(no entries)");
        }
        for (i, entry) in entries.iter().enumerate() {
            println!("{:>3}  {}", i + 1, format_entry_line(entry));
        }
    }
    Ok(())
}

fn cmd_edit(args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dir = data_dir();
    let config = load_config(&dir)?;
    let tasks_path = paths::tasks_path(&dir);
    let mut entries = tasks_io::load_tasks(&tasks_path)?;

    task_ops::replace(&mut entries, args.index, entry_draft(args.entry)?, &config)?;
    tasks_io::save_tasks(&tasks_path, &entries)?;
    println!("replaced entry {}", args.index);
    Ok(())
}

fn cmd_delete(args: IndexArg) -> Result<(), Box<dyn std::error::Error>> {
    let tasks_path = paths::tasks_path(&data_dir());
    let mut entries = tasks_io::load_tasks(&tasks_path)?;

    let removed = task_ops::remove(&mut entries, args.index)?;
    tasks_io::save_tasks(&tasks_path, &entries)?;
    println!("removed {}", format_entry_line(&removed));
    Ok(())
}

fn cmd_move(args: MoveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tasks_path = paths::tasks_path(&data_dir());
    let mut entries = tasks_io::load_tasks(&tasks_path)?;

    match args.direction.as_str() {
        "up" => task_ops::move_up(&mut entries, args.index)?,
        "down" => task_ops::move_down(&mut entries, args.index)?,
        other => {
            return Err(format!("unknown direction '{}' (expected: up, down)", other).into());
        }
    }
    tasks_io::save_tasks(&tasks_path, &entries)?;
    println!("moved entry {} {}", args.index, args.direction);
    Ok(())
}

fn cmd_clear(args: ClearArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tasks_path = paths::tasks_path(&data_dir());
    let mut entries = tasks_io::load_tasks(&tasks_path)?;

    if entries.is_empty() {
        println!("(no entries)");
        return Ok(());
    }

    if !args.yes {
        eprint!("Delete all {} entries? [y/n] ", entries.len());
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("cancelled");
            return Ok(());
        }
    }

    let count = entries.len();
    task_ops::clear(&mut entries);
    tasks_io::save_tasks(&tasks_path, &entries)?;
    println!("cleared {} entries", count);
    Ok(())
}

// ---------------------------------------------------------------------------
// Mail output handlers
// ---------------------------------------------------------------------------

fn cmd_preview(args: PreviewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dir = data_dir();
    let config = load_config(&dir)?;
    let entries = tasks_io::load_tasks(&paths::tasks_path(&dir))?;
    if entries.is_empty() {
        return Err("no entries to preview".into());
    }

    let grouped = group::group(&entries);
    let signature = render_signature(&config, SignatureMode::Preview);
    let html = html::render_document(&grouped, &config, Some(&signature))?;

    let path = export::write_temp_html(&html)?;
    log::info!("preview written to {}", path.display());
    if args.no_open {
        println!("{}", path.display());
    } else {
        export::open_in_browser(&path)?;
        println!("preview opened: {}", path.display());
    }
    Ok(())
}

fn cmd_export(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dir = data_dir();
    let config = load_config(&dir)?;
    let entries = tasks_io::load_tasks(&paths::tasks_path(&dir))?;
    if entries.is_empty() {
        return Err("no entries to export".into());
    }
    let today = Local::now().date_naive();

    let (content, ext) = match args.format.as_str() {
        "html" => {
            let grouped = group::group(&entries);
            let signature = render_signature(&config, SignatureMode::Standard);
            let document = html::render_document(&grouped, &config, Some(&signature))?;
            (document, "html")
        }
        "text" => (text::render_text(&entries, &config, today), "txt"),
        other => {
            return Err(format!("unknown format '{}' (expected: html, text)", other).into());
        }
    };

    let path = match args.out {
        Some(path) => path,
        None => PathBuf::from(export::default_export_name(ext, today)),
    };
    export::write_export(&path, &content)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn cmd_copy() -> Result<(), Box<dyn std::error::Error>> {
    let dir = data_dir();
    let config = load_config(&dir)?;
    let entries = tasks_io::load_tasks(&paths::tasks_path(&dir))?;
    if entries.is_empty() {
        return Err("no entries to copy".into());
    }

    let grouped = group::group(&entries);
    let body = html::render_body(&grouped, &config)?;
    let mut clipboard = SystemClipboard;
    clipboard.write(&ClipboardContent::from_html(body))?;
    println!("copied to clipboard");
    Ok(())
}

fn cmd_send() -> Result<(), Box<dyn std::error::Error>> {
    let dir = data_dir();
    let config = load_config(&dir)?;
    let entries = tasks_io::load_tasks(&paths::tasks_path(&dir))?;
    if entries.is_empty() {
        return Err("no entries to send".into());
    }
    if config.email.to.trim().is_empty() {
        return Err("no 'to' address configured (set [email] in config.toml)".into());
    }

    let grouped = group::group(&entries);
    let body = html::render_body(&grouped, &config)?;
    let signature = render_signature(&config, SignatureMode::Standard);
    let full = html::render_document(&grouped, &config, Some(&signature))?;
    let today = Local::now().date_naive();

    let request = MailRequest::new(text::subject(today), &config, full, body);
    let outcome = dispatch::dispatch(
        &request,
        &mut SystemClipboard,
        &mut SystemOpener,
        &mut ExternalMailClient::new_client(&config),
        &mut ExternalMailClient::classic_client(&config),
    )?;
    match outcome {
        DispatchOutcome::Mailto => println!("draft opened in the default mail client"),
        DispatchOutcome::NewClient => println!("draft opened via the configured client"),
        DispatchOutcome::ClassicClient => println!("draft opened via the fallback client"),
    }
    Ok(())
}

fn cmd_remind(args: RemindArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dir = data_dir();
    let config = load_config(&dir)?;
    let time = config
        .notify
        .parsed_time()
        .ok_or_else(|| format!("malformed notify time '{}'", config.notify.time))?;

    if !args.watch {
        if notify::reminder_due(time, Local::now().naive_local()) {
            println!("time to send your status mail");
        } else {
            println!("reminder set for {} on weekdays", config.notify.time);
        }
        return Ok(());
    }

    log::info!("watching for the {} reminder", config.notify.time);
    loop {
        let now = Local::now().naive_local();
        if notify::reminder_due(time, now) {
            log::info!("reminder fired at {}", now.format("%H:%M"));
            println!("time to send your status mail");
            return Ok(());
        }
        std::thread::sleep(std::time::Duration::from_secs(args.interval));
    }
}

// ---------------------------------------------------------------------------
// Test report handlers
// ---------------------------------------------------------------------------

fn cmd_report(cmd: ReportCmd, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    match cmd.action {
        ReportAction::Set(a) => cmd_report_set(a),
        ReportAction::Case(c) => match c.action {
            LineAction::Add(a) => cmd_report_case_add(a),
            LineAction::Rm(a) => cmd_report_case_rm(a),
        },
        ReportAction::Result(c) => match c.action {
            ResultAction::Add(a) => cmd_report_result_add(a),
            ResultAction::Rm(a) => cmd_report_result_rm(a),
        },
        ReportAction::Issue(c) => match c.action {
            LineAction::Add(a) => cmd_report_issue_add(a),
            LineAction::Rm(a) => cmd_report_issue_rm(a),
        },
        ReportAction::Comments(a) => cmd_report_comments(a),
        ReportAction::Show => cmd_report_show(json),
        ReportAction::Generate(a) => cmd_report_generate(a),
    }
}

fn cmd_report_set(args: ReportSetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = paths::report_path(&data_dir());
    let mut report = report_io::load_report(&path)?;

    let patch = report_ops::DetailsPatch {
        title: args.title,
        project_name: args.project,
        version: args.version,
        test_type: args.test_type,
        browser: args.browser,
        change_id: args.change_id,
        environment: args.environment,
        start_date: args.start_date,
        end_date: args.end_date,
        tester: args.tester,
        status: args.status,
    };
    report_ops::apply_details(&mut report, patch)?;
    report_io::save_report(&path, &report)?;
    println!("details updated");
    Ok(())
}

fn cmd_report_case_add(args: LineAddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = paths::report_path(&data_dir());
    let mut report = report_io::load_report(&path)?;

    report_ops::add_test_case(&mut report, &args.text)?;
    report_io::save_report(&path, &report)?;
    println!("test case added ({} total)", report.test_cases.len());
    Ok(())
}

fn cmd_report_case_rm(args: IndexArg) -> Result<(), Box<dyn std::error::Error>> {
    let path = paths::report_path(&data_dir());
    let mut report = report_io::load_report(&path)?;

    let removed = report_ops::remove_test_case(&mut report, args.index)?;
    report_io::save_report(&path, &report)?;
    println!("removed test case: {}", removed);
    Ok(())
}

fn cmd_report_result_add(args: ResultAddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = paths::report_path(&data_dir());
    let mut report = report_io::load_report(&path)?;

    let kind = parse_result_kind(&args.kind).map_err(Box::<dyn std::error::Error>::from)?;
    let priority = parse_priority(&args.priority).map_err(Box::<dyn std::error::Error>::from)?;
    if !report.vocab.statuses.iter().any(|s| s == &args.status) {
        return Err(format!(
            "unknown status '{}' (expected: {})",
            args.status,
            report.vocab.statuses.join(", ")
        )
        .into());
    }

    report_ops::add_result(
        &mut report,
        TestResultEntry {
            ticket_id: args.ticket,
            kind,
            status: args.status,
            priority,
        },
    )?;
    report_io::save_report(&path, &report)?;
    println!("result added ({} rows)", report.results.len());
    Ok(())
}

fn cmd_report_result_rm(args: IndexArg) -> Result<(), Box<dyn std::error::Error>> {
    let path = paths::report_path(&data_dir());
    let mut report = report_io::load_report(&path)?;

    let removed = report_ops::remove_result(&mut report, args.index)?;
    report_io::save_report(&path, &report)?;
    println!("removed result: {}", removed.ticket_id);
    Ok(())
}

fn cmd_report_issue_add(args: LineAddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = paths::report_path(&data_dir());
    let mut report = report_io::load_report(&path)?;

    report_ops::add_issue(&mut report, &args.text)?;
    report_io::save_report(&path, &report)?;
    println!("issue added ({} total)", report.issues.len());
    Ok(())
}

fn cmd_report_issue_rm(args: IndexArg) -> Result<(), Box<dyn std::error::Error>> {
    let path = paths::report_path(&data_dir());
    let mut report = report_io::load_report(&path)?;

    let removed = report_ops::remove_issue(&mut report, args.index)?;
    report_io::save_report(&path, &report)?;
    println!("removed issue: {}", removed);
    Ok(())
}

fn cmd_report_comments(args: CommentsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = paths::report_path(&data_dir());
    let mut report = report_io::load_report(&path)?;

    report_ops::apply_comments(
        &mut report,
        report_ops::CommentsPatch {
            notes: args.notes,
            remarks: args.remarks,
            conclusion: args.conclusion,
        },
    );
    report_io::save_report(&path, &report)?;
    println!("comments updated");
    Ok(())
}

fn cmd_report_show(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let report = report_io::load_report(&paths::report_path(&data_dir()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in format_report(&report) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_report_generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let report = report_io::load_report(&paths::report_path(&data_dir()))?;
    let html = render_report(&report, Local::now().naive_local());

    let path = match args.out {
        Some(path) => {
            export::write_export(&path, &html)?;
            path
        }
        None => export::write_temp_html(&html)?,
    };
    log::info!("report written to {}", path.display());
    if args.no_open {
        println!("{}", path.display());
    } else {
        export::open_in_browser(&path)?;
        println!("report opened: {}", path.display());
    }
    Ok(())
}
