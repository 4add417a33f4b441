use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "eod", about = concat!("[@] eod v", env!("CARGO_PKG_VERSION"), " - your status mail, assembled from the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter config.toml in the data directory
    Init(InitArgs),
    /// Add a task entry to today's list
    Add(EntryArgs),
    /// List today's entries
    List,
    /// Replace an entry (same fields as add)
    Edit(EditArgs),
    /// Delete an entry
    Delete(IndexArg),
    /// Move an entry up or down
    Move(MoveArgs),
    /// Delete every entry
    Clear(ClearArgs),
    /// Render the mail with the preview signature and open it in a browser
    Preview(PreviewArgs),
    /// Write the mail to a file
    Export(ExportArgs),
    /// Copy the formatted mail to the clipboard
    Copy,
    /// Copy to the clipboard and open a mail client with the draft
    Send,
    /// Check the end-of-day reminder, or wait for it
    Remind(RemindArgs),
    /// Build and render the QA test report
    Report(ReportCmd),
}

// ---------------------------------------------------------------------------
// Init args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config.toml
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Task list args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct EntryArgs {
    /// Main project (as configured)
    pub main: String,
    /// Sub-project under the main project
    pub sub: String,
    /// What was done
    pub task: String,
    /// Status: completed, in-progress, to-be-done, blocked
    #[arg(long, default_value = "completed")]
    pub status: String,
    /// Task type (omitted means the invisible "Normal")
    #[arg(long = "type")]
    pub task_type: Option<String>,
    /// Label from the configured set (requires --comment)
    #[arg(long)]
    pub label: Option<String>,
    /// Sub-point shown under the task line
    #[arg(long)]
    pub comment: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Position to replace (1-based, as shown by `list`)
    pub index: usize,
    #[command(flatten)]
    pub entry: EntryArgs,
}

#[derive(Args)]
pub struct IndexArg {
    /// Position (1-based, as shown by `list`)
    pub index: usize,
}

#[derive(Args)]
pub struct MoveArgs {
    /// Position (1-based, as shown by `list`)
    pub index: usize,
    /// Direction: up or down
    pub direction: String,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}

// ---------------------------------------------------------------------------
// Output args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct PreviewArgs {
    /// Print the file path instead of opening a browser
    #[arg(long)]
    pub no_open: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Format: html or text
    pub format: String,
    /// Write here instead of Daily_Status_<date> in the current directory
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct RemindArgs {
    /// Keep checking until the reminder fires
    #[arg(long)]
    pub watch: bool,
    /// Seconds between checks in watch mode
    #[arg(long, default_value = "60")]
    pub interval: u64,
}

// ---------------------------------------------------------------------------
// Test report
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ReportCmd {
    #[command(subcommand)]
    pub action: ReportAction,
}

#[derive(Subcommand)]
pub enum ReportAction {
    /// Set report detail fields
    Set(ReportSetArgs),
    /// Manage the executed test case list
    Case(LineCmd),
    /// Manage the result table
    Result(ResultCmd),
    /// Manage the identified issue list
    Issue(LineCmd),
    /// Set the comment paragraphs
    Comments(CommentsArgs),
    /// Print the report state
    Show,
    /// Render the report and open it in a browser
    Generate(GenerateArgs),
}

#[derive(Args)]
pub struct ReportSetArgs {
    /// Report title
    #[arg(long)]
    pub title: Option<String>,
    /// Project name
    #[arg(long)]
    pub project: Option<String>,
    /// Project version
    #[arg(long)]
    pub version: Option<String>,
    /// Type of test (from the configured vocabulary)
    #[arg(long = "test-type")]
    pub test_type: Option<String>,
    /// Browser used (from the configured vocabulary)
    #[arg(long)]
    pub browser: Option<String>,
    /// Change request or ticket ID
    #[arg(long = "change-id")]
    pub change_id: Option<String>,
    /// Environment (from the configured vocabulary)
    #[arg(long)]
    pub environment: Option<String>,
    /// Test start date (dd/MM/yyyy)
    #[arg(long = "start-date")]
    pub start_date: Option<String>,
    /// Test end date (dd/MM/yyyy)
    #[arg(long = "end-date")]
    pub end_date: Option<String>,
    /// Tester name
    #[arg(long)]
    pub tester: Option<String>,
    /// Overall status (from the configured vocabulary)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args)]
pub struct LineCmd {
    #[command(subcommand)]
    pub action: LineAction,
}

#[derive(Subcommand)]
pub enum LineAction {
    /// Append an item
    Add(LineAddArgs),
    /// Remove an item by position
    Rm(IndexArg),
}

#[derive(Args)]
pub struct LineAddArgs {
    /// Item text
    pub text: String,
}

#[derive(Args)]
pub struct ResultCmd {
    #[command(subcommand)]
    pub action: ResultAction,
}

#[derive(Subcommand)]
pub enum ResultAction {
    /// Append a result row
    Add(ResultAddArgs),
    /// Remove a result row by position
    Rm(IndexArg),
}

#[derive(Args)]
pub struct ResultAddArgs {
    /// Ticket or test case ID
    pub ticket: String,
    /// Row type: bug, change-request, feature
    #[arg(long = "type", default_value = "bug")]
    pub kind: String,
    /// Result status (from the configured vocabulary)
    #[arg(long, default_value = "Passed")]
    pub status: String,
    /// Priority: high, medium, low
    #[arg(long, default_value = "medium")]
    pub priority: String,
}

#[derive(Args)]
pub struct CommentsArgs {
    /// Notes paragraph
    #[arg(long)]
    pub notes: Option<String>,
    /// Remarks paragraph
    #[arg(long)]
    pub remarks: Option<String>,
    /// Conclusion paragraph
    #[arg(long)]
    pub conclusion: Option<String>,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Write to this path instead of a temp file
    pub out: Option<PathBuf>,
    /// Don't open the result in a browser
    #[arg(long)]
    pub no_open: bool,
}
