use clap::Parser;
use eodmail::cli::commands::Cli;
use eodmail::cli::handlers;
use eodmail::io::paths;
use eodmail::logger::FileLogger;

fn main() {
    let cli = Cli::parse();

    // Logging goes to eod.log in the data directory; a failure to set
    // it up never blocks the command itself.
    let data_dir = paths::resolve_data_dir(cli.data_dir.as_deref());
    let _ = std::fs::create_dir_all(&data_dir);
    let _ = FileLogger::init(paths::log_path(&data_dir));

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
