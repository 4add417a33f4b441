pub mod config_io;
pub mod export;
pub mod paths;
pub mod report_io;
pub mod tasks_io;
