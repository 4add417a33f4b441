pub mod config;
pub mod report;
pub mod task;

pub use config::*;
pub use report::*;
pub use task::*;
