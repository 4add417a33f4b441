pub mod group;
pub mod notify;
pub mod report_ops;
pub mod task_ops;
