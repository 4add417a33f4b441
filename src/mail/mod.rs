pub mod cf_html;
pub mod clipboard;
pub mod dispatch;
pub mod mailto;
