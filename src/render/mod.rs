pub mod html;
pub mod report;
pub mod signature;
pub mod text;
