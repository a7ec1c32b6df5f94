pub mod format;
pub mod handler;
pub mod types;
