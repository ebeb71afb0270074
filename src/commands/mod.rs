//! CLI commands for lostfound

pub mod categorize;
pub mod dispatch;
pub mod duplicates;
pub mod format;
pub mod similarity;
pub mod summary;
pub mod watch;
