//! Lostfound Core Library
//!
//! Duplicate detection, auto-categorization and executive reporting over
//! campus lost and found reports.

pub mod category;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod feed;
pub mod format;
pub mod logging;
pub mod monitor;
pub mod records;
pub mod report;
pub mod similarity;
pub mod stats;
pub mod summary;
pub mod tagging;
pub mod text;
