//! Integration tests for the lostfound CLI
//!
//! Each test writes a snapshot into a temp dir and runs the binary there.

mod categorize;
mod config;
mod duplicates;
mod errors;
mod similarity;
mod summary;
mod support;
