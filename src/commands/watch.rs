//! `lostfound watch` command - re-run duplicate detection when the snapshot
//! changes
//!
//! Polls the snapshot's change token every `interval_ms` and prints the
//! groups after each recomputation. Ctrl-C stops the loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use lostfound_core::duplicates::{ClusteringConfig, GroupFilter};
use lostfound_core::bail_usage;
use lostfound_core::error::{LostFoundError, Result};
use lostfound_core::feed::SnapshotFile;
use lostfound_core::monitor::DuplicateMonitor;

use crate::commands::dispatch::CommandContext;
use crate::commands::duplicates;

/// Execute the watch command
pub fn execute(ctx: &CommandContext, threshold: Option<f64>, interval_ms: Option<u64>) -> Result<()> {
    let clustering = threshold.map_or_else(|| ctx.config.clustering(), ClusteringConfig::new);
    let interval_ms = interval_ms.unwrap_or(ctx.config.watch.interval_ms);
    if interval_ms == 0 {
        bail_usage!("watch interval must be at least 1 ms");
    }
    let interval = Duration::from_millis(interval_ms);

    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))
        .map_err(|e| LostFoundError::failed("install Ctrl-C handler", e))?;

    let source = SnapshotFile::new(ctx.input()).with_limit(Some(ctx.config.duplicates.feed_limit));
    let mut monitor = DuplicateMonitor::new(source, clustering);
    let filter = GroupFilter::new();

    tracing::info!(
        path = %monitor.source().path().display(),
        interval_ms,
        threshold = clustering.threshold(),
        "watching snapshot"
    );

    while running.load(Ordering::SeqCst) {
        match monitor.poll() {
            Ok(true) => {
                if let Some(report) = monitor.latest() {
                    duplicates::render(ctx.cli, report, &filter, clustering.threshold())?;
                }
            }
            Ok(false) => {}
            // A snapshot caught mid-write is retried on the next tick
            Err(e @ LostFoundError::InvalidSnapshot { .. })
            | Err(e @ LostFoundError::SnapshotNotFound { .. }) => {
                tracing::warn!(error = %e, "snapshot unavailable");
            }
            Err(e) => return Err(e),
        }
        thread::sleep(interval);
    }

    tracing::info!("watch stopped");
    Ok(())
}
