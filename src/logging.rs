//! Tracing setup for hosts that want the crate's diagnostics on disk.
//!
//! The library itself only emits `tracing` events; nothing is recorded until
//! a host installs a subscriber, either through [`init`] or its own.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "glide=info";
pub const LOG_FILE_PREFIX: &str = "glide.log";

/// Keeps the background writer alive; dropping it flushes pending lines.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// `RUST_LOG` wins over [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Falls back to a temp directory when `preferred` cannot be created.
pub fn resolve_log_dir(preferred: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = preferred {
        if std::fs::create_dir_all(dir).is_ok() {
            return Some(dir.to_path_buf());
        }
    }
    let dir = std::env::temp_dir().join("glide").join("logs");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Installs a daily rolling, non-blocking file subscriber. Returns `None`
/// when no directory is usable or a global subscriber is already set.
pub fn init(log_dir: Option<&Path>) -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry().with(env_filter()).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}

#[cfg(test)]
#[path = "../tests/unit/logging.rs"]
mod tests;
