//! Logging initialisation for stadium-view.
//!
//! When the `STADIUM_LOG` environment variable is set to `1`, structured
//! logs are also written to the OS log directory under `stadium-view/stadium.log`.
//! Otherwise only stderr output (filtered by `RUST_LOG`) is enabled.
//!
//! Returns a guard that must be kept alive for the duration of the process
//! so that buffered log lines are flushed on exit.

use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub struct LogGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Initialise the global tracing subscriber.
///
/// Call once from `main` and hold the returned `LogGuard` until exit.
pub fn init() -> LogGuard {
    let to_file = std::env::var("STADIUM_LOG").as_deref() == Ok("1");
    let default_level = if to_file { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let stderr = fmt::layer().with_writer(std::io::stderr);

    if !to_file {
        tracing_subscriber::registry().with(filter).with(stderr).init();
        return LogGuard { _file_guard: None };
    }

    let dir = log_dir().unwrap_or_else(std::env::temp_dir);
    let _ = std::fs::create_dir_all(&dir);
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir,
        "stadium.log",
    ));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    LogGuard {
        _file_guard: Some(guard),
    }
}

fn log_dir() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Some(PathBuf::from(xdg).join("stadium-view"));
    }
    let home = PathBuf::from(std::env::var("HOME").ok()?);
    #[cfg(target_os = "macos")]
    let base = home.join("Library").join("Logs");
    #[cfg(not(target_os = "macos"))]
    let base = home.join(".local").join("state");
    Some(base.join("stadium-view"))
}
