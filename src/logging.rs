use anyhow::{Context, Result};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// One-shot commands log to stderr so stdout stays clean for CSV output.
pub(crate) fn init_for_cli() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging")
}

/// The TUI owns the terminal, so logs go to `clara.log` in the cache
/// directory, and only when `RUST_LOG` asks for them.
pub(crate) fn init_for_tui() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let proj_dirs = directories::ProjectDirs::from("id", "bphl", "CLARA")
        .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))?;
    let log_dir = proj_dirs.cache_dir();
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    let log_path = log_dir.join("clara.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging")
}
