use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Env var holding a tracing filter, e.g. `FOCUSPLAN_LOG=debug`
pub const LOG_ENV: &str = "FOCUSPLAN_LOG";

/// Default filter level for the `-v` count
pub fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Send tracing output to `path`. The terminal belongs to the UI, so nothing
/// is written to stdout/stderr. Keep the guard alive until exit to flush.
pub fn init_tracing(path: &Path, verbose: u8) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .ok_or_else(|| anyhow!("log path has no parent directory: {}", path.display()))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log path has no file name: {}", path.display()))?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level(verbose)))
        .map_err(|e| anyhow!("invalid {LOG_ENV} filter: {e}"))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("tracing subscriber already set: {e}"))?;

    Ok(guard)
}
