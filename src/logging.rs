//! Tracing setup
//!
//! The TUI owns the terminal, so it only logs when given a file. CLI mode
//! logs to stderr at `warn`. `RUST_LOG` overrides either default.

use anyhow::{anyhow, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to `path`, appending. Does nothing when `path` is `None`.
pub fn init_file(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install file logger: {}", e))?;

    tracing::debug!(path = %path.display(), "file logging enabled");
    Ok(())
}

/// Log to stderr, keeping stdout clean for command output
pub fn init_stderr(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        env_filter("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::error;

    #[test]
    fn test_no_path_installs_nothing() {
        assert!(init_file(None).is_ok());
    }

    // The global subscriber can only be set once per process, so one test
    // covers install, write and the second install.
    #[test]
    fn test_file_logger_writes_and_rejects_reinstall() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("movietui.log");

        init_file(Some(&path)).unwrap();
        error!(count = 3, "catalog load failed");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("catalog load failed"));
        assert!(contents.contains("count=3"));

        let err = init_file(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to install file logger"));
    }
}
