//! Tracing setup.
//!
//! The interactive browser owns the terminal, so it logs to a file in the
//! data directory. Console commands log to stderr and keep stdout clean for
//! their output. `RUST_LOG` overrides `--log-level` when set.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

pub const LOG_FILE_NAME: &str = "comicdeck.log";

pub enum LogSink {
    Stderr,
    File(PathBuf),
}

impl LogSink {
    pub fn file_in(data_dir: &Path) -> Self {
        LogSink::File(data_dir.join(LOG_FILE_NAME))
    }
}

/// Filter directive for our own crates; dependencies stay at `warn`
pub fn default_directive(level: LogLevel) -> String {
    format!("warn,comicdeck={0},comicdeck_cli={0},comicdeck_client={0}", level)
}

pub fn init(level: LogLevel, sink: LogSink) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = match sink {
        LogSink::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogSink::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_scopes_own_crates() {
        assert_eq!(
            default_directive(LogLevel::Debug),
            "warn,comicdeck=debug,comicdeck_cli=debug,comicdeck_client=debug"
        );
    }

    #[test]
    fn test_file_sink_path() {
        let sink = LogSink::file_in(Path::new("/tmp/deck"));
        assert!(matches!(sink, LogSink::File(p) if p == Path::new("/tmp/deck/comicdeck.log")));
    }
}
