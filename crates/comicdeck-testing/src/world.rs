//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Pointing the CLI at a fake catalog backend
//! - Executing CLI commands with a clean environment

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::Path;
use tempfile::TempDir;

use crate::server::FakeCatalog;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use comicdeck_testing::{FakeCatalog, TestWorld, fixtures};
///
/// let world = TestWorld::new().with_catalog(FakeCatalog::serving(fixtures::sample_comics()));
///
/// let result = world.run(&["list", "--genre", "Horror"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    catalog: Option<FakeCatalog>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            catalog: None,
            env_vars: HashMap::new(),
        }
    }

    /// Route `--api-url` to the given fake backend.
    pub fn with_catalog(mut self, catalog: FakeCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set an environment variable for subsequent commands.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.data_dir().join("config.toml"), toml).expect("Failed to write config");
        self
    }

    pub fn data_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn catalog(&self) -> Option<&FakeCatalog> {
        self.catalog.as_ref()
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());

        if let Some(catalog) = &self.catalog {
            cmd.arg("--api-url").arg(catalog.base_url());
        }

        cmd.env_remove("COMICDECK_API_URL")
            .env_remove("COMICDECK_PATH")
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the comicdeck binary with the given arguments.
    ///
    /// Requires the binary to be built, which `cargo test` does for the
    /// CLI crate's integration tests.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("comicdeck")
            .map_err(|e| anyhow::anyhow!("Failed to find comicdeck binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Captured result of a CLI invocation.
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
