//! Test environment for isolated roster CLI runs.
//!
//! Provides `TestEnv` - a temp project directory and a temp HOME, plus helpers
//! to run the roster binary against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Variables that would leak the caller's setup into a test run.
const SCRUBBED_ENV: &[&str] = &[
    "ROSTER_STORE_PATH",
    "ROSTER_LOG",
    "ROSTER_OUTPUT",
    "RUST_LOG",
];

/// Result of running a roster CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as a JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({e})\nstdout:\n{}\nstderr:\n{}",
                self.stdout, self.stderr
            )
        })
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory for the CLI; holds `roster.json` by default
    pub project_root: TempDir,
    /// Temporary directory for HOME (user config lives here)
    pub home_dir: TempDir,
    roster_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            roster_bin: PathBuf::from(env!("CARGO_BIN_EXE_roster")),
        }
    }

    /// Environment with `content` already imported through `roster seed`.
    pub fn seeded(content: &str) -> Self {
        let env = Self::new();
        let result = env.seed(content);
        assert!(
            result.success,
            "seeding failed\nstdout:\n{}\nstderr:\n{}",
            result.stdout, result.stderr
        );
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Default directory file the CLI writes to
    pub fn store_path(&self) -> PathBuf {
        self.project_path("roster.json")
    }

    /// Run roster in the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run roster in the project directory with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run roster from a specific directory with extra env vars.
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.roster_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_path(".config"));

        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute roster");
        output_to_result(output)
    }

    /// Write `content` to a seed file and import it.
    pub fn seed(&self, content: &str) -> TestResult {
        self.write_project_file("seed.json", content);
        self.run(&["seed", "seed.json"])
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Write a file to the home directory
    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        write_file(&self.home_path(relative_path), content);
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
