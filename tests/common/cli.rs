//! Shared helpers for CLI end-to-end tests.

use std::path::Path;
use std::process::ExitStatus;

/// A temp directory that acts as the working directory for `aps` runs.
pub struct ApsWorkspace {
    dir: tempfile::TempDir,
}

impl ApsWorkspace {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp workspace"),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for ApsWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Captured output of one `aps` invocation.
pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run `aps` inside the workspace and capture its output.
pub fn run_aps<I, S>(workspace: &ApsWorkspace, args: I, label: &str) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = std::process::Command::new(assert_cmd::cargo::cargo_bin("aps"))
        .args(args)
        .current_dir(workspace.path())
        .env_remove("ALIANZA_PREFIX")
        .env_remove("ALIANZA_DATA_DIR")
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run aps: {e}"));

    CmdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Run `aps` and panic unless it succeeded.
pub fn run_aps_ok<I, S>(workspace: &ApsWorkspace, args: I, label: &str) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = run_aps(workspace, args, label);
    assert!(
        output.status.success(),
        "{label} failed\nstdout: {}\nstderr: {}",
        output.stdout,
        output.stderr
    );
    output
}
