//! Repository context and the synchronous git process runner.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Captured result of one git invocation.
pub struct GitOutput {
    pub lines: Vec<String>,
    pub stderr: String,
    pub exit_code: i32,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs git synchronously in `cwd`, capturing stdout lines and the exit
/// code. Only spawn failures are errors; a non-zero exit is data for the
/// caller.
pub fn run_git(args: &[&str], cwd: &Path) -> Result<GitOutput> {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .with_context(|| format!("failed to execute git {}", args.join(" ")))?;

    Ok(GitOutput {
        lines: String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    })
}

/// Where the session is rooted. A missing root is not an error: every
/// listing backed by it degrades to "no worktrees found" instead.
pub struct RepoContext {
    root: Option<PathBuf>,
}

impl RepoContext {
    pub fn discover(start_dir: &Path) -> Self {
        let root = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .current_dir(start_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .filter(|top| !top.is_empty())
            .map(PathBuf::from);
        Self { root }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    #[cfg(test)]
    pub fn detached() -> Self {
        Self { root: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_outside_a_repository() {
        let dir = tempfile::TempDir::new().unwrap();
        let repo = RepoContext::discover(dir.path());
        assert!(repo.root().is_none());
    }

    #[test]
    fn test_run_git_reports_exit_code() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = run_git(&["rev-parse", "--show-toplevel"], dir.path()).unwrap();
        assert!(!output.success());
        assert!(output.lines.is_empty());
    }
}
