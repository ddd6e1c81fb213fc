//! Worktree listing and mutations, backed by the `git worktree` CLI.

use std::path::Path;

use anyhow::{Result, anyhow};
use regex::Regex;
use thiserror::Error;

use crate::codec;
use crate::repo::{RepoContext, run_git};

/// Lists the repository's worktrees as picker-encoded lines.
///
/// Any environment failure — no repository root, git missing, non-zero
/// exit — degrades to an empty listing; the caller shows "no worktrees
/// found" instead of an error. Individual malformed lines are skipped.
pub fn list_worktrees(repo: &RepoContext) -> Vec<String> {
    let Some(root) = repo.root() else {
        return Vec::new();
    };
    match run_git(&["worktree", "list"], root) {
        Ok(output) if output.success() => {
            encode_listing(output.lines.iter().map(String::as_str))
        }
        _ => Vec::new(),
    }
}

/// The listing pipeline without the subprocess: parse every raw line,
/// drop the failures and bare entries, encode the rest.
pub fn encode_listing<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    lines
        .into_iter()
        .filter_map(codec::parse_listing_line)
        .map(|record| codec::encode(&record))
        .collect()
}

#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("failed to run git worktree remove: {0}")]
    Spawn(String),
    #[error("could not delete worktree: {0}")]
    Failed(String),
}

/// Removes a worktree, with `--force` when the session has it armed.
pub fn delete_worktree(root: &Path, path: &str, force: bool) -> Result<(), DeleteError> {
    let mut args = vec!["worktree", "remove"];
    if force {
        args.push("--force");
    }
    args.push(path);

    let output = run_git(&args, root).map_err(|err| DeleteError::Spawn(err.to_string()))?;
    if output.success() {
        Ok(())
    } else {
        let detail = if output.stderr.is_empty() {
            format!("git exited with {}", output.exit_code)
        } else {
            output.stderr
        };
        Err(DeleteError::Failed(detail))
    }
}

/// Creates a worktree for an existing branch at `path`.
pub fn create_worktree(root: &Path, path: &str, branch: &str) -> Result<()> {
    let output = run_git(&["worktree", "add", path, branch], root)?;
    if output.success() {
        Ok(())
    } else {
        Err(anyhow!("git worktree add failed: {}", output.stderr))
    }
}

/// Raw `git branch --all` lines for the creation picker. Degrades to empty
/// on any failure, same policy as the worktree listing.
pub fn list_branches(repo: &RepoContext) -> Vec<String> {
    let Some(root) = repo.root() else {
        return Vec::new();
    };
    match run_git(&["branch", "--all"], root) {
        Ok(output) if output.success() => output
            .lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// Extracts a usable branch name from a `git branch` listing line.
///
/// Tolerates the current-branch `*` and worktree `+` markers and skips
/// `(no branch, bisect started ...)` / `(HEAD detached ...)` annotations.
pub struct BranchNameParser {
    pattern: Regex,
}

impl BranchNameParser {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^[\s*+]*(?:\([^)]*\)\s*)?")
                .expect("invalid branch pattern"),
        }
    }

    pub fn extract(&self, line: &str) -> Option<String> {
        let stripped = self.pattern.replace(line, "");
        stripped.split_whitespace().next().map(str::to_string)
    }
}

impl Default for BranchNameParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Default destination offered when creating a worktree: a sibling
/// directory named after the branch.
pub fn default_create_path(branch: &str) -> String {
    format!("../{branch}")
}
