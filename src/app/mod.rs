mod actions;
mod event_handler;
mod rendering;
mod types;

use std::collections::VecDeque;
use std::path::PathBuf;

use anyhow::Result;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::config::Config;
use crate::delete::DeleteFlow;
use crate::picker::Picker;
use crate::repo::RepoContext;

pub use types::InputMode;

const STATUS_CAPACITY: usize = 32;

/// Which listing the picker currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Worktrees,
    Branches,
}

/// Main application state: one picker session over the repository's
/// worktrees, with the force-deletion flag scoped to this session.
pub struct App {
    pub repo: RepoContext,
    pub config: Config,
    pub screen: Screen,
    pub picker: Picker,
    pub delete_flow: DeleteFlow,
    pub input_mode: Option<InputMode>,
    pub status: VecDeque<String>,
    /// Set when the user accepts a worktree; the event loop exits and
    /// main prints it for the shell wrapper.
    pub pending_switch: Option<String>,
}

impl App {
    pub fn new(start_dir: PathBuf, config_path: Option<PathBuf>) -> Result<Self> {
        let repo = RepoContext::discover(&start_dir);
        let config_path = config_path
            .unwrap_or_else(|| repo.root().unwrap_or(&start_dir).join(".eda.json"));
        let config = Config::load(&config_path)?;

        let mut app = Self {
            repo,
            config,
            screen: Screen::Worktrees,
            picker: Picker::new(actions::worktree_picker_config(), Vec::new()),
            delete_flow: DeleteFlow::new(),
            input_mode: None,
            status: VecDeque::with_capacity(STATUS_CAPACITY),
            pending_switch: None,
        };
        app.reload_worktrees();
        Ok(app)
    }

    pub fn push_status(&mut self, message: impl Into<String>) {
        if self.status.len() >= STATUS_CAPACITY {
            self.status.pop_front();
        }
        let timestamp = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string());
        self.status.push_back(format!("[{timestamp}] {}", message.into()));
    }

    pub fn latest_status(&self) -> Option<&str> {
        self.status.back().map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn for_test(lines: Vec<String>, config: Config) -> Self {
        Self {
            repo: RepoContext::detached(),
            config,
            screen: Screen::Worktrees,
            picker: Picker::new(actions::worktree_picker_config(), lines),
            delete_flow: DeleteFlow::new(),
            input_mode: None,
            status: VecDeque::new(),
            pending_switch: None,
        }
    }
}
