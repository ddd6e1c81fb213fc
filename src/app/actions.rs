use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::codec;
use crate::picker::{Picker, PickerAction, PickerConfig};
use crate::worktree::{self, BranchNameParser};

use super::types::InputMode;
use super::{App, Screen};

pub(super) fn worktree_picker_config() -> PickerConfig {
    PickerConfig::new("worktrees", codec::FIELD_SEPARATOR, vec![0, 1, 2])
        .bind(
            KeyCode::Char('d'),
            KeyModifiers::CONTROL,
            PickerAction::Delete,
        )
        .bind(
            KeyCode::Char('f'),
            KeyModifiers::CONTROL,
            PickerAction::ToggleForce,
        )
        .bind(
            KeyCode::Char('a'),
            KeyModifiers::CONTROL,
            PickerAction::Create,
        )
}

pub(super) fn branch_picker_config() -> PickerConfig {
    PickerConfig::new(
        "create worktree: pick a branch",
        codec::FIELD_SEPARATOR,
        vec![0],
    )
}

impl App {
    /// Re-lists worktrees from git and resets the picker to the main
    /// screen. Every entry to the worktree screen re-lists; nothing is
    /// cached between sessions.
    pub fn reload_worktrees(&mut self) {
        self.screen = Screen::Worktrees;
        let lines = worktree::list_worktrees(&self.repo);
        if lines.is_empty() {
            self.push_status("no worktrees found");
        }
        self.picker = Picker::new(worktree_picker_config(), lines);
    }

    /// Default action: decode the selection and hand its path to the
    /// shell wrapper. A selection that does not decode is a no-op.
    pub fn switch_selected(&mut self) {
        if let Some(record) = self.picker.selected_line().and_then(codec::decode) {
            self.pending_switch = Some(record.path);
        }
    }

    /// Entry point of the deletion flow: resolve the confirmation policy,
    /// then either prompt or delete straight away.
    pub fn request_delete(&mut self) {
        let Some(line) = self.picker.selected_line() else {
            return;
        };
        let selection = line.to_string();
        if self.config.confirm_required() {
            self.input_mode = Some(InputMode::ConfirmDelete { selection });
        } else {
            self.perform_delete(&selection);
        }
    }

    /// Runs the deletion after any confirmation has passed. An
    /// undecodable selection is treated as "nothing was selected".
    pub fn perform_delete(&mut self, selection: &str) {
        let Some(record) = codec::decode(selection) else {
            return;
        };
        if record.path.is_empty() {
            return;
        }
        let Some(root) = self.repo.root().map(PathBuf::from) else {
            return;
        };
        match worktree::delete_worktree(&root, &record.path, self.delete_flow.is_armed()) {
            Ok(()) => {
                self.delete_flow.on_success();
                self.push_status(format!("deleted worktree {}", record.path));
                self.reload_worktrees();
            }
            Err(err) => {
                let hint = self.delete_flow.on_failure();
                self.push_status(format!("{err}; {hint}"));
            }
        }
    }

    pub fn toggle_force(&mut self) {
        let message = self.delete_flow.toggle();
        self.push_status(message);
    }

    pub fn open_branch_picker(&mut self) {
        let branches = worktree::list_branches(&self.repo);
        if branches.is_empty() {
            self.push_status("no branches found");
            return;
        }
        self.screen = Screen::Branches;
        self.picker = Picker::new(branch_picker_config(), branches);
    }

    /// Accept on the branch picker: extract a name from the selected
    /// line, or fall back to whatever the user typed. With neither, the
    /// flow ends silently back at the worktree listing.
    pub fn choose_branch(&mut self) {
        let parser = BranchNameParser::new();
        let from_selection = self
            .picker
            .selected_line()
            .and_then(|line| parser.extract(line));
        let typed = self.picker.query().trim().to_string();
        let fallback = (!typed.is_empty()).then_some(typed);

        match from_selection.or(fallback) {
            Some(branch) => {
                self.input_mode = Some(InputMode::PathInput {
                    branch,
                    buffer: String::new(),
                });
            }
            None => self.reload_worktrees(),
        }
    }

    pub fn submit_create(&mut self, branch: &str, path: &str) {
        if let Some(root) = self.repo.root().map(PathBuf::from) {
            match worktree::create_worktree(&root, path, branch) {
                Ok(()) => self.push_status(format!("created worktree {path} for {branch}")),
                Err(err) => self.push_status(err.to_string()),
            }
        }
        self.reload_worktrees();
    }
}
