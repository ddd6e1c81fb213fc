//! Force-deletion state for the worktree picker session.
//!
//! `git worktree remove` refuses dirty or locked worktrees unless forced.
//! Rather than a modifier key held during deletion, forcing is armed ahead
//! of time: toggle once, then delete. The flag lives in the session (one
//! per picker run), never in global state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceState {
    Normal,
    ForceArmed,
}

#[derive(Debug)]
pub struct DeleteFlow {
    state: ForceState,
}

impl DeleteFlow {
    pub fn new() -> Self {
        Self {
            state: ForceState::Normal,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.state == ForceState::ForceArmed
    }

    /// Flips the force flag and returns the status line describing the new
    /// state.
    pub fn toggle(&mut self) -> &'static str {
        match self.state {
            ForceState::Normal => {
                self.state = ForceState::ForceArmed;
                "next deletion will be forced"
            }
            ForceState::ForceArmed => {
                self.state = ForceState::Normal;
                "next deletion will not be forced"
            }
        }
    }

    /// Wording for the confirmation modal, depending on whether force is
    /// armed.
    pub fn confirm_prompt(&self) -> &'static str {
        match self.state {
            ForceState::ForceArmed => "Force deletion of worktree?",
            ForceState::Normal => "Delete worktree?",
        }
    }

    /// A successful deletion disarms the flag so the next one starts clean.
    pub fn on_success(&mut self) {
        self.state = ForceState::Normal;
    }

    /// A failed deletion leaves the flag as it was, so an armed retry does
    /// not need re-toggling. Returns the instruction shown to the user.
    pub fn on_failure(&self) -> &'static str {
        "deletion failed, press Ctrl+F to force the next deletion and retry"
    }
}

impl Default for DeleteFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Confirmation answers: only an explicit leading `y`/`Y` deletes. Empty
/// input means no.
pub fn answer_is_yes(input: &str) -> bool {
    matches!(input.chars().next(), Some('y') | Some('Y'))
}
