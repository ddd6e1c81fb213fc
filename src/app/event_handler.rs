use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::delete::answer_is_yes;
use crate::picker::PickerAction;
use crate::worktree::default_create_path;

use super::types::InputMode;
use super::{App, Screen};

impl App {
    /// Handles one key press. Returns `true` when the session should end.
    pub fn handle_key(&mut self, key_event: KeyEvent) -> bool {
        if self.input_mode.is_some() {
            self.handle_modal_key(key_event);
            return false;
        }

        if let Some(action) = self.picker.action_for(&key_event) {
            match action {
                PickerAction::Accept => match self.screen {
                    Screen::Worktrees => self.switch_selected(),
                    Screen::Branches => self.choose_branch(),
                },
                PickerAction::Delete => self.request_delete(),
                PickerAction::ToggleForce => self.toggle_force(),
                PickerAction::Create => self.open_branch_picker(),
                PickerAction::Cancel => match self.screen {
                    Screen::Branches => self.reload_worktrees(),
                    Screen::Worktrees => return true,
                },
            }
            return false;
        }

        match key_event.code {
            KeyCode::Up => self.picker.move_up(),
            KeyCode::Down => self.picker.move_down(),
            KeyCode::Backspace => self.picker.pop_query_char(),
            KeyCode::Char(c) if key_event.modifiers.contains(KeyModifiers::CONTROL) => match c {
                'p' | 'k' => self.picker.move_up(),
                'n' | 'j' => self.picker.move_down(),
                'u' => self.picker.clear_query(),
                _ => {}
            },
            KeyCode::Char(c) => {
                if !key_event.modifiers.contains(KeyModifiers::ALT) {
                    self.picker.push_query_char(c);
                }
            }
            _ => {}
        }

        false
    }

    fn handle_modal_key(&mut self, key_event: KeyEvent) {
        let Some(mode) = self.input_mode.take() else {
            return;
        };
        match mode {
            InputMode::ConfirmDelete { selection } => match key_event.code {
                KeyCode::Char(c) if answer_is_yes(&c.to_string()) => {
                    self.perform_delete(&selection);
                }
                // Everything else, including Enter on the empty default,
                // declines.
                _ => self.push_status("didn't delete worktree"),
            },
            InputMode::PathInput { branch, mut buffer } => match key_event.code {
                KeyCode::Esc => {
                    // Creation abandoned, back to the branch picker.
                }
                KeyCode::Enter => {
                    let typed = buffer.trim();
                    let path = if typed.is_empty() {
                        default_create_path(&branch)
                    } else {
                        typed.to_string()
                    };
                    self.submit_create(&branch, &path);
                }
                KeyCode::Backspace => {
                    buffer.pop();
                    self.input_mode = Some(InputMode::PathInput { branch, buffer });
                }
                KeyCode::Char(c)
                    if !key_event.modifiers.contains(KeyModifiers::CONTROL)
                        && !key_event.modifiers.contains(KeyModifiers::ALT) =>
                {
                    buffer.push(c);
                    self.input_mode = Some(InputMode::PathInput { branch, buffer });
                }
                _ => {
                    self.input_mode = Some(InputMode::PathInput { branch, buffer });
                }
            },
        }
    }
}
