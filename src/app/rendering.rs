use ratatui::layout::{Constraint, Direction, Layout};

use crate::ui::{
    centered_rect, render_confirm_modal, render_footer, render_header, render_path_input_modal,
    render_picker, render_status_line,
};
use crate::worktree::default_create_path;

use super::types::InputMode;
use super::App;

impl App {
    /// Main render function
    pub fn render(&self, frame: &mut ratatui::Frame<'_>) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        render_header(frame, layout[0], &self.repo, self.delete_flow.is_armed());
        render_picker(frame, layout[1], &self.picker);
        render_status_line(frame, layout[2], self.latest_status());
        render_footer(frame, layout[3], self.screen);

        if let Some(input_mode) = &self.input_mode {
            match input_mode {
                InputMode::ConfirmDelete { .. } => {
                    let area = centered_rect(50, 20, frame.area());
                    render_confirm_modal(frame, area, self.delete_flow.confirm_prompt());
                }
                InputMode::PathInput { branch, buffer } => {
                    let area = centered_rect(60, 25, frame.area());
                    render_path_input_modal(
                        frame,
                        area,
                        branch,
                        buffer,
                        &default_create_path(branch),
                    );
                }
            }
        }
    }
}
