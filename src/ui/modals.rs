/// Modal overlays for the deletion confirmation and the creation path
/// prompt.
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render_confirm_modal(frame: &mut ratatui::Frame<'_>, area: Rect, prompt: &str) {
    let lines = vec![
        Line::from(Span::styled(
            prompt,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw("y: delete  any other key: keep it"),
    ];
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Confirm"));
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}

pub fn render_path_input_modal(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    branch: &str,
    buffer: &str,
    default_path: &str,
) {
    let lines = vec![
        Line::from(vec![
            Span::raw("Worktree path for "),
            Span::styled(branch, Style::default().fg(Color::Cyan)),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            buffer,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(format!("Enter with no input uses {default_path}")),
        Line::raw("Enter: create  Esc: cancel"),
    ];
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Create Worktree"));
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}
