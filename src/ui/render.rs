use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::app::Screen;
use crate::picker::Picker;
use crate::repo::RepoContext;

pub fn render_header(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    repo: &RepoContext,
    force_armed: bool,
) {
    let root_label = repo
        .root()
        .map(|root| root.display().to_string())
        .unwrap_or_else(|| "not in a git repository".to_string());

    let mut spans = vec![
        Span::styled(
            "eda",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - git worktree picker  "),
        Span::raw(root_label),
    ];
    if force_armed {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "FORCE",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Overview"));
    frame.render_widget(header, area);
}

pub fn render_picker(frame: &mut ratatui::Frame<'_>, area: Rect, picker: &Picker) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let search_line = Line::from(vec![
        Span::raw("> "),
        Span::styled(
            picker.query(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let search = Paragraph::new(search_line)
        .block(Block::default().borders(Borders::ALL).title("Search"));
    frame.render_widget(search, chunks[0]);

    let items: Vec<ListItem> = picker
        .visible_rows()
        .into_iter()
        .map(|(row, is_cursor)| {
            let style = if is_cursor {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(row)).style(style)
        })
        .collect();

    let title = format!("{} ({})", picker.prompt(), picker.match_count());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, chunks[1]);
}

pub fn render_status_line(frame: &mut ratatui::Frame<'_>, area: Rect, status: Option<&str>) {
    let line = Paragraph::new(status.unwrap_or(""))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(line, area);
}

pub fn render_footer(frame: &mut ratatui::Frame<'_>, area: Rect, screen: Screen) {
    let hints = match screen {
        Screen::Worktrees => {
            "Enter: switch  Ctrl+D: delete  Ctrl+F: toggle force  Ctrl+A: create  Esc: quit"
        }
        Screen::Branches => "Enter: choose branch (typed name works too)  Esc: back",
    };
    let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}
