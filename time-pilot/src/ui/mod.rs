use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
    Frame,
};

mod entry_list;
mod form_view;
mod preset_popover;
mod selection_view;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(frame.area());

    render_header(frame, root[0]);

    let body = root[1];
    match app.current_view {
        View::Form => form_view::render_form_view(frame, app, body),
        View::SelectProject => selection_view::render_project_selection(frame, app, body),
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "T I M E   P I L O T",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Log focused work in seconds.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(header, area);
}

pub(super) fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let (text, color) = match &app.status_message {
        Some(msg) => (msg.as_str(), Color::Green),
        None => ("Ready", Color::DarkGray),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(status, area);
}

pub(super) fn render_controls(frame: &mut Frame, area: Rect, spans: Vec<Span<'static>>) {
    let controls = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(controls, area);
}
