use super::utils::hint_spans;
use super::*;

pub fn render_project_selection(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Project list
            Constraint::Length(3), // Controls
        ])
        .split(body);

    // Search input box
    let search_text = if app.project_search_input.value.is_empty() {
        if app.selection_list_focused {
            "Type to search...".to_string()
        } else {
            "█".to_string()
        }
    } else if app.selection_list_focused {
        app.project_search_input.value.clone()
    } else {
        let (before, after) = app.project_search_input.split_at_cursor();
        format!("{}█{}", before, after)
    };
    let search_border = if app.selection_list_focused {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let search_box = Paragraph::new(search_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(search_border)
                .title(" Search ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, chunks[0]);

    // Project list
    let items: Vec<ListItem> = app
        .filtered_projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let style = if i == app.filtered_project_index {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if project.id == app.form.selected_project_id {
                "● "
            } else {
                "  "
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::styled(format!("{} · {}", project.id, project.name), style),
            ]))
        })
        .collect();

    let title = if app.project_search_input.value.is_empty() {
        format!(" Projects ({}) ", crate::catalog::PROJECTS.len())
    } else {
        format!(
            " Projects ({}/{}) ",
            app.filtered_projects.len(),
            crate::catalog::PROJECTS.len()
        )
    };

    let list_border = if app.selection_list_focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(list_border)
            .title(title)
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(list, chunks[1]);

    super::render_controls(
        frame,
        chunks[2],
        hint_spans(&[
            ("Type", "Filter"),
            ("Tab", "Focus list"),
            ("↑↓/j/k", "Navigate"),
            ("Enter", "Select"),
            ("Ctrl+X", "Clear"),
            ("Esc", "Cancel"),
        ]),
    );
}
