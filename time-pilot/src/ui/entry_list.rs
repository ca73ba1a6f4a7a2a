use super::*;
use crate::app::FocusedField;
use crate::catalog;

const CLEAR_LABEL: &str = " Clear ";

pub fn render_entry_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = format!(" Entries ({}) ", app.entries.len());
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(title, Style::default().fg(Color::White)))
        .padding(Padding::horizontal(1));

    app.hit_areas.clear_button = None;
    if !app.entries.is_empty() {
        let style = if app.focused_field == FocusedField::Clear {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        };
        block = block.title_top(Line::from(Span::styled(CLEAR_LABEL, style)).right_aligned());

        // Right-aligned titles end one cell before the corner.
        let width = CLEAR_LABEL.chars().count() as u16;
        let x = area.right().saturating_sub(width + 1).max(area.x);
        app.hit_areas.clear_button = Some(Rect::new(x, area.y, width.min(area.width), 1));
    }

    if app.entries.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No entries yet. Add one to preview how the widget records time.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let number = app.entries.display_number(i);
            let name = catalog::project_name(&entry.project_id).unwrap_or("");
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3}  ", number),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<9}", entry.project_id),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(format!("{:<26}", name), Style::default().fg(Color::Gray)),
                Span::styled(
                    entry.duration.clone(),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::super::tests::draw;
    use super::*;
    use crate::config::TimePilotConfig;

    fn log(app: &mut App, project: &str, duration: &str) {
        app.form.select_project(project);
        app.form.set_duration(duration);
        assert!(app.submit_entry().accepted);
    }

    #[test]
    fn newest_entry_is_listed_first_with_highest_number() {
        let mut app = App::new(&TimePilotConfig::default());
        log(&mut app, "PRJ-248", "15m");
        log(&mut app, "PRJ-427", "2h");

        let screen = draw(&mut app, 100, 30);

        assert!(screen.contains("Entries (2)"));
        let newest = screen.find("  2  PRJ-427").expect("newest row");
        let oldest = screen.find("  1  PRJ-248").expect("oldest row");
        assert!(newest < oldest);
        assert!(screen.contains("Infrastructure Upgrade"));
        assert!(screen.contains("Clear"));
        assert!(app.hit_areas.clear_button.is_some());
    }

    #[test]
    fn unknown_project_renders_without_name() {
        let mut app = App::new(&TimePilotConfig::default());
        log(&mut app, "PRJ-999", "1h");

        let screen = draw(&mut app, 100, 30);

        // The form row still shows the selected id, so match on the numbered entry row.
        let row = screen
            .lines()
            .find(|l| l.contains("1  PRJ-999"))
            .expect("entry row");
        for project in catalog::PROJECTS.iter() {
            assert!(!row.contains(project.name));
        }
        assert!(row.contains("1h"));
    }
}
