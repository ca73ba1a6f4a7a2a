use super::utils::{field_border_style, hint_spans};
use super::*;
use crate::app::FocusedField;

pub fn render_form_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .constraints([
            Constraint::Length(3), // Form row
            Constraint::Length(1), // Error banner
            Constraint::Min(3),    // Entries
            Constraint::Length(3), // Status
            Constraint::Length(3), // Controls
        ])
        .split(body);

    render_form_row(frame, app, chunks[0]);
    render_error_banner(frame, app, chunks[1]);
    super::entry_list::render_entry_list(frame, app, chunks[2]);
    super::render_status(frame, chunks[3], app);
    super::render_controls(frame, chunks[4], controls(app));

    // Drawn last so it sits on top of the entries panel.
    super::preset_popover::render_preset_popover(frame, app);
}

fn render_form_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Project
            Constraint::Min(16),        // Duration
            Constraint::Length(5),      // Preset toggle
            Constraint::Length(7),      // Submit
        ])
        .split(area);

    render_project_field(frame, app, cols[0]);
    render_duration_field(frame, app, cols[1]);
    render_preset_toggle(frame, app, cols[2]);
    render_submit_button(frame, app, cols[3]);

    app.hit_areas.project_field = cols[0];
    app.hit_areas.duration_field = cols[1];
    app.hit_areas.preset_toggle = cols[2];
    app.hit_areas.duration_region = cols[1].union(cols[2]);
    app.hit_areas.submit_button = cols[3];
}

fn render_project_field(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_field == FocusedField::Project;
    let content = match app.selected_project_label() {
        Some(label) => Span::styled(label, Style::default().fg(Color::White)),
        None => Span::styled("Select Project ID", Style::default().fg(Color::DarkGray)),
    };

    let widget = Paragraph::new(Line::from(vec![content, Span::raw(" ▾")])).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Project ")
            .border_style(field_border_style(app.errors.project.is_some(), focused))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_duration_field(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_field == FocusedField::Duration;
    let input = &app.form.duration;

    let line = if input.value.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(Span::raw("█"));
        }
        spans.push(Span::styled("e.g. 30m", Style::default().fg(Color::DarkGray)));
        Line::from(spans)
    } else if focused {
        let (before, after) = input.split_at_cursor();
        Line::from(format!("{}█{}", before, after))
    } else {
        Line::from(input.value.clone())
    };

    let widget = Paragraph::new(line)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Duration ")
                .border_style(field_border_style(app.errors.duration.is_some(), focused))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_preset_toggle(frame: &mut Frame, app: &App, area: Rect) {
    let open = app.preset_popover.is_open();
    let (glyph, style) = if open {
        ("▴", Style::default().fg(Color::Yellow))
    } else {
        ("▾", Style::default().fg(Color::DarkGray))
    };
    let widget = Paragraph::new(glyph)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(widget, area);
}

fn render_submit_button(frame: &mut Frame, app: &App, area: Rect) {
    let style = if app.focused_field == FocusedField::Submit {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let widget = Paragraph::new("→")
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(widget, area);
}

fn render_error_banner(frame: &mut Frame, app: &App, area: Rect) {
    let Some(message) = app.errors.first_message() else {
        return;
    };
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(" ✗ ", Style::default().fg(Color::Red)),
        Span::styled(message, Style::default().fg(Color::Red)),
    ]));
    frame.render_widget(banner, area);
}

fn controls(app: &App) -> Vec<Span<'static>> {
    if app.preset_popover.is_open() {
        return hint_spans(&[
            ("↑↓/j/k", "Move"),
            ("Enter/1-4", "Pick"),
            ("Esc", "Close"),
        ]);
    }

    let mut hints = vec![("Tab", "Next field")];
    match app.focused_field {
        FocusedField::Project => hints.push(("Enter", "Choose project")),
        FocusedField::Duration => {
            hints.push(("Enter", "Log"));
            hints.push(("Ctrl+P", "Presets"));
        }
        FocusedField::Submit => hints.push(("Enter", "Log")),
        FocusedField::Clear => hints.push(("Enter", "Clear")),
    }
    if !app.entries.is_empty() {
        hints.push(("Ctrl+L", "Clear all"));
    }
    hints.push(("Esc", "Quit"));
    hint_spans(&hints)
}

#[cfg(test)]
mod tests {
    use super::super::tests::draw;
    use super::*;
    use crate::config::TimePilotConfig;

    #[test]
    fn rejected_submit_shows_first_error_in_banner() {
        let mut app = App::new(&TimePilotConfig::default());
        app.form.set_duration("soon");
        app.submit_entry();

        let screen = draw(&mut app, 100, 30);

        assert!(screen.contains("Select a project ID before logging time."));
        assert!(!screen.contains("Use m/h format"));
    }

    #[test]
    fn duration_error_shows_when_project_is_set() {
        let mut app = App::new(&TimePilotConfig::default());
        app.form.select_project("PRJ-248");
        app.form.set_duration("   ");
        app.submit_entry();

        let screen = draw(&mut app, 100, 30);

        assert!(screen.contains("Add a duration such as 30m or 1.5h."));
    }

    #[test]
    fn render_records_hit_areas() {
        let mut app = App::new(&TimePilotConfig::default());
        draw(&mut app, 100, 30);

        let areas = &app.hit_areas;
        assert!(areas.project_field.width > 0);
        assert!(areas.duration_region.width > areas.duration_field.width);
        assert!(areas.popover.is_none());
        assert!(areas.clear_button.is_none());
    }
}
