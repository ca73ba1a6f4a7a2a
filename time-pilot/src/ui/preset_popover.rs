use super::utils::dropdown_rect;
use super::*;
use crate::catalog::DURATION_PRESETS;

const POPOVER_MIN_WIDTH: u16 = 32;

pub fn render_preset_popover(frame: &mut Frame, app: &mut App) {
    let Some(highlighted) = app.preset_popover.highlighted() else {
        app.hit_areas.popover = None;
        app.hit_areas.preset_rows.clear();
        return;
    };

    let anchor = app.hit_areas.duration_region;
    let height = DURATION_PRESETS.len() as u16 + 2;
    let area = dropdown_rect(
        anchor,
        anchor.width.max(POPOVER_MIN_WIDTH),
        height,
        frame.area(),
    );
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = DURATION_PRESETS
        .iter()
        .enumerate()
        .map(|(i, preset)| {
            let style = if i == highlighted {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(preset.label, style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Presets "),
    );
    frame.render_widget(list, area);

    let inner = area.inner(ratatui::layout::Margin::new(1, 1));
    app.hit_areas.popover = Some(area);
    app.hit_areas.preset_rows = (0..DURATION_PRESETS.len() as u16)
        .filter(|i| *i < inner.height)
        .map(|i| Rect::new(inner.x, inner.y + i, inner.width, 1))
        .collect();
}
