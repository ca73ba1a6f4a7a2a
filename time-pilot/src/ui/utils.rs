use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
};

/// Key hint spans for a controls bar: `[("Enter", "Submit"), ...]`.
pub fn hint_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, label)) in hints.iter().enumerate() {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        let sep = if i + 1 == hints.len() { "" } else { "  " };
        spans.push(Span::raw(format!(": {}{}", label, sep)));
    }
    spans
}

/// Border colour for a form field: errors win over focus.
pub fn field_border_style(has_error: bool, focused: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Place a `width` x `height` box directly below `anchor`, clipped to `bounds`.
pub fn dropdown_rect(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let x = anchor.x;
    let y = anchor.y.saturating_add(anchor.height);
    let max_width = bounds.right().saturating_sub(x);
    let max_height = bounds.bottom().saturating_sub(y);
    Rect::new(x, y, width.min(max_width), height.min(max_height))
}
