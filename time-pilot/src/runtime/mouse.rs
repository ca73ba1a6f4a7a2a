use crate::app::{App, FocusedField, View};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::action_queue::{Action, ActionTx};

/// Route a left-button press using the regions recorded by the last render.
///
/// While the preset popover is open, a press anywhere outside the duration field,
/// its toggle and the popover closes it first; the press then still reaches
/// whatever it landed on.
pub(super) fn handle_mouse_event(mouse: MouseEvent, app: &mut App, action_tx: &ActionTx) {
    if app.current_view != View::Form {
        return;
    }
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return;
    };
    let pos = Position::new(mouse.column, mouse.row);
    let areas = app.hit_areas.clone();

    if app.preset_popover.is_open() {
        if let Some(index) = areas.preset_row_at(pos) {
            app.choose_preset(index);
            return;
        }
        if areas.popover.is_some_and(|r| r.contains(pos)) {
            return;
        }
        if areas.is_outside_preset_region(pos) {
            app.close_preset_popover();
        }
    }

    if areas.preset_toggle.contains(pos) {
        app.focus(FocusedField::Duration);
        app.toggle_preset_popover();
    } else if areas.duration_field.contains(pos) {
        app.focus(FocusedField::Duration);
    } else if areas.project_field.contains(pos) {
        app.focus(FocusedField::Project);
        app.navigate_to(View::SelectProject);
    } else if areas.submit_button.contains(pos) {
        app.focus(FocusedField::Submit);
        let _ = action_tx.send(Action::SubmitEntry);
    } else if areas.clear_button.is_some_and(|r| r.contains(pos)) {
        let _ = action_tx.send(Action::ClearEntries);
    }
}
