use crate::app::App;

use super::action_queue::Action;

pub(super) fn run_action(action: Action, app: &mut App) {
    match action {
        Action::SubmitEntry => {
            // Any submit attempt dismisses the popover, like a click on the submit button would.
            app.close_preset_popover();
            app.submit_entry();
        }
        Action::ClearEntries => {
            app.clear_entries();
        }
    }
}
