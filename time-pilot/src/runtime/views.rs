use crate::app::{App, View};
use crossterm::event::KeyEvent;

use super::action_queue::{Action, ActionTx};

mod form;
mod selection;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.current_view {
        View::Form => form::handle_form_key(key, app, action_tx),
        View::SelectProject => selection::handle_select_project_key(key, app),
    }
}
