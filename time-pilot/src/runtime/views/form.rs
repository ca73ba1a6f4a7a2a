use crate::app::{App, FocusedField, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
            app.quit();
            return;
        }
        _ => {}
    }

    if app.preset_popover.is_open() {
        handle_preset_popover_key(key, app, action_tx);
        return;
    }

    match key.code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Char('l') if ctrl => enqueue_action(action_tx, Action::ClearEntries),
        KeyCode::Char('p') if ctrl => {
            app.focus(FocusedField::Duration);
            app.toggle_preset_popover();
        }
        KeyCode::Esc => app.quit(),
        _ => match app.focused_field {
            FocusedField::Project => handle_project_field_key(key, app),
            FocusedField::Duration => handle_duration_field_key(key, app, action_tx),
            FocusedField::Submit => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    enqueue_action(action_tx, Action::SubmitEntry);
                }
            }
            FocusedField::Clear => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    enqueue_action(action_tx, Action::ClearEntries);
                }
            }
        },
    }
}

fn handle_project_field_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
            app.navigate_to(View::SelectProject);
        }
        KeyCode::Backspace | KeyCode::Delete => app.clear_selected_project(),
        _ => {}
    }
}

fn handle_duration_field_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('x') if ctrl => app.input_clear(),
        KeyCode::Char(c) if !ctrl => app.input_char(c),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Delete => app.input_delete(),
        KeyCode::Left => app.input_move_cursor(true),
        KeyCode::Right => app.input_move_cursor(false),
        KeyCode::Home => app.input_cursor_home_end(true),
        KeyCode::End => app.input_cursor_home_end(false),
        KeyCode::Down => app.toggle_preset_popover(),
        KeyCode::Enter => enqueue_action(action_tx, Action::SubmitEntry),
        _ => {}
    }
}

fn handle_preset_popover_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.close_preset_popover(),
        KeyCode::Char('p') if ctrl => app.toggle_preset_popover(),
        KeyCode::Up | KeyCode::Char('k') => app.preset_move(false),
        KeyCode::Down | KeyCode::Char('j') => app.preset_move(true),
        KeyCode::Enter => {
            app.choose_highlighted_preset();
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.choose_preset(index);
        }
        KeyCode::Tab => {
            app.close_preset_popover();
            app.focus_next();
        }
        KeyCode::Char('l') if ctrl => {
            app.close_preset_popover();
            enqueue_action(action_tx, Action::ClearEntries);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimePilotConfig;

    use super::super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn test_app() -> App {
        let mut app = App::new(&TimePilotConfig::default());
        app.focused_field = FocusedField::Duration;
        app
    }

    fn press(app: &mut App, event: KeyEvent) -> Option<Action> {
        let (tx, mut rx) = channel();
        handle_form_key(event, app, &tx);
        rx.try_recv().ok()
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_fills_duration_and_enter_queues_submit() {
        let mut app = test_app();
        type_str(&mut app, "1.5h");
        assert_eq!(app.form.duration_text(), "1.5h");

        assert_eq!(press(&mut app, key(KeyCode::Enter)), Some(Action::SubmitEntry));
    }

    #[test]
    fn q_is_just_a_character_in_the_duration_field() {
        let mut app = test_app();
        type_str(&mut app, "q");
        assert!(app.running);
        assert_eq!(app.form.duration_text(), "q");
    }

    #[test]
    fn ctrl_p_opens_popover_and_digit_picks_preset() {
        let mut app = test_app();
        type_str(&mut app, "junk");

        press(&mut app, ctrl('p'));
        assert!(app.preset_popover.is_open());

        press(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.form.duration_text(), "30m");
        assert!(!app.preset_popover.is_open());
    }

    #[test]
    fn popover_navigation_and_enter_choose_highlighted() {
        let mut app = test_app();
        press(&mut app, key(KeyCode::Down));
        assert!(app.preset_popover.is_open());

        press(&mut app, key(KeyCode::Up));
        press(&mut app, key(KeyCode::Enter));
        assert_eq!(app.form.duration_text(), "Deep Work Block (90m)");
    }

    #[test]
    fn esc_closes_popover_before_quitting() {
        let mut app = test_app();
        app.form.set_duration("45m");
        press(&mut app, ctrl('p'));

        press(&mut app, key(KeyCode::Esc));
        assert!(!app.preset_popover.is_open());
        assert!(app.running);
        assert_eq!(app.form.duration_text(), "45m");

        press(&mut app, key(KeyCode::Esc));
        assert!(!app.running);
    }

    #[test]
    fn enter_on_project_field_opens_picker() {
        let mut app = test_app();
        app.focused_field = FocusedField::Project;
        press(&mut app, key(KeyCode::Enter));
        assert_eq!(app.current_view, View::SelectProject);
    }

    #[test]
    fn backspace_on_project_field_unselects() {
        let mut app = test_app();
        app.form.select_project("PRJ-248");
        app.focused_field = FocusedField::Project;
        press(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.form.selected_project_id, "");
    }

    #[test]
    fn ctrl_l_queues_clear() {
        let mut app = test_app();
        assert_eq!(press(&mut app, ctrl('l')), Some(Action::ClearEntries));
    }

    #[test]
    fn submit_button_reacts_to_enter_and_space() {
        let mut app = test_app();
        app.focused_field = FocusedField::Submit;
        assert_eq!(press(&mut app, key(KeyCode::Enter)), Some(Action::SubmitEntry));
        assert_eq!(
            press(&mut app, key(KeyCode::Char(' '))),
            Some(Action::SubmitEntry)
        );
    }
}
