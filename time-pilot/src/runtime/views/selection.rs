use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_select_project_key(key: KeyEvent, app: &mut App) {
    if handle_selection_input_key(key, app) {
        return;
    }

    match key.code {
        KeyCode::Enter => app.confirm_project_selection(),
        KeyCode::Esc => app.cancel_selection(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.quit();
        }
        _ => {}
    }
}

fn handle_selection_input_key(key: KeyEvent, app: &mut App) -> bool {
    let list_index = app.filtered_project_index;
    let list_len = app.filtered_projects.len();

    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_clear();
            true
        }
        KeyCode::Tab => {
            app.selection_list_focused = true;
            true
        }
        KeyCode::BackTab => {
            app.selection_list_focused = false;
            true
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.selection_list_focused && c == 'j' {
                if list_index + 1 >= list_len {
                    app.selection_list_focused = false;
                } else {
                    app.select_next_project();
                }
            } else if app.selection_list_focused && c == 'k' {
                if list_index == 0 {
                    app.selection_list_focused = false;
                } else {
                    app.select_previous_project();
                }
            } else if !app.selection_list_focused {
                app.search_input_char(c);
            }
            true
        }
        KeyCode::Backspace => {
            app.search_input_backspace();
            true
        }
        KeyCode::Up => {
            if app.selection_list_focused && list_index == 0 {
                app.selection_list_focused = false;
            } else {
                app.select_previous_project();
            }
            true
        }
        KeyCode::Down => {
            if app.selection_list_focused && list_index + 1 >= list_len {
                app.selection_list_focused = false;
            } else {
                app.select_next_project();
            }
            true
        }
        KeyCode::Left | KeyCode::Right => {
            if !app.selection_list_focused {
                app.search_move_cursor(key.code == KeyCode::Left);
            }
            true
        }
        KeyCode::Home | KeyCode::End => {
            if !app.selection_list_focused {
                app.search_cursor_home_end(key.code == KeyCode::Home);
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{FocusedField, View};
    use crate::config::TimePilotConfig;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn picker_app() -> App {
        let mut app = App::new(&TimePilotConfig::default());
        app.navigate_to(View::SelectProject);
        app
    }

    #[test]
    fn type_to_filter_then_enter_selects() {
        let mut app = picker_app();
        for c in "growth".chars() {
            handle_select_project_key(key(KeyCode::Char(c)), &mut app);
        }
        handle_select_project_key(key(KeyCode::Enter), &mut app);

        assert_eq!(app.form.selected_project_id, "PRJ-310");
        assert_eq!(app.current_view, View::Form);
        assert_eq!(app.focused_field, FocusedField::Duration);
    }

    #[test]
    fn list_focus_uses_vim_keys() {
        let mut app = picker_app();
        handle_select_project_key(key(KeyCode::Tab), &mut app);
        handle_select_project_key(key(KeyCode::Char('j')), &mut app);
        handle_select_project_key(key(KeyCode::Char('j')), &mut app);
        assert_eq!(app.filtered_project_index, 2);
        assert!(app.project_search_input.value.is_empty());

        handle_select_project_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.form.selected_project_id, "PRJ-427");
    }

    #[test]
    fn ctrl_c_and_ctrl_q_quit_from_the_picker() {
        for c in ['c', 'q'] {
            let mut app = picker_app();
            handle_select_project_key(
                KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL),
                &mut app,
            );
            assert!(!app.running);
            assert!(app.project_search_input.value.is_empty());
        }
    }

    #[test]
    fn esc_returns_without_selecting() {
        let mut app = picker_app();
        handle_select_project_key(key(KeyCode::Down), &mut app);
        handle_select_project_key(key(KeyCode::Esc), &mut app);
        assert_eq!(app.current_view, View::Form);
        assert_eq!(app.form.selected_project_id, "");
    }
}
