use crate::catalog::{self, Project, DURATION_PRESETS};
use crate::config::TimePilotConfig;
use crate::form::{EntryLog, FormState, SubmitOutcome, ValidationErrors};
use crate::text_input::TextInput;

mod selection;
mod state;
pub use state::{FocusedField, HitAreas, PresetPopover, View};

pub struct App {
    pub running: bool,
    pub status_message: Option<String>,
    pub current_view: View,
    pub focused_field: FocusedField,

    // Form and what it commits into
    pub form: FormState,
    pub entries: EntryLog,
    pub errors: ValidationErrors,
    pub preset_popover: PresetPopover,

    // Fuzzy finding for the project picker
    pub project_search_input: TextInput,
    pub filtered_projects: Vec<&'static Project>,
    pub filtered_project_index: usize,
    pub selection_list_focused: bool,

    // Last-rendered regions (updated by renderer each frame)
    pub hit_areas: HitAreas,
}

impl App {
    pub fn new(cfg: &TimePilotConfig) -> Self {
        let project_id = match cfg.default_project.as_deref() {
            Some(id) if catalog::find_project(id).is_some() => id,
            Some(id) => {
                tracing::warn!(project_id = id, "ignoring unknown default_project");
                ""
            }
            None => "",
        };

        Self {
            running: true,
            status_message: None,
            current_view: View::Form,
            focused_field: FocusedField::Project,
            form: FormState::new(project_id, ""),
            entries: EntryLog::new(),
            errors: ValidationErrors::default(),
            preset_popover: PresetPopover::Closed,
            project_search_input: TextInput::new(),
            filtered_projects: catalog::PROJECTS.iter().collect(),
            filtered_project_index: 0,
            selection_list_focused: false,
            hit_areas: HitAreas::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Navigate to a different view
    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        self.clear_status();

        if view == View::SelectProject {
            self.preset_popover.close();
            self.project_search_input.clear();
            self.filter_projects();
            self.filtered_project_index = self
                .filtered_projects
                .iter()
                .position(|p| p.id == self.form.selected_project_id)
                .unwrap_or(0);
            self.selection_list_focused = false;
        }
    }

    fn focus_order(&self) -> Vec<FocusedField> {
        let mut order = vec![
            FocusedField::Project,
            FocusedField::Duration,
            FocusedField::Submit,
        ];
        // Clear is only offered while there is something to clear.
        if !self.entries.is_empty() {
            order.push(FocusedField::Clear);
        }
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let idx = order
            .iter()
            .position(|f| *f == self.focused_field)
            .map_or(0, |i| (i + 1) % order.len());
        self.focused_field = order[idx];
    }

    pub fn focus_previous(&mut self) {
        let order = self.focus_order();
        let idx = order
            .iter()
            .position(|f| *f == self.focused_field)
            .map_or(0, |i| (i + order.len() - 1) % order.len());
        self.focused_field = order[idx];
    }

    pub fn focus(&mut self, field: FocusedField) {
        if field == FocusedField::Clear && self.entries.is_empty() {
            return;
        }
        self.focused_field = field;
    }

    // Duration field editing

    pub fn input_char(&mut self, c: char) {
        self.form.duration.insert(c);
    }

    pub fn input_backspace(&mut self) {
        self.form.duration.backspace();
    }

    pub fn input_delete(&mut self) {
        self.form.duration.delete();
    }

    pub fn input_move_cursor(&mut self, left: bool) {
        if left {
            self.form.duration.move_left();
        } else {
            self.form.duration.move_right();
        }
    }

    pub fn input_cursor_home_end(&mut self, home: bool) {
        if home {
            self.form.duration.home();
        } else {
            self.form.duration.end();
        }
    }

    pub fn input_clear(&mut self) {
        self.form.duration.clear();
    }

    /// Back to the "Select Project ID" placeholder.
    pub fn clear_selected_project(&mut self) {
        self.form.clear_project();
    }

    /// Validate the form and commit an entry when it is clean.
    ///
    /// The error cell is replaced wholesale on every attempt.
    pub fn submit_entry(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit(&mut self.entries);
        self.errors = outcome.errors.clone();

        match &outcome.entry {
            Some(entry) => {
                tracing::info!(
                    entry_id = %entry.id,
                    project_id = %entry.project_id,
                    duration = %entry.duration,
                    "logged entry"
                );
                self.set_status(format!(
                    "Logged {} on {}",
                    entry.duration,
                    catalog::project_label(&entry.project_id)
                ));
            }
            None => {
                tracing::debug!(errors = ?self.errors.messages(), "entry rejected");
                self.clear_status();
            }
        }

        outcome
    }

    /// Empty the entry log. Returns false when there was nothing to clear.
    pub fn clear_entries(&mut self) -> bool {
        if self.entries.is_empty() {
            self.set_status("No entries to clear".to_string());
            return false;
        }
        let removed = self.entries.clear();
        tracing::info!(removed, "cleared entries");
        if self.focused_field == FocusedField::Clear {
            self.focused_field = FocusedField::Duration;
        }
        self.set_status(format!("Cleared {} entries", removed));
        true
    }

    // Preset popover

    pub fn toggle_preset_popover(&mut self) {
        self.preset_popover.toggle();
        tracing::debug!(open = self.preset_popover.is_open(), "preset popover toggled");
    }

    pub fn close_preset_popover(&mut self) {
        if self.preset_popover.is_open() {
            self.preset_popover.close();
            tracing::debug!("preset popover closed");
        }
    }

    pub fn preset_move(&mut self, down: bool) {
        self.preset_popover
            .move_highlight(down, DURATION_PRESETS.len());
    }

    /// Write the preset at `index` into the duration field and close the popover.
    ///
    /// Only acts while the popover is open.
    pub fn choose_preset(&mut self, index: usize) -> bool {
        if !self.preset_popover.is_open() {
            return false;
        }
        let Some(preset) = DURATION_PRESETS.get(index) else {
            return false;
        };
        self.form.set_duration(preset.value);
        self.preset_popover.close();
        self.focused_field = FocusedField::Duration;
        tracing::debug!(preset = preset.value, "preset chosen");
        true
    }

    pub fn choose_highlighted_preset(&mut self) -> bool {
        match self.preset_popover.highlighted() {
            Some(index) => self.choose_preset(index),
            None => false,
        }
    }

    /// Display name of the selected project, if any.
    pub fn selected_project_label(&self) -> Option<String> {
        let id = self.form.selected_project_id.as_str();
        if id.is_empty() {
            return None;
        }
        Some(catalog::project_label(id))
    }
}
