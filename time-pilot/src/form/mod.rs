//! Form state, validation and the entry log it commits into.

mod entries;
mod validation;

pub use entries::{Entry, EntryLog};
#[cfg(test)]
pub use validation::FieldError;
pub use validation::{validate, ValidationErrors};

use crate::text_input::TextInput;

/// What the user has typed or picked so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Empty when no project is selected.
    pub selected_project_id: String,
    pub duration: TextInput,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub accepted: bool,
    pub errors: ValidationErrors,
    pub entry: Option<Entry>,
}

impl FormState {
    pub fn new(project_id: &str, duration: &str) -> Self {
        Self {
            selected_project_id: project_id.to_string(),
            duration: TextInput::from_str(duration),
        }
    }

    pub fn duration_text(&self) -> &str {
        &self.duration.value
    }

    pub fn select_project(&mut self, project_id: &str) {
        self.selected_project_id = project_id.to_string();
    }

    pub fn clear_project(&mut self) {
        self.selected_project_id.clear();
    }

    /// Overwrite the duration verbatim, as picking a preset does.
    pub fn set_duration(&mut self, value: &str) {
        self.duration.set(value);
    }

    /// Validate and, when clean, commit a new entry to the head of `log`.
    ///
    /// On success the duration is cleared and the project selection kept, so the
    /// next entry for the same project only needs a new duration. On failure
    /// neither the form nor the log is touched.
    pub fn submit(&mut self, log: &mut EntryLog) -> SubmitOutcome {
        let errors = validate(self);
        if !errors.is_empty() {
            return SubmitOutcome {
                accepted: false,
                errors,
                entry: None,
            };
        }

        let entry = log.prepend(
            self.selected_project_id.clone(),
            self.duration.value.trim().to_string(),
        );
        self.duration.clear();

        SubmitOutcome {
            accepted: true,
            errors: ValidationErrors::default(),
            entry: Some(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_submit_prepends_trimmed_entry_and_keeps_project() {
        let mut form = FormState::new("PRJ-248", "  45m ");
        let mut log = EntryLog::new();

        let outcome = form.submit(&mut log);

        assert!(outcome.accepted);
        assert!(outcome.errors.is_empty());
        let entry = outcome.entry.expect("accepted submit returns the entry");
        assert_eq!(entry.project_id, "PRJ-248");
        assert_eq!(entry.duration, "45m");
        assert_eq!(log.iter().next(), Some(&entry));
        assert_eq!(form.duration_text(), "");
        assert_eq!(form.selected_project_id, "PRJ-248");
    }

    #[test]
    fn rejected_submit_leaves_form_and_log_alone() {
        let mut form = FormState::new("", "45m");
        let mut log = EntryLog::new();

        let outcome = form.submit(&mut log);

        assert!(!outcome.accepted);
        assert_eq!(outcome.errors.project, Some(FieldError::MissingProject));
        assert_eq!(outcome.entry, None);
        assert!(log.is_empty());
        assert_eq!(form.duration_text(), "45m");
    }

    #[test]
    fn deep_work_still_needs_a_project() {
        let mut form = FormState::new("", "Deep Work Block (90m)");
        let mut log = EntryLog::new();

        let outcome = form.submit(&mut log);

        assert_eq!(outcome.errors.project, Some(FieldError::MissingProject));
        assert_eq!(outcome.errors.duration, None);
        assert!(log.is_empty());
    }

    #[test]
    fn n_submits_give_n_entries_newest_first() {
        let mut form = FormState::new("PRJ-310", "");
        let mut log = EntryLog::new();

        for duration in ["15m", "30m", "1.5h", "2H"] {
            form.set_duration(duration);
            assert!(form.submit(&mut log).accepted);
        }

        let durations: Vec<&str> = log.iter().map(|e| e.duration.as_str()).collect();
        assert_eq!(durations, vec!["2H", "1.5h", "30m", "15m"]);
        assert_eq!(log.clear(), 4);
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn unresolvable_project_ids_are_still_committed() {
        let mut form = FormState::new("PRJ-999", "1h");
        let mut log = EntryLog::new();

        assert!(form.submit(&mut log).accepted);
        assert_eq!(log.len(), 1);
    }
}
