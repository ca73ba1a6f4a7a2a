use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use super::FormState;

static DURATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0-9]+(\.[0-9]+)?\s*(m|h)$").unwrap());

const DEEP_WORK_MARKER: &str = "deep work";

/// Why a single form field blocks a submit. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Select a project ID before logging time.")]
    MissingProject,
    #[error("Add a duration such as 30m or 1.5h.")]
    MissingDuration,
    #[error("Use m/h format (e.g., 45m, 1.5h) or Deep Work Block.")]
    InvalidDurationFormat,
}

/// Field-keyed validation result. Empty means the form can be committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub project: Option<FieldError>,
    pub duration: Option<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.project.is_none() && self.duration.is_none()
    }

    /// The message for the error banner: the project error wins over the duration error.
    pub fn first_message(&self) -> Option<String> {
        self.project.or(self.duration).map(|e| e.to_string())
    }

    pub fn messages(&self) -> Vec<String> {
        [self.project, self.duration]
            .into_iter()
            .flatten()
            .map(|e| e.to_string())
            .collect()
    }
}

/// Accepts `<digits>[.<digits>] <m|h>` or anything mentioning "deep work".
///
/// The numeric part has no range bound: `0m` and `99999h` both pass.
pub fn is_duration_valid(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }

    if trimmed.to_lowercase().contains(DEEP_WORK_MARKER) {
        return true;
    }

    DURATION_PATTERN.is_match(trimmed)
}

pub fn validate(state: &FormState) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if state.selected_project_id.is_empty() {
        errors.project = Some(FieldError::MissingProject);
    }

    let duration = state.duration_text();
    if duration.trim().is_empty() {
        errors.duration = Some(FieldError::MissingDuration);
    } else if !is_duration_valid(duration) {
        errors.duration = Some(FieldError::InvalidDurationFormat);
    }

    errors
}
