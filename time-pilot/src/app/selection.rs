use super::*;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

impl App {
    /// Filter the project picker by id or name using fuzzy matching
    pub fn filter_projects(&mut self) {
        if self.project_search_input.value.is_empty() {
            self.filtered_projects = catalog::PROJECTS.iter().collect();
            self.filtered_project_index = 0;
            return;
        }

        let matcher = SkimMatcherV2::default();
        let mut scored_projects: Vec<(&'static Project, i64)> = catalog::PROJECTS
            .iter()
            .filter_map(|project| {
                matcher
                    .fuzzy_match(
                        &format!("{} {}", project.id, project.name),
                        &self.project_search_input.value,
                    )
                    .map(|score| (project, score))
            })
            .collect();

        scored_projects.sort_by(|a, b| b.1.cmp(&a.1));
        self.filtered_projects = scored_projects.into_iter().map(|(p, _)| p).collect();
        self.filtered_project_index = 0;
    }

    pub fn search_input_char(&mut self, c: char) {
        self.project_search_input.insert(c);
        self.filter_projects();
    }

    pub fn search_input_backspace(&mut self) {
        self.project_search_input.backspace();
        self.filter_projects();
    }

    pub fn search_input_clear(&mut self) {
        self.project_search_input.clear();
        self.filter_projects();
    }

    pub fn search_move_cursor(&mut self, left: bool) {
        if left {
            self.project_search_input.move_left();
        } else {
            self.project_search_input.move_right();
        }
    }

    pub fn search_cursor_home_end(&mut self, home: bool) {
        if home {
            self.project_search_input.home();
        } else {
            self.project_search_input.end();
        }
    }

    pub fn select_next_project(&mut self) {
        if !self.filtered_projects.is_empty() {
            self.filtered_project_index =
                (self.filtered_project_index + 1) % self.filtered_projects.len();
        }
    }

    pub fn select_previous_project(&mut self) {
        if !self.filtered_projects.is_empty() {
            self.filtered_project_index = if self.filtered_project_index == 0 {
                self.filtered_projects.len() - 1
            } else {
                self.filtered_project_index - 1
            };
        }
    }

    /// Select the highlighted project and return to the form with focus on the duration.
    pub fn confirm_project_selection(&mut self) {
        if let Some(project) = self.filtered_projects.get(self.filtered_project_index).copied() {
            self.form.select_project(project.id);
            self.navigate_to(View::Form);
            self.focused_field = FocusedField::Duration;
            self.set_status(format!("Selected project: {} · {}", project.id, project.name));
        }
    }

    /// Leave the picker without touching the current selection
    pub fn cancel_selection(&mut self) {
        self.navigate_to(View::Form);
        self.focused_field = FocusedField::Project;
    }
}
