/// A project time can be logged against. The set is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
}

/// A quick-pick duration offered by the preset popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationPreset {
    pub label: &'static str,
    pub value: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        id: "PRJ-248",
        name: "Lunar CRM Overhaul",
    },
    Project {
        id: "PRJ-310",
        name: "Mobile Growth Sprint",
    },
    Project {
        id: "PRJ-427",
        name: "Infrastructure Upgrade",
    },
    Project {
        id: "PRJ-509",
        name: "Deep Research Pod",
    },
];

pub static DURATION_PRESETS: [DurationPreset; 4] = [
    DurationPreset {
        label: "15m",
        value: "15m",
    },
    DurationPreset {
        label: "30m",
        value: "30m",
    },
    DurationPreset {
        label: "1h",
        value: "1h",
    },
    DurationPreset {
        label: "Deep Work Block (90m)",
        value: "Deep Work Block (90m)",
    },
];

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Display name for a project id. Unknown ids have no name.
pub fn project_name(id: &str) -> Option<&'static str> {
    find_project(id).map(|p| p.name)
}

/// `<id> · <name>`, or just the id when it does not resolve.
pub fn project_label(id: &str) -> String {
    match project_name(id) {
        Some(name) => format!("{} · {}", id, name),
        None => id.to_string(),
    }
}
