use std::fmt;
use time::OffsetDateTime;

/// Session-unique entry identifier: `<unix millis>-<sequence hex>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryId(String);

impl EntryId {
    fn generate(sequence: u64) -> Self {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        Self(format!("{}-{:x}", millis, sequence))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A committed time entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub project_id: String,
    pub duration: String,
}

/// Session-only list of committed entries, newest first.
///
/// Entries only get in through a successful submit and only leave through [`EntryLog::clear`].
#[derive(Debug, Default)]
pub struct EntryLog {
    entries: Vec<Entry>,
    next_sequence: u64,
}

impl EntryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn prepend(&mut self, project_id: String, duration: String) -> Entry {
        let entry = Entry {
            id: EntryId::generate(self.next_sequence),
            project_id,
            duration,
        };
        // The sequence survives `clear`, so ids stay unique for the whole session.
        self.next_sequence += 1;
        self.entries.insert(0, entry.clone());
        entry
    }

    /// Drop every entry. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// 1-based number shown next to the entry at `index`; the oldest entry is 1.
    pub fn display_number(&self, index: usize) -> usize {
        self.entries.len().saturating_sub(index)
    }
}
