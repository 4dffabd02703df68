//! Report entries and the title-keyed collection built during a scan.

use std::{
    collections::{BTreeMap, btree_map},
    fmt,
    path::{Component, Path},
};

/// Class name shown for required titles that have no implementation.
pub const UNIMPLEMENTED_TYPE: &str = "(未実装)";

/// Where a unit was declared, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Path with `/` separators regardless of platform.
    pub path: String,
    /// 1-based line of the `[UnitTitle(..)]` marker.
    pub line: usize,
}

impl SourceLocation {
    pub fn new(path: impl Into<String>, line: usize) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }

    /// Build a location for `file`, made relative to `root` when possible.
    pub fn relative_to(file: &Path, root: &Path, line: usize) -> Self {
        let relative = file.strip_prefix(root).unwrap_or(file);
        Self::new(display_path(relative), line)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

/// Join path components with `/` so rendered reports are identical on every platform.
pub fn display_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::RootDir => Some(String::new()),
            Component::Prefix(prefix) => Some(prefix.as_os_str().to_string_lossy().into_owned()),
            Component::CurDir => None,
            Component::ParentDir => Some("..".to_string()),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// One row of the mapping table.
///
/// Entries are built once by the resolver and never edited afterwards;
/// the renderer derives the displayed note without mutating the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Unit title, e.g. `Scratch/Move Steps`. Identity key of the entry.
    pub title: String,
    /// Implementing class, or [`UNIMPLEMENTED_TYPE`] for placeholders.
    pub type_identifier: String,
    pub category: String,
    /// Localized (Scratch) label.
    pub label: String,
    pub note: String,
    /// Present only for entries discovered by the scanner.
    pub source: Option<SourceLocation>,
}

/// Title-keyed entries with an explicit insert-or-replace policy.
///
/// A later [`EntryMap::upsert`] for an existing title supersedes the earlier
/// entry. Because the scanner feeds files in sorted path order, the
/// definition from the last file in that order wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryMap {
    entries: BTreeMap<String, Entry>,
}

impl EntryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry`, replacing any entry with the same title.
    ///
    /// Returns the superseded entry, if any.
    pub fn upsert(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(entry.title.clone(), entry)
    }

    /// Insert `entry` only when its title is absent. Returns `true` if inserted.
    pub fn insert_missing(&mut self, entry: Entry) -> bool {
        match self.entries.entry(entry.title.clone()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, title: &str) -> Option<&Entry> {
        self.entries.get(title)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries.into_values().collect()
    }
}

impl FromIterator<Entry> for EntryMap {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut map = EntryMap::new();
        for entry in iter {
            map.upsert(entry);
        }
        map
    }
}
