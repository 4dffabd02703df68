//! Completeness check against the required title list.

use super::{
    catalog::Catalog,
    entry::{Entry, EntryMap},
    resolver::{Resolver, TRANSLATION_REVIEW_NOTE},
};

/// Counts reported after reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Entries found by the scanner.
    pub discovered: usize,
    /// Placeholders synthesized for unimplemented required titles.
    pub synthesized: usize,
    /// Discovered entries whose label fell back to the TODO form.
    pub untranslated: usize,
}

/// Discovered entries plus placeholders for every missing required title.
#[derive(Debug)]
pub struct Reconciled {
    pub entries: Vec<Entry>,
    pub summary: ReconcileSummary,
}

/// Add a placeholder for each required title absent from `entries`.
///
/// Existing entries are never modified. Absence is a reported status, not an error.
pub fn reconcile(mut entries: EntryMap, catalog: &Catalog) -> Reconciled {
    let resolver = Resolver::new(catalog);
    let discovered = entries.len();
    let untranslated = entries
        .iter()
        .filter(|entry| entry.note == TRANSLATION_REVIEW_NOTE)
        .count();

    let mut synthesized = 0;
    for title in &catalog.required_titles {
        if entries.insert_missing(resolver.placeholder(title)) {
            synthesized += 1;
        }
    }

    Reconciled {
        entries: entries.into_entries(),
        summary: ReconcileSummary {
            discovered,
            synthesized,
            untranslated,
        },
    }
}
