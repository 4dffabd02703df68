//! Title → category/label resolution with the untranslated fallback.

use super::{
    catalog::Catalog,
    entry::{Entry, SourceLocation, UNIMPLEMENTED_TYPE},
};

/// Section used for titles without a category mapping.
pub const DEFAULT_CATEGORY: &str = "未分類";

/// Appended to the title when no label exists.
pub const TODO_LABEL_SUFFIX: &str = "※TODO: 日本語訳を確認";

/// Note attached to entries whose label fell back to the title.
pub const TRANSLATION_REVIEW_NOTE: &str = "TODO: 日本語訳の精査が必要";

/// Note attached to synthesized entries for unimplemented required titles.
pub const NOT_IMPLEMENTED_NOTE: &str = "未実装: 対応する Unit が見つかりません";

/// Builds complete [`Entry`] values from a title. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Resolve a unit discovered in `source`.
    pub fn resolve(
        &self,
        title: &str,
        type_identifier: &str,
        source: Option<SourceLocation>,
    ) -> Entry {
        let (label, note) = match self.catalog.label(title) {
            Some(label) => (label.to_string(), String::new()),
            None => (todo_label(title), TRANSLATION_REVIEW_NOTE.to_string()),
        };

        Entry {
            title: title.to_string(),
            type_identifier: type_identifier.to_string(),
            category: self.category(title),
            label,
            note,
            source,
        }
    }

    /// Synthesize the row for a required title nothing implements.
    ///
    /// The label still falls back to the TODO form, but the note always
    /// reports the missing implementation.
    pub fn placeholder(&self, title: &str) -> Entry {
        let label = self
            .catalog
            .label(title)
            .map(str::to_string)
            .unwrap_or_else(|| todo_label(title));

        Entry {
            title: title.to_string(),
            type_identifier: UNIMPLEMENTED_TYPE.to_string(),
            category: self.category(title),
            label,
            note: NOT_IMPLEMENTED_NOTE.to_string(),
            source: None,
        }
    }

    fn category(&self, title: &str) -> String {
        self.catalog
            .category(title)
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string()
    }
}

fn todo_label(title: &str) -> String {
    format!("{} {}", title, TODO_LABEL_SUFFIX)
}
