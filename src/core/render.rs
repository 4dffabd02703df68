//! Plain-text rendering of the mapping table.
//!
//! Layout:
//!
//! ```text
//! <title line>
//! ====...
//! 自動生成日時: <timestamp>
//! 生成ツール: vsmap
//!
//! 各行形式: VSノード名 | Scratch日本語 | 実装クラス | 備考
//!
//! [<category>]
//! VSノード名 | Scratch日本語 | 実装クラス | 備考
//! ------...
//! <title> | <label> | <type> | <note>
//!
//! [<next category>]
//! ...
//! ```

use super::entry::Entry;

pub const DOCUMENT_TITLE: &str = "FUnity Visual Scripting 対応表（Scratch ブロック ↔ VS ノード）";
pub const GENERATOR_NAME: &str = "vsmap";
pub const COLUMN_LEGEND: &str = "VSノード名 | Scratch日本語 | 実装クラス | 備考";
pub const FIELD_SEPARATOR: &str = " | ";

const TITLE_RULE_WIDTH: usize = 64;
const SECTION_RULE_WIDTH: usize = 72;

/// Entries sharing a category, in report order.
#[derive(Debug, PartialEq, Eq)]
pub struct Section<'a> {
    pub category: &'a str,
    pub entries: Vec<&'a Entry>,
}

/// Sort by `(category, title)` and split into contiguous category sections.
///
/// Sections keep the order in which their category first appears in the
/// sorted sequence.
pub fn group_sections(entries: &[Entry]) -> Vec<Section<'_>> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.title.cmp(&b.title))
    });

    let mut sections: Vec<Section<'_>> = Vec::new();
    for entry in sorted {
        match sections.last_mut() {
            Some(section) if section.category == entry.category => section.entries.push(entry),
            _ => sections.push(Section {
                category: &entry.category,
                entries: vec![entry],
            }),
        }
    }
    sections
}

/// Note shown in the report: the entry's own note, else its definition site.
pub fn display_note(entry: &Entry) -> String {
    if !entry.note.is_empty() {
        return entry.note.clone();
    }
    match &entry.source {
        Some(source) => format!("定義: {}", source.path),
        None => String::new(),
    }
}

/// Format one data row.
pub fn format_row(entry: &Entry) -> String {
    [
        entry.title.as_str(),
        entry.label.as_str(),
        entry.type_identifier.as_str(),
        display_note(entry).as_str(),
    ]
    .join(FIELD_SEPARATOR)
}

/// Render the whole document. `generated_at` is printed verbatim in the header.
///
/// The result always ends with exactly one newline.
pub fn render_document(entries: &[Entry], generated_at: &str) -> String {
    let mut lines: Vec<String> = vec![
        DOCUMENT_TITLE.to_string(),
        "=".repeat(TITLE_RULE_WIDTH),
        format!("自動生成日時: {}", generated_at),
        format!("生成ツール: {}", GENERATOR_NAME),
        String::new(),
        format!("各行形式: {}", COLUMN_LEGEND),
        String::new(),
    ];

    for section in group_sections(entries) {
        lines.push(format!("[{}]", section.category));
        lines.push(COLUMN_LEGEND.to_string());
        lines.push("-".repeat(SECTION_RULE_WIDTH));
        lines.extend(section.entries.into_iter().map(format_row));
        lines.push(String::new());
    }

    let mut document = lines.join("\n").trim_end().to_string();
    document.push('\n');
    document
}
