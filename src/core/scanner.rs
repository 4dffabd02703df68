//! Discovery of `[UnitTitle("...")]` units in C# definition files.
//!
//! Scanning is a two-step search over the raw file text:
//!
//! 1. find the next title marker `[UnitTitle("<title>")]`
//! 2. from the end of that marker, find the nearest `class <Name> : Unit`
//!    declaration, possibly several lines further down
//!
//! A matched pair becomes a candidate and the search resumes after the
//! declaration. A marker without a following declaration yields no candidate
//! and is reported as [`ScanDiagnostic::DanglingTitle`].

use std::{
    fmt, fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result};
use glob::Pattern;
use regex::Regex;
use walkdir::WalkDir;

use super::{
    catalog::Catalog,
    entry::{EntryMap, SourceLocation, display_path},
    resolver::Resolver,
};

/// File name suffixes of unit definition files.
pub const DEFINITION_FILE_SUFFIXES: &[&str] = &["Unit.cs", "Units.cs"];

static TITLE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[UnitTitle\("([^"]+)"\)\]"#).unwrap());

// `Unit` is matched as a prefix of the base type, so `: UnitBase` pairs with its own marker.
static TYPE_DECLARATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bclass\s+(\w+)\s*:\s*Unit").unwrap());

/// A title marker paired with the class declared after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDeclaration {
    pub title: String,
    pub type_identifier: String,
    /// 1-based line of the title marker.
    pub line: usize,
}

/// A title marker with no class declaration after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingTitle {
    pub title: String,
    pub line: usize,
}

/// Result of the two-step scan over a single file's text.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExtractedUnits {
    pub declarations: Vec<UnitDeclaration>,
    pub dangling: Vec<DanglingTitle>,
}

/// Non-fatal findings reported alongside a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanDiagnostic {
    /// The units directory does not exist; the scan is empty.
    MissingUnitsDir { path: PathBuf },
    /// A whitelisted title marker was not followed by a `class .. : Unit` declaration.
    DanglingTitle {
        title: String,
        location: SourceLocation,
    },
    /// A title was declared again; the later declaration replaced the earlier one.
    Overridden {
        title: String,
        previous: SourceLocation,
        current: SourceLocation,
    },
}

impl fmt::Display for ScanDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanDiagnostic::MissingUnitsDir { path } => {
                write!(f, "Units directory does not exist: {}", path.display())
            }
            ScanDiagnostic::DanglingTitle { title, location } => write!(
                f,
                "\"{}\" at {} has no following `class .. : Unit` declaration",
                title, location
            ),
            ScanDiagnostic::Overridden {
                title,
                previous,
                current,
            } => write!(
                f,
                "\"{}\" is declared more than once; {} replaces {}",
                title, current, previous
            ),
        }
    }
}

/// Everything discovered by [`Scanner::scan`].
#[derive(Debug, Default)]
pub struct ScanResult {
    pub entries: EntryMap,
    pub files_scanned: usize,
    pub diagnostics: Vec<ScanDiagnostic>,
}

/// Walks a units directory and resolves every whitelisted declaration.
pub struct Scanner<'a> {
    catalog: &'a Catalog,
    resolver: Resolver<'a>,
    /// Source locations are recorded relative to this directory.
    root: PathBuf,
    ignores: Vec<Pattern>,
}

impl<'a> Scanner<'a> {
    pub fn new(catalog: &'a Catalog, root: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            resolver: Resolver::new(catalog),
            root: root.into(),
            ignores: Vec::new(),
        }
    }

    /// Skip definition files whose path relative to the units directory matches any pattern.
    pub fn with_ignores(mut self, ignores: Vec<Pattern>) -> Self {
        self.ignores = ignores;
        self
    }

    /// Scan every definition file under `units_dir` in sorted path order.
    ///
    /// Unreadable files abort the scan.
    pub fn scan(&self, units_dir: &Path) -> Result<ScanResult> {
        let mut result = ScanResult::default();

        if !units_dir.is_dir() {
            result.diagnostics.push(ScanDiagnostic::MissingUnitsDir {
                path: units_dir.to_path_buf(),
            });
            return Ok(result);
        }

        for path in self.definition_files(units_dir)? {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read definition file: {:?}", path))?;
            self.scan_source(&path, &text, &mut result);
            result.files_scanned += 1;
        }

        Ok(result)
    }

    /// Add the units declared in `text` (read from `path`) to `result`.
    pub fn scan_source(&self, path: &Path, text: &str, result: &mut ScanResult) {
        let extracted = extract_units(text);

        for dangling in extracted.dangling {
            if self.catalog.in_namespace(&dangling.title) {
                result.diagnostics.push(ScanDiagnostic::DanglingTitle {
                    location: SourceLocation::relative_to(path, &self.root, dangling.line),
                    title: dangling.title,
                });
            }
        }

        for declaration in extracted.declarations {
            if !self.catalog.in_namespace(&declaration.title) {
                continue;
            }

            let location = SourceLocation::relative_to(path, &self.root, declaration.line);
            let entry = self.resolver.resolve(
                &declaration.title,
                &declaration.type_identifier,
                Some(location.clone()),
            );

            if let Some(previous) = result.entries.upsert(entry)
                && let Some(previous_location) = previous.source
            {
                result.diagnostics.push(ScanDiagnostic::Overridden {
                    title: declaration.title,
                    previous: previous_location,
                    current: location,
                });
            }
        }
    }

    fn definition_files(&self, units_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(units_dir) {
            let entry = entry
                .with_context(|| format!("Cannot access path under {:?}", units_dir))?;
            if !entry.file_type().is_file() || !is_definition_file(entry.path()) {
                continue;
            }

            let relative = entry.path().strip_prefix(units_dir).unwrap_or(entry.path());
            let relative = display_path(relative);
            if self.ignores.iter().any(|p| p.matches(&relative)) {
                continue;
            }

            files.push(entry.into_path());
        }

        // Later files override earlier ones, so the order must not depend on the filesystem.
        files.sort();
        Ok(files)
    }
}

pub fn is_definition_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            DEFINITION_FILE_SUFFIXES
                .iter()
                .any(|suffix| name.ends_with(suffix))
        })
}

/// Pair every title marker in `text` with the nearest following unit class.
pub fn extract_units(text: &str) -> ExtractedUnits {
    let line_index = build_line_index(text);
    let mut extracted = ExtractedUnits::default();
    let mut cursor = 0;

    while let Some(marker) = TITLE_MARKER_REGEX.captures_at(text, cursor) {
        let Some(marker_match) = marker.get(0) else {
            break;
        };
        let title = marker[1].to_string();
        let line = find_line(&line_index, marker_match.start());

        match TYPE_DECLARATION_REGEX.captures_at(text, marker_match.end()) {
            Some(declaration) => {
                extracted.declarations.push(UnitDeclaration {
                    title,
                    type_identifier: declaration[1].to_string(),
                    line,
                });
                cursor = declaration.get(0).map_or(marker_match.end(), |m| m.end());
            }
            None => {
                extracted.dangling.push(DanglingTitle { title, line });
                cursor = marker_match.end();
            }
        }
    }

    extracted
}

/// Byte offsets where each line starts. Line 1 starts at offset 0.
fn build_line_index(text: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in text.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line containing `offset`.
fn find_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
