//! Built-in lookup tables for the Scratch ↔ Visual Scripting mapping.
//!
//! The tables are plain read-only data. They are handed to the scanner,
//! resolver and reconciler as a [`Catalog`] so tests can supply their own.

use std::collections::HashMap;

/// Title → Scratch (Japanese) block label.
const LABELS: &[(&str, &str)] = &[
    ("Scratch/Move Steps", "◯歩動かす"),
    ("Scratch/Point Direction", "◯度に向ける"),
    ("Scratch/Turn Right", "◯度回す（右回り）"),
    ("Scratch/Turn Left", "◯度回す（左回り）"),
    ("Scratch/Turn Degrees", "◯度回す"),
    ("Scratch/Go To (x, y)", "x:◯ y:◯ へ行く"),
    ("Scratch/Go To X,Y", "x:◯ y:◯ へ行く"),
    ("Scratch/Set X", "x座標を ◯ にする"),
    ("Scratch/Change X by", "x座標を ◯ ずつ変える"),
    ("Scratch/Change X By", "x座標を ◯ ずつ変える"),
    ("Scratch/Set Y", "y座標を ◯ にする"),
    ("Scratch/Change Y by", "y座標を ◯ ずつ変える"),
    ("Scratch/Change Y By", "y座標を ◯ ずつ変える"),
    ("Scratch/Repeat (n)", "◯ 回繰り返す"),
    ("Scratch/Repeat N", "◯ 回繰り返す"),
    ("Scratch/Forever", "ずっと"),
    ("Scratch/Wait Seconds", "◯ 秒待つ"),
    ("Scratch/Say", "◯ と言う"),
];

const MOTION: &str = "基本操作";
const LOOKS: &str = "表示・演出";
const CONTROL: &str = "制御";

/// Title → report section.
const CATEGORIES: &[(&str, &str)] = &[
    ("Scratch/Move Steps", MOTION),
    ("Scratch/Turn Degrees", MOTION),
    ("Scratch/Turn Right", MOTION),
    ("Scratch/Turn Left", MOTION),
    ("Scratch/Point Direction", MOTION),
    ("Scratch/Go To (x, y)", MOTION),
    ("Scratch/Go To X,Y", MOTION),
    ("Scratch/Set X", MOTION),
    ("Scratch/Change X by", MOTION),
    ("Scratch/Change X By", MOTION),
    ("Scratch/Set Y", MOTION),
    ("Scratch/Change Y by", MOTION),
    ("Scratch/Change Y By", MOTION),
    ("Scratch/Say", LOOKS),
    ("Scratch/Repeat (n)", CONTROL),
    ("Scratch/Repeat N", CONTROL),
    ("Scratch/Forever", CONTROL),
    ("Scratch/Wait Seconds", CONTROL),
];

/// Titles that must appear in every report, implemented or not.
const REQUIRED_TITLES: &[&str] = &[
    "Scratch/Move Steps",
    "Scratch/Turn Degrees",
    "Scratch/Point Direction",
    "Scratch/Go To X,Y",
    "Scratch/Set X",
    "Scratch/Change X By",
    "Scratch/Set Y",
    "Scratch/Change Y By",
    "Scratch/Repeat N",
    "Scratch/Forever",
    "Scratch/Wait Seconds",
    "Scratch/Say",
];

/// Title prefixes that belong to this catalogue. Everything else is ignored.
const NAMESPACES: &[&str] = &["Scratch/", "Fooni/"];

/// Read-only lookup data shared by every pipeline stage.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub labels: HashMap<String, String>,
    pub categories: HashMap<String, String>,
    /// Ordered; placeholders are synthesized in this order.
    pub required_titles: Vec<String>,
    pub namespaces: Vec<String>,
}

impl Catalog {
    /// The tables shipped with the tool.
    pub fn builtin() -> Self {
        Self {
            labels: to_map(LABELS),
            categories: to_map(CATEGORIES),
            required_titles: to_vec(REQUIRED_TITLES),
            namespaces: to_vec(NAMESPACES),
        }
    }

    pub fn label(&self, title: &str) -> Option<&str> {
        self.labels.get(title).map(String::as_str)
    }

    pub fn category(&self, title: &str) -> Option<&str> {
        self.categories.get(title).map(String::as_str)
    }

    /// Whether `title` starts with one of the recognized namespace prefixes.
    pub fn in_namespace(&self, title: &str) -> bool {
        self.namespaces.iter().any(|prefix| title.starts_with(prefix))
    }
}

fn to_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn to_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
