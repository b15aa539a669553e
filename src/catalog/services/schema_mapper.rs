//! Maps raw parsed records onto the Tool Center v2 schema.
//!
//! Free-text category labels are classified against a fixed lookup table
//! into the three schema arrays (availability, functions, packaging).
//! Unknown labels are dropped silently: the legacy catalogue accumulated
//! plenty of ad-hoc labels over the years and none of them are errors.

use crate::catalog::domain::{RawRecord, ToolEntry};
use crate::config::ConvertConfig;

/// Which schema array a category label maps into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetList {
    Availability,
    Functions,
    Packaging,
}

/// Recognized category labels. Each label maps to exactly one
/// (array, enum token) pair.
const BUILTIN_MAPPINGS: &[(&str, TargetList, &str)] = &[
    ("opensource", TargetList::Availability, "OPEN_SOURCE"),
    ("proprietary", TargetList::Availability, "SUBSCRIPTION"),
    ("analysis", TargetList::Functions, "ANALYSIS"),
    ("transform", TargetList::Functions, "TRANSFORM"),
    ("signing-notary", TargetList::Functions, "SIGNING/NOTARY"),
    (
        "build-integration",
        TargetList::Functions,
        "PACKAGE_MANAGER_INTEGRATION",
    ),
    ("distribute", TargetList::Functions, "DISTRIBUTE"),
    ("author", TargetList::Functions, "AUTHOR"),
    ("library", TargetList::Packaging, "LIBRARY"),
    ("github-action", TargetList::Packaging, "GITHUB_ACTION"),
    ("github-app", TargetList::Packaging, "GITHUB_APP"),
];

/// Immutable category lookup table. Lookups are case-insensitive and
/// ignore surrounding whitespace.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    entries: &'static [(&'static str, TargetList, &'static str)],
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            entries: BUILTIN_MAPPINGS,
        }
    }
}

impl CategoryTable {
    pub fn lookup(&self, label: &str) -> Option<(TargetList, &'static str)> {
        let needle = label.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(known, _, _)| *known == needle)
            .map(|(_, target, token)| (*target, *token))
    }
}

/// SchemaMapper - turns one RawRecord into one ToolEntry
///
/// The mapper owns normalization (trimming, truncation, empty-URL
/// dropping) and category classification. It never attaches the reserved
/// arrays; that is the assembler's decision.
pub struct SchemaMapper<'a> {
    config: &'a ConvertConfig,
}

impl<'a> SchemaMapper<'a> {
    pub fn new(config: &'a ConvertConfig) -> Self {
        Self { config }
    }

    pub fn map(&self, record: &RawRecord) -> ToolEntry {
        let (availability, functions, packaging) = self.classify(&record.categories);

        ToolEntry {
            name: record.name.trim().to_string(),
            publisher: record
                .publisher
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
            description: truncate_description(
                record.description.as_deref().unwrap_or_default().trim(),
                self.config.max_description_len,
            ),
            availability,
            functions,
            packaging,
            repository_url: normalize_url(record.repo_url.as_deref()),
            website_url: normalize_url(record.website_url.as_deref()),
            ..ToolEntry::default()
        }
    }

    /// Classify raw labels into the three schema arrays. Hits append in
    /// first-seen order with set semantics; misses are dropped.
    fn classify(&self, categories: &[String]) -> (Vec<String>, Vec<String>, Vec<String>) {
        let mut availability = Vec::new();
        let mut functions = Vec::new();
        let mut packaging = Vec::new();

        for label in categories {
            let Some((target, token)) = self.config.category_table.lookup(label) else {
                continue;
            };
            let list = match target {
                TargetList::Availability => &mut availability,
                TargetList::Functions => &mut functions,
                TargetList::Packaging => &mut packaging,
            };
            if !list.iter().any(|existing| existing == token) {
                list.push(token.to_string());
            }
        }

        (availability, functions, packaging)
    }
}

/// Hard-cut the description at `max_len` characters. No ellipsis, no
/// word-boundary adjustment; counts chars, not bytes.
fn truncate_description(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect()
    } else {
        text.to_string()
    }
}

/// An empty or whitespace-only URL means "absent", so the output key can
/// be omitted entirely.
fn normalize_url(value: Option<&str>) -> Option<String> {
    let trimmed = value.unwrap_or_default().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
