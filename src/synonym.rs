//! Synonym index mapping colloquial terms to standard symptom names.
//!
//! The synonym table lists one standard symptom name per row together with a
//! comma-separated list of the ways people actually describe it. The relation
//! is many-to-many: several rows may share a colloquial term, and one row may
//! list many terms, so every term maps to a *set* of standard names.

use std::collections::BTreeSet;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One row of the synonym table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    /// Canonical symptom label used for disease lookup.
    pub standard: String,
    /// Comma-separated colloquial terms for `standard`.
    pub similar_terms: String,
}

impl SynonymEntry {
    pub fn new<S: Into<String>, T: Into<String>>(standard: S, similar_terms: T) -> Self {
        SynonymEntry {
            standard: standard.into(),
            similar_terms: similar_terms.into(),
        }
    }

    /// The trimmed, non-empty colloquial terms of this row.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.similar_terms
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

/// Read-only lookup from colloquial term to standard symptom names.
#[derive(Debug, Clone, Default)]
pub struct SynonymIndex {
    terms: AHashMap<String, BTreeSet<String>>,
}

impl SynonymIndex {
    /// Build the index from synonym table rows.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a SynonymEntry>,
    {
        let mut terms: AHashMap<String, BTreeSet<String>> = AHashMap::new();

        for entry in entries {
            let standard = entry.standard.trim();
            if standard.is_empty() {
                continue;
            }
            for term in entry.terms() {
                terms
                    .entry(term.to_string())
                    .or_default()
                    .insert(standard.to_string());
            }
        }

        SynonymIndex { terms }
    }

    /// Standard names for `term`; empty when the term is unknown.
    pub fn lookup(&self, term: &str) -> BTreeSet<&str> {
        self.terms
            .get(term)
            .map(|names| names.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether `term` is a key of the index.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Number of distinct colloquial terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
