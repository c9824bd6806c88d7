//! Symptom-to-department resolution.
//!
//! Resolution runs in two stages:
//!
//! 1. **Direct**: the trimmed phrase is searched as a substring of every
//!    disease record's symptom phrases. Any hit ends resolution.
//! 2. **Synonym**: the phrase is tokenized, tokens found in the synonym index
//!    are expanded to their standard symptom names, and each standard name is
//!    searched like a stage-1 phrase.
//!
//! Matching is substring containment rather than word matching, so a short
//! phrase like `열` hits every symptom containing that syllable. This tolerance
//! is kept as is: results are the union of all hit records' departments with
//! no ranking.

use std::collections::BTreeSet;

use log::debug;

use crate::analysis::tokenizer::Tokenizer;
use crate::dataset::{DiseaseRecord, Repository};
use crate::error::Result;
use crate::synonym::SynonymIndex;

/// Resolves symptom phrases to department names.
pub struct DepartmentResolver<'a> {
    diseases: &'a [DiseaseRecord],
    synonyms: &'a SynonymIndex,
    tokenizer: &'a dyn Tokenizer,
}

impl<'a> DepartmentResolver<'a> {
    pub fn new(repository: &'a Repository, tokenizer: &'a dyn Tokenizer) -> Self {
        DepartmentResolver {
            diseases: repository.diseases(),
            synonyms: repository.synonyms(),
            tokenizer,
        }
    }

    /// Resolve a symptom phrase to the departments that treat it.
    ///
    /// An empty set means nothing matched. Errors only come from the
    /// tokenizer during the synonym stage. A blank phrase is a substring of
    /// every symptom and so resolves to every department.
    pub fn resolve(&self, phrase: &str) -> Result<BTreeSet<String>> {
        let phrase = phrase.trim();

        let direct = self.direct_match(phrase);
        if !direct.is_empty() {
            debug!("Direct match for '{phrase}': {direct:?}");
            return Ok(direct);
        }

        let expanded = self.synonym_match(phrase)?;
        debug!("Synonym match for '{phrase}': {expanded:?}");
        Ok(expanded)
    }

    /// Departments of every disease record whose symptoms contain `phrase`.
    pub fn direct_match(&self, phrase: &str) -> BTreeSet<String> {
        self.diseases
            .iter()
            .filter(|record| record.mentions(phrase))
            .flat_map(|record| record.departments.iter().cloned())
            .collect()
    }

    /// Tokens of `phrase` that are keys of the synonym index.
    pub fn extract_keywords(&self, phrase: &str) -> Result<Vec<String>> {
        Ok(self
            .tokenizer
            .tokenize(phrase)?
            .map(|token| token.text.trim().to_string())
            .filter(|text| self.synonyms.contains(text))
            .collect())
    }

    /// Departments reachable through the standard names of the phrase's keywords.
    pub fn synonym_match(&self, phrase: &str) -> Result<BTreeSet<String>> {
        let keywords = self.extract_keywords(phrase)?;

        let standards: BTreeSet<&str> = keywords
            .iter()
            .flat_map(|keyword| self.synonyms.lookup(keyword))
            .collect();
        debug!("Keywords {keywords:?} expand to {standards:?}");

        Ok(standards
            .into_iter()
            .flat_map(|standard| self.direct_match(standard))
            .collect())
    }
}
