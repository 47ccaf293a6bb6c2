//! Vocabulary record types.

use serde::{Deserialize, Serialize};

/// A vocabulary entry matching a searched name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugRecord {
    /// Canonical drug name as the vocabulary spells it
    pub canonical_name: String,
    /// Synonym that matched the search, when different from the canonical spelling
    pub synonym: Option<String>,
    /// Vocabulary-specific record classification, e.g. brand vs ingredient
    pub kind: Option<String>,
}

impl DrugRecord {
    /// Creates a record from its canonical name.
    pub fn new(canonical_name: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            synonym: None,
            kind: None,
        }
    }

    /// Sets the synonym that matched the search.
    pub fn with_synonym(mut self, synonym: impl Into<String>) -> Self {
        self.synonym = Some(synonym.into());
        self
    }

    /// Sets the vocabulary-specific record classification.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}
