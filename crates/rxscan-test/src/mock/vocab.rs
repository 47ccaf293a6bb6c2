//! In-memory mock vocabulary.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, Ordering};

use rxscan_core::ServiceHealth;
use rxscan_core::vocab::{DrugRecord, Error, Result, VocabProvider};

/// Mock vocabulary backed by an exact-match name table.
///
/// Unknown names resolve to an empty record set, mirroring the real
/// service contract. Individual names (or the whole provider) can be
/// marked as failing to exercise lookup-error paths.
#[derive(Debug, Default)]
pub struct MockVocabProvider {
    known: HashMap<String, Vec<DrugRecord>>,
    failing: HashSet<String>,
    fail_all: bool,
    lookups: AtomicU32,
}

impl MockVocabProvider {
    /// Creates an empty vocabulary: every lookup is a clean no-match.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a vocabulary whose every lookup fails.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Registers a record returned for exact lookups of `name`.
    pub fn with_known(mut self, name: impl Into<String>, record: DrugRecord) -> Self {
        self.known.entry(name.into()).or_default().push(record);
        self
    }

    /// Marks one name as failing its lookup.
    pub fn with_failure(mut self, name: impl Into<String>) -> Self {
        self.failing.insert(name.into());
        self
    }

    /// Number of lookups served so far.
    pub fn lookup_count(&self) -> u32 {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl VocabProvider for MockVocabProvider {
    async fn search(&self, name: &str) -> Result<Vec<DrugRecord>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if self.fail_all || self.failing.contains(name) {
            return Err(Error::lookup(name, "mock vocabulary failure"));
        }

        Ok(self.known.get(name).cloned().unwrap_or_default())
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::healthy())
    }
}
