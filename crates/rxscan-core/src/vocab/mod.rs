//! Drug vocabulary abstractions.
//!
//! A vocabulary answers one question: does this string name a drug it
//! knows? Implementations return every matching record for a candidate
//! name; an empty answer means the name is unknown, while errors are
//! reserved for transport and service faults.

use std::sync::Arc;

mod error;
mod record;

pub use error::{Error, Result};
pub use record::DrugRecord;

use crate::ServiceHealth;

/// Type alias for a shared, dynamically dispatched vocabulary provider.
pub type BoxedVocabProvider = Arc<dyn VocabProvider + Send + Sync>;

/// Core trait for drug vocabulary lookups.
#[async_trait::async_trait]
pub trait VocabProvider: Send + Sync {
    /// Searches the vocabulary for records matching a candidate name.
    async fn search(&self, name: &str) -> Result<Vec<DrugRecord>>;

    /// Performs a health check against the vocabulary service.
    async fn health_check(&self) -> Result<ServiceHealth>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyVocab;

    #[async_trait::async_trait]
    impl VocabProvider for EmptyVocab {
        async fn search(&self, _name: &str) -> Result<Vec<DrugRecord>> {
            Ok(Vec::new())
        }

        async fn health_check(&self) -> Result<ServiceHealth> {
            Ok(ServiceHealth::healthy())
        }
    }

    #[tokio::test]
    async fn provider_is_object_safe() {
        let vocab: BoxedVocabProvider = Arc::new(EmptyVocab);
        let records = vocab.search("aspirin").await.unwrap();
        assert!(records.is_empty());
    }
}
