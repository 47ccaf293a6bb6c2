//! Mock implementations of the rxscan-core service traits.

mod engine;
mod vocab;

pub use engine::{MockReadEngine, MockScan};
pub use vocab::MockVocabProvider;
