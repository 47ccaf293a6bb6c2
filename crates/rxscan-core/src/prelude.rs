//! Convenient re-exports for common use.

pub use crate::error::BoxedError;
pub use crate::health::{ServiceHealth, ServiceStatus};
pub use crate::ocr::{
    BoxedOcrEngine, OcrEngine, OcrFileResult, OcrLine, OperationHandle, PollOutcome, ReadLine,
    ReadPage,
};
pub use crate::source::SourceFile;
pub use crate::vocab::{BoxedVocabProvider, DrugRecord, VocabProvider};
