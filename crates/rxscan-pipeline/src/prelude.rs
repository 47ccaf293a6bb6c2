//! Convenient re-exports for common use.

pub use rxscan_core::{ServiceHealth, ServiceStatus, SourceFile};
pub use rxscan_ocr::{DocumentScanner, ReadClient, ReadConfig, ReadCredentials};
pub use rxscan_vocab::{VocabClient, VocabConfig};

pub use crate::error::{Error, Result};
pub use crate::medication::{MedicationReport, ResolvedMedication, ScanStats};
pub use crate::pipeline::ScanPipeline;
