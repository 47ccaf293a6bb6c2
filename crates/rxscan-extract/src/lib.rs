#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod candidates;
mod dosage;
mod normalize;
mod units;

pub use candidates::extract_candidates;
pub use dosage::{DosageMatch, extract_dosages};
pub use normalize::{MIN_LINE_LEN, normalize_corpus, normalize_line};
pub use units::MeasurementUnit;
