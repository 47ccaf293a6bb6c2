//! Read-operation primitives: handles, poll outcomes, and page payloads.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Opaque handle identifying a submitted read operation.
///
/// Engines mint the handle at submission time; callers hand it back
/// verbatim when polling and must not interpret its contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationHandle(String);

impl OperationHandle {
    /// Creates a handle from its engine-minted token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the handle token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OperationHandle {
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

/// Status of a read operation as observed by a single poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PollOutcome {
    /// The engine has not finished processing yet
    Pending,
    /// Recognition finished, one entry per scanned page
    Succeeded(Vec<ReadPage>),
    /// The engine gave up on the submission
    Failed {
        /// Engine-reported failure description
        reason: String,
    },
}

impl PollOutcome {
    /// Returns `true` if the operation is still in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// One page of recognized text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadPage {
    /// 1-based page index as reported by the engine
    pub index: u32,
    /// Recognized lines in reading order
    pub lines: Vec<ReadLine>,
}

impl ReadPage {
    /// Creates a page from its index and recognized lines.
    pub fn new(index: u32, lines: Vec<ReadLine>) -> Self {
        Self { index, lines }
    }
}

/// A single recognized line on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadLine {
    /// Raw recognized text, exactly as the engine returned it
    pub text: String,
    /// Bounding polygon as alternating x/y coordinates
    #[serde(default)]
    pub bounding_box: Vec<f64>,
    /// Engine confidence in `[0, 1]`, when reported
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl ReadLine {
    /// Creates a line from its recognized text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bounding_box: Vec::new(),
            confidence: None,
        }
    }

    /// Sets the bounding polygon for this line.
    pub fn with_bounding_box(mut self, bounding_box: Vec<f64>) -> Self {
        self.bounding_box = bounding_box;
        self
    }

    /// Sets the engine confidence for this line.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }
}
