//! Wire format of the read-engine operation document.

use rxscan_core::ocr::{PollOutcome, ReadLine, ReadPage};
use serde::Deserialize;

/// The operation document returned while polling a read operation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReadOperation {
    pub status: ReadStatus,
    #[serde(default)]
    pub analyze_result: Option<AnalyzeResult>,
    #[serde(default)]
    pub error: Option<OperationError>,
}

/// Engine-side lifecycle of a read operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum ReadStatus {
    NotStarted,
    Running,
    Succeeded,
    Failed,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnalyzeResult {
    #[serde(default)]
    pub read_results: Vec<WirePage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WirePage {
    pub page: u32,
    #[serde(default)]
    pub lines: Vec<WireLine>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireLine {
    pub text: String,
    #[serde(default)]
    pub bounding_box: Vec<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OperationError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ReadOperation {
    /// Maps the wire document onto the engine-neutral poll outcome.
    pub fn into_outcome(self) -> PollOutcome {
        match self.status {
            ReadStatus::NotStarted | ReadStatus::Running => PollOutcome::Pending,
            ReadStatus::Succeeded => {
                let pages = self
                    .analyze_result
                    .map(|result| result.read_results)
                    .unwrap_or_default()
                    .into_iter()
                    .map(WirePage::into_page)
                    .collect();
                PollOutcome::Succeeded(pages)
            }
            ReadStatus::Failed => PollOutcome::Failed {
                reason: self.failure_reason(),
            },
        }
    }

    fn failure_reason(&self) -> String {
        match &self.error {
            Some(error) => {
                let message = error
                    .message
                    .as_deref()
                    .unwrap_or("engine reported failure without details");
                match &error.code {
                    Some(code) => format!("{code}: {message}"),
                    None => message.to_owned(),
                }
            }
            None => "engine reported failure without details".to_owned(),
        }
    }
}

impl WirePage {
    fn into_page(self) -> ReadPage {
        let lines = self
            .lines
            .into_iter()
            .map(|line| {
                let mut mapped = ReadLine::new(line.text).with_bounding_box(line.bounding_box);
                if let Some(confidence) = line.confidence {
                    mapped = mapped.with_confidence(confidence);
                }
                mapped
            })
            .collect();
        ReadPage::new(self.page, lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_status_is_pending() {
        let document: ReadOperation =
            serde_json::from_str(r#"{ "status": "running" }"#).expect("Valid document");
        assert_eq!(document.into_outcome(), PollOutcome::Pending);

        let document: ReadOperation =
            serde_json::from_str(r#"{ "status": "notStarted" }"#).expect("Valid document");
        assert_eq!(document.into_outcome(), PollOutcome::Pending);
    }

    #[test]
    fn succeeded_status_carries_pages_and_lines() {
        let payload = r#"{
            "status": "succeeded",
            "analyzeResult": {
                "readResults": [
                    {
                        "page": 1,
                        "lines": [
                            {
                                "text": "Tylenol Extra Strength 500 mg tablet",
                                "boundingBox": [12.0, 4.0, 310.0, 4.0, 310.0, 28.0, 12.0, 28.0],
                                "confidence": 0.97
                            },
                            { "text": "Take 1/2 tablet" }
                        ]
                    }
                ]
            }
        }"#;
        let document: ReadOperation = serde_json::from_str(payload).expect("Valid document");

        let PollOutcome::Succeeded(pages) = document.into_outcome() else {
            panic!("expected success");
        };
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].index, 1);
        assert_eq!(pages[0].lines.len(), 2);
        assert_eq!(pages[0].lines[0].text, "Tylenol Extra Strength 500 mg tablet");
        assert_eq!(pages[0].lines[0].bounding_box.len(), 8);
        assert_eq!(pages[0].lines[0].confidence, Some(0.97));
        assert!(pages[0].lines[1].bounding_box.is_empty());
    }

    #[test]
    fn succeeded_without_results_is_an_empty_page_set() {
        let document: ReadOperation =
            serde_json::from_str(r#"{ "status": "succeeded" }"#).expect("Valid document");
        assert_eq!(document.into_outcome(), PollOutcome::Succeeded(Vec::new()));
    }

    #[test]
    fn failed_status_surfaces_the_engine_error() {
        let payload = r#"{
            "status": "failed",
            "error": { "code": "InvalidImage", "message": "image dimensions too small" }
        }"#;
        let document: ReadOperation = serde_json::from_str(payload).expect("Valid document");

        let PollOutcome::Failed { reason } = document.into_outcome() else {
            panic!("expected failure");
        };
        assert_eq!(reason, "InvalidImage: image dimensions too small");
    }

    #[test]
    fn failed_status_without_details_still_has_a_reason() {
        let document: ReadOperation =
            serde_json::from_str(r#"{ "status": "failed" }"#).expect("Valid document");
        let PollOutcome::Failed { reason } = document.into_outcome() else {
            panic!("expected failure");
        };
        assert!(!reason.is_empty());
    }

    #[test]
    fn unknown_status_is_rejected_by_the_decoder() {
        let result: Result<ReadOperation, _> = serde_json::from_str(r#"{ "status": "paused" }"#);
        assert!(result.is_err());
    }
}
