//! Final output types of a pipeline run.

use std::fmt;

use rxscan_extract::MeasurementUnit;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One medication recognized on the submitted images.
///
/// The name is the candidate string exactly as it was read off the
/// label, not the vocabulary's canonical spelling, so the output stays
/// faithful to what the user photographed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMedication {
    /// Medication name as recognized on the label
    pub name: String,
    /// Best dosage value found for this medication, when any
    pub dosage: Option<f64>,
    /// Unit the dosage was printed with
    pub measurement: Option<MeasurementUnit>,
    /// Every raw line of every file that mentions this medication
    pub ocr_lines: Vec<String>,
}

impl ResolvedMedication {
    /// Creates a resolved medication with no dosage or supporting lines.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dosage: None,
            measurement: None,
            ocr_lines: Vec::new(),
        }
    }

    /// Sets the dosage value and its unit.
    pub fn with_dosage(mut self, value: f64, unit: MeasurementUnit) -> Self {
        self.dosage = Some(value);
        self.measurement = Some(unit);
        self
    }

    /// Sets the supporting raw OCR lines.
    pub fn with_ocr_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ocr_lines = lines.into_iter().map(Into::into).collect();
        self
    }
}

impl fmt::Display for ResolvedMedication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let (Some(dosage), Some(measurement)) = (self.dosage, self.measurement) {
            write!(f, " ({dosage} {measurement})")?;
        }
        Ok(())
    }
}

/// Counters describing how much material a run processed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Files handed to the pipeline
    pub files_submitted: usize,
    /// Files the engine scanned successfully
    pub files_scanned: usize,
    /// Raw lines recognized across all scanned files
    pub lines_read: usize,
    /// Distinct name candidates sent to the vocabulary
    pub candidates_considered: usize,
}

/// Result of one end-to-end pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationReport {
    /// Correlation id, minted per run
    pub report_id: Uuid,
    /// Medications the vocabulary resolved, in candidate order
    pub medications: Vec<ResolvedMedication>,
    /// Work counters for the run
    pub stats: ScanStats,
}

impl MedicationReport {
    /// Returns `true` if the run resolved no medications at all.
    pub fn is_empty(&self) -> bool {
        self.medications.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_the_dosage_when_present() {
        let plain = ResolvedMedication::new("aspirin");
        assert_eq!(plain.to_string(), "aspirin");

        let dosed = ResolvedMedication::new("tylenol extra strength")
            .with_dosage(500.0, MeasurementUnit::Mg);
        assert_eq!(dosed.to_string(), "tylenol extra strength (500 mg)");
    }

    #[test]
    fn reports_serialize_with_lowercase_units() {
        let report = MedicationReport {
            report_id: Uuid::nil(),
            medications: vec![
                ResolvedMedication::new("aspirin")
                    .with_dosage(81.0, MeasurementUnit::Mg)
                    .with_ocr_lines(["Aspirin", "81 mg chewable"]),
            ],
            stats: ScanStats {
                files_submitted: 1,
                files_scanned: 1,
                lines_read: 2,
                candidates_considered: 1,
            },
        };

        let json = serde_json::to_value(&report).expect("report serializes");
        assert_eq!(json["medications"][0]["measurement"], "mg");
        assert_eq!(json["medications"][0]["dosage"], 81.0);
        assert_eq!(json["stats"]["lines_read"], 2);
    }
}
