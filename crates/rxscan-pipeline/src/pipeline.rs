//! The end-to-end scanning facade.

use std::fmt;
use std::sync::Arc;

use rxscan_core::vocab::BoxedVocabProvider;
use rxscan_core::{ServiceHealth, SourceFile};
use rxscan_extract::{extract_candidates, extract_dosages, normalize_corpus};
use rxscan_ocr::{DocumentScanner, ReadClient, ReadConfig, ReadCredentials};
use rxscan_vocab::{VocabClient, VocabConfig};
use uuid::Uuid;

use crate::medication::{MedicationReport, ScanStats};
use crate::resolve::resolve_and_aggregate;
use crate::{Result, TRACING_TARGET_PIPELINE};

/// Medication label scanning behind a single call.
///
/// Wires a document scanner and a vocabulary provider into the full
/// read-extract-resolve sequence. Cheap to clone; every run works on
/// its own data and the shared pieces are read-only.
///
/// # Examples
///
/// ```rust,ignore
/// let pipeline = ScanPipeline::connect(read_config, credentials, vocab_config).await?;
/// let report = pipeline.analyze_images(&files).await?;
/// ```
#[derive(Clone)]
pub struct ScanPipeline {
    scanner: DocumentScanner,
    vocab: BoxedVocabProvider,
}

impl fmt::Debug for ScanPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanPipeline")
            .field("scanner", &self.scanner)
            .finish_non_exhaustive()
    }
}

impl ScanPipeline {
    /// Creates a pipeline over an existing scanner and vocabulary provider.
    pub fn new(scanner: DocumentScanner, vocab: BoxedVocabProvider) -> Self {
        Self { scanner, vocab }
    }

    /// Connects both REST clients and wires them into a pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if either client cannot be constructed.
    pub async fn connect(
        read_config: ReadConfig,
        read_credentials: ReadCredentials,
        vocab_config: VocabConfig,
    ) -> Result<Self> {
        let engine = ReadClient::new(read_config, read_credentials).await?;
        let scanner = DocumentScanner::from_config(Arc::new(engine.clone()), engine.config());
        let vocab = VocabClient::new(vocab_config).await?;

        Ok(Self::new(scanner, Arc::new(vocab)))
    }

    /// Scans label images and resolves the medications printed on them.
    ///
    /// Best-effort from end to end: files the engine cannot read and
    /// candidates the vocabulary cannot resolve are dropped from the
    /// report rather than failing the run. An error is returned only
    /// when no file produced any text at all.
    pub async fn analyze_images(&self, files: &[SourceFile]) -> Result<MedicationReport> {
        let results = self.scanner.analyze_batch(files).await?;

        let raw_lines: Vec<&str> = results.iter().flat_map(|result| result.texts()).collect();
        let corpus = normalize_corpus(raw_lines.iter().copied());
        let candidates = extract_candidates(&corpus);
        let dosages = extract_dosages(&corpus);

        tracing::debug!(
            target: TRACING_TARGET_PIPELINE,
            files = results.len(),
            lines = raw_lines.len(),
            candidates = candidates.len(),
            dosages = dosages.len(),
            "Corpus extracted"
        );

        let medications =
            resolve_and_aggregate(&candidates, &dosages, &results, self.vocab.as_ref()).await;

        let report = MedicationReport {
            report_id: Uuid::new_v4(),
            medications,
            stats: ScanStats {
                files_submitted: files.len(),
                files_scanned: results.len(),
                lines_read: raw_lines.len(),
                candidates_considered: candidates.len(),
            },
        };

        tracing::info!(
            target: TRACING_TARGET_PIPELINE,
            report_id = %report.report_id,
            medications = report.medications.len(),
            files_scanned = report.stats.files_scanned,
            "Scan finished"
        );
        Ok(report)
    }

    /// Health of the read engine behind the scanner.
    pub async fn ocr_health(&self) -> Result<ServiceHealth> {
        Ok(self.scanner.health_check().await?)
    }

    /// Health of the vocabulary service.
    pub async fn vocab_health(&self) -> Result<ServiceHealth> {
        Ok(self.vocab.health_check().await?)
    }
}

#[cfg(test)]
mod tests {
    use rxscan_core::vocab::DrugRecord;
    use rxscan_extract::MeasurementUnit;
    use rxscan_test::{MockReadEngine, MockScan, MockVocabProvider};

    use super::*;
    use crate::Error;

    fn image(name: &str) -> SourceFile {
        SourceFile::new(vec![0xFF, 0xD8, 0xFF]).with_filename(name)
    }

    fn pipeline(engine: MockReadEngine, vocab: MockVocabProvider) -> ScanPipeline {
        ScanPipeline::new(DocumentScanner::new(Arc::new(engine)), Arc::new(vocab))
    }

    #[tokio::test(start_paused = true)]
    async fn label_scan_resolves_name_dosage_and_lines() {
        let engine = MockReadEngine::new().queue(MockScan::succeed_with_lines(&[
            "Tylenol Extra Strength 500 mg tablet",
        ]));
        let vocab = MockVocabProvider::new()
            .with_known("tylenol extra strength", DrugRecord::new("Acetaminophen"));
        let pipeline = pipeline(engine, vocab);

        let report = pipeline
            .analyze_images(&[image("label.jpg")])
            .await
            .expect("scan succeeds");

        assert_eq!(report.medications.len(), 1);
        let medication = &report.medications[0];
        assert_eq!(medication.name, "tylenol extra strength");
        assert_eq!(medication.dosage, Some(500.0));
        assert_eq!(medication.measurement, Some(MeasurementUnit::Mg));
        assert_eq!(
            medication.ocr_lines,
            vec!["Tylenol Extra Strength 500 mg tablet".to_owned()],
        );
    }

    #[tokio::test(start_paused = true)]
    async fn split_labels_attribute_the_whole_image() {
        let engine = MockReadEngine::new()
            .queue(MockScan::succeed_with_lines(&["Aspirin", "81 mg chewable"]));
        let vocab = MockVocabProvider::new().with_known("aspirin", DrugRecord::new("Aspirin"));
        let pipeline = pipeline(engine, vocab);

        let report = pipeline
            .analyze_images(&[image("label.jpg")])
            .await
            .expect("scan succeeds");

        let medication = &report.medications[0];
        assert_eq!(medication.name, "aspirin");
        // No dosage on the name line, so the document-wide match is used.
        assert_eq!(medication.dosage, Some(81.0));
        assert_eq!(medication.measurement, Some(MeasurementUnit::Mg));
        assert_eq!(
            medication.ocr_lines,
            vec!["Aspirin".to_owned(), "81 mg chewable".to_owned()],
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unreadable_files_degrade_the_report() {
        let engine = MockReadEngine::new()
            .queue(MockScan::succeed_with_lines(&["Aspirin 81 mg"]))
            .queue(MockScan::reject("engine busy"))
            .queue(MockScan::succeed_with_lines(&["Ibuprofen 200 mg"]));
        let vocab = MockVocabProvider::new()
            .with_known("aspirin", DrugRecord::new("Aspirin"))
            .with_known("ibuprofen", DrugRecord::new("Ibuprofen"));
        let pipeline = ScanPipeline::new(
            DocumentScanner::new(Arc::new(engine)).with_max_retries(0),
            Arc::new(vocab),
        );

        let files = [image("a.jpg"), image("b.jpg"), image("c.jpg")];
        let report = pipeline.analyze_images(&files).await.expect("partial success");

        assert_eq!(report.stats.files_submitted, 3);
        assert_eq!(report.stats.files_scanned, 2);
        let names: Vec<_> = report.medications.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["aspirin", "ibuprofen"]);
    }

    #[tokio::test(start_paused = true)]
    async fn error_surfaces_only_when_every_file_fails() {
        let engine = MockReadEngine::new().with_fallback(MockScan::reject("engine offline"));
        let vocab = MockVocabProvider::new();
        let pipeline = ScanPipeline::new(
            DocumentScanner::new(Arc::new(engine)).with_max_retries(0),
            Arc::new(vocab),
        );

        let err = pipeline
            .analyze_images(&[image("a.jpg"), image("b.jpg")])
            .await
            .expect_err("no file scanned");

        assert!(matches!(err, Error::Scan(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_lookup_drops_only_its_own_candidate() {
        let engine = MockReadEngine::new()
            .queue(MockScan::succeed_with_lines(&["Aspirin 81 mg", "Ibuprofen 200 mg"]));
        let vocab = MockVocabProvider::new()
            .with_known("ibuprofen", DrugRecord::new("Ibuprofen"))
            .with_failure("aspirin");
        let pipeline = pipeline(engine, vocab);

        let report = pipeline
            .analyze_images(&[image("labels.jpg")])
            .await
            .expect("run tolerates the lookup failure");

        assert_eq!(report.stats.candidates_considered, 2);
        assert_eq!(report.medications.len(), 1);
        assert_eq!(report.medications[0].name, "ibuprofen");
    }

    #[tokio::test]
    async fn empty_input_produces_an_empty_report() {
        let vocab = Arc::new(MockVocabProvider::new());
        let pipeline = ScanPipeline::new(
            DocumentScanner::new(Arc::new(MockReadEngine::new())),
            vocab.clone(),
        );

        let report = pipeline.analyze_images(&[]).await.expect("empty batch");

        assert!(report.is_empty());
        assert_eq!(report.stats, ScanStats::default());
        assert_eq!(vocab.lookup_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reports_get_distinct_correlation_ids() {
        let engine = MockReadEngine::new().with_fallback(MockScan::succeed_with_lines(&[
            "Tylenol Extra Strength 500 mg tablet",
        ]));
        let pipeline = pipeline(engine, MockVocabProvider::new());

        let first = pipeline.analyze_images(&[image("a.jpg")]).await.expect("scan");
        let second = pipeline.analyze_images(&[image("b.jpg")]).await.expect("scan");

        assert_ne!(first.report_id, second.report_id);
    }
}
