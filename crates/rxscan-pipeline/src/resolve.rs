//! Candidate resolution against the vocabulary, and result assembly.

use futures::future::join_all;
use rxscan_core::ocr::OcrFileResult;
use rxscan_core::vocab::VocabProvider;
use rxscan_extract::{DosageMatch, normalize_line};

use crate::TRACING_TARGET_RESOLVE;
use crate::medication::ResolvedMedication;

/// Resolves name candidates against the vocabulary and assembles the
/// final medication list.
///
/// Lookups run concurrently. A failing lookup unresolves only its own
/// candidate; candidates the vocabulary does not know are dropped
/// silently. Output order follows candidate order, one entry per
/// candidate: two spellings resolving to the same drug stay separate,
/// since merging them would discard what was actually printed on the
/// label.
pub async fn resolve_and_aggregate(
    candidates: &[String],
    dosages: &[DosageMatch],
    files: &[OcrFileResult],
    vocab: &dyn VocabProvider,
) -> Vec<ResolvedMedication> {
    let lookups = join_all(candidates.iter().map(|name| vocab.search(name))).await;

    let mut medications = Vec::new();
    for (candidate, lookup) in candidates.iter().zip(lookups) {
        let records = match lookup {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    target: TRACING_TARGET_RESOLVE,
                    candidate = candidate.as_str(),
                    error = %err,
                    "Vocabulary lookup failed"
                );
                continue;
            }
        };
        if records.is_empty() {
            tracing::debug!(
                target: TRACING_TARGET_RESOLVE,
                candidate = candidate.as_str(),
                "No vocabulary match"
            );
            continue;
        }

        let dosage = select_dosage(candidate, dosages);
        medications.push(ResolvedMedication {
            name: candidate.clone(),
            dosage: dosage.map(|found| found.value),
            measurement: dosage.map(|found| found.unit),
            ocr_lines: attribute_lines(candidate, files),
        });
    }

    medications
}

/// Picks the dosage for a resolved candidate.
///
/// A mention on the same normalized line as the candidate wins; failing
/// that, the first mention anywhere in the corpus is used. The fallback
/// is a best-effort heuristic that is only right when the scanned
/// document carries a single medication.
fn select_dosage<'a>(candidate: &str, dosages: &'a [DosageMatch]) -> Option<&'a DosageMatch> {
    dosages
        .iter()
        .find(|dosage| dosage.context.contains(candidate))
        .or_else(|| dosages.first())
}

/// Collects every raw line of every file that mentions the candidate.
///
/// Attribution is whole-file on purpose: engines routinely split a name
/// and its strength across adjacent lines, so the matching line alone
/// would lose the context a pharmacist needs.
fn attribute_lines(candidate: &str, files: &[OcrFileResult]) -> Vec<String> {
    let mut lines = Vec::new();
    for file in files {
        let mentioned = file
            .texts()
            .any(|text| normalize_line(text).contains(candidate));
        if mentioned {
            lines.extend(file.texts().map(str::to_owned));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use rxscan_core::ocr::{ReadLine, ReadPage};
    use rxscan_core::vocab::DrugRecord;
    use rxscan_extract::MeasurementUnit;
    use rxscan_test::MockVocabProvider;

    use super::*;

    fn file(name: &str, lines: &[&str]) -> OcrFileResult {
        let lines = lines.iter().map(|text| ReadLine::new(*text)).collect();
        OcrFileResult::from_pages(Some(name.to_owned()), vec![ReadPage::new(1, lines)])
    }

    fn dosage(value: f64, unit: MeasurementUnit, context: &str) -> DosageMatch {
        DosageMatch {
            value,
            unit,
            context: context.to_owned(),
        }
    }

    #[tokio::test]
    async fn same_line_dosage_wins_over_earlier_mentions() {
        let vocab = MockVocabProvider::new().with_known("ibuprofen", DrugRecord::new("Ibuprofen"));
        let candidates = vec!["ibuprofen".to_owned()];
        let dosages = vec![
            dosage(81.0, MeasurementUnit::Mg, "aspirin 81 mg"),
            dosage(200.0, MeasurementUnit::Mg, "ibuprofen 200 mg"),
        ];
        let files = [file("labels.jpg", &["Aspirin 81 mg", "Ibuprofen 200 mg"])];

        let medications = resolve_and_aggregate(&candidates, &dosages, &files, &vocab).await;

        assert_eq!(medications.len(), 1);
        assert_eq!(medications[0].dosage, Some(200.0));
        assert_eq!(medications[0].measurement, Some(MeasurementUnit::Mg));
    }

    #[tokio::test]
    async fn dosage_falls_back_to_the_first_corpus_match() {
        let vocab = MockVocabProvider::new().with_known("aspirin", DrugRecord::new("Aspirin"));
        let candidates = vec!["aspirin".to_owned()];
        let dosages = vec![dosage(81.0, MeasurementUnit::Mg, "81 mg chewable")];
        let files = [file("label.jpg", &["Aspirin", "81 mg chewable"])];

        let medications = resolve_and_aggregate(&candidates, &dosages, &files, &vocab).await;

        assert_eq!(medications[0].dosage, Some(81.0));
        assert_eq!(medications[0].measurement, Some(MeasurementUnit::Mg));
    }

    #[tokio::test]
    async fn no_dosage_anywhere_leaves_the_fields_empty() {
        let vocab = MockVocabProvider::new()
            .with_known("hydrocortisone cream", DrugRecord::new("Hydrocortisone"));
        let candidates = vec!["hydrocortisone cream".to_owned()];
        let files = [file("tube.jpg", &["Hydrocortisone Cream"])];

        let medications = resolve_and_aggregate(&candidates, &[], &files, &vocab).await;

        assert_eq!(medications.len(), 1);
        assert!(medications[0].dosage.is_none());
        assert!(medications[0].measurement.is_none());
    }

    #[tokio::test]
    async fn attribution_takes_whole_files_but_only_mentioning_ones() {
        let vocab = MockVocabProvider::new().with_known("aspirin", DrugRecord::new("Aspirin"));
        let candidates = vec!["aspirin".to_owned()];
        let files = [
            file("front.jpg", &["Aspirin", "81 mg chewable"]),
            file("other.jpg", &["Ibuprofen 200 mg"]),
        ];

        let medications = resolve_and_aggregate(&candidates, &[], &files, &vocab).await;

        assert_eq!(
            medications[0].ocr_lines,
            vec!["Aspirin".to_owned(), "81 mg chewable".to_owned()],
        );
    }

    #[tokio::test]
    async fn mentions_are_detected_on_raw_lines_via_normalization() {
        // The raw line carries casing and punctuation the candidate lost.
        let vocab = MockVocabProvider::new().with_known("aspirin", DrugRecord::new("Aspirin"));
        let candidates = vec!["aspirin".to_owned()];
        let files = [file("label.jpg", &["ASPIRIN (81mg)!"])];

        let medications = resolve_and_aggregate(&candidates, &[], &files, &vocab).await;

        assert_eq!(medications[0].ocr_lines, vec!["ASPIRIN (81mg)!".to_owned()]);
    }

    #[tokio::test]
    async fn failed_lookups_unresolve_only_their_candidate() {
        let vocab = MockVocabProvider::new()
            .with_known("ibuprofen", DrugRecord::new("Ibuprofen"))
            .with_failure("aspirin");
        let candidates = vec!["aspirin".to_owned(), "ibuprofen".to_owned()];
        let files = [file("labels.jpg", &["Aspirin", "Ibuprofen"])];

        let medications = resolve_and_aggregate(&candidates, &[], &files, &vocab).await;

        assert_eq!(medications.len(), 1);
        assert_eq!(medications[0].name, "ibuprofen");
    }

    #[tokio::test]
    async fn unknown_candidates_are_dropped() {
        let vocab = MockVocabProvider::new();
        let candidates = vec!["refill by".to_owned()];
        let files = [file("label.jpg", &["Refill by"])];

        let medications = resolve_and_aggregate(&candidates, &[], &files, &vocab).await;

        assert!(medications.is_empty());
        assert_eq!(vocab.lookup_count(), 1);
    }

    #[tokio::test]
    async fn output_follows_candidate_order() {
        let vocab = MockVocabProvider::new()
            .with_known("aspirin", DrugRecord::new("Aspirin"))
            .with_known("ibuprofen", DrugRecord::new("Ibuprofen"));
        let candidates = vec!["ibuprofen".to_owned(), "aspirin".to_owned()];
        let files = [file("labels.jpg", &["Ibuprofen", "Aspirin"])];

        let medications = resolve_and_aggregate(&candidates, &[], &files, &vocab).await;

        let names: Vec<_> = medications.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["ibuprofen", "aspirin"]);
    }
}
