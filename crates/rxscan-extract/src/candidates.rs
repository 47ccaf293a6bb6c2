//! Drug-name candidate mining from normalized text.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Label lines put the product name before the strength, so everything
/// from the first digit run onward is dosage and form noise.
static DOSAGE_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+.*$").expect("dosage tail pattern must compile"));

/// Shape of a plausible drug name: lowercase words, digits, hyphens,
/// at least three characters.
static NAME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9\s-]{3,}$").expect("name shape pattern must compile"));

/// Mines unique "possible drug name" strings from a normalized corpus.
///
/// Each line is reduced to the text before its dosage tail; remainders
/// that do not look like names (stray punctuation, too short) are
/// dropped. Candidates are deduplicated across the corpus in first-seen
/// order, so output is reproducible for identical input.
pub fn extract_candidates<I, S>(corpus: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for line in corpus {
        let stripped = DOSAGE_TAIL.replace(line.as_ref(), "");
        let candidate = stripped.trim();
        if !NAME_SHAPE.is_match(candidate) {
            continue;
        }
        if seen.insert(candidate.to_owned()) {
            candidates.push(candidate.to_owned());
        }
    }
    candidates
}
