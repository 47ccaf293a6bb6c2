//! Canonicalization of raw OCR lines.
//!
//! OCR output is noisy: stray punctuation, inconsistent casing, runs of
//! whitespace where the engine split words apart. Normalization reduces
//! every line to a canonical form the extractors can pattern-match
//! against, while keeping the characters dosage notation needs
//! (`.` for decimals, `/` for fractions, `%` for concentrations,
//! `-` for hyphenated names).

/// Normalized lines at or below this character count are dropped as noise.
pub const MIN_LINE_LEN: usize = 2;

/// Canonicalizes one raw OCR line.
///
/// Strips every character that is not alphanumeric, whitespace, or one
/// of `. % / -`, collapses whitespace runs to single spaces, lowercases,
/// and trims. Idempotent: normalizing an already-normalized line is a
/// no-op. Symbols are stripped before whitespace is collapsed, so a
/// symbol sitting between two spaces cannot leave a double space behind.
pub fn normalize_line(line: &str) -> String {
    let stripped: String = line
        .chars()
        .filter(|c| {
            c.is_alphanumeric() || c.is_whitespace() || matches!(c, '.' | '%' | '/' | '-')
        })
        .collect();
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Normalizes a whole corpus, dropping lines of [`MIN_LINE_LEN`] characters
/// or fewer.
pub fn normalize_corpus<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| normalize_line(line.as_ref()))
        .filter(|line| line.chars().count() > MIN_LINE_LEN)
        .collect()
}
