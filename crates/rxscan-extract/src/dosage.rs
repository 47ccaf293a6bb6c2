//! Dosage mention extraction from normalized text.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::units::MeasurementUnit;

/// One `value unit` mention found in a normalized line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosageMatch {
    /// Parsed numeric value; fractions are reduced to their quotient
    pub value: f64,
    /// The unit the value was printed with
    pub unit: MeasurementUnit,
    /// The normalized line the match came from, for same-line correlation
    pub context: String,
}

impl fmt::Display for DosageMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Matches `<value> <unit>` with optional plural `s` and a trailing
/// boundary. The value allows a decimal part and an integer denominator
/// (`1/2`); the unit alternation is ordered longest-first so `5mg` can
/// never parse as grams.
static DOSAGE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(\d+(?:\.\d+)?(?:/\d+)?)\s*({units})s?(?:$|[\s,;:.])",
        units = MeasurementUnit::alternation(),
    );
    Regex::new(&pattern).expect("dosage pattern must compile")
});

/// Scans a normalized corpus for dosage mentions.
///
/// Emits one [`DosageMatch`] per pattern hit, scanning every line
/// globally and preserving corpus order. Malformed fractions (including
/// zero denominators) are skipped rather than emitted.
pub fn extract_dosages<I, S>(corpus: I) -> Vec<DosageMatch>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut matches = Vec::new();
    for line in corpus {
        let line = line.as_ref();
        for caps in DOSAGE.captures_iter(line) {
            let Some(value) = parse_value(&caps[1]) else {
                continue;
            };
            let Some(unit) = MeasurementUnit::from_token(&caps[2]) else {
                continue;
            };
            matches.push(DosageMatch {
                value,
                unit,
                context: line.to_owned(),
            });
        }
    }
    matches
}

/// Parses a numeric capture, interpreting `a/b` as a fraction.
fn parse_value(raw: &str) -> Option<f64> {
    match raw.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator.parse().ok()?;
            let denominator: f64 = denominator.parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            Some(numerator / denominator)
        }
        None => raw.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(line: &str) -> DosageMatch {
        let matches = extract_dosages([line]);
        assert_eq!(matches.len(), 1, "expected one match in {line:?}");
        matches.into_iter().next().unwrap()
    }

    #[test]
    fn adjacent_unit_prefers_longer_token() {
        let found = single("tylenol 5mg");
        assert_eq!(found.value, 5.0);
        assert_eq!(found.unit, MeasurementUnit::Mg);
    }

    #[test]
    fn spaced_and_plural_units_match() {
        let found = single("tylenol extra strength 500 mg tablet");
        assert_eq!(found.value, 500.0);
        assert_eq!(found.unit, MeasurementUnit::Mg);

        let found = single("take 2 tablets daily");
        assert_eq!(found.value, 2.0);
        assert_eq!(found.unit, MeasurementUnit::Tablet);
    }

    #[test]
    fn fractions_reduce_to_quotients() {
        let found = single("take 1/2 tablet");
        assert_eq!(found.value, 0.5);
        assert_eq!(found.unit, MeasurementUnit::Tablet);
    }

    #[test]
    fn zero_denominator_is_skipped() {
        assert!(extract_dosages(["take 1/0 tablet"]).is_empty());
    }

    #[test]
    fn decimal_values_parse() {
        let found = single("0.25 mg daily");
        assert_eq!(found.value, 0.25);
        assert_eq!(found.unit, MeasurementUnit::Mg);
    }

    #[test]
    fn boundary_accepts_punctuation_and_line_end() {
        let found = single("dose 10ml.");
        assert_eq!(found.value, 10.0);
        assert_eq!(found.unit, MeasurementUnit::Ml);

        let found = single("strength 40mcg");
        assert_eq!(found.unit, MeasurementUnit::Mcg);
    }

    #[test]
    fn embedded_letters_do_not_match() {
        // "mg" inside a longer word is not a unit mention.
        assert!(extract_dosages(["catalog 30mgx"]).is_empty());
    }

    #[test]
    fn multiple_matches_per_line_keep_order() {
        let matches = extract_dosages(["amoxicillin 250 mg per 5 ml"]);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].unit, MeasurementUnit::Mg);
        assert_eq!(matches[0].value, 250.0);
        assert_eq!(matches[1].unit, MeasurementUnit::Ml);
        assert_eq!(matches[1].value, 5.0);
    }

    #[test]
    fn context_preserves_the_source_line() {
        let found = single("aspirin 81 mg chewable");
        assert_eq!(found.context, "aspirin 81 mg chewable");
        assert_eq!(found.to_string(), "81 mg");
    }
}
