//! The closed set of dose units recognized on labels.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// A dose unit as printed on medication labels.
///
/// Covers weights, volumes, countable forms, and dose forms. The token
/// of each unit is its lowercase label spelling, which is what the
/// extractors match against normalized text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    // Weights
    Mg,
    Mcg,
    G,
    Kg,
    // Volumes
    Ml,
    L,
    // Countable forms
    Unit,
    Tablet,
    Capsule,
    Drop,
    Spray,
    Puff,
    Patch,
    Suppository,
    Ampule,
    Vial,
    // Dose forms
    Dose,
    Injection,
    Suspension,
    Solution,
    Cream,
    Gel,
    Ointment,
}

impl MeasurementUnit {
    /// Returns the lowercase token for this unit.
    pub fn token(self) -> &'static str {
        self.into()
    }

    /// Looks a unit up by its lowercase token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::iter().find(|unit| unit.token() == token)
    }

    /// Builds a regex alternation of every unit token, longest first.
    ///
    /// Ordering is load-bearing: the regex engine tries alternatives
    /// left to right, so a short token (`g`) must come after every
    /// longer token it is a substring of (`mg`, `kg`, `gel`), or `5mg`
    /// would parse as 5 grams.
    pub fn alternation() -> String {
        let mut tokens: Vec<&'static str> = Self::iter().map(Self::token).collect();
        tokens.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        tokens.join("|")
    }
}
