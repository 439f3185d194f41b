//! Keyword match types as reported by the advertising platform.
//!
//! Source reports carry free-text labels ("Exact", "BROAD", "Phrase match",
//! "-" for auto targeting). They are folded into a closed set here so the
//! analyses can compare them without string handling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Normalized match type.
///
/// Variants are declared in the lexical order of their labels, so the derived
/// `Ord` sorts aggregated rows the same way the label text would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchType {
    /// Auto targeting or any label without a recognised keyword.
    #[serde(rename = "AUTO/OTHER")]
    AutoOther,
    #[serde(rename = "BROAD")]
    Broad,
    #[serde(rename = "EXACT")]
    Exact,
    #[serde(rename = "PHRASE")]
    Phrase,
    /// The source cell was absent or blank.
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl MatchType {
    /// Normalizes a raw report label.
    ///
    /// Keywords are searched case-insensitively in the order EXACT, PHRASE,
    /// BROAD, so a label such as "Broad (exact)" resolves to `Exact`.
    pub fn from_label(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return MatchType::Unknown;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return MatchType::Unknown;
        }
        let upper = trimmed.to_uppercase();
        if upper.contains("EXACT") {
            MatchType::Exact
        } else if upper.contains("PHRASE") {
            MatchType::Phrase
        } else if upper.contains("BROAD") {
            MatchType::Broad
        } else {
            MatchType::AutoOther
        }
    }

    /// Returns the canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::AutoOther => "AUTO/OTHER",
            MatchType::Broad => "BROAD",
            MatchType::Exact => "EXACT",
            MatchType::Phrase => "PHRASE",
            MatchType::Unknown => "UNKNOWN",
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, MatchType::Exact)
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchType {
    type Err = ModelError;

    /// Parses a canonical label exactly (case-insensitive).
    ///
    /// Use [`MatchType::from_label`] for free-text report values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AUTO/OTHER" => Ok(MatchType::AutoOther),
            "BROAD" => Ok(MatchType::Broad),
            "EXACT" => Ok(MatchType::Exact),
            "PHRASE" => Ok(MatchType::Phrase),
            "UNKNOWN" => Ok(MatchType::Unknown),
            _ => Err(ModelError::UnknownMatchType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_normalize_by_keyword() {
        assert_eq!(MatchType::from_label(Some("Exact")), MatchType::Exact);
        assert_eq!(MatchType::from_label(Some("EXACT")), MatchType::Exact);
        assert_eq!(MatchType::from_label(Some("phrase match")), MatchType::Phrase);
        assert_eq!(MatchType::from_label(Some(" Broad ")), MatchType::Broad);
        assert_eq!(MatchType::from_label(Some("-")), MatchType::AutoOther);
        assert_eq!(MatchType::from_label(Some("close-match")), MatchType::AutoOther);
    }

    #[test]
    fn blank_or_missing_label_is_unknown() {
        assert_eq!(MatchType::from_label(None), MatchType::Unknown);
        assert_eq!(MatchType::from_label(Some("")), MatchType::Unknown);
        assert_eq!(MatchType::from_label(Some("   ")), MatchType::Unknown);
    }

    #[test]
    fn exact_takes_precedence_over_other_keywords() {
        assert_eq!(
            MatchType::from_label(Some("broad exact phrase")),
            MatchType::Exact
        );
        assert_eq!(MatchType::from_label(Some("phrase/broad")), MatchType::Phrase);
    }

    #[test]
    fn canonical_labels_round_trip_through_from_str() {
        for match_type in [
            MatchType::AutoOther,
            MatchType::Broad,
            MatchType::Exact,
            MatchType::Phrase,
            MatchType::Unknown,
        ] {
            assert_eq!(match_type.as_str().parse::<MatchType>(), Ok(match_type));
        }
        assert!("SEMI".parse::<MatchType>().is_err());
    }
}
