//! Heuristic header resolution.
//!
//! Report exports name their columns differently depending on report type and
//! attribution window ("7 Day Total Sales", "14 Day Total Orders (#)", ...).
//! Each canonical field is resolved by searching the headers, in file order,
//! for any of a few case-sensitive substrings.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::{IngestError, Result};

/// Columns the analyses need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    SearchTerm,
    Campaign,
    AdGroup,
    MatchType,
    Orders,
    Sales,
    Spend,
}

impl CanonicalField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::SearchTerm => "search term",
            CanonicalField::Campaign => "campaign",
            CanonicalField::AdGroup => "ad group",
            CanonicalField::MatchType => "match type",
            CanonicalField::Orders => "orders",
            CanonicalField::Sales => "sales",
            CanonicalField::Spend => "spend",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header substrings per field, evaluated in this order.
pub const COLUMN_RULES: &[(CanonicalField, &[&str])] = &[
    (
        CanonicalField::SearchTerm,
        &["Matched product", "Customer Search Term"],
    ),
    (CanonicalField::Campaign, &["Campaign Name"]),
    (CanonicalField::AdGroup, &["Ad Group Name"]),
    (CanonicalField::MatchType, &["Match Type"]),
    (CanonicalField::Orders, &["Orders", "Units"]),
    (CanonicalField::Sales, &["Sales"]),
    (CanonicalField::Spend, &["Spend"]),
];

/// A header bound to a canonical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    pub index: usize,
    pub header: String,
}

/// Outcome of matching every rule against the headers, found or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnResolution {
    entries: Vec<(CanonicalField, Option<ResolvedColumn>)>,
}

impl ColumnResolution {
    pub fn resolve(headers: &[String]) -> Self {
        let entries = COLUMN_RULES
            .iter()
            .map(|(field, needles)| {
                let found = headers
                    .iter()
                    .enumerate()
                    .find(|(_, header)| needles.iter().any(|needle| header.contains(needle)))
                    .map(|(index, header)| ResolvedColumn {
                        index,
                        header: header.clone(),
                    });
                (*field, found)
            })
            .collect();
        Self { entries }
    }

    pub fn missing(&self) -> Vec<CanonicalField> {
        self.entries
            .iter()
            .filter(|(_, column)| column.is_none())
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn get(&self, field: CanonicalField) -> Option<&ResolvedColumn> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .and_then(|(_, column)| column.as_ref())
    }

    pub fn entries(&self) -> &[(CanonicalField, Option<ResolvedColumn>)] {
        &self.entries
    }

    /// Converts into a complete mapping, or reports every missing field.
    pub fn into_mapping(self, source: &Path) -> Result<ColumnMapping> {
        let columns: Vec<Option<ResolvedColumn>> = self
            .entries
            .iter()
            .map(|(_, column)| column.clone())
            .collect();
        if let Ok(
            [
                Some(search_term),
                Some(campaign),
                Some(ad_group),
                Some(match_type),
                Some(orders),
                Some(sales),
                Some(spend),
            ],
        ) = <[Option<ResolvedColumn>; 7]>::try_from(columns)
        {
            return Ok(ColumnMapping {
                search_term,
                campaign,
                ad_group,
                match_type,
                orders,
                sales,
                spend,
            });
        }
        let missing = self
            .missing()
            .iter()
            .map(CanonicalField::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Err(IngestError::MissingColumns {
            path: source.to_path_buf(),
            missing,
            resolution: self,
        })
    }
}

impl fmt::Display for ColumnResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, (field, column)) in self.entries.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            match column {
                Some(column) => write!(f, "{field}='{}'", column.header)?,
                None => write!(f, "{field}=<missing>")?,
            }
        }
        Ok(())
    }
}

/// Fully resolved header mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMapping {
    pub search_term: ResolvedColumn,
    pub campaign: ResolvedColumn,
    pub ad_group: ResolvedColumn,
    pub match_type: ResolvedColumn,
    pub orders: ResolvedColumn,
    pub sales: ResolvedColumn,
    pub spend: ResolvedColumn,
}

impl ColumnMapping {
    pub fn fields(&self) -> [(CanonicalField, &ResolvedColumn); 7] {
        [
            (CanonicalField::SearchTerm, &self.search_term),
            (CanonicalField::Campaign, &self.campaign),
            (CanonicalField::AdGroup, &self.ad_group),
            (CanonicalField::MatchType, &self.match_type),
            (CanonicalField::Orders, &self.orders),
            (CanonicalField::Sales, &self.sales),
            (CanonicalField::Spend, &self.spend),
        ]
    }
}

/// Resolves all required columns from trimmed headers.
pub fn resolve_columns(headers: &[String], source: &Path) -> Result<ColumnMapping> {
    ColumnResolution::resolve(headers).into_mapping(source)
}
