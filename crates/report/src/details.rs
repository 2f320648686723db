//! Optional patient identity fields for export documents.

use crate::{ReportError, ReportResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sex as captured by the screening form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    /// Parses a sex from its string representation (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidInput`] if the string does not match
    /// any variant.
    pub fn parse(s: &str) -> ReportResult<Self> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(ReportError::InvalidInput(format!("Invalid sex: {}", s))),
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// Identity fields for an export document.
///
/// Every field is optional; evaluation never requires any of them, and
/// rendering substitutes a placeholder for whatever is absent rather than
/// failing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDetails {
    /// Patient name as entered, if any.
    pub name: Option<String>,

    /// Age in years.
    pub age: Option<u16>,

    /// Sex as selected on the form.
    pub sex: Option<Sex>,

    /// Date the screening was taken.
    pub date: Option<NaiveDate>,
}

impl PatientDetails {
    /// Details with every field absent.
    pub fn anonymous() -> Self {
        Self::default()
    }
}
