//! Plain-text rendering of a screening outcome.
//!
//! The layout is deterministic: the same outcome, catalog and details always
//! produce byte-identical output, and the reason list keeps the engine's
//! ordering.

use crate::details::PatientDetails;
use triage_core::{ScreeningOutcome, SymptomCatalog, Verdict};

/// Placeholder rendered for absent identity fields.
const PLACEHOLDER: &str = "-";

/// Fixed headline for each verdict variant.
pub(crate) fn headline(verdict: &Verdict) -> &'static str {
    match verdict {
        Verdict::Urgent { .. } => "Urgent — endoscopy is needed without delay",
        Verdict::Elective { .. } => "Elective — endoscopy can be scheduled",
        Verdict::NoActionNeeded { .. } => "No current need for endoscopy is apparent",
    }
}

/// Next-step advice for the verdict: the catalog guidance for urgent and
/// elective verdicts, the advisory block carried by the verdict otherwise.
pub(crate) fn advice<'a>(verdict: &'a Verdict, catalog: &'a SymptomCatalog) -> &'a str {
    match verdict {
        Verdict::Urgent { .. } => catalog.guidance().urgent.as_str(),
        Verdict::Elective { .. } => catalog.guidance().elective.as_str(),
        Verdict::NoActionNeeded { advisory } => advisory.as_str(),
    }
}

/// Identity line with placeholders for absent fields.
pub(crate) fn identity_line(details: &PatientDetails) -> String {
    let name = details.name.as_deref().unwrap_or(PLACEHOLDER);
    let age = details
        .age
        .map(|a| a.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let sex = details
        .sex
        .map(|s| s.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    format!("Name: {} | Age: {} | Sex: {}", name, age, sex)
}

/// Date line with a placeholder when no date was supplied.
pub(crate) fn date_line(details: &PatientDetails) -> String {
    let date = details
        .date
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    format!("Date: {}", date)
}

/// Renders a screening outcome as a plain-text summary document.
///
/// Sections, in order: catalog title, date and identity lines, verdict
/// headline, advice, numbered reason list (or an explicit none line),
/// precaution list when any pre-procedure flag was checked, and the
/// catalog's disclaimer footer.
pub fn render_text(
    outcome: &ScreeningOutcome,
    catalog: &SymptomCatalog,
    details: &PatientDetails,
) -> String {
    let mut lines = Vec::new();

    lines.push(format!("{} — Screening Summary", catalog.title().plain()));
    lines.push(date_line(details));
    lines.push(identity_line(details));
    lines.push(String::new());

    lines.push(format!("Result: {}", headline(&outcome.verdict)));
    lines.push(format!("Advice: {}", advice(&outcome.verdict, catalog)));
    lines.push("Reasons:".to_string());
    let reasons = outcome.verdict.reasons();
    if reasons.is_empty() {
        lines.push("  - (nothing selected)".to_string());
    } else {
        for (i, reason) in reasons.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, reason.label.plain()));
        }
    }

    if !outcome.precautions.is_empty() {
        lines.push("Precautions before any procedure:".to_string());
        for precaution in &outcome.precautions {
            lines.push(format!("  - {}", precaution.label.plain()));
        }
    }

    lines.push(String::new());
    lines.push(format!("Note: {}", catalog.disclaimer().plain()));

    lines.join("\n")
}
