//! Summary formatter boundary for screening outcomes.
//!
//! This crate renders an already-computed [`triage_core::ScreeningOutcome`]
//! into exportable artefacts:
//! - plain text (one-shot downloadable summary)
//! - PDF bytes (paginated A4 document)
//!
//! It is a pure formatting boundary: reason order is preserved exactly as the
//! engine produced it, identity fields are always optional (absent fields
//! render as placeholders), and a failure here never disturbs the computed
//! outcome — callers get a recoverable [`ReportError`] and can retry the
//! export.

pub mod details;
pub mod pdf;
pub mod text;

pub use details::{PatientDetails, Sex};
pub use pdf::render_pdf;
pub use text::render_text;

/// Errors returned by the report boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to generate PDF: {0}")]
    PdfGeneration(String),
}

/// Type alias for Results that can fail with a [`ReportError`].
pub type ReportResult<T> = Result<T, ReportError>;
