//! # Triage Core
//!
//! Decision core for the upper-GI endoscopy screening questionnaire:
//! - Symptom catalog: the clinician-supplied rule table (groups, tiers, items),
//!   validated once at startup and read-only afterwards
//! - Response set: the checked/unchecked answers for one screening session
//! - Triage engine: pure tier-precedence evaluation producing a verdict plus an
//!   ordered reason list, with pre-procedure precautions evaluated in parallel
//!
//! **No presentation concerns**: form rendering, export formatting and identity
//! capture belong in `triage-report` and `triage-cli`.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod responses;

mod builtin;
mod wire;

pub use catalog::{SymptomCatalog, SymptomGroup, SymptomItem, Tier, VerdictGuidance};
pub use engine::{
    evaluate, evaluate_contraindications, screen, Reason, ScreeningOutcome, Verdict,
};
pub use error::{TriageError, TriageResult};
pub use responses::ResponseSet;
