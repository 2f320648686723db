//! Triage decision engine.
//!
//! Pure evaluation of a [`ResponseSet`] against a [`SymptomCatalog`]: no I/O,
//! no shared mutable state, no failure path. Every possible response set maps
//! to exactly one verdict; malformed or extraneous keys are normalised to
//! unchecked rather than raised.

use crate::catalog::{SymptomCatalog, Tier};
use crate::responses::ResponseSet;
use serde::Serialize;
use triage_types::{ItemId, Label};

/// A symptom statement that contributed to a verdict or precaution list.
///
/// Carries both the stable id (for audit trails and exports) and the display
/// label (for humans). Order always follows catalog order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reason {
    /// Id of the triggering item.
    pub id: ItemId,

    /// Display label of the triggering item.
    pub label: Label,
}

/// The engine's categorical output for one response set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "recommendation", rename_all = "snake_case")]
pub enum Verdict {
    /// Endoscopy is needed without delay.
    Urgent { reasons: Vec<Reason> },

    /// Endoscopy can be scheduled electively.
    Elective { reasons: Vec<Reason> },

    /// No current need for endoscopy is apparent.
    NoActionNeeded { advisory: Label },
}

impl Verdict {
    /// Reasons that triggered this verdict, in catalog order.
    ///
    /// Empty for [`Verdict::NoActionNeeded`], which carries an advisory text
    /// block instead.
    pub fn reasons(&self) -> &[Reason] {
        match self {
            Verdict::Urgent { reasons } | Verdict::Elective { reasons } => reasons,
            Verdict::NoActionNeeded { .. } => &[],
        }
    }

    /// True when the verdict calls for emergent evaluation.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Verdict::Urgent { .. })
    }
}

/// Combined result of one screening evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScreeningOutcome {
    /// The main triage verdict.
    pub verdict: Verdict,

    /// Checked advisory-tier items ("needs stabilisation before the
    /// procedure"), in catalog order. Computed in parallel with the verdict
    /// and never overriding it.
    pub precautions: Vec<Reason>,
}

/// Collects checked items belonging to groups of the given tier, in catalog
/// order (groups in declaration order, items in insertion order).
fn collect_tier(responses: &ResponseSet, catalog: &SymptomCatalog, tier: Tier) -> Vec<Reason> {
    catalog
        .groups()
        .iter()
        .filter(|group| group.tier == tier)
        .flat_map(|group| group.items.iter())
        .filter(|item| responses.checked(item.id.as_str()))
        .map(|item| Reason {
            id: item.id.clone(),
            label: item.label.clone(),
        })
        .collect()
}

/// Evaluates a response set into a triage verdict.
///
/// Verdict-deciding tiers are walked in strict descending severity order and
/// the first tier with at least one checked item determines the variant. Any
/// single checked item is sufficient — there is no scoring, weighting or
/// thresholding. The reason list records every checked verdict-deciding item,
/// higher-severity tier first and catalog order within each tier, so an
/// urgent verdict still accounts for the elective-tier selections that were
/// made alongside it. With nothing checked in either tier the verdict is
/// [`Verdict::NoActionNeeded`] carrying the catalog's advisory text.
///
/// This is a total function: the same response set always yields the same
/// verdict with the same reason order, and no input can make it fail.
pub fn evaluate(responses: &ResponseSet, catalog: &SymptomCatalog) -> Verdict {
    for key in responses.keys() {
        if catalog.item(key).is_none() {
            tracing::debug!("ignoring response key with no catalog item: {}", key);
        }
    }

    let urgent = collect_tier(responses, catalog, Tier::Urgent);
    let elective = collect_tier(responses, catalog, Tier::Elective);

    if !urgent.is_empty() {
        let mut reasons = urgent;
        reasons.extend(elective);
        return Verdict::Urgent { reasons };
    }
    if !elective.is_empty() {
        return Verdict::Elective { reasons: elective };
    }

    Verdict::NoActionNeeded {
        advisory: catalog.guidance().no_action.clone(),
    }
}

/// Evaluates the pre-procedure precaution flags.
///
/// Returns the checked advisory-tier items in catalog order. This runs
/// independently of [`evaluate`]: toggling an advisory item never changes the
/// main verdict, only this list.
pub fn evaluate_contraindications(
    responses: &ResponseSet,
    catalog: &SymptomCatalog,
) -> Vec<Reason> {
    collect_tier(responses, catalog, Tier::Advisory)
}

/// Runs the main evaluation and the precaution evaluation together.
pub fn screen(responses: &ResponseSet, catalog: &SymptomCatalog) -> ScreeningOutcome {
    ScreeningOutcome {
        verdict: evaluate(responses, catalog),
        precautions: evaluate_contraindications(responses, catalog),
    }
}
