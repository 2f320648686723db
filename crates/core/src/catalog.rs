//! Symptom catalog domain model.
//!
//! The catalog is the clinician-supplied rule table: named groups of symptom
//! statements, each group assigned to a severity tier. Which groups exist,
//! which tier each belongs to and which items belong to which group is
//! configuration data, so wording and tier disagreements between form
//! variants are data edits, not logic edits.
//!
//! The catalog is validated once at construction and read-only afterwards,
//! so concurrent evaluations can share a reference without locking.

use crate::{TriageError, TriageResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use triage_types::{ItemId, Label};

/// Severity tier of a symptom group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Requires emergent evaluation; decides the verdict ahead of everything else.
    Urgent,
    /// Requires scheduled evaluation; decides only when no urgent-tier item is checked.
    Elective,
    /// Pre-procedure precaution; surfaced separately, never decides the verdict.
    Advisory,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Tier::Urgent => "urgent",
            Tier::Elective => "elective",
            Tier::Advisory => "advisory",
        };
        write!(f, "{}", s)
    }
}

impl Tier {
    /// Parses a tier from its string representation.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::UnknownTier`] if the string (case-insensitive)
    /// does not match any tier.
    pub fn parse(s: &str) -> TriageResult<Self> {
        match s.to_lowercase().as_str() {
            "urgent" => Ok(Self::Urgent),
            "elective" => Ok(Self::Elective),
            "advisory" => Ok(Self::Advisory),
            _ => Err(TriageError::UnknownTier(s.to_string())),
        }
    }
}

/// A single screenable symptom statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomItem {
    /// Stable key used by response sets and rule evaluation.
    pub id: ItemId,

    /// Patient-facing statement text; may embed `**emphasis**` markers.
    pub label: Label,
}

/// A named group of symptom statements sharing one tier.
///
/// Item order within a group is display order and reason order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomGroup {
    /// Stable key for this group.
    pub key: ItemId,

    /// Heading shown above the group's checkboxes.
    pub title: Label,

    /// Severity tier shared by every item in this group.
    pub tier: Tier,

    /// Items in display order.
    pub items: Vec<SymptomItem>,
}

/// Guidance texts attached to each verdict variant.
///
/// Content is configuration, not logic; the engine and formatter never
/// inspect these strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictGuidance {
    /// Next-step advice when the verdict is urgent.
    pub urgent: Label,

    /// Next-step advice when the verdict is elective.
    pub elective: Label,

    /// Advisory block attached when no endoscopy need is apparent.
    pub no_action: Label,
}

/// The validated, read-only rule table for one screening form.
///
/// Groups appear in declaration order and items in insertion order; that
/// combined order is the display order and the reason order everywhere
/// downstream (never sorted).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymptomCatalog {
    title: Label,
    groups: Vec<SymptomGroup>,
    guidance: VerdictGuidance,
    disclaimer: Label,
}

impl SymptomCatalog {
    /// Creates a catalog after validating its structure.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::DuplicateGroupKey`] if two groups share a key,
    /// or [`TriageError::DuplicateItemId`] if two items share an id anywhere
    /// in the catalog. Either is a configuration error and should be fatal
    /// at startup.
    pub fn new(
        title: Label,
        groups: Vec<SymptomGroup>,
        guidance: VerdictGuidance,
        disclaimer: Label,
    ) -> TriageResult<Self> {
        let mut group_keys = HashSet::new();
        let mut item_ids = HashSet::new();

        for group in &groups {
            if !group_keys.insert(group.key.as_str().to_owned()) {
                return Err(TriageError::DuplicateGroupKey(
                    group.key.as_str().to_owned(),
                ));
            }
            for item in &group.items {
                if !item_ids.insert(item.id.as_str().to_owned()) {
                    return Err(TriageError::DuplicateItemId(item.id.as_str().to_owned()));
                }
            }
        }

        Ok(Self {
            title,
            groups,
            guidance,
            disclaimer,
        })
    }

    /// Form title.
    pub fn title(&self) -> &Label {
        &self.title
    }

    /// Groups in declaration order.
    pub fn groups(&self) -> &[SymptomGroup] {
        &self.groups
    }

    /// All items in catalog order (groups in declaration order, items in
    /// insertion order within each group).
    pub fn items(&self) -> impl Iterator<Item = &SymptomItem> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    /// Looks up a single item by id.
    pub fn item(&self, id: &str) -> Option<&SymptomItem> {
        self.items().find(|item| item.id.as_str() == id)
    }

    /// Returns the group containing the given item id.
    pub fn group_of(&self, id: &str) -> Option<&SymptomGroup> {
        self.groups
            .iter()
            .find(|g| g.items.iter().any(|item| item.id.as_str() == id))
    }

    /// Guidance texts for the verdict variants.
    pub fn guidance(&self) -> &VerdictGuidance {
        &self.guidance
    }

    /// Fixed educational disclaimer carried into every export.
    pub fn disclaimer(&self) -> &Label {
        &self.disclaimer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, label: &str) -> SymptomItem {
        SymptomItem {
            id: ItemId::new(id).unwrap(),
            label: Label::new(label).unwrap(),
        }
    }

    fn group(key: &str, tier: Tier, items: Vec<SymptomItem>) -> SymptomGroup {
        SymptomGroup {
            key: ItemId::new(key).unwrap(),
            title: Label::new(format!("Group {}", key)).unwrap(),
            tier,
            items,
        }
    }

    fn guidance() -> VerdictGuidance {
        VerdictGuidance {
            urgent: Label::new("Go now").unwrap(),
            elective: Label::new("Book an appointment").unwrap(),
            no_action: Label::new("No need apparent").unwrap(),
        }
    }

    fn catalog(groups: Vec<SymptomGroup>) -> TriageResult<SymptomCatalog> {
        SymptomCatalog::new(
            Label::new("Test form").unwrap(),
            groups,
            guidance(),
            Label::new("Educational only").unwrap(),
        )
    }

    #[test]
    fn test_catalog_accepts_unique_ids() {
        let result = catalog(vec![
            group("alarm", Tier::Urgent, vec![item("a", "A"), item("b", "B")]),
            group("risk", Tier::Elective, vec![item("c", "C")]),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_catalog_rejects_duplicate_item_id_across_groups() {
        let result = catalog(vec![
            group("alarm", Tier::Urgent, vec![item("a", "A")]),
            group("risk", Tier::Elective, vec![item("a", "Same key")]),
        ]);
        assert!(matches!(result, Err(TriageError::DuplicateItemId(id)) if id == "a"));
    }

    #[test]
    fn test_catalog_rejects_duplicate_group_key() {
        let result = catalog(vec![
            group("alarm", Tier::Urgent, vec![item("a", "A")]),
            group("alarm", Tier::Elective, vec![item("b", "B")]),
        ]);
        assert!(matches!(result, Err(TriageError::DuplicateGroupKey(k)) if k == "alarm"));
    }

    #[test]
    fn test_items_iterate_in_catalog_order() {
        let cat = catalog(vec![
            group("alarm", Tier::Urgent, vec![item("a", "A"), item("b", "B")]),
            group("risk", Tier::Elective, vec![item("c", "C")]),
        ])
        .unwrap();
        let ids: Vec<&str> = cat.items().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_group_of_finds_owning_group() {
        let cat = catalog(vec![
            group("alarm", Tier::Urgent, vec![item("a", "A")]),
            group("risk", Tier::Elective, vec![item("c", "C")]),
        ])
        .unwrap();
        assert_eq!(cat.group_of("c").unwrap().key.as_str(), "risk");
        assert_eq!(cat.group_of("c").unwrap().tier, Tier::Elective);
        assert!(cat.group_of("missing").is_none());
    }

    #[test]
    fn test_tier_parse_is_case_insensitive() {
        assert_eq!(Tier::parse("Urgent").unwrap(), Tier::Urgent);
        assert_eq!(Tier::parse("ADVISORY").unwrap(), Tier::Advisory);
        assert!(matches!(
            Tier::parse("critical"),
            Err(TriageError::UnknownTier(_))
        ));
    }
}
