//! Catalog wire model and YAML loading.
//!
//! Keeps the on-disk representation separate from the validated domain
//! model: files deserialise into strict wire structs first, then translate
//! into a [`SymptomCatalog`] where uniqueness rules are enforced. Unknown
//! fields are rejected so a typo in a catalog file fails loudly at startup
//! rather than silently dropping a rule.

use crate::catalog::{SymptomCatalog, SymptomGroup, SymptomItem, Tier, VerdictGuidance};
use crate::{TriageError, TriageResult};
use serde::Deserialize;
use std::path::Path;
use triage_types::{ItemId, Label};

/// Top-level wire structure of a catalog file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    title: Label,
    groups: Vec<GroupEntry>,
    guidance: GuidanceEntry,
    disclaimer: Label,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupEntry {
    key: ItemId,
    title: Label,
    tier: Tier,
    items: Vec<ItemEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemEntry {
    id: ItemId,
    label: Label,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GuidanceEntry {
    urgent: Label,
    elective: Label,
    no_action: Label,
}

impl CatalogFile {
    /// Translates the wire structure into a validated domain catalog.
    fn into_catalog(self) -> TriageResult<SymptomCatalog> {
        let groups = self
            .groups
            .into_iter()
            .map(|group| SymptomGroup {
                key: group.key,
                title: group.title,
                tier: group.tier,
                items: group
                    .items
                    .into_iter()
                    .map(|item| SymptomItem {
                        id: item.id,
                        label: item.label,
                    })
                    .collect(),
            })
            .collect();

        let guidance = VerdictGuidance {
            urgent: self.guidance.urgent,
            elective: self.guidance.elective,
            no_action: self.guidance.no_action,
        };

        SymptomCatalog::new(self.title, groups, guidance, self.disclaimer)
    }
}

impl SymptomCatalog {
    /// Parses a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::YamlDeserialization`] for malformed YAML or
    /// invalid field values, and the construction errors from
    /// [`SymptomCatalog::new`] for structural problems such as duplicate
    /// ids.
    pub fn from_yaml_str(yaml: &str) -> TriageResult<Self> {
        let file: CatalogFile =
            serde_yaml::from_str(yaml).map_err(TriageError::YamlDeserialization)?;
        file.into_catalog()
    }

    /// Reads and parses a catalog file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::FileRead`] if the file cannot be read, plus
    /// everything [`SymptomCatalog::from_yaml_str`] can return.
    pub fn from_yaml_file(path: &Path) -> TriageResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(TriageError::FileRead)?;
        Self::from_yaml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
title: Minimal form
groups:
  - key: alarm
    title: Alarm signs
    tier: urgent
    items:
      - id: vomited_blood
        label: I have vomited blood
  - key: risk
    title: Complaints
    tier: elective
    items:
      - id: refractory_reflux
        label: Reflux not improving with medication
guidance:
  urgent: Go now.
  elective: Book an appointment.
  no_action: No need apparent.
disclaimer: Educational only.
"#;

    #[test]
    fn test_parses_minimal_catalog() {
        let catalog = SymptomCatalog::from_yaml_str(MINIMAL).unwrap();
        assert_eq!(catalog.title().as_str(), "Minimal form");
        assert_eq!(catalog.groups().len(), 2);
        assert_eq!(catalog.groups()[0].tier, Tier::Urgent);
        assert_eq!(
            catalog.item("vomited_blood").unwrap().label.as_str(),
            "I have vomited blood"
        );
    }

    #[test]
    fn test_rejects_unknown_tier() {
        let yaml = MINIMAL.replace("tier: urgent", "tier: critical");
        assert!(matches!(
            SymptomCatalog::from_yaml_str(&yaml),
            Err(TriageError::YamlDeserialization(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_field() {
        let yaml = MINIMAL.replace("disclaimer:", "severity: 3\ndisclaimer:");
        assert!(matches!(
            SymptomCatalog::from_yaml_str(&yaml),
            Err(TriageError::YamlDeserialization(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_item_id() {
        let yaml = MINIMAL.replace("id: refractory_reflux", "id: vomited_blood");
        assert!(matches!(
            SymptomCatalog::from_yaml_str(&yaml),
            Err(TriageError::DuplicateItemId(id)) if id == "vomited_blood"
        ));
    }

    #[test]
    fn test_rejects_invalid_item_id_charset() {
        let yaml = MINIMAL.replace("id: vomited_blood", "id: Vomited Blood");
        assert!(matches!(
            SymptomCatalog::from_yaml_str(&yaml),
            Err(TriageError::YamlDeserialization(_))
        ));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = SymptomCatalog::from_yaml_file(Path::new("/nonexistent/catalog.yaml"));
        assert!(matches!(result, Err(TriageError::FileRead(_))));
    }
}
