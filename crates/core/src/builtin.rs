//! Built-in screening catalogs.

use crate::catalog::SymptomCatalog;
use crate::TriageResult;

/// Default upper-GI endoscopy screening catalog, embedded at compile time.
const EGD_CATALOG_YAML: &str = include_str!("../catalogs/egd.yaml");

impl SymptomCatalog {
    /// Returns the built-in upper-GI endoscopy (EGD) screening catalog.
    ///
    /// The rule table is condensed from the UpToDate overview of upper
    /// gastrointestinal endoscopy. It ships as embedded YAML and goes
    /// through the same wire parsing and validation as an external file.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded catalog is malformed, which the test
    /// suite guards against.
    pub fn builtin_egd() -> TriageResult<Self> {
        Self::from_yaml_str(EGD_CATALOG_YAML)
    }
}
