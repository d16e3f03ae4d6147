// SPDX-License-Identifier: PMPL-1.0-or-later

//! Assignment profiles: user-assigned countries declared in a file.
//!
//! ```yaml
//! strict: true
//! countries:
//!   - alpha2: XA
//!     alpha3: XAA
//!     numeric: 900
//!     name: Atlantis
//! ```

use crate::assigned::UserAssignedCountry;
use crate::catalog::Catalog;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentProfile {
    /// Fail on the first rejected entry instead of skipping it.
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub countries: Vec<UserAssignedCountry>,
}

impl AssignmentProfile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading assignment profile {}", path.display()))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json assignment profile {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml assignment profile {}", path.display())),
            _ => Err(anyhow!(
                "unsupported assignment profile extension for {}",
                path.display()
            )),
        }
    }

    /// Register every country with `catalog`, returning how many were added.
    pub fn apply(&self, catalog: &Catalog) -> Result<usize> {
        let mut registered = 0;
        for country in &self.countries {
            match catalog.register_country(country.clone()) {
                Ok(stored) => {
                    log::debug!("registered user-assigned country {}", stored.alpha2());
                    registered += 1;
                }
                Err(err) if self.strict => {
                    return Err(err).with_context(|| {
                        format!("registering user-assigned country {}", country.alpha2())
                    });
                }
                Err(err) => log::warn!("skipping {}: {err}", country.alpha2()),
            }
        }
        log::info!(
            "applied assignment profile: {registered} of {} countries registered",
            self.countries.len()
        );
        Ok(registered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn profile_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_yaml() {
        let file = profile_file(
            ".yaml",
            "countries:\n  - alpha2: XA\n    alpha3: XAA\n    numeric: 900\n    name: Atlantis\n",
        );
        let profile = AssignmentProfile::load(file.path()).unwrap();
        assert!(!profile.strict);
        assert_eq!(profile.countries.len(), 1);
        assert_eq!(profile.countries[0].alpha3(), Some("XAA"));
    }

    #[test]
    fn test_load_json() {
        let file = profile_file(
            ".json",
            r#"{"strict": true, "countries": [{"alpha2": "QM", "name": "Test"}]}"#,
        );
        let profile = AssignmentProfile::load(file.path()).unwrap();
        assert!(profile.strict);
        assert_eq!(profile.countries[0].name(), "Test");
    }

    #[test]
    fn test_unsupported_extension() {
        let file = profile_file(".toml", "countries = []");
        let err = AssignmentProfile::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("unsupported"));
    }

    #[test]
    fn test_apply_skips_rejected_entries() {
        let catalog = Catalog::build().unwrap();
        let profile = AssignmentProfile {
            strict: false,
            countries: vec![
                UserAssignedCountry::new("XA", "Atlantis"),
                UserAssignedCountry::new("JP", "Not Japan"),
                UserAssignedCountry::new("XB", "Lemuria"),
            ],
        };
        assert_eq!(profile.apply(&catalog).unwrap(), 2);
        assert_eq!(catalog.user_assigned().len(), 2);
    }

    #[test]
    fn test_apply_strict_fails() {
        let catalog = Catalog::build().unwrap();
        let profile = AssignmentProfile {
            strict: true,
            countries: vec![
                UserAssignedCountry::new("XA", "Atlantis"),
                UserAssignedCountry::new("AB", "Out of range"),
            ],
        };
        let err = profile.apply(&catalog).unwrap_err();
        assert!(err.to_string().contains("AB"));
        assert_eq!(catalog.user_assigned().len(), 1);
    }
}
