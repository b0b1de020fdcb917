use crate::core::{InterfaceDescriptor, InterfaceId};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_interface_name, validate_unique_names, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").unwrap_or_else(|e| panic!("bad env var regex: {e}"))
});

/// Extra interfaces declared outside the crate, e.g.
///
/// ```toml
/// [[interface]]
/// name = "IScientificCalculator"
/// iid = "6A1C3B52-8D4E-4F0A-9B7C-2E5D1F3A4B6C"
/// base = "ICalculator"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterfaceManifest {
    #[serde(default, rename = "interface")]
    pub interfaces: Vec<InterfaceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceEntry {
    pub name: String,
    pub iid: String,
    pub base: Option<String>,
}

impl InterfaceManifest {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    /// Like [`from_toml_str`](Self::from_toml_str), resolving `${VAR}` through `lookup`.
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = Self::substitute_env_vars(content, lookup);

        toml::from_str(&processed_content).map_err(|e| DemoError::ManifestError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as-is.
    fn substitute_env_vars<F>(content: &str, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Converts entries to descriptors, in declaration order.
    pub fn into_descriptors(self) -> Result<Vec<InterfaceDescriptor>> {
        self.interfaces
            .into_iter()
            .map(|entry| {
                let iid = InterfaceId::parse(&entry.iid)?;
                Ok(InterfaceDescriptor::new(entry.name, iid, entry.base))
            })
            .collect()
    }
}

impl Validate for InterfaceManifest {
    fn validate(&self) -> Result<()> {
        for (index, entry) in self.interfaces.iter().enumerate() {
            validate_interface_name(&format!("interface[{}].name", index), &entry.name)?;
            if let Some(base) = &entry.base {
                validate_interface_name(&format!("interface[{}].base", index), base)?;
            }
            InterfaceId::parse(&entry.iid)?;
        }
        validate_unique_names("interface.name", self.interfaces.iter().map(|e| e.name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MANIFEST: &str = r#"
[[interface]]
name = "IScientificCalculator"
iid = "6A1C3B52-8D4E-4F0A-9B7C-2E5D1F3A4B6C"
base = "ICalculator"

[[interface]]
name = "IPrinter"
iid = "{3B0E9D4C-2A1F-4C7E-9D8B-5F6A7C8E9D01}"
"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = InterfaceManifest::from_toml_str(MANIFEST).unwrap();
        assert_eq!(manifest.interfaces.len(), 2);
        assert!(manifest.validate().is_ok());

        let descriptors = manifest.into_descriptors().unwrap();
        assert_eq!(descriptors[0].name(), "IScientificCalculator");
        assert_eq!(descriptors[0].base(), Some("ICalculator"));
        assert_eq!(
            descriptors[1].iid.to_string(),
            "3B0E9D4C-2A1F-4C7E-9D8B-5F6A7C8E9D01"
        );
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = InterfaceManifest::from_toml_str("").unwrap();
        assert!(manifest.interfaces.is_empty());
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml() {
        let err = InterfaceManifest::from_toml_str("[[interface]\nname = ").unwrap_err();
        assert!(matches!(err, DemoError::ManifestError { .. }));
    }

    #[test]
    fn test_invalid_identifier_fails_validation() {
        let manifest = InterfaceManifest::from_toml_str(
            r#"
[[interface]]
name = "IBroken"
iid = "not-a-guid"
"#,
        )
        .unwrap();
        assert!(matches!(
            manifest.validate(),
            Err(DemoError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_duplicate_names_fail_validation() {
        let manifest = InterfaceManifest::from_toml_str(
            r#"
[[interface]]
name = "IDup"
iid = "00000000-0000-0000-0000-000000000001"

[[interface]]
name = "IDup"
iid = "00000000-0000-0000-0000-000000000002"
"#,
        )
        .unwrap();
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        let content = r#"
[[interface]]
name = "IFromEnv"
iid = "${CALCULATOR_IID}"
"#;
        let manifest = InterfaceManifest::from_toml_str_with(content, |name| {
            (name == "CALCULATOR_IID").then(|| "11111111-2222-3333-4444-555555555555".to_string())
        })
        .unwrap();
        assert_eq!(manifest.interfaces[0].iid, "11111111-2222-3333-4444-555555555555");
    }

    #[test]
    fn test_unset_variable_is_left_in_place() {
        let content = r#"
[[interface]]
name = "IFromEnv"
iid = "${CALCULATOR_IID}"
"#;
        let manifest = InterfaceManifest::from_toml_str_with(content, |_| None).unwrap();
        assert_eq!(manifest.interfaces[0].iid, "${CALCULATOR_IID}");
        assert!(matches!(
            manifest.validate(),
            Err(DemoError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_manifest_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(MANIFEST.as_bytes()).unwrap();

        let manifest = InterfaceManifest::from_file(temp_file.path()).unwrap();
        assert_eq!(manifest.interfaces[1].name, "IPrinter");
    }

    #[test]
    fn test_missing_file() {
        let err = InterfaceManifest::from_file("/nonexistent/interfaces.toml").unwrap_err();
        assert!(matches!(err, DemoError::IoError(_)));
    }
}
