use super::error::ScopeResult;
use super::filter::ScopeFilterMode;
use super::registry::ScopeRegistry;
use super::unit::{OrganizationalUnit, UnitId};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Hierarchy, default selection and filter mode of the company selector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeConfig {
    pub default_selection: UnitId,
    #[serde(default)]
    pub filter_mode: ScopeFilterMode,
    pub units: Vec<OrganizationalUnit>,
}

/// Default configuration embedded in the binary
const DEFAULT_SCOPE: &str = include_str!("default_scope.toml");

static EMBEDDED: Lazy<ScopeResult<ScopeConfig>> =
    Lazy::new(|| ScopeConfig::from_toml_str(DEFAULT_SCOPE));

impl ScopeConfig {
    pub fn from_toml_str(contents: &str) -> ScopeResult<Self> {
        let config: ScopeConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Parsed once, cloned per call
    pub fn embedded() -> ScopeResult<Self> {
        log::info!("Using default embedded scope configuration");
        EMBEDDED.clone()
    }

    /// Validate the hierarchy and the default selection
    pub fn build(self) -> ScopeResult<(ScopeRegistry, UnitId, ScopeFilterMode)> {
        let registry = ScopeRegistry::new(self.units)?;

        registry.ensure_default_selection(&self.default_selection)?;

        Ok((registry, self.default_selection, self.filter_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::scope::error::ScopeError;
    use crate::shared::scope::unit::UnitKind;

    #[test]
    fn test_default_config_loads() {
        let config = ScopeConfig::embedded().unwrap();
        assert_eq!(config.default_selection.as_str(), "group-1");
        assert_eq!(config.filter_mode, ScopeFilterMode::Hierarchical);
        assert_eq!(config.units.len(), 8);

        let (registry, default_selection, _) = config.build().unwrap();
        assert_eq!(registry.of_kind(UnitKind::Group).len(), 2);
        assert_eq!(registry.of_kind(UnitKind::Business).len(), 3);
        assert_eq!(registry.of_kind(UnitKind::Project).len(), 3);
        assert_eq!(
            registry.resolve(&default_selection).map(|u| u.name.as_str()),
            Some("Grupo Logística Global")
        );
    }

    #[test]
    fn test_filter_mode_defaults_to_hierarchical() {
        let config = ScopeConfig::from_toml_str(
            r#"
default_selection = "g"

[[units]]
id = "g"
name = "G"
kind = "group"
"#,
        )
        .unwrap();
        assert_eq!(config.filter_mode, ScopeFilterMode::Hierarchical);
    }

    #[test]
    fn test_legacy_mode_and_camel_case_parent() {
        let config = ScopeConfig::from_toml_str(
            r#"
default_selection = "all"
filter_mode = "legacy"

[[units]]
id = "g"
name = "G"
kind = "group"

[[units]]
id = "b"
name = "B"
kind = "business"
parentId = "g"
"#,
        )
        .unwrap();
        let (registry, default_selection, mode) = config.build().unwrap();
        assert_eq!(mode, ScopeFilterMode::Legacy);
        assert!(default_selection.is_all());
        assert_eq!(registry.children_of("g", UnitKind::Business).len(), 1);
    }

    #[test]
    fn test_default_selection_must_be_group() {
        let config = ScopeConfig::from_toml_str(
            r#"
default_selection = "b"

[[units]]
id = "g"
name = "G"
kind = "group"

[[units]]
id = "b"
name = "B"
kind = "business"
parent_id = "g"
"#,
        )
        .unwrap();
        assert!(matches!(config.build(), Err(ScopeError::Config(_))));
    }

    #[test]
    fn test_malformed_hierarchy_is_rejected() {
        let config = ScopeConfig::from_toml_str(
            r#"
default_selection = "g"

[[units]]
id = "g"
name = "G"
kind = "group"

[[units]]
id = "p"
name = "P"
kind = "project"
parent_id = "g"
"#,
        )
        .unwrap();
        assert!(matches!(config.build(), Err(ScopeError::Malformed(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let err = ScopeConfig::from_toml_str("default_selection = ").unwrap_err();
        assert!(matches!(err, ScopeError::Config(_)));

        let err = ScopeConfig::from_toml_str(
            r#"
default_selection = "g"

[[units]]
id = "g"
name = "G"
kind = "division"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ScopeError::Config(_)));
    }
}
