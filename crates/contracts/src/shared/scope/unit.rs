use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Идентификатор выбора "без ограничения" (все компании)
pub const ALL_SCOPE: &str = "all";

// ============================================================================
// ID Type
// ============================================================================

/// Stable identifier of an organizational unit ("group-1", "business-3", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The reserved "all companies" selection
    pub fn all() -> Self {
        Self(ALL_SCOPE.to_string())
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_SCOPE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UnitId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for UnitId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UnitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Kind
// ============================================================================

/// Уровень иерархии: группа → бизнес → проект
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Group,
    Business,
    Project,
}

impl UnitKind {
    /// Kind the parent of a unit of this kind must have. `None` for roots.
    pub fn parent_kind(&self) -> Option<UnitKind> {
        match self {
            UnitKind::Group => None,
            UnitKind::Business => Some(UnitKind::Group),
            UnitKind::Project => Some(UnitKind::Business),
        }
    }

    /// Depth in the hierarchy, groups are 0
    pub fn depth(&self) -> usize {
        match self {
            UnitKind::Group => 0,
            UnitKind::Business => 1,
            UnitKind::Project => 2,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            UnitKind::Group => "group",
            UnitKind::Business => "business",
            UnitKind::Project => "project",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitKind::Group => "Group",
            UnitKind::Business => "Business",
            UnitKind::Project => "Project",
        }
    }
}

// ============================================================================
// Unit
// ============================================================================

/// Node of the Group / Business / Project forest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationalUnit {
    pub id: UnitId,
    pub name: String,
    pub kind: UnitKind,
    #[serde(rename = "parentId", alias = "parent_id", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<UnitId>,
}

impl OrganizationalUnit {
    pub fn group(id: impl Into<UnitId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: UnitKind::Group,
            parent_id: None,
        }
    }

    pub fn business(
        id: impl Into<UnitId>,
        name: impl Into<String>,
        parent_id: impl Into<UnitId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: UnitKind::Business,
            parent_id: Some(parent_id.into()),
        }
    }

    pub fn project(
        id: impl Into<UnitId>,
        name: impl Into<String>,
        parent_id: impl Into<UnitId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: UnitKind::Project,
            parent_id: Some(parent_id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_kind_follows_levels() {
        assert_eq!(UnitKind::Group.parent_kind(), None);
        assert_eq!(UnitKind::Business.parent_kind(), Some(UnitKind::Group));
        assert_eq!(UnitKind::Project.parent_kind(), Some(UnitKind::Business));
    }

    #[test]
    fn test_all_scope_id() {
        assert!(UnitId::all().is_all());
        assert!(!UnitId::from("group-1").is_all());
        assert_eq!(UnitId::all().to_string(), "all");
    }

    #[test]
    fn test_unit_serializes_with_parent_id_field() {
        let unit = OrganizationalUnit::business("business-1", "Logística Norte", "group-1");
        let json = serde_json::to_value(&unit).unwrap();
        assert_eq!(json["id"], "business-1");
        assert_eq!(json["kind"], "business");
        assert_eq!(json["parentId"], "group-1");

        let group = OrganizationalUnit::group("group-1", "Grupo Logística Global");
        let json = serde_json::to_value(&group).unwrap();
        assert!(json.get("parentId").is_none());
    }
}
