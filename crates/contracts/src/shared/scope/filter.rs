//! Правило видимости записей по выбранной компании.
//!
//! Every list page combines this predicate with its own text and dropdown
//! filters by logical AND.

use super::registry::ScopeRegistry;
use super::unit::{UnitId, UnitKind};
use serde::{Deserialize, Serialize};

/// How a selection narrows business-scoped rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeFilterMode {
    /// Selection matches its own subtree: a group shows its businesses,
    /// a business shows itself. Rows carry no project id, so a project shows nothing.
    #[default]
    Hierarchical,
    /// Any group shows everything, a business shows itself, a project shows nothing
    Legacy,
}

/// Entity carrying the business it belongs to
pub trait BusinessScoped {
    fn business_id(&self) -> &UnitId;
}

impl<T: BusinessScoped + ?Sized> BusinessScoped for &T {
    fn business_id(&self) -> &UnitId {
        (**self).business_id()
    }
}

#[derive(Debug, Clone)]
pub struct ScopeFilter<'a> {
    registry: &'a ScopeRegistry,
    selected: UnitId,
    mode: ScopeFilterMode,
}

impl<'a> ScopeFilter<'a> {
    pub fn new(registry: &'a ScopeRegistry, selected: impl Into<UnitId>, mode: ScopeFilterMode) -> Self {
        Self {
            registry,
            selected: selected.into(),
            mode,
        }
    }

    pub fn selected(&self) -> &UnitId {
        &self.selected
    }

    pub fn mode(&self) -> ScopeFilterMode {
        self.mode
    }

    /// Whether rows joined to `business_id` are visible under the selection
    pub fn allows_business<Q>(&self, business_id: &Q) -> bool
    where
        Q: AsRef<str> + ?Sized,
    {
        if self.selected.is_all() {
            return true;
        }
        match self.mode {
            ScopeFilterMode::Hierarchical => {
                self.registry.is_ancestor_or_self(&self.selected, business_id)
            }
            ScopeFilterMode::Legacy => {
                let selected_is_group = self
                    .registry
                    .resolve(&self.selected)
                    .map(|unit| unit.kind == UnitKind::Group)
                    .unwrap_or(false);
                selected_is_group || self.selected.as_str() == business_id.as_ref()
            }
        }
    }

    pub fn is_visible<T>(&self, entity: &T) -> bool
    where
        T: BusinessScoped + ?Sized,
    {
        self.allows_business(entity.business_id())
    }

    /// Visible rows, in their original order
    pub fn apply<'b, T: BusinessScoped>(&self, items: &'b [T]) -> Vec<&'b T> {
        items.iter().filter(|item| self.is_visible(*item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::scope::registry::tests::sample_registry;

    struct Row(UnitId);

    impl BusinessScoped for Row {
        fn business_id(&self) -> &UnitId {
            &self.0
        }
    }

    fn row(business: &str) -> Row {
        Row(UnitId::from(business))
    }

    #[test]
    fn test_hierarchical_group_shows_only_its_descendants() {
        let registry = sample_registry();
        let entity = row("business-3");

        for selected in ["all", "group-2", "business-3"] {
            let filter = ScopeFilter::new(&registry, selected, ScopeFilterMode::Hierarchical);
            assert!(filter.is_visible(&entity), "expected visible under {selected}");
        }
        for selected in ["group-1", "business-1", "project-1"] {
            let filter = ScopeFilter::new(&registry, selected, ScopeFilterMode::Hierarchical);
            assert!(!filter.is_visible(&entity), "expected hidden under {selected}");
        }
    }

    #[test]
    fn test_hierarchical_project_selection_hides_business_rows() {
        let registry = sample_registry();
        let filter = ScopeFilter::new(&registry, "project-3", ScopeFilterMode::Hierarchical);
        assert!(!filter.is_visible(&row("business-2")));
        assert!(!filter.is_visible(&row("business-1")));
    }

    #[test]
    fn test_unknown_business_visible_only_under_all() {
        let registry = sample_registry();
        let orphan = row("business-9");
        assert!(ScopeFilter::new(&registry, "all", ScopeFilterMode::Hierarchical).is_visible(&orphan));
        assert!(!ScopeFilter::new(&registry, "group-1", ScopeFilterMode::Hierarchical).is_visible(&orphan));
    }

    #[test]
    fn test_legacy_group_shows_everything() {
        let registry = sample_registry();
        let filter = ScopeFilter::new(&registry, "group-1", ScopeFilterMode::Legacy);
        assert!(filter.is_visible(&row("business-3")));
        assert!(filter.is_visible(&row("business-1")));

        let filter = ScopeFilter::new(&registry, "business-1", ScopeFilterMode::Legacy);
        assert!(filter.is_visible(&row("business-1")));
        assert!(!filter.is_visible(&row("business-2")));

        let filter = ScopeFilter::new(&registry, "project-1", ScopeFilterMode::Legacy);
        assert!(!filter.is_visible(&row("business-1")));
    }

    #[test]
    fn test_apply_keeps_order() {
        let registry = sample_registry();
        let rows = vec![row("business-2"), row("business-3"), row("business-1")];
        let filter = ScopeFilter::new(&registry, "group-1", ScopeFilterMode::Hierarchical);
        let visible: Vec<&str> = filter.apply(&rows).iter().map(|r| r.0.as_str()).collect();
        assert_eq!(visible, vec!["business-2", "business-1"]);
    }
}
