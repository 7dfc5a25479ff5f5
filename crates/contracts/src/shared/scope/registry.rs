//! Реестр организационных единиц (группа → бизнес → проект)
//!
//! Реестр неизменяем после построения. Все проверки инварианта леса
//! выполняются в `ScopeRegistry::new`; частично корректный реестр не создаётся.

use super::error::{ScopeError, ScopeResult};
use super::unit::{OrganizationalUnit, UnitId, UnitKind};
use std::collections::HashMap;

/// Maximum number of parent links between a unit and its root group
const MAX_DEPTH: usize = 2;

/// Group with its businesses, as the company selector renders it
#[derive(Debug, Clone, PartialEq)]
pub struct GroupNode<'a> {
    pub group: &'a OrganizationalUnit,
    pub businesses: Vec<BusinessNode<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BusinessNode<'a> {
    pub business: &'a OrganizationalUnit,
    pub projects: Vec<&'a OrganizationalUnit>,
}

impl<'a> GroupNode<'a> {
    /// Every unit of this subtree in render order (group, business, its projects, ...)
    pub fn units(&self) -> Vec<&'a OrganizationalUnit> {
        let mut out = vec![self.group];
        for node in &self.businesses {
            out.push(node.business);
            out.extend(node.projects.iter().copied());
        }
        out
    }
}

#[derive(Debug, Clone)]
pub struct ScopeRegistry {
    units: Vec<OrganizationalUnit>,
    index: HashMap<UnitId, usize>,
}

impl ScopeRegistry {
    /// Build a registry, rejecting it as a whole if the forest invariant is broken
    pub fn new(units: Vec<OrganizationalUnit>) -> ScopeResult<Self> {
        let mut index = HashMap::with_capacity(units.len());

        for (pos, unit) in units.iter().enumerate() {
            if unit.id.is_all() {
                return Err(ScopeError::Malformed(format!(
                    "id '{}' is reserved for the all-companies selection",
                    unit.id
                )));
            }
            if unit.id.as_str().trim().is_empty() {
                return Err(ScopeError::Malformed("unit id must not be empty".into()));
            }
            if index.insert(unit.id.clone(), pos).is_some() {
                return Err(ScopeError::Malformed(format!(
                    "duplicate unit id '{}'",
                    unit.id
                )));
            }
        }

        for unit in &units {
            match (unit.kind.parent_kind(), &unit.parent_id) {
                (None, None) => {}
                (None, Some(parent_id)) => {
                    return Err(ScopeError::Malformed(format!(
                        "group '{}' must not have a parent (found '{}')",
                        unit.id, parent_id
                    )));
                }
                (Some(_), None) => {
                    return Err(ScopeError::Malformed(format!(
                        "{} '{}' has no parent",
                        unit.kind.code(),
                        unit.id
                    )));
                }
                (Some(expected), Some(parent_id)) => {
                    let parent = index
                        .get(parent_id.as_str())
                        .map(|&pos| &units[pos])
                        .ok_or_else(|| {
                            ScopeError::Malformed(format!(
                                "{} '{}' refers to unknown parent '{}'",
                                unit.kind.code(),
                                unit.id,
                                parent_id
                            ))
                        })?;
                    if parent.kind != expected {
                        return Err(ScopeError::Malformed(format!(
                            "{} '{}' must have a {} parent, '{}' is a {}",
                            unit.kind.code(),
                            unit.id,
                            expected.code(),
                            parent.id,
                            parent.kind.code()
                        )));
                    }
                }
            }
        }

        log::debug!("scope registry built: {} units", units.len());

        Ok(Self { units, index })
    }

    /// Exact lookup by id
    pub fn resolve<Q>(&self, id: &Q) -> Option<&OrganizationalUnit>
    where
        Q: AsRef<str> + ?Sized,
    {
        self.index.get(id.as_ref()).map(|&pos| &self.units[pos])
    }

    /// Same as `resolve`, but absence is an error
    pub fn get<Q>(&self, id: &Q) -> ScopeResult<&OrganizationalUnit>
    where
        Q: AsRef<str> + ?Sized,
    {
        self.resolve(id)
            .ok_or_else(|| ScopeError::NotFound(UnitId::new(id.as_ref())))
    }

    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        Q: AsRef<str> + ?Sized,
    {
        self.index.contains_key(id.as_ref())
    }

    /// Units of `kind` whose parent is `id`, in insertion order
    pub fn children_of<Q>(&self, id: &Q, kind: UnitKind) -> Vec<&OrganizationalUnit>
    where
        Q: AsRef<str> + ?Sized,
    {
        let id = id.as_ref();
        self.units
            .iter()
            .filter(|u| u.kind == kind && u.parent_id.as_ref().map(UnitId::as_str) == Some(id))
            .collect()
    }

    pub fn units(&self) -> &[OrganizationalUnit] {
        &self.units
    }

    pub fn of_kind(&self, kind: UnitKind) -> Vec<&OrganizationalUnit> {
        self.units.iter().filter(|u| u.kind == kind).collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Three-level tree in insertion order. Recomputed on every call.
    pub fn grouped_view(&self) -> Vec<GroupNode<'_>> {
        self.of_kind(UnitKind::Group)
            .into_iter()
            .map(|group| GroupNode {
                group,
                businesses: self
                    .children_of(&group.id, UnitKind::Business)
                    .into_iter()
                    .map(|business| BusinessNode {
                        business,
                        projects: self.children_of(&business.id, UnitKind::Project),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Walks parent links from `unit` up to its root looking for `ancestor`
    pub fn is_ancestor_or_self<A, U>(&self, ancestor: &A, unit: &U) -> bool
    where
        A: AsRef<str> + ?Sized,
        U: AsRef<str> + ?Sized,
    {
        let ancestor = ancestor.as_ref();
        let mut current = self.resolve(unit);
        for _ in 0..=MAX_DEPTH {
            match current {
                Some(u) if u.id.as_str() == ancestor => return true,
                Some(u) => current = u.parent_id.as_ref().and_then(|p| self.resolve(p)),
                None => return false,
            }
        }
        false
    }

    /// Path from the root group down to `id` (inclusive). Empty for unknown ids.
    pub fn path_to<Q>(&self, id: &Q) -> Vec<&OrganizationalUnit>
    where
        Q: AsRef<str> + ?Sized,
    {
        let mut path = Vec::with_capacity(MAX_DEPTH + 1);
        let mut current = self.resolve(id);
        while let Some(unit) = current {
            path.push(unit);
            if path.len() > MAX_DEPTH {
                break;
            }
            current = unit.parent_id.as_ref().and_then(|p| self.resolve(p));
        }
        path.reverse();
        path
    }

    /// Начальный выбор: группа или `all`
    pub fn ensure_default_selection(&self, id: &UnitId) -> ScopeResult<()> {
        if id.is_all() {
            return Ok(());
        }
        let unit = self.get(id)?;
        if unit.kind != UnitKind::Group {
            return Err(ScopeError::Config(format!(
                "default selection '{}' must be a group, found a {}",
                unit.id,
                unit.kind.code()
            )));
        }
        Ok(())
    }

    /// Business ids at or below `id`
    pub fn businesses_in_scope<Q>(&self, id: &Q) -> Vec<&UnitId>
    where
        Q: AsRef<str> + ?Sized,
    {
        let id = id.as_ref();
        if id == super::unit::ALL_SCOPE {
            return self.of_kind(UnitKind::Business).into_iter().map(|u| &u.id).collect();
        }
        self.of_kind(UnitKind::Business)
            .into_iter()
            .filter(|b| self.is_ancestor_or_self(id, &b.id))
            .map(|b| &b.id)
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashSet;

    pub(crate) fn sample_units() -> Vec<OrganizationalUnit> {
        vec![
            OrganizationalUnit::group("group-1", "Grupo Logística Global"),
            OrganizationalUnit::group("group-2", "Grupo Transportes Unidos"),
            OrganizationalUnit::business("business-1", "Logística Norte", "group-1"),
            OrganizationalUnit::business("business-2", "Logística Sur", "group-1"),
            OrganizationalUnit::business("business-3", "Transportes Rápidos", "group-2"),
            OrganizationalUnit::project("project-1", "Proyecto Distribución A", "business-1"),
            OrganizationalUnit::project("project-2", "Proyecto Almacenamiento B", "business-1"),
            OrganizationalUnit::project("project-3", "Proyecto Logística C", "business-2"),
        ]
    }

    pub(crate) fn sample_registry() -> ScopeRegistry {
        ScopeRegistry::new(sample_units()).unwrap()
    }

    fn ids(units: &[&OrganizationalUnit]) -> Vec<String> {
        units.iter().map(|u| u.id.to_string()).collect()
    }

    #[test]
    fn test_resolve_returns_every_unit() {
        let registry = sample_registry();
        for unit in sample_units() {
            assert_eq!(registry.resolve(&unit.id), Some(&unit));
        }
        assert_eq!(registry.resolve("group-9"), None);
        assert_eq!(
            registry.get("group-9"),
            Err(ScopeError::NotFound(UnitId::from("group-9")))
        );
    }

    #[test]
    fn test_children_of_matches_parent_and_kind() {
        let registry = sample_registry();
        for group in registry.of_kind(UnitKind::Group) {
            for child in registry.children_of(&group.id, UnitKind::Business) {
                assert_eq!(child.kind, UnitKind::Business);
                assert_eq!(child.parent_id.as_ref(), Some(&group.id));
            }
        }
        for business in registry.of_kind(UnitKind::Business) {
            for child in registry.children_of(&business.id, UnitKind::Project) {
                assert_eq!(child.kind, UnitKind::Project);
                assert_eq!(child.parent_id.as_ref(), Some(&business.id));
            }
        }

        assert_eq!(
            ids(&registry.children_of("group-1", UnitKind::Business)),
            vec!["business-1", "business-2"]
        );
        assert_eq!(
            ids(&registry.children_of("business-1", UnitKind::Project)),
            vec!["project-1", "project-2"]
        );
    }

    #[test]
    fn test_children_of_empty_when_nothing_matches() {
        let registry = sample_registry();
        assert!(registry.children_of("business-3", UnitKind::Project).is_empty());
        assert!(registry.children_of("group-1", UnitKind::Project).is_empty());
        assert!(registry.children_of("missing", UnitKind::Business).is_empty());
    }

    #[test]
    fn test_grouped_view_contains_every_unit_once() {
        let registry = sample_registry();
        let view = registry.grouped_view();

        let all: Vec<&OrganizationalUnit> = view.iter().flat_map(|g| g.units()).collect();
        assert_eq!(all.len(), registry.len());

        let unique: HashSet<&str> = all.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(unique.len(), registry.len());
    }

    #[test]
    fn test_grouped_view_order() {
        let registry = sample_registry();
        let view = registry.grouped_view();

        assert_eq!(view.len(), 2);
        assert_eq!(view[0].group.id.as_str(), "group-1");
        assert_eq!(
            ids(&view[0].units()),
            vec!["group-1", "business-1", "project-1", "project-2", "business-2", "project-3"]
        );
        assert_eq!(ids(&view[1].units()), vec!["group-2", "business-3"]);
        assert_eq!(registry.grouped_view(), view);
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let mut units = sample_units();
        units.push(OrganizationalUnit::group("group-1", "Copy"));
        assert!(matches!(ScopeRegistry::new(units), Err(ScopeError::Malformed(_))));
    }

    #[test]
    fn test_rejects_unknown_parent() {
        let mut units = sample_units();
        units.push(OrganizationalUnit::project("project-9", "Orphan", "business-9"));
        assert!(matches!(ScopeRegistry::new(units), Err(ScopeError::Malformed(_))));
    }

    #[test]
    fn test_rejects_cross_level_parent() {
        let mut units = sample_units();
        units.push(OrganizationalUnit::project("project-9", "Skips a level", "group-1"));
        let err = ScopeRegistry::new(units).unwrap_err();
        assert!(err.to_string().contains("must have a business parent"));

        let mut units = sample_units();
        units.push(OrganizationalUnit::business("business-9", "Nested", "business-1"));
        assert!(matches!(ScopeRegistry::new(units), Err(ScopeError::Malformed(_))));
    }

    #[test]
    fn test_rejects_group_with_parent_and_business_without_one() {
        let mut group = OrganizationalUnit::group("group-9", "Child group");
        group.parent_id = Some(UnitId::from("group-1"));
        let mut units = sample_units();
        units.push(group);
        assert!(matches!(ScopeRegistry::new(units), Err(ScopeError::Malformed(_))));

        let mut business = OrganizationalUnit::business("business-9", "Floating", "group-1");
        business.parent_id = None;
        let mut units = sample_units();
        units.push(business);
        assert!(matches!(ScopeRegistry::new(units), Err(ScopeError::Malformed(_))));
    }

    #[test]
    fn test_rejects_reserved_all_id() {
        let units = vec![OrganizationalUnit::group("all", "Everything")];
        assert!(matches!(ScopeRegistry::new(units), Err(ScopeError::Malformed(_))));
    }

    #[test]
    fn test_is_ancestor_or_self() {
        let registry = sample_registry();
        assert!(registry.is_ancestor_or_self("business-1", "business-1"));
        assert!(registry.is_ancestor_or_self("group-1", "business-1"));
        assert!(registry.is_ancestor_or_self("group-1", "project-3"));
        assert!(!registry.is_ancestor_or_self("group-2", "business-1"));
        assert!(!registry.is_ancestor_or_self("project-1", "business-1"));
        assert!(!registry.is_ancestor_or_self("group-1", "missing"));
    }

    #[test]
    fn test_path_to() {
        let registry = sample_registry();
        assert_eq!(
            ids(&registry.path_to("project-3")),
            vec!["group-1", "business-2", "project-3"]
        );
        assert_eq!(ids(&registry.path_to("group-2")), vec!["group-2"]);
        assert!(registry.path_to("missing").is_empty());
    }

    #[test]
    fn test_ensure_default_selection() {
        let registry = sample_registry();
        assert_eq!(registry.ensure_default_selection(&UnitId::from("group-2")), Ok(()));
        assert_eq!(registry.ensure_default_selection(&UnitId::all()), Ok(()));
        assert!(matches!(
            registry.ensure_default_selection(&UnitId::from("business-3")),
            Err(ScopeError::Config(_))
        ));
        assert_eq!(
            registry.ensure_default_selection(&UnitId::from("missing")),
            Err(ScopeError::NotFound(UnitId::from("missing")))
        );
    }

    #[test]
    fn test_businesses_in_scope() {
        let registry = sample_registry();
        let as_strs = |v: Vec<&UnitId>| v.into_iter().map(|id| id.to_string()).collect::<Vec<_>>();

        assert_eq!(
            as_strs(registry.businesses_in_scope("group-1")),
            vec!["business-1", "business-2"]
        );
        assert_eq!(as_strs(registry.businesses_in_scope("business-3")), vec!["business-3"]);
        assert!(registry.businesses_in_scope("project-3").is_empty());
        assert_eq!(as_strs(registry.businesses_in_scope("all")).len(), 3);
        assert!(registry.businesses_in_scope("missing").is_empty());
    }
}
