/// Универсальные фильтры списков: поиск по подстроке, выпадающие фильтры,
/// уникальные значения для выпадающих списков.
use crate::shared::scope::{BusinessScoped, ScopeFilter};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Value the dropdowns use for "no restriction"
pub const ALL_OPTION: &str = "all";

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Поля, по которым идёт поиск
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any search field; blank search matches
    fn matches_search(&self, search: &str) -> bool {
        let needle = search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Dropdown filter: everything, or only rows equal to one value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChoiceFilter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> ChoiceFilter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            ChoiceFilter::All => true,
            ChoiceFilter::Only(expected) => expected == value,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ChoiceFilter::Only(_))
    }
}

impl ChoiceFilter<String> {
    /// From a `<select>` value; `"all"` and empty mean no restriction
    pub fn from_option(value: &str) -> Self {
        match value {
            "" | ALL_OPTION => ChoiceFilter::All,
            other => ChoiceFilter::Only(other.to_string()),
        }
    }
}

impl<T> ChoiceFilter<T> {
    /// Parse a `<select>` value with a per-type parser; unknown values mean no restriction
    pub fn parse_with(value: &str, parse: impl Fn(&str) -> Option<T>) -> Self {
        if value == ALL_OPTION {
            return ChoiceFilter::All;
        }
        parse(value).map(ChoiceFilter::Only).unwrap_or_default()
    }
}

/// Distinct values in first-seen order
pub fn unique_values<T, F>(items: &[T], key: F) -> Vec<String>
where
    F: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let value = key(item);
        if seen.insert(value.to_string()) {
            out.push(value.to_string());
        }
    }
    out
}

/// Search text plus the optional scope predicate of one list page.
///
/// Page-specific dropdowns are passed to `apply` as a row predicate;
/// everything is combined by logical AND and seed order is kept.
#[derive(Debug, Clone, Default)]
pub struct ListQuery<'a> {
    pub search: String,
    scope: Option<ScopeFilter<'a>>,
}

impl<'a> ListQuery<'a> {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            scope: None,
        }
    }

    pub fn with_scope(mut self, scope: ScopeFilter<'a>) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn apply<'b, T, P>(&self, items: &'b [T], predicate: P) -> Vec<&'b T>
    where
        T: Searchable + BusinessScoped,
        P: Fn(&T) -> bool,
    {
        items
            .iter()
            .filter(|item| item.matches_search(&self.search))
            .filter(|item| predicate(item))
            .filter(|item| self.scope.as_ref().map_or(true, |s| s.is_visible(*item)))
            .collect()
    }

    /// Rows of entities outside the company hierarchy; the scope is ignored
    pub fn apply_unscoped<'b, T, P>(&self, items: &'b [T], predicate: P) -> Vec<&'b T>
    where
        T: Searchable,
        P: Fn(&T) -> bool,
    {
        items
            .iter()
            .filter(|item| item.matches_search(&self.search))
            .filter(|item| predicate(item))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::scope::registry::tests::sample_registry;
    use crate::shared::scope::{ScopeFilterMode, UnitId};

    struct Item {
        name: &'static str,
        category: &'static str,
        business: UnitId,
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.category]
        }
    }

    impl BusinessScoped for Item {
        fn business_id(&self) -> &UnitId {
            &self.business
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "Steel Beams", category: "Raw Materials", business: "business-1".into() },
            Item { name: "Forklift", category: "Equipment", business: "business-1".into() },
            Item { name: "Safety Helmets", category: "Supplies", business: "business-3".into() },
            Item { name: "Concrete Mix", category: "Raw Materials", business: "business-3".into() },
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = items();
        assert!(items[0].matches_search("steel"));
        assert!(items[0].matches_search("BEAM"));
        assert!(items[0].matches_search("raw mat"));
        assert!(!items[0].matches_search("forklift"));
        assert!(items[0].matches_search(""));
        assert!(items[0].matches_search("   "));
    }

    #[test]
    fn test_choice_filter_from_option() {
        assert_eq!(ChoiceFilter::from_option("all"), ChoiceFilter::All);
        assert_eq!(ChoiceFilter::from_option(""), ChoiceFilter::All);
        let only = ChoiceFilter::from_option("Equipment");
        assert!(only.is_active());
        assert!(only.matches(&"Equipment".to_string()));
        assert!(!only.matches(&"Supplies".to_string()));
    }

    #[test]
    fn test_choice_filter_parse_with() {
        let parse = |s: &str| s.parse::<u8>().ok();
        assert_eq!(ChoiceFilter::parse_with("all", parse), ChoiceFilter::All);
        assert_eq!(ChoiceFilter::parse_with("7", parse), ChoiceFilter::Only(7));
        assert_eq!(ChoiceFilter::parse_with("x", parse), ChoiceFilter::All);
    }

    #[test]
    fn test_unique_values_first_seen_order() {
        let items = items();
        assert_eq!(
            unique_values(&items, |i| i.category),
            vec!["Raw Materials", "Equipment", "Supplies"]
        );
    }

    #[test]
    fn test_query_combines_with_and() {
        let items = items();
        let registry = sample_registry();
        let scope = ScopeFilter::new(&registry, "group-2", ScopeFilterMode::Hierarchical);
        let category = ChoiceFilter::from_option("Raw Materials");

        let query = ListQuery::new("").with_scope(scope.clone());
        let rows = query.apply(&items, |i| category.matches(&i.category.to_string()));
        let names: Vec<&str> = rows.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Concrete Mix"]);

        let rows = ListQuery::new("steel").with_scope(scope).apply(&items, |_| true);
        assert!(rows.is_empty());

        let rows = ListQuery::new("steel").apply(&items, |_| true);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_unscoped_ignores_scope() {
        let items = items();
        let registry = sample_registry();
        let scope = ScopeFilter::new(&registry, "business-1", ScopeFilterMode::Hierarchical);
        let query = ListQuery::new("e").with_scope(scope);
        let rows = query.apply_unscoped(&items, |i| i.category != "Supplies");
        let names: Vec<&str> = rows.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Steel Beams", "Forklift", "Concrete Mix"]);
    }
}
