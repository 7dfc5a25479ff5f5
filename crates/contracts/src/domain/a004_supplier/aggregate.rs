use crate::domain::common::{AggregateRoot, StatusCode};
use crate::shared::badge::BadgeVariant;
use crate::shared::list_filter::Searchable;
use serde::{Deserialize, Serialize};

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupplierStatus {
    Active,
    Inactive,
    Blacklisted,
    Pending,
}

impl StatusCode for SupplierStatus {
    fn code(&self) -> &'static str {
        match self {
            SupplierStatus::Active => "active",
            SupplierStatus::Inactive => "inactive",
            SupplierStatus::Blacklisted => "blacklisted",
            SupplierStatus::Pending => "pending",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            SupplierStatus::Active => "Active",
            SupplierStatus::Inactive => "Inactive",
            SupplierStatus::Blacklisted => "Blacklisted",
            SupplierStatus::Pending => "Pending",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            SupplierStatus::Active => BadgeVariant::Default,
            SupplierStatus::Inactive => BadgeVariant::Secondary,
            SupplierStatus::Blacklisted => BadgeVariant::Destructive,
            SupplierStatus::Pending => BadgeVariant::Outline,
        }
    }

    fn all() -> &'static [Self] {
        &[
            SupplierStatus::Active,
            SupplierStatus::Inactive,
            SupplierStatus::Blacklisted,
            SupplierStatus::Pending,
        ]
    }
}

/// Поставщик (общий справочник, не привязан к бизнесу)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// "SUP-001"
    pub id: String,
    pub name: String,
    pub category: String,
    /// 0..=MAX_RATING
    pub rating: u8,
    pub status: SupplierStatus,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total_orders: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_order: Option<String>,
    pub payment_terms: String,
}

impl Supplier {
    /// Filled/empty flags for the star row
    pub fn rating_stars(&self) -> Vec<bool> {
        (0..MAX_RATING).map(|i| i < self.rating).collect()
    }
}

impl AggregateRoot for Supplier {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn code(&self) -> String {
        self.id.clone()
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "supplier"
    }

    fn element_name() -> &'static str {
        "Supplier"
    }

    fn list_name() -> &'static str {
        "Suppliers"
    }
}

impl Searchable for Supplier {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.id, &self.contact]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_supplier::seed;
    use crate::shared::list_filter::{unique_values, ChoiceFilter, ListQuery};

    #[test]
    fn test_rating_stars() {
        let suppliers = seed::suppliers();
        assert_eq!(suppliers[1].rating_stars(), vec![true, true, true, false, false]);
        assert!(suppliers[2].rating_stars().iter().all(|s| *s));
    }

    #[test]
    fn test_category_and_status_filters() {
        let suppliers = seed::suppliers();
        assert_eq!(
            unique_values(&suppliers, |s| s.category.as_str()),
            vec!["Raw Materials", "Transportation", "Technology", "Construction", "Consulting"]
        );

        let category = ChoiceFilter::from_option("Technology");
        let status = ChoiceFilter::parse_with("active", SupplierStatus::from_code);
        let rows = ListQuery::new("").apply_unscoped(&suppliers, |s| {
            category.matches(&s.category) && status.matches(&s.status)
        });
        let ids: Vec<&str> = rows.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["SUP-003"]);
    }

    #[test]
    fn test_search_includes_contact() {
        let suppliers = seed::suppliers();
        let rows = ListQuery::new("john").apply_unscoped(&suppliers, |_| true);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "SUP-006");
        assert_eq!(rows[0].last_order, None);
    }
}
