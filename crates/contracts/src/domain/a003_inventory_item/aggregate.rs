use crate::domain::common::{AggregateRoot, StatusCode};
use crate::shared::badge::BadgeVariant;
use crate::shared::list_filter::Searchable;
use crate::shared::scope::{BusinessScoped, UnitId};
use serde::{Deserialize, Serialize};

/// Складской статус позиции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
    OverStock,
}

impl StatusCode for StockStatus {
    fn code(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
            StockStatus::OverStock => "over-stock",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::OverStock => "Over Stock",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            StockStatus::InStock => BadgeVariant::Default,
            StockStatus::LowStock => BadgeVariant::Secondary,
            StockStatus::OutOfStock => BadgeVariant::Destructive,
            StockStatus::OverStock => BadgeVariant::Warning,
        }
    }

    fn all() -> &'static [Self] {
        &[
            StockStatus::InStock,
            StockStatus::LowStock,
            StockStatus::OutOfStock,
            StockStatus::OverStock,
        ]
    }
}

/// Position of the current stock against its min/max band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Empty,
    BelowMinimum,
    AboveMaximum,
    Normal,
}

impl StockLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            StockLevel::Empty => "stock-bar--empty",
            StockLevel::BelowMinimum => "stock-bar--low",
            StockLevel::AboveMaximum => "stock-bar--over",
            StockLevel::Normal => "stock-bar--normal",
        }
    }

    /// Warning under the stock bar
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            StockLevel::Empty | StockLevel::BelowMinimum => Some("Below minimum"),
            StockLevel::AboveMaximum => Some("Above maximum"),
            StockLevel::Normal => None,
        }
    }
}

/// Номенклатурная позиция на складе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// "INV-001"
    pub id: String,
    /// Артикул ("RM-1001")
    pub code: String,
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub unit: String,
    pub value: f64,
    pub status: StockStatus,
    pub location: String,
    pub min_stock: u32,
    pub max_stock: u32,
    pub last_movement: String,
    #[serde(rename = "business")]
    pub business_id: UnitId,
}

impl InventoryItem {
    /// Fill of the stock bar, capped at 100
    pub fn stock_percentage(&self) -> f64 {
        if self.max_stock == 0 {
            return 0.0;
        }
        (self.stock as f64 / self.max_stock as f64 * 100.0).min(100.0)
    }

    pub fn stock_level(&self) -> StockLevel {
        if self.stock == 0 {
            StockLevel::Empty
        } else if self.stock < self.min_stock {
            StockLevel::BelowMinimum
        } else if self.stock > self.max_stock {
            StockLevel::AboveMaximum
        } else {
            StockLevel::Normal
        }
    }
}

impl AggregateRoot for InventoryItem {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn code(&self) -> String {
        self.code.clone()
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "inventory_item"
    }

    fn element_name() -> &'static str {
        "Inventory Item"
    }

    fn list_name() -> &'static str {
        "Inventory Items"
    }
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.code]
    }
}

impl BusinessScoped for InventoryItem {
    fn business_id(&self) -> &UnitId {
        &self.business_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_inventory_item::seed;
    use crate::shared::list_filter::unique_values;

    fn by_code(code: &str) -> InventoryItem {
        seed::inventory_items()
            .into_iter()
            .find(|i| i.code == code)
            .unwrap()
    }

    #[test]
    fn test_stock_levels() {
        assert_eq!(by_code("RM-1078").stock_level(), StockLevel::Empty);
        assert_eq!(by_code("SP-3045").stock_level(), StockLevel::BelowMinimum);
        assert_eq!(by_code("SP-3102").stock_level(), StockLevel::AboveMaximum);
        assert_eq!(by_code("RM-1001").stock_level(), StockLevel::Normal);
        assert_eq!(StockLevel::Empty.warning(), Some("Below minimum"));
        assert_eq!(StockLevel::Normal.warning(), None);
    }

    #[test]
    fn test_stock_percentage_is_capped() {
        assert_eq!(by_code("SP-3102").stock_percentage(), 100.0);
        assert!((by_code("EQ-2089").stock_percentage() - 80.0).abs() < 1e-9);
        assert_eq!(by_code("RM-1078").stock_percentage(), 0.0);
    }

    #[test]
    fn test_categories_in_seed_order() {
        let items = seed::inventory_items();
        assert_eq!(
            unique_values(&items, |i| i.category.as_str()),
            vec!["Raw Materials", "Equipment", "Supplies"]
        );
    }

    #[test]
    fn test_search_by_name_or_code() {
        let helmet = by_code("SP-3102");
        assert!(helmet.matches_search("helmet"));
        assert!(helmet.matches_search("sp-31"));
        assert!(!helmet.matches_search("supplies"));
    }
}
