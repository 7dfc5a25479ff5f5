use crate::domain::common::{AggregateRoot, StatusCode};
use crate::shared::badge::BadgeVariant;
use crate::shared::list_filter::Searchable;
use crate::shared::scope::{BusinessScoped, UnitId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PurchaseOrderStatus {
    Pending,
    Approved,
    Partial,
    Received,
    Cancelled,
}

impl StatusCode for PurchaseOrderStatus {
    fn code(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Pending => "pending",
            PurchaseOrderStatus::Approved => "approved",
            PurchaseOrderStatus::Partial => "partial",
            PurchaseOrderStatus::Received => "received",
            PurchaseOrderStatus::Cancelled => "cancelled",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Pending => "Pending",
            PurchaseOrderStatus::Approved => "Approved",
            PurchaseOrderStatus::Partial => "Partial",
            PurchaseOrderStatus::Received => "Received",
            PurchaseOrderStatus::Cancelled => "Cancelled",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            PurchaseOrderStatus::Pending => BadgeVariant::Secondary,
            PurchaseOrderStatus::Approved => BadgeVariant::Default,
            PurchaseOrderStatus::Partial => BadgeVariant::Warning,
            PurchaseOrderStatus::Received => BadgeVariant::Outline,
            PurchaseOrderStatus::Cancelled => BadgeVariant::Destructive,
        }
    }

    fn all() -> &'static [Self] {
        &[
            PurchaseOrderStatus::Pending,
            PurchaseOrderStatus::Approved,
            PurchaseOrderStatus::Partial,
            PurchaseOrderStatus::Received,
            PurchaseOrderStatus::Cancelled,
        ]
    }
}

/// Заказ поставщику
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    /// "PO-2023-001"
    pub id: String,
    /// Номер заявки-основания ("REQ-2023-042")
    pub reference: String,
    pub supplier: String,
    pub date: String,
    pub delivery_date: String,
    pub status: PurchaseOrderStatus,
    pub total: f64,
    pub currency: String,
    /// Количество позиций
    pub items: u32,
    pub project: String,
    pub requestor: String,
    #[serde(rename = "business")]
    pub business_id: UnitId,
}

impl PurchaseOrder {
    pub fn is_pending(&self) -> bool {
        self.status == PurchaseOrderStatus::Pending
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == PurchaseOrderStatus::Cancelled
    }
}

impl AggregateRoot for PurchaseOrder {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn code(&self) -> String {
        self.id.clone()
    }

    fn description(&self) -> &str {
        &self.supplier
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "purchase_order"
    }

    fn element_name() -> &'static str {
        "Purchase Order"
    }

    fn list_name() -> &'static str {
        "Purchase Orders"
    }
}

impl Searchable for PurchaseOrder {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.id, &self.supplier, &self.project]
    }
}

impl BusinessScoped for PurchaseOrder {
    fn business_id(&self) -> &UnitId {
        &self.business_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_purchase_order::seed;
    use crate::shared::list_filter::{ChoiceFilter, ListQuery};

    #[test]
    fn test_status_mapping() {
        assert_eq!(PurchaseOrderStatus::Partial.badge(), BadgeVariant::Warning);
        assert_eq!(PurchaseOrderStatus::from_code("received"), Some(PurchaseOrderStatus::Received));
        assert_eq!(PurchaseOrderStatus::all().len(), 5);
    }

    #[test]
    fn test_search_fields() {
        let orders = seed::purchase_orders();
        let rows = ListQuery::new("po-2023-00").apply(&orders, |_| true);
        assert_eq!(rows.len(), 6);
        let rows = ListQuery::new("software").apply(&orders, |_| true);
        let ids: Vec<&str> = rows.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["PO-2023-006"]);
        // requestor is not searchable
        assert!(ListQuery::new("Carlos").apply(&orders, |_| true).is_empty());
    }

    #[test]
    fn test_status_dropdown() {
        let orders = seed::purchase_orders();
        let status = ChoiceFilter::parse_with("approved", PurchaseOrderStatus::from_code);
        let rows = ListQuery::new("").apply(&orders, |o| status.matches(&o.status));
        let ids: Vec<&str> = rows.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["PO-2023-001", "PO-2023-005"]);
    }

    #[test]
    fn test_business_field_name() {
        let order = &seed::purchase_orders()[1];
        let json = serde_json::to_value(order).unwrap();
        assert_eq!(json["business"], "business-3");
        assert_eq!(json["deliveryDate"], "2023-06-30");
    }
}
