use crate::domain::common::{AggregateRoot, StatusCode};
use crate::shared::badge::BadgeVariant;
use crate::shared::list_filter::Searchable;
use crate::shared::scope::{BusinessScoped, UnitId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Type & Status
// ============================================================================

/// Вид проводки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
    Adjustment,
}

impl TransactionType {
    /// Sign shown in front of the amount
    pub fn sign(&self) -> &'static str {
        match self {
            TransactionType::Income => "+",
            TransactionType::Expense | TransactionType::Adjustment => "-",
            TransactionType::Transfer => "",
        }
    }

    pub fn amount_class(&self) -> &'static str {
        match self {
            TransactionType::Income => "amount--income",
            TransactionType::Expense | TransactionType::Adjustment => "amount--outflow",
            TransactionType::Transfer => "",
        }
    }
}

impl StatusCode for TransactionType {
    fn code(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Transfer => "transfer",
            TransactionType::Adjustment => "adjustment",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
            TransactionType::Transfer => "Transfer",
            TransactionType::Adjustment => "Adjustment",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            TransactionType::Income => BadgeVariant::Default,
            TransactionType::Expense => BadgeVariant::Destructive,
            TransactionType::Transfer => BadgeVariant::Secondary,
            TransactionType::Adjustment => BadgeVariant::Warning,
        }
    }

    fn all() -> &'static [Self] {
        &[
            TransactionType::Income,
            TransactionType::Expense,
            TransactionType::Transfer,
            TransactionType::Adjustment,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Cancelled,
    Reconciled,
}

impl TransactionStatus {
    /// Проводка проведена (учитывается в финансовых показателях)
    pub fn is_settled(&self) -> bool {
        matches!(self, TransactionStatus::Completed | TransactionStatus::Reconciled)
    }
}

impl StatusCode for TransactionStatus {
    fn code(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Cancelled => "cancelled",
            TransactionStatus::Reconciled => "reconciled",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Cancelled => "Cancelled",
            TransactionStatus::Reconciled => "Reconciled",
        }
    }

    fn badge(&self) -> BadgeVariant {
        match self {
            TransactionStatus::Completed => BadgeVariant::Outline,
            TransactionStatus::Pending => BadgeVariant::Secondary,
            TransactionStatus::Cancelled => BadgeVariant::Destructive,
            TransactionStatus::Reconciled => BadgeVariant::Default,
        }
    }

    fn all() -> &'static [Self] {
        &[
            TransactionStatus::Completed,
            TransactionStatus::Pending,
            TransactionStatus::Cancelled,
            TransactionStatus::Reconciled,
        ]
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Финансовая проводка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// "TRX-001"
    pub id: String,
    pub date: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub currency: String,
    pub status: TransactionStatus,
    pub reference: String,
    pub account: String,
    /// Empty for overhead not booked to a project
    #[serde(default)]
    pub project: String,
    /// Название бизнеса для отображения
    pub business: String,
    pub business_id: UnitId,
}

impl Transaction {
    /// Amount with its sign applied
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense | TransactionType::Adjustment => -self.amount,
            TransactionType::Transfer => 0.0,
        }
    }
}

impl AggregateRoot for Transaction {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn code(&self) -> String {
        self.id.clone()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "transaction"
    }

    fn element_name() -> &'static str {
        "Transaction"
    }

    fn list_name() -> &'static str {
        "Transactions"
    }
}

impl Searchable for Transaction {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.description, &self.id, &self.reference]
    }
}

impl BusinessScoped for Transaction {
    fn business_id(&self) -> &UnitId {
        &self.business_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_transaction::seed;
    use crate::shared::list_filter::{ChoiceFilter, ListQuery};
    use crate::shared::scope::registry::tests::sample_registry;
    use crate::shared::scope::{ScopeFilter, ScopeFilterMode};

    #[test]
    fn test_type_sign_and_badge() {
        assert_eq!(TransactionType::Income.sign(), "+");
        assert_eq!(TransactionType::Adjustment.sign(), "-");
        assert_eq!(TransactionType::Transfer.sign(), "");
        assert_eq!(TransactionType::Adjustment.badge(), BadgeVariant::Warning);
        assert_eq!(TransactionStatus::Reconciled.badge(), BadgeVariant::Default);
    }

    #[test]
    fn test_type_serializes_as_type_field() {
        let trx = &seed::transactions()[0];
        let json = serde_json::to_value(trx).unwrap();
        assert_eq!(json["type"], "income");
        assert_eq!(json["businessId"], "business-1");
    }

    #[test]
    fn test_business_ids_match_names() {
        let registry = sample_registry();
        for trx in seed::transactions() {
            let unit = registry.get(&trx.business_id).unwrap();
            assert_eq!(unit.name, trx.business, "{}", trx.id);
        }
    }

    #[test]
    fn test_type_status_and_scope_filters() {
        let transactions = seed::transactions();
        let registry = sample_registry();
        let kind = ChoiceFilter::parse_with("expense", TransactionType::from_code);
        let status = ChoiceFilter::parse_with("all", TransactionStatus::from_code);

        let query = ListQuery::new("")
            .with_scope(ScopeFilter::new(&registry, "business-2", ScopeFilterMode::Hierarchical));
        let rows = query.apply(&transactions, |t| kind.matches(&t.kind) && status.matches(&t.status));
        let ids: Vec<&str> = rows.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["TRX-004", "TRX-007"]);
    }

    #[test]
    fn test_search_by_reference() {
        let transactions = seed::transactions();
        let rows = ListQuery::new("po-2023").apply(&transactions, |_| true);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "TRX-002");
    }
}
