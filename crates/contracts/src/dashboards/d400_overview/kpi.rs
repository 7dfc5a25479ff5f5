use super::dto::{KpiCard, OverviewStat, OverviewTab, StatTone, ValueFormat};
use crate::domain::a001_project::{seed as project_seed, Project};
use crate::domain::a002_purchase_order::{seed as purchase_seed, PurchaseOrder};
use crate::domain::a003_inventory_item::{seed as inventory_seed, InventoryItem, StockLevel};
use crate::domain::a005_transaction::{seed as transaction_seed, Transaction, TransactionType};
use crate::shared::scope::ScopeFilter;
use std::collections::HashSet;

/// Business-scoped data the dashboard aggregates over
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub projects: Vec<Project>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub inventory: Vec<InventoryItem>,
    pub transactions: Vec<Transaction>,
}

/// Visible rows of one dashboard source
pub struct ScopedView<'a> {
    pub projects: Vec<&'a Project>,
    pub purchase_orders: Vec<&'a PurchaseOrder>,
    pub inventory: Vec<&'a InventoryItem>,
    pub transactions: Vec<&'a Transaction>,
}

impl DashboardData {
    /// Demo data set
    pub fn seed() -> Self {
        Self {
            projects: project_seed::projects(),
            purchase_orders: purchase_seed::purchase_orders(),
            inventory: inventory_seed::inventory_items(),
            transactions: transaction_seed::transactions(),
        }
    }

    pub fn scoped<'a>(&'a self, scope: &ScopeFilter<'_>) -> ScopedView<'a> {
        ScopedView {
            projects: scope.apply(&self.projects),
            purchase_orders: scope.apply(&self.purchase_orders),
            inventory: scope.apply(&self.inventory),
            transactions: scope.apply(&self.transactions),
        }
    }

    /// The five KPI cards for the current selection
    pub fn kpi_cards(&self, scope: &ScopeFilter<'_>) -> Vec<KpiCard> {
        let view = self.scoped(scope);
        log::debug!(
            "computing KPIs for '{}': {} projects, {} orders, {} items, {} transactions",
            scope.selected(),
            view.projects.len(),
            view.purchase_orders.len(),
            view.inventory.len(),
            view.transactions.len()
        );

        vec![
            KpiCard {
                id: "active_projects".into(),
                title: "Active Projects".into(),
                value: Some(view.active_projects() as f64),
                format: ValueFormat::Integer,
                trend: 12.0,
                trend_label: "vs last month".into(),
                icon: "clipboard".into(),
                chart_data: vec![5.0, 8.0, 12.0, 9.0, 7.0, 15.0, 10.0],
            },
            KpiCard {
                id: "pending_approvals".into(),
                title: "Pending Approvals".into(),
                value: Some(view.pending_approvals() as f64),
                format: ValueFormat::Integer,
                trend: -4.0,
                trend_label: "vs last week".into(),
                icon: "clipboard".into(),
                chart_data: vec![8.0, 5.0, 12.0, 15.0, 10.0, 8.0, 6.0],
            },
            KpiCard {
                id: "inventory_value".into(),
                title: "Inventory Value".into(),
                value: Some(view.inventory_value()),
                format: ValueFormat::usd(),
                trend: 8.0,
                trend_label: "vs last month".into(),
                icon: "package".into(),
                chart_data: vec![10.0, 12.0, 15.0, 18.0, 20.0, 18.0, 22.0],
            },
            KpiCard {
                id: "monthly_purchases".into(),
                title: "Monthly Purchases".into(),
                value: Some(view.purchases_total()),
                format: ValueFormat::usd(),
                trend: -2.0,
                trend_label: "vs last month".into(),
                icon: "dollar".into(),
                chart_data: vec![22.0, 18.0, 16.0, 15.0, 14.0, 12.0, 10.0],
            },
            KpiCard {
                id: "financial_health".into(),
                title: "Financial Health".into(),
                value: view.financial_health(),
                format: ValueFormat::Percent { decimals: 0 },
                trend: 5.0,
                trend_label: "vs target".into(),
                icon: "trending-up".into(),
                chart_data: vec![65.0, 70.0, 75.0, 80.0, 85.0, 88.0, 92.0],
            },
        ]
    }

    /// Stat cards above the table of an overview tab
    pub fn overview_stats(&self, tab: OverviewTab, scope: &ScopeFilter<'_>) -> Vec<OverviewStat> {
        let view = self.scoped(scope);
        let stat = |title: &str, value: Option<f64>, format: ValueFormat, icon: &str, tone: StatTone| {
            OverviewStat {
                title: title.to_string(),
                value,
                format,
                icon: icon.to_string(),
                tone,
            }
        };

        match tab {
            OverviewTab::Projects => vec![
                stat("Active Projects", Some(view.active_projects() as f64), ValueFormat::Integer, "bar-chart", StatTone::Primary),
                stat("Project Budget", Some(view.project_budget()), ValueFormat::usd(), "line-chart", StatTone::Primary),
                stat("Completion Rate", view.completion_rate(), ValueFormat::Percent { decimals: 0 }, "pie-chart", StatTone::Primary),
            ],
            OverviewTab::Inventory => vec![
                stat("Total Stock Value", Some(view.inventory_value()), ValueFormat::usd(), "bar-chart", StatTone::Primary),
                stat("Low Stock Items", Some(view.low_stock_items() as f64), ValueFormat::Integer, "line-chart", StatTone::Destructive),
                stat("Warehouses", Some(view.warehouses() as f64), ValueFormat::Integer, "pie-chart", StatTone::Primary),
            ],
            OverviewTab::Finances => vec![
                stat("Revenue", Some(view.revenue()), ValueFormat::usd(), "line-chart", StatTone::Primary),
                stat("Expenses", Some(view.expenses()), ValueFormat::usd(), "bar-chart", StatTone::Destructive),
                stat("Profit Margin", view.profit_margin(), ValueFormat::Percent { decimals: 1 }, "pie-chart", StatTone::Primary),
            ],
        }
    }
}

impl<'a> ScopedView<'a> {
    pub fn active_projects(&self) -> usize {
        self.projects.iter().filter(|p| p.is_active()).count()
    }

    pub fn project_budget(&self) -> f64 {
        self.projects.iter().map(|p| p.budget).sum()
    }

    /// Average progress of the visible projects
    pub fn completion_rate(&self) -> Option<f64> {
        if self.projects.is_empty() {
            return None;
        }
        let total: f64 = self.projects.iter().map(|p| p.progress as f64).sum();
        Some(total / self.projects.len() as f64)
    }

    pub fn pending_approvals(&self) -> usize {
        self.purchase_orders.iter().filter(|o| o.is_pending()).count()
    }

    /// Sum of non-cancelled purchase orders
    pub fn purchases_total(&self) -> f64 {
        self.purchase_orders
            .iter()
            .filter(|o| !o.is_cancelled())
            .map(|o| o.total)
            .sum()
    }

    pub fn inventory_value(&self) -> f64 {
        self.inventory.iter().map(|i| i.value).sum()
    }

    pub fn low_stock_items(&self) -> usize {
        self.inventory
            .iter()
            .filter(|i| matches!(i.stock_level(), StockLevel::Empty | StockLevel::BelowMinimum))
            .count()
    }

    /// Distinct warehouses, taken from the location prefix ("Warehouse A - Section 3")
    pub fn warehouses(&self) -> usize {
        self.inventory
            .iter()
            .map(|i| i.location.split(" - ").next().unwrap_or_default().trim())
            .collect::<HashSet<_>>()
            .len()
    }

    fn settled_sum(&self, kinds: &[TransactionType]) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.status.is_settled() && kinds.contains(&t.kind))
            .map(|t| t.amount)
            .sum()
    }

    pub fn revenue(&self) -> f64 {
        self.settled_sum(&[TransactionType::Income])
    }

    pub fn expenses(&self) -> f64 {
        self.settled_sum(&[TransactionType::Expense, TransactionType::Adjustment])
    }

    /// Share of income among settled money movements, in percent
    pub fn financial_health(&self) -> Option<f64> {
        let income = self.revenue();
        let total = income + self.expenses();
        if total <= 0.0 {
            return None;
        }
        Some(income / total * 100.0)
    }

    pub fn profit_margin(&self) -> Option<f64> {
        let revenue = self.revenue();
        if revenue <= 0.0 {
            return None;
        }
        Some((revenue - self.expenses()) / revenue * 100.0)
    }

    /// Newest transactions first
    pub fn latest_transactions(&self, limit: usize) -> Vec<&'a Transaction> {
        let mut rows = self.transactions.clone();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows.truncate(limit);
        rows
    }
}
