//! Page registry - единственный источник правды для маппинга AppPage → View

use super::AppPage;
use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_project::ui::list::ProjectList;
use crate::domain::a002_purchase_order::ui::list::PurchaseOrderList;
use crate::domain::a003_inventory_item::ui::list::InventoryItemList;
use crate::domain::a004_supplier::ui::list::SupplierList;
use crate::domain::a005_transaction::ui::list::TransactionList;
use crate::system::pages::{ReportsPage, SettingsPage};
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит страницу центральной области.
pub fn render_page(page: AppPage) -> AnyView {
    log!("📄 render_page: {:?}", page);

    match page {
        // ═══════════════════════════════════════════════════════════════════
        // Dashboard
        // ═══════════════════════════════════════════════════════════════════
        AppPage::Dashboard => view! { <OverviewDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Domain lists (a001-a005)
        // ═══════════════════════════════════════════════════════════════════
        AppPage::Projects => view! { <ProjectList /> }.into_any(),
        AppPage::Purchases => view! { <PurchaseOrderList /> }.into_any(),
        AppPage::Inventory => view! { <InventoryItemList /> }.into_any(),
        AppPage::Suppliers => view! { <SupplierList /> }.into_any(),
        AppPage::Accounting => view! { <TransactionList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Static catalogs
        // ═══════════════════════════════════════════════════════════════════
        AppPage::Reports => view! { <ReportsPage /> }.into_any(),
        AppPage::Settings => view! { <SettingsPage /> }.into_any(),
    }
}
