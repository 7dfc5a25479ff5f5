use crate::layout::global_context::{scope_filter, AppGlobalContext};
use crate::layout::pages::AppPage;
use crate::shared::components::stat_card::{KpiCardView, StatCard};
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::empty_row;
use crate::shared::number_format::{format_currency, format_number_int, format_usd};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_overview::{DashboardData, OverviewTab};
use contracts::domain::a001_project::Project;
use contracts::domain::a003_inventory_item::InventoryItem;
use contracts::domain::a005_transaction::Transaction;
use contracts::shared::scope::ScopeContext;
use leptos::prelude::*;
use thaw::*;

const LATEST_TRANSACTIONS: usize = 5;

/// Строки таблицы обзора для выбранной вкладки
#[derive(Clone)]
enum OverviewRows {
    Projects(Vec<Project>),
    Inventory(Vec<InventoryItem>),
    Finances(Vec<Transaction>),
}

fn tab_from_code(code: &str) -> OverviewTab {
    OverviewTab::all()
        .into_iter()
        .find(|t| t.code() == code)
        .unwrap_or(OverviewTab::Projects)
}

/// Главная панель: KPI и обзор модулей по выбранной компании
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let scope = use_context::<ScopeContext>().expect("ScopeContext not found");
    let data = StoredValue::new(DashboardData::seed());
    let selected_tab = RwSignal::new(OverviewTab::Projects.code().to_string());

    let scope_for_kpi = scope.clone();
    let kpis = Signal::derive(move || {
        let filter = scope_filter(&ctx, &scope_for_kpi);
        data.with_value(|d| d.kpi_cards(&filter))
    });

    let scope_for_stats = scope.clone();
    let stats = Signal::derive(move || {
        let tab = selected_tab.with(|code| tab_from_code(code));
        let filter = scope_filter(&ctx, &scope_for_stats);
        data.with_value(|d| d.overview_stats(tab, &filter))
    });

    let rows = Signal::derive(move || {
        let tab = selected_tab.with(|code| tab_from_code(code));
        let filter = scope_filter(&ctx, &scope);
        data.with_value(|d| {
            let view = d.scoped(&filter);
            match tab {
                OverviewTab::Projects => {
                    OverviewRows::Projects(view.projects.into_iter().cloned().collect())
                }
                OverviewTab::Inventory => {
                    OverviewRows::Inventory(view.inventory.into_iter().cloned().collect())
                }
                OverviewTab::Finances => OverviewRows::Finances(
                    view.latest_transactions(LATEST_TRANSACTIONS)
                        .into_iter()
                        .cloned()
                        .collect(),
                ),
            }
        })
    });

    view! {
        <PageFrame
            page_id="d400_overview--dashboard"
            category=PAGE_CAT_DASHBOARD
            title=AppPage::Dashboard.title()
            description=AppPage::Dashboard.description()
        >
            <div class="dashboard__kpis">
                <For
                    each=move || kpis.get()
                    key=|card| (card.id.clone(), card.value.map(f64::to_bits))
                    children=|card| view! { <KpiCardView card=card /> }
                />
            </div>

            <div class="dashboard__overview">
                <h2 class="dashboard__section-title">"Module Overview"</h2>
                <TabList selected_value=selected_tab>
                    {OverviewTab::all()
                        .into_iter()
                        .map(|tab| view! { <Tab value=tab.code()>{tab.display_name()}</Tab> })
                        .collect_view()}
                </TabList>

                <div class="dashboard__stats">
                    {move || {
                        stats
                            .get()
                            .into_iter()
                            .map(|stat| view! { <StatCard stat=stat /> })
                            .collect_view()
                    }}
                </div>

                <div class="list-card">
                    {move || match rows.get() {
                        OverviewRows::Projects(items) => projects_table(items),
                        OverviewRows::Inventory(items) => inventory_table(items),
                        OverviewRows::Finances(items) => transactions_table(items),
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

fn projects_table(items: Vec<Project>) -> AnyView {
    view! {
        <h3 class="list-card__title">"Recent Projects"</h3>
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Project"</TableHeaderCell>
                    <TableHeaderCell>"Business"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    <TableHeaderCell>"Progress"</TableHeaderCell>
                    <TableHeaderCell>"Budget"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {if items.is_empty() {
                    empty_row(5, "No projects for the selected company")
                } else {
                    items.into_iter().map(|p| view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout truncate=true>{p.name.clone()}</TableCellLayout>
                            </TableCell>
                            <TableCell>{p.business.clone()}</TableCell>
                            <TableCell><StatusBadge status=p.status /></TableCell>
                            <TableCell>{format!("{}%", p.progress)}</TableCell>
                            <TableCell>{format_usd(p.budget)}</TableCell>
                        </TableRow>
                    }).collect_view().into_any()
                }}
            </TableBody>
        </Table>
    }
    .into_any()
}

fn inventory_table(items: Vec<InventoryItem>) -> AnyView {
    view! {
        <h3 class="list-card__title">"Inventory Status"</h3>
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Item"</TableHeaderCell>
                    <TableHeaderCell>"Category"</TableHeaderCell>
                    <TableHeaderCell>"Stock"</TableHeaderCell>
                    <TableHeaderCell>"Value"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {if items.is_empty() {
                    empty_row(5, "No inventory for the selected company")
                } else {
                    items.into_iter().map(|i| view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout truncate=true>{i.name.clone()}</TableCellLayout>
                            </TableCell>
                            <TableCell>{i.category.clone()}</TableCell>
                            <TableCell>{format!("{} {}", format_number_int(i.stock as f64), i.unit)}</TableCell>
                            <TableCell>{format_usd(i.value)}</TableCell>
                            <TableCell><StatusBadge status=i.status /></TableCell>
                        </TableRow>
                    }).collect_view().into_any()
                }}
            </TableBody>
        </Table>
    }
    .into_any()
}

fn transactions_table(items: Vec<Transaction>) -> AnyView {
    view! {
        <h3 class="list-card__title">"Latest Transactions"</h3>
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Date"</TableHeaderCell>
                    <TableHeaderCell>"Description"</TableHeaderCell>
                    <TableHeaderCell>"Amount"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {if items.is_empty() {
                    empty_row(4, "No transactions for the selected company")
                } else {
                    items.into_iter().map(|t| {
                        let amount = format!("{}{}", t.kind.sign(), format_currency(t.amount, &t.currency, 2));
                        view! {
                            <TableRow>
                                <TableCell>{format_date(&t.date)}</TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{t.description.clone()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <span class=format!("amount {}", t.kind.amount_class())>{amount}</span>
                                </TableCell>
                                <TableCell><StatusBadge status=t.status /></TableCell>
                            </TableRow>
                        }
                    }).collect_view().into_any()
                }}
            </TableBody>
        </Table>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_code() {
        assert_eq!(tab_from_code("inventory"), OverviewTab::Inventory);
        assert_eq!(tab_from_code("finances"), OverviewTab::Finances);
        assert_eq!(tab_from_code("unknown"), OverviewTab::Projects);
    }
}
