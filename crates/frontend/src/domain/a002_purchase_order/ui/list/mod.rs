pub mod state;

use crate::layout::global_context::{scope_filter, AppGlobalContext};
use crate::layout::pages::AppPage;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::export::CsvExportable;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    empty_row, list_title, status_options, ExportButton, FilterSelect, SearchInput,
};
use crate::shared::number_format::format_currency;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_purchase_order::{seed, PurchaseOrder, PurchaseOrderStatus};
use contracts::domain::common::StatusCode;
use contracts::shared::list_filter::ListQuery;
use contracts::shared::scope::ScopeContext;
use leptos::prelude::*;
use state::create_state;
use thaw::*;

impl CsvExportable for PurchaseOrder {
    fn headers() -> Vec<&'static str> {
        vec![
            "Order ID", "Supplier", "Project", "Status", "Amount", "Currency", "Items", "Order Date",
            "Delivery Date", "Reference", "Requestor",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.supplier.clone(),
            self.project.clone(),
            self.status.display_name().to_string(),
            format!("{:.2}", self.total),
            self.currency.clone(),
            self.items.to_string(),
            self.date.clone(),
            self.delivery_date.clone(),
            self.reference.clone(),
            self.requestor.clone(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PurchaseOrderList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let scope = use_context::<ScopeContext>().expect("ScopeContext not found");
    let state = create_state();
    let rows = StoredValue::new(seed::purchase_orders());

    let visible = Signal::derive(move || {
        let status = state.status_filter();
        let query = ListQuery::new(state.search.get()).with_scope(scope_filter(&ctx, &scope));
        rows.with_value(|rows| {
            query
                .apply(rows, |po| status.matches(&po.status))
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <PageFrame
            page_id="a002_purchase_order--list"
            category=PAGE_CAT_LIST
            title=AppPage::Purchases.title()
            description=AppPage::Purchases.description()
        >
            <div class="list-toolbar">
                <div class="list-toolbar__filters">
                    <SearchInput
                        value=state.search
                        on_change=Callback::new(move |v| state.search.set(v))
                        placeholder="Search orders..."
                    />
                    <FilterSelect
                        value=state.status
                        all_label="All Status"
                        options={status_options::<PurchaseOrderStatus>()}
                    />
                </div>
                <div class="list-toolbar__actions">
                    <ExportButton rows=visible />
                </div>
            </div>

            <div class="list-card">
                <h2 class="list-card__title">
                    {move || list_title::<PurchaseOrder>(visible.with(|v| v.len()))}
                </h2>
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=120.0>"Order ID"</TableHeaderCell>
                            <TableHeaderCell min_width=150.0>"Supplier"</TableHeaderCell>
                            <TableHeaderCell>"Project"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Amount"</TableHeaderCell>
                            <TableHeaderCell>"Items"</TableHeaderCell>
                            <TableHeaderCell min_width=150.0>"Dates"</TableHeaderCell>
                            <TableHeaderCell>"Reference"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let data = visible.get();
                            if data.is_empty() {
                                return empty_row(8, "No purchase orders found");
                            }
                            data.into_iter().map(|po| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="table__cell--strong">{po.id.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{po.supplier.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>{po.project.clone()}</TableCell>
                                        <TableCell><StatusBadge status=po.status /></TableCell>
                                        <TableCell>{format_currency(po.total, &po.currency, 2)}</TableCell>
                                        <TableCell>{format!("{} items", po.items)}</TableCell>
                                        <TableCell>
                                            <div class="table__cell--icon">
                                                {icon("calendar")}{format!("Order: {}", format_date(&po.date))}
                                            </div>
                                            <div class="table__cell--icon table__cell--muted">
                                                {icon("truck")}{format!("Delivery: {}", format_date(&po.delivery_date))}
                                            </div>
                                        </TableCell>
                                        <TableCell>
                                            <div>{po.reference.clone()}</div>
                                            <div class="table__cell--muted">{po.requestor.clone()}</div>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view().into_any()
                        }}
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_row_matches_headers() {
        let po = &seed::purchase_orders()[0];
        let row = po.to_csv_row();
        assert_eq!(row.len(), PurchaseOrder::headers().len());
        assert_eq!(row[0], po.id);
        assert_eq!(row[3], po.status.display_name());
    }

    #[test]
    fn test_dropdown_options_parse_back() {
        let owner = Owner::new();
        owner.set();
        let state = state::create_state();
        for (code, _) in status_options::<PurchaseOrderStatus>() {
            state.status.set(code.clone());
            let expected = PurchaseOrderStatus::from_code(&code).unwrap();
            assert!(state.status_filter().matches(&expected), "{code}");
            assert!(state.status_filter().is_active());
        }
    }
}
