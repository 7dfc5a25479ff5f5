pub mod state;

use crate::layout::pages::AppPage;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::export::CsvExportable;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    empty_row, list_title, status_options, value_options, ExportButton, FilterSelect,
    SearchInput,
};
use crate::shared::number_format::NO_VALUE;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_supplier::{seed, Supplier, SupplierStatus};
use contracts::domain::common::StatusCode;
use contracts::shared::list_filter::{unique_values, ListQuery};
use leptos::prelude::*;
use state::create_state;
use thaw::*;

impl CsvExportable for Supplier {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID", "Supplier", "Category", "Rating", "Status", "Contact", "Email", "Phone",
            "Address", "Total Orders", "Last Order", "Payment Terms",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.category.clone(),
            self.rating.to_string(),
            self.status.display_name().to_string(),
            self.contact.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.address.clone(),
            self.total_orders.to_string(),
            self.last_order.clone().unwrap_or_default(),
            self.payment_terms.clone(),
        ]
    }
}

/// Поставщики общие для всех компаний: выбор в шапке на список не влияет
#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let state = create_state();
    let rows = StoredValue::new(seed::suppliers());
    let categories = rows.with_value(|rows| unique_values(rows, |s| s.category.as_str()));

    let visible = Signal::derive(move || {
        let category = state.category_filter();
        let status = state.status_filter();
        let query = ListQuery::new(state.search.get());
        rows.with_value(|rows| {
            query
                .apply_unscoped(rows, |s| category.matches(&s.category) && status.matches(&s.status))
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <PageFrame
            page_id="a004_supplier--list"
            category=PAGE_CAT_LIST
            title=AppPage::Suppliers.title()
            description=AppPage::Suppliers.description()
        >
            <div class="list-toolbar">
                <div class="list-toolbar__filters">
                    <SearchInput
                        value=state.search
                        on_change=Callback::new(move |v| state.search.set(v))
                        placeholder="Search suppliers..."
                    />
                    <FilterSelect
                        value=state.category
                        all_label="All Categories"
                        options=value_options(categories)
                    />
                    <FilterSelect
                        value=state.status
                        all_label="All Status"
                        options={status_options::<SupplierStatus>()}
                    />
                </div>
                <div class="list-toolbar__actions">
                    <ExportButton rows=visible />
                </div>
            </div>

            <div class="list-card">
                <h2 class="list-card__title">
                    {move || list_title::<Supplier>(visible.with(|v| v.len()))}
                </h2>
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"ID"</TableHeaderCell>
                            <TableHeaderCell min_width=200.0>"Supplier"</TableHeaderCell>
                            <TableHeaderCell>"Category"</TableHeaderCell>
                            <TableHeaderCell>"Rating"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell min_width=200.0>"Contact"</TableHeaderCell>
                            <TableHeaderCell>"Orders"</TableHeaderCell>
                            <TableHeaderCell>"Payment Terms"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let data = visible.get();
                            if data.is_empty() {
                                return empty_row(8, "No suppliers found");
                            }
                            data.into_iter().map(|supplier| {
                                let stars = supplier
                                    .rating_stars()
                                    .into_iter()
                                    .map(|filled| view! {
                                        <span class="rating__star" class:rating__star--filled=filled>
                                            {icon("star")}
                                        </span>
                                    })
                                    .collect_view();
                                let last_order = supplier
                                    .last_order
                                    .as_deref()
                                    .map(format_date)
                                    .unwrap_or_else(|| NO_VALUE.to_string());
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <span class="table__cell--strong">{supplier.id.clone()}</span>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <div class="table__cell--strong">{supplier.name.clone()}</div>
                                                <div class="table__cell--muted table__cell--icon">
                                                    {icon("map-pin")}{supplier.address.clone()}
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>{supplier.category.clone()}</TableCell>
                                        <TableCell><div class="rating">{stars}</div></TableCell>
                                        <TableCell><StatusBadge status=supplier.status /></TableCell>
                                        <TableCell>
                                            <div>{supplier.contact.clone()}</div>
                                            <div class="table__cell--muted table__cell--icon">
                                                {icon("mail")}{supplier.email.clone()}
                                            </div>
                                            <div class="table__cell--muted table__cell--icon">
                                                {icon("phone")}{supplier.phone.clone()}
                                            </div>
                                        </TableCell>
                                        <TableCell>
                                            <div>{supplier.total_orders}</div>
                                            <div class="table__cell--muted">{format!("Last: {}", last_order)}</div>
                                        </TableCell>
                                        <TableCell>{supplier.payment_terms.clone()}</TableCell>
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
    fn test_csv_row_without_last_order() {
        let mut supplier = seed::suppliers()[0].clone();
        supplier.last_order = None;
        let row = supplier.to_csv_row();
        assert_eq!(row.len(), Supplier::headers().len());
        assert_eq!(row[10], "");
    }

    #[test]
    fn test_dropdown_options_parse_back() {
        let owner = Owner::new();
        owner.set();
        let state = state::create_state();
        for (code, _) in status_options::<SupplierStatus>() {
            state.status.set(code.clone());
            let expected = SupplierStatus::from_code(&code).unwrap();
            assert!(state.status_filter().matches(&expected), "{code}");
            assert!(state.status_filter().is_active());
        }
    }
}
