pub mod state;

use crate::layout::global_context::{scope_filter, AppGlobalContext};
use crate::layout::pages::AppPage;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::export::CsvExportable;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    empty_row, list_title, status_options, value_options, ExportButton, FilterSelect,
    SearchInput,
};
use crate::shared::number_format::{format_number_int, format_usd};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_inventory_item::{seed, InventoryItem, StockStatus};
use contracts::domain::common::StatusCode;
use contracts::shared::list_filter::{unique_values, ListQuery};
use contracts::shared::scope::ScopeContext;
use leptos::prelude::*;
use state::create_state;
use thaw::*;

impl CsvExportable for InventoryItem {
    fn headers() -> Vec<&'static str> {
        vec![
            "Item Code", "Name", "Category", "Stock", "Unit", "Value", "Status", "Location",
            "Min Stock", "Max Stock", "Last Movement",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.category.clone(),
            self.stock.to_string(),
            self.unit.clone(),
            format!("{:.2}", self.value),
            self.status.display_name().to_string(),
            self.location.clone(),
            self.min_stock.to_string(),
            self.max_stock.to_string(),
            self.last_movement.clone(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn InventoryItemList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let scope = use_context::<ScopeContext>().expect("ScopeContext not found");
    let state = create_state();
    let rows = StoredValue::new(seed::inventory_items());

    // Категории берутся из всего справочника, не только из видимых строк
    let categories = rows.with_value(|rows| unique_values(rows, |i| i.category.as_str()));

    let visible = Signal::derive(move || {
        let category = state.category_filter();
        let status = state.status_filter();
        let query = ListQuery::new(state.search.get()).with_scope(scope_filter(&ctx, &scope));
        rows.with_value(|rows| {
            query
                .apply(rows, |i| category.matches(&i.category) && status.matches(&i.status))
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <PageFrame
            page_id="a003_inventory_item--list"
            category=PAGE_CAT_LIST
            title=AppPage::Inventory.title()
            description=AppPage::Inventory.description()
        >
            <div class="list-toolbar">
                <div class="list-toolbar__filters">
                    <SearchInput
                        value=state.search
                        on_change=Callback::new(move |v| state.search.set(v))
                        placeholder="Search inventory..."
                    />
                    <FilterSelect
                        value=state.category
                        all_label="All Categories"
                        options=value_options(categories)
                    />
                    <FilterSelect
                        value=state.status
                        all_label="All Status"
                        options={status_options::<StockStatus>()}
                    />
                </div>
                <div class="list-toolbar__actions">
                    <ExportButton rows=visible />
                </div>
            </div>

            <div class="list-card">
                <h2 class="list-card__title">
                    {move || list_title::<InventoryItem>(visible.with(|v| v.len()))}
                </h2>
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Item Code"</TableHeaderCell>
                            <TableHeaderCell min_width=180.0>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Category"</TableHeaderCell>
                            <TableHeaderCell>"Stock"</TableHeaderCell>
                            <TableHeaderCell>"Value"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Location"</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>"Stock Levels"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let data = visible.get();
                            if data.is_empty() {
                                return empty_row(8, "No inventory items found");
                            }
                            data.into_iter().map(|item| {
                                let level = item.stock_level();
                                let fill = item.stock_percentage();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <span class="table__cell--strong">{item.code.clone()}</span>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{item.name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>{item.category.clone()}</TableCell>
                                        <TableCell>
                                            <div>{format!("{} {}", format_number_int(item.stock as f64), item.unit)}</div>
                                            <div class="table__cell--muted">
                                                {format!("Last updated: {}", format_date(&item.last_movement))}
                                            </div>
                                        </TableCell>
                                        <TableCell>{format_usd(item.value)}</TableCell>
                                        <TableCell><StatusBadge status=item.status /></TableCell>
                                        <TableCell>
                                            <span class="table__cell--icon">{icon("map-pin")}{item.location.clone()}</span>
                                        </TableCell>
                                        <TableCell>
                                            <div class="stock-bar">
                                                <div
                                                    class=format!("stock-bar__fill {}", level.css_class())
                                                    style=format!("width: {:.0}%;", fill)
                                                ></div>
                                            </div>
                                            <div class="stock-bar__legend table__cell--muted">
                                                <span>{format!("Min: {}", item.min_stock)}</span>
                                                <span>{format!("Max: {}", item.max_stock)}</span>
                                            </div>
                                            {level.warning().map(|text| view! {
                                                <div class="stock-bar__warning">{icon("alert-triangle")}{text}</div>
                                            })}
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
        for item in seed::inventory_items() {
            assert_eq!(item.to_csv_row().len(), InventoryItem::headers().len());
        }
    }

    #[test]
    fn test_category_filter_from_select() {
        let owner = Owner::new();
        owner.set();
        let state = state::create_state();
        assert!(!state.category_filter().is_active());
        let first = seed::inventory_items()[0].category.clone();
        state.category.set(first.clone());
        assert!(state.category_filter().matches(&first));
        assert!(!state.category_filter().matches(&"Nonexistent".to_string()));
    }

    #[test]
    fn test_dropdown_options_parse_back() {
        let owner = Owner::new();
        owner.set();
        let state = state::create_state();
        for (code, _) in status_options::<StockStatus>() {
            state.status.set(code.clone());
            let expected = StockStatus::from_code(&code).unwrap();
            assert!(state.status_filter().matches(&expected), "{code}");
            assert!(state.status_filter().is_active());
        }
    }
}
