use contracts::domain::a003_inventory_item::StockStatus;
use contracts::domain::common::StatusCode;
use contracts::shared::list_filter::{ChoiceFilter, ALL_OPTION};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct InventoryListState {
    pub search: RwSignal<String>,
    pub category: RwSignal<String>,
    pub status: RwSignal<String>,
}

impl InventoryListState {
    pub fn category_filter(&self) -> ChoiceFilter<String> {
        self.category.with(|value| ChoiceFilter::from_option(value))
    }

    pub fn status_filter(&self) -> ChoiceFilter<StockStatus> {
        self.status
            .with(|code| ChoiceFilter::parse_with(code, StockStatus::from_code))
    }
}

pub fn create_state() -> InventoryListState {
    InventoryListState {
        search: RwSignal::new(String::new()),
        category: RwSignal::new(ALL_OPTION.to_string()),
        status: RwSignal::new(ALL_OPTION.to_string()),
    }
}
