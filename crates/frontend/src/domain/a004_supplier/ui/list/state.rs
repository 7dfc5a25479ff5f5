use contracts::domain::a004_supplier::SupplierStatus;
use contracts::domain::common::StatusCode;
use contracts::shared::list_filter::{ChoiceFilter, ALL_OPTION};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SupplierListState {
    pub search: RwSignal<String>,
    pub category: RwSignal<String>,
    pub status: RwSignal<String>,
}

impl SupplierListState {
    pub fn category_filter(&self) -> ChoiceFilter<String> {
        self.category.with(|value| ChoiceFilter::from_option(value))
    }

    pub fn status_filter(&self) -> ChoiceFilter<SupplierStatus> {
        self.status
            .with(|code| ChoiceFilter::parse_with(code, SupplierStatus::from_code))
    }
}

pub fn create_state() -> SupplierListState {
    SupplierListState {
        search: RwSignal::new(String::new()),
        category: RwSignal::new(ALL_OPTION.to_string()),
        status: RwSignal::new(ALL_OPTION.to_string()),
    }
}
