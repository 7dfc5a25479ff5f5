use contracts::domain::a002_purchase_order::PurchaseOrderStatus;
use contracts::domain::common::StatusCode;
use contracts::shared::list_filter::{ChoiceFilter, ALL_OPTION};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PurchaseOrderListState {
    pub search: RwSignal<String>,
    pub status: RwSignal<String>,
}

impl PurchaseOrderListState {
    pub fn status_filter(&self) -> ChoiceFilter<PurchaseOrderStatus> {
        self.status
            .with(|code| ChoiceFilter::parse_with(code, PurchaseOrderStatus::from_code))
    }
}

pub fn create_state() -> PurchaseOrderListState {
    PurchaseOrderListState {
        search: RwSignal::new(String::new()),
        status: RwSignal::new(ALL_OPTION.to_string()),
    }
}
