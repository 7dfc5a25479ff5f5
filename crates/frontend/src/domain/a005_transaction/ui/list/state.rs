use contracts::domain::a005_transaction::{TransactionStatus, TransactionType};
use contracts::domain::common::StatusCode;
use contracts::shared::list_filter::{ChoiceFilter, ALL_OPTION};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TransactionListState {
    pub search: RwSignal<String>,
    pub kind: RwSignal<String>,
    pub status: RwSignal<String>,
}

impl TransactionListState {
    pub fn kind_filter(&self) -> ChoiceFilter<TransactionType> {
        self.kind
            .with(|code| ChoiceFilter::parse_with(code, TransactionType::from_code))
    }

    pub fn status_filter(&self) -> ChoiceFilter<TransactionStatus> {
        self.status
            .with(|code| ChoiceFilter::parse_with(code, TransactionStatus::from_code))
    }
}

pub fn create_state() -> TransactionListState {
    TransactionListState {
        search: RwSignal::new(String::new()),
        kind: RwSignal::new(ALL_OPTION.to_string()),
        status: RwSignal::new(ALL_OPTION.to_string()),
    }
}
