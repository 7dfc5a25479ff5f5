pub mod state;

use crate::layout::global_context::{scope_filter, AppGlobalContext};
use crate::layout::pages::AppPage;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::export::CsvExportable;
use crate::shared::list_utils::{
    empty_row, list_title, status_options, ExportButton, FilterSelect, SearchInput,
};
use crate::shared::number_format::format_currency;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_transaction::{seed, Transaction, TransactionStatus, TransactionType};
use contracts::domain::common::StatusCode;
use contracts::shared::list_filter::ListQuery;
use contracts::shared::scope::ScopeContext;
use leptos::prelude::*;
use state::create_state;
use thaw::*;

impl CsvExportable for Transaction {
    fn headers() -> Vec<&'static str> {
        vec![
            "Transaction ID", "Date", "Description", "Type", "Amount", "Currency", "Status",
            "Reference", "Account", "Project", "Business",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.date.clone(),
            self.description.clone(),
            self.kind.display_name().to_string(),
            format!("{:.2}", self.signed_amount()),
            self.currency.clone(),
            self.status.display_name().to_string(),
            self.reference.clone(),
            self.account.clone(),
            self.project.clone(),
            self.business.clone(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TransactionList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let scope = use_context::<ScopeContext>().expect("ScopeContext not found");
    let state = create_state();
    let rows = StoredValue::new(seed::transactions());

    let visible = Signal::derive(move || {
        let kind = state.kind_filter();
        let status = state.status_filter();
        let query = ListQuery::new(state.search.get()).with_scope(scope_filter(&ctx, &scope));
        rows.with_value(|rows| {
            query
                .apply(rows, |t| kind.matches(&t.kind) && status.matches(&t.status))
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <PageFrame
            page_id="a005_transaction--list"
            category=PAGE_CAT_LIST
            title=AppPage::Accounting.title()
            description=AppPage::Accounting.description()
        >
            <div class="list-toolbar">
                <div class="list-toolbar__filters">
                    <SearchInput
                        value=state.search
                        on_change=Callback::new(move |v| state.search.set(v))
                        placeholder="Search transactions..."
                    />
                    <FilterSelect
                        value=state.kind
                        all_label="All Types"
                        options={status_options::<TransactionType>()}
                    />
                    <FilterSelect
                        value=state.status
                        all_label="All Status"
                        options={status_options::<TransactionStatus>()}
                    />
                </div>
                <div class="list-toolbar__actions">
                    <ExportButton rows=visible />
                </div>
            </div>

            <div class="list-card">
                <h2 class="list-card__title">
                    {move || list_title::<Transaction>(visible.with(|v| v.len()))}
                </h2>
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=120.0>"Transaction ID"</TableHeaderCell>
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell min_width=200.0>"Description"</TableHeaderCell>
                            <TableHeaderCell>"Type"</TableHeaderCell>
                            <TableHeaderCell>"Amount"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Reference"</TableHeaderCell>
                            <TableHeaderCell>"Business"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let data = visible.get();
                            if data.is_empty() {
                                return empty_row(8, "No transactions found");
                            }
                            data.into_iter().map(|trx| {
                                let amount = format!(
                                    "{}{}",
                                    trx.kind.sign(),
                                    format_currency(trx.amount, &trx.currency, 2)
                                );
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <span class="table__cell--strong">{trx.id.clone()}</span>
                                        </TableCell>
                                        <TableCell>{format_date(&trx.date)}</TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <div>{trx.description.clone()}</div>
                                                <div class="table__cell--muted">{trx.account.clone()}</div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><StatusBadge status=trx.kind /></TableCell>
                                        <TableCell>
                                            <span class=format!("amount {}", trx.kind.amount_class())>{amount}</span>
                                        </TableCell>
                                        <TableCell><StatusBadge status=trx.status /></TableCell>
                                        <TableCell>{trx.reference.clone()}</TableCell>
                                        <TableCell>{trx.business.clone()}</TableCell>
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
    fn test_csv_amount_is_signed() {
        let rows = seed::transactions();
        let expense = rows
            .iter()
            .find(|t| t.kind == TransactionType::Expense)
            .unwrap();
        let row = expense.to_csv_row();
        assert_eq!(row.len(), Transaction::headers().len());
        assert!(row[4].starts_with('-'));
    }

    #[test]
    fn test_kind_and_status_filters() {
        let owner = Owner::new();
        owner.set();
        let state = state::create_state();
        state.kind.set("income".to_string());
        state.status.set("bogus".to_string());
        assert!(state.kind_filter().matches(&TransactionType::Income));
        assert!(!state.kind_filter().matches(&TransactionType::Expense));
        // неизвестный код не фильтрует
        assert!(!state.status_filter().is_active());
    }

    #[test]
    fn test_dropdown_options_parse_back() {
        let owner = Owner::new();
        owner.set();
        let state = state::create_state();
        for (code, _) in status_options::<TransactionType>() {
            state.kind.set(code.clone());
            let expected = TransactionType::from_code(&code).unwrap();
            assert!(state.kind_filter().matches(&expected), "{code}");
            assert!(state.kind_filter().is_active());
        }
        for (code, _) in status_options::<TransactionStatus>() {
            state.status.set(code.clone());
            let expected = TransactionStatus::from_code(&code).unwrap();
            assert!(state.status_filter().matches(&expected), "{code}");
            assert!(state.status_filter().is_active());
        }
    }
}
