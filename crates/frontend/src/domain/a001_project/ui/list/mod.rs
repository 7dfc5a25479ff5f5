pub mod state;

use crate::layout::global_context::{scope_filter, AppGlobalContext};
use crate::layout::pages::AppPage;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date_range;
use crate::shared::export::CsvExportable;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    empty_row, list_title, status_options, ExportButton, FilterSelect, SearchInput,
};
use crate::shared::number_format::format_usd;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_project::{seed, Project, ProjectStatus};
use contracts::domain::common::StatusCode;
use contracts::shared::list_filter::ListQuery;
use contracts::shared::scope::ScopeContext;
use leptos::prelude::*;
use state::create_state;
use thaw::*;

impl CsvExportable for Project {
    fn headers() -> Vec<&'static str> {
        vec![
            "Project Name", "Business", "Status", "Progress", "Budget", "Start", "End", "Manager",
            "Team",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.business.clone(),
            self.status.display_name().to_string(),
            format!("{}%", self.progress),
            format!("{:.2}", self.budget),
            self.start_date.clone(),
            self.end_date.clone(),
            self.manager.clone(),
            self.team.to_string(),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProjectList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let scope = use_context::<ScopeContext>().expect("ScopeContext not found");
    let state = create_state();
    let rows = StoredValue::new(seed::projects());

    let visible = Signal::derive(move || {
        let status = state.status_filter();
        let query = ListQuery::new(state.search.get()).with_scope(scope_filter(&ctx, &scope));
        rows.with_value(|rows| {
            query
                .apply(rows, |p| status.matches(&p.status))
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <PageFrame
            page_id="a001_project--list"
            category=PAGE_CAT_LIST
            title=AppPage::Projects.title()
            description=AppPage::Projects.description()
        >
            <div class="list-toolbar">
                <div class="list-toolbar__filters">
                    <SearchInput
                        value=state.search
                        on_change=Callback::new(move |v| state.search.set(v))
                        placeholder="Search projects..."
                    />
                    <FilterSelect
                        value=state.status
                        all_label="All Status"
                        options={status_options::<ProjectStatus>()}
                    />
                </div>
                <div class="list-toolbar__actions">
                    <ExportButton rows=visible />
                </div>
            </div>

            <div class="list-card">
                <h2 class="list-card__title">
                    {move || list_title::<Project>(visible.with(|v| v.len()))}
                </h2>
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=200.0>"Project Name"</TableHeaderCell>
                            <TableHeaderCell>"Business"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Progress"</TableHeaderCell>
                            <TableHeaderCell>"Budget"</TableHeaderCell>
                            <TableHeaderCell min_width=180.0>"Timeline"</TableHeaderCell>
                            <TableHeaderCell>"Team"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let data = visible.get();
                            if data.is_empty() {
                                return empty_row(7, "No projects found");
                            }
                            data.into_iter().map(|project| {
                                let timeline = format_date_range(&project.start_date, &project.end_date);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <div class="table__cell--strong">{project.name.clone()}</div>
                                                <div class="table__cell--muted">{project.description.clone()}</div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>{project.business.clone()}</TableCell>
                                        <TableCell><StatusBadge status=project.status /></TableCell>
                                        <TableCell>
                                            <div class="progress">
                                                <div class="progress__track">
                                                    <div class="progress__bar" style=format!("width: {}%;", project.progress)></div>
                                                </div>
                                                <span class="progress__label">{format!("{}%", project.progress)}</span>
                                            </div>
                                        </TableCell>
                                        <TableCell>{format_usd(project.budget)}</TableCell>
                                        <TableCell>
                                            <span class="table__cell--icon">{icon("calendar")}{timeline}</span>
                                        </TableCell>
                                        <TableCell>
                                            <span class="table__cell--icon">{icon("users")}{format!("{} members", project.team)}</span>
                                            <div class="table__cell--muted">{project.manager.clone()}</div>
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
        for project in seed::projects() {
            assert_eq!(project.to_csv_row().len(), Project::headers().len());
        }
        let first = &seed::projects()[0];
        assert_eq!(first.to_csv_row()[3], format!("{}%", first.progress));
    }

    #[test]
    fn test_status_filter_parses_select_value() {
        let owner = Owner::new();
        owner.set();
        let state = state::create_state();
        assert!(!state.status_filter().is_active());
        state.status.set("on-hold".to_string());
        assert!(state.status_filter().matches(&ProjectStatus::OnHold));
        assert!(!state.status_filter().matches(&ProjectStatus::Active));
    }

    #[test]
    fn test_dropdown_options_parse_back() {
        let owner = Owner::new();
        owner.set();
        let state = state::create_state();
        for (code, _) in status_options::<ProjectStatus>() {
            state.status.set(code.clone());
            let expected = ProjectStatus::from_code(&code).unwrap();
            assert!(state.status_filter().matches(&expected), "{code}");
            assert!(state.status_filter().is_active());
        }
    }
}
