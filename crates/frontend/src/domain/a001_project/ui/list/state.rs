use contracts::domain::a001_project::ProjectStatus;
use contracts::domain::common::StatusCode;
use contracts::shared::list_filter::{ChoiceFilter, ALL_OPTION};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProjectListState {
    pub search: RwSignal<String>,
    /// Код статуса или "all"
    pub status: RwSignal<String>,
}

impl ProjectListState {
    pub fn status_filter(&self) -> ChoiceFilter<ProjectStatus> {
        self.status
            .with(|code| ChoiceFilter::parse_with(code, ProjectStatus::from_code))
    }
}

pub fn create_state() -> ProjectListState {
    ProjectListState {
        search: RwSignal::new(String::new()),
        status: RwSignal::new(ALL_OPTION.to_string()),
    }
}
