use super::catalog::{
    business_options, report_sections, section_tabs, CatalogCard, CatalogSection, DATE_RANGES,
    DEFAULT_DATE_RANGE,
};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::AppPage;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::shared::list_filter::ALL_OPTION;
use contracts::shared::scope::ScopeContext;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ReportsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let scope = use_context::<ScopeContext>().expect("ScopeContext not found");
    let sections = StoredValue::new(report_sections());
    let selected_tab = RwSignal::new("operational".to_string());
    let date_range = RwSignal::new(DEFAULT_DATE_RANGE.to_string());
    let business = RwSignal::new(ALL_OPTION.to_string());

    // Только бизнесы выбранной в шапке компании
    let businesses = Signal::derive(move || {
        ctx.selected_scope
            .with(|selected| business_options(scope.registry(), selected))
    });

    // Смена компании сбрасывает выбранный бизнес
    Effect::new(move |prev: Option<()>| {
        ctx.selected_scope.track();
        if prev.is_some() {
            business.set(ALL_OPTION.to_string());
        }
    });

    view! {
        <PageFrame
            page_id="sys_reports--system"
            category=PAGE_CAT_SYSTEM
            title=AppPage::Reports.title()
            description=AppPage::Reports.description()
        >
            <div class="list-toolbar">
                <div class="list-toolbar__filters">
                    <div class="filter-select">
                        <Select value=date_range>
                            {DATE_RANGES
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </Select>
                    </div>
                    <div class="filter-select">
                        <Select value=business>
                            <option value=ALL_OPTION>"All Businesses"</option>
                            {move || {
                                businesses
                                    .get()
                                    .into_iter()
                                    .map(|(id, name)| view! { <option value=id>{name}</option> })
                                    .collect_view()
                            }}
                        </Select>
                    </div>
                </div>
                <div class="list-toolbar__actions">
                    <Button appearance=ButtonAppearance::Secondary size=ButtonSize::Small>
                        {icon("calendar")}
                        " Schedule"
                    </Button>
                </div>
            </div>

            <TabList selected_value=selected_tab>
                {sections
                    .with_value(|sections| section_tabs(sections))
                    .into_iter()
                    .map(|(code, label)| view! { <Tab value=code>{label}</Tab> })
                    .collect_view()}
            </TabList>

            <div class="catalog-grid">
                {move || {
                    let code = selected_tab.get();
                    sections.with_value(|sections| {
                        CatalogSection::find(sections, &code)
                            .map(|s| s.cards.iter().cloned().map(report_card).collect_view())
                    })
                }}
            </div>
        </PageFrame>
    }
}

fn report_card(card: CatalogCard) -> impl IntoView {
    let action = card.kind.map(|k| (k.action_icon(), k.action_label()));

    view! {
        <div class="catalog-card">
            <div class="catalog-card__header">
                <h3 class="catalog-card__title">{card.title}</h3>
                <div class="catalog-card__icon">{icon(card.icon)}</div>
            </div>
            <p class="catalog-card__description">{card.description}</p>
            <div class="catalog-card__actions">
                <Button appearance=ButtonAppearance::Secondary size=ButtonSize::Small>
                    {icon("calendar")}
                    " Schedule"
                </Button>
                {action.map(|(action_icon, label)| view! {
                    <Button appearance=ButtonAppearance::Primary size=ButtonSize::Small>
                        {icon(action_icon)}
                        {format!(" {}", label)}
                    </Button>
                })}
            </div>
        </div>
    }
}
