use super::catalog::{section_tabs, settings_sections, CatalogCard, CatalogSection};
use crate::layout::pages::AppPage;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn SettingsPage() -> impl IntoView {
    let sections = StoredValue::new(settings_sections());
    let selected_tab = RwSignal::new("organization".to_string());

    view! {
        <PageFrame
            page_id="sys_settings--system"
            category=PAGE_CAT_SYSTEM
            title=AppPage::Settings.title()
            description=AppPage::Settings.description()
        >
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
                            .map(|s| s.cards.iter().cloned().map(setting_card).collect_view())
                    })
                }}
            </div>
        </PageFrame>
    }
}

fn setting_card(card: CatalogCard) -> impl IntoView {
    view! {
        <div class="catalog-card">
            <div class="catalog-card__header">
                <h3 class="catalog-card__title">{card.title}</h3>
                <div class="catalog-card__icon">{icon(card.icon)}</div>
            </div>
            <p class="catalog-card__description">{card.description}</p>
            <div class="catalog-card__actions">
                <Button appearance=ButtonAppearance::Primary size=ButtonSize::Small>
                    "Configure"
                </Button>
            </div>
        </div>
    }
}
