//! PageFrame: standard root wrapper for every page of the center area.
//!
//! Sets `id` (`"{entity}--{category}"`), `data-page-category` and the page
//! header (title + description) shared by all pages.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_project--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    description: String,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");

    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=base_class data-page-category=category>
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
                {(!description.is_empty()).then(|| view! {
                    <p class="page__description">{description}</p>
                })}
            </div>
            <div class="page__content">
                {children()}
            </div>
        </div>
    }
}
