//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the company selector and the
//! notification/settings/user buttons.

pub mod company_selector;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::AppPage;
use crate::shared::icons::icon;
use company_selector::CompanySelector;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Logistics ERP"</span>
            </div>

            <div class="top-header__center">
                <CompanySelector />
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" title="Notifications">
                    {icon("bell")}
                </button>

                <button
                    class="top-header__icon-btn"
                    title="Settings"
                    on:click=move |_| ctx.navigate(AppPage::Settings.key())
                >
                    {icon("settings")}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                </div>
            </div>
        </div>
    }
}
