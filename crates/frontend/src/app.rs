use crate::layout::global_context::AppGlobalContext;
use crate::layout::MainLayout;
use contracts::shared::scope::ScopeContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let scope = match ScopeContext::embedded() {
        Ok(scope) => scope,
        Err(e) => {
            log::error!("Failed to load company hierarchy: {}", e);
            return view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{format!("Company hierarchy is not available: {e}")}</span>
                </div>
            }
            .into_any();
        }
    };

    let ctx = AppGlobalContext::new(scope.current());

    // Selection changes reach the reactive graph through this one subscriber
    let selected_scope = ctx.selected_scope;
    scope.subscribe(move |change| selected_scope.set(change.current.clone()));

    provide_context(ctx);
    provide_context(scope);

    view! { <MainLayout /> }.into_any()
}
