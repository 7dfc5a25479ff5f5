use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::render_page;
use leptos::prelude::*;

/// Центральная область: страница активного пункта меню
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    // Подпункты одной страницы не пересоздают её
    let page = Memo::new(move |_| ctx.page());

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || render_page(page.get())}
        </div>
    }
}
