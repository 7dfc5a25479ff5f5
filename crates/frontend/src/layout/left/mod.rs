pub mod sidebar;

pub use sidebar::Sidebar;

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Левая панель; скрывается кнопкой в шапке
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <aside
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--collapsed=move || !ctx.left_open.get()
            aria-hidden=move || (!ctx.left_open.get()).to_string()
        >
            {children()}
        </aside>
    }
}
