pub mod center;
pub mod global_context;
pub mod left;
pub mod pages;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |          (Center)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the layout is created
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <left::Sidebar /> }.into_any()
            center=|| view! { <center::Center /> }.into_any()
        />
    }
}
