use contracts::shared::badge::{BadgeVariant, HasBadge};
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    #[prop(optional)]
    variant: BadgeVariant,
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant.css_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Status badge: label and variant come from the status value
#[component]
pub fn StatusBadge<S>(status: S) -> impl IntoView
where
    S: HasBadge + 'static,
{
    let variant = status.badge_variant();
    let label = status.badge_label();

    view! { <Badge variant=variant>{label}</Badge> }
}
