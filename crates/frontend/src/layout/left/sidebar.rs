//! Sidebar component with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::page_labels::page_label_for_key;
use crate::layout::pages::AppPage;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (key, label, icon)
}

fn group(
    page: AppPage,
    icon: &'static str,
    items: &[(&'static str, &'static str)],
) -> MenuGroup {
    MenuGroup {
        id: page.key(),
        label: page.title(),
        icon,
        items: items
            .iter()
            .map(|(key, icon)| (*key, page_label_for_key(key), *icon))
            .collect(),
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        group(AppPage::Dashboard, "layout-dashboard", &[]),
        group(
            AppPage::Projects,
            "folder",
            &[("projects", "folder"), ("projects/new", "plus"), ("projects/calendar", "calendar")],
        ),
        group(
            AppPage::Purchases,
            "shopping-cart",
            &[
                ("purchases/requirements", "clipboard"),
                ("purchases/orders", "file-text"),
                ("purchases/receptions", "package"),
            ],
        ),
        group(
            AppPage::Inventory,
            "package",
            &[
                ("inventory/stock", "package"),
                ("inventory/movements", "truck"),
                ("inventory/warehouses", "building"),
            ],
        ),
        group(AppPage::Suppliers, "truck", &[]),
        group(
            AppPage::Accounting,
            "calculator",
            &[
                ("accounting/transactions", "credit-card"),
                ("accounting/ledger", "file-text"),
                ("accounting/statements", "bar-chart"),
            ],
        ),
        group(
            AppPage::Reports,
            "bar-chart",
            &[
                ("reports/operational", "line-chart"),
                ("reports/management", "pie-chart"),
                ("reports/export", "download"),
            ],
        ),
        group(
            AppPage::Settings,
            "settings",
            &[
                ("settings/organization", "building"),
                ("settings/users", "users"),
                ("settings/system", "settings"),
            ],
        ),
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Группа активной страницы раскрыта при старте
    let initial_group = ctx.active.with_untracked(|key| AppPage::from_key(key).key().to_string());
    let expanded_groups = RwSignal::new(vec![initial_group]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let has_children = !group.items.is_empty();

                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let group_key = group.id;

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                !has_children && ctx.page().key() == group_key
                            }
                            style:padding-left="12px"
                            on:click=move |_| {
                                if has_children {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                } else {
                                    ctx.navigate(group_key);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| {
                                let gid_exp = group_id_for_exp.clone();
                                view! {
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                }
                            })}
                        </div>

                        {has_children.then(|| {
                            let gid_show = group_id.clone();
                            let items_stored = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&gid_show)>
                                    <div class="app-sidebar__children">
                                        {items_stored.get_value().into_iter().map(|(key, label, icon_name)| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || ctx.active.with(|a| a == key)
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.navigate(key)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_key_opens_its_group_page() {
        for group in get_menu_groups() {
            for (key, label, _) in &group.items {
                assert_eq!(AppPage::from_key(key).key(), group.id, "{key}");
                assert!(!label.is_empty());
            }
        }
    }

    #[test]
    fn test_menu_covers_every_page() {
        let ids: Vec<&str> = get_menu_groups().iter().map(|g| g.id).collect();
        for page in AppPage::all() {
            assert!(ids.contains(&page.key()), "{:?}", page);
        }
    }
}
