//! Выбор компании в шапке: группа → бизнес → проект

use crate::layout::global_context::{select_scope, AppGlobalContext};
use crate::shared::icons::icon;
use contracts::shared::scope::{ScopeContext, ScopeRegistry, UnitId, UnitKind};
use leptos::prelude::*;

/// Row of the selector popover
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorEntry {
    pub id: UnitId,
    pub name: String,
    pub kind: Option<UnitKind>,
}

impl SelectorEntry {
    /// Отступ строки по уровню иерархии
    pub fn indent(&self) -> usize {
        self.kind.map(|k| k.depth()).unwrap_or(0)
    }
}

pub fn kind_icon(kind: Option<UnitKind>) -> &'static str {
    match kind {
        Some(UnitKind::Group) => "building",
        Some(UnitKind::Business) => "briefcase",
        Some(UnitKind::Project) => "folder",
        None => "globe",
    }
}

/// "All Companies" first, then the grouped view flattened in render order
pub fn selector_entries(registry: &ScopeRegistry) -> Vec<SelectorEntry> {
    let mut entries = vec![SelectorEntry {
        id: UnitId::all(),
        name: "All Companies".to_string(),
        kind: None,
    }];
    for node in registry.grouped_view() {
        entries.extend(node.units().into_iter().map(|unit| SelectorEntry {
            id: unit.id.clone(),
            name: unit.name.clone(),
            kind: Some(unit.kind),
        }));
    }
    entries
}

/// Подсказка для кнопки: путь от группы до выбранной единицы
pub fn scope_path_label(registry: &ScopeRegistry, id: &UnitId) -> String {
    if id.is_all() {
        return "All Companies".to_string();
    }
    registry
        .path_to(id)
        .iter()
        .map(|u| u.name.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}

#[component]
pub fn CompanySelector() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let scope = use_context::<ScopeContext>().expect("ScopeContext not found");

    let is_open = RwSignal::new(false);
    let entries = StoredValue::new(selector_entries(scope.registry()));

    let scope_for_title = scope.clone();
    let trigger_title = move || {
        ctx.selected_scope
            .with(|id| scope_path_label(scope_for_title.registry(), id))
    };

    let current_entry = move || {
        let selected = ctx.selected_scope.get();
        entries.with_value(|all| all.iter().find(|e| e.id == selected).cloned())
    };

    view! {
        <div class="company-selector">
            <button
                class="company-selector__trigger"
                title=trigger_title
                on:click=move |_| is_open.update(|v| *v = !*v)
            >
                {move || match current_entry() {
                    Some(entry) => view! {
                        <>
                            {icon(kind_icon(entry.kind))}
                            <span class="company-selector__name">{entry.name}</span>
                        </>
                    }.into_any(),
                    None => view! {
                        <span class="company-selector__name">"Select Company"</span>
                    }.into_any(),
                }}
                {icon("chevron-down")}
            </button>

            <Show when=move || is_open.get()>
                <div class="company-selector__popover">
                    {entries.get_value().into_iter().map(|entry| {
                        let scope = scope.clone();
                        let id = entry.id.clone();
                        let id_for_active = entry.id.clone();
                        let padding = format!("{}px", 12 + entry.indent() * 16);
                        view! {
                            <div
                                class="company-selector__item"
                                class:company-selector__item--selected=move || ctx.selected_scope.with(|s| *s == id_for_active)
                                style:padding-left=padding
                                on:click=move |_| {
                                    select_scope(&scope, &id);
                                    is_open.set(false);
                                }
                            >
                                {icon(kind_icon(entry.kind))}
                                <span class="company-selector__item-name">{entry.name.clone()}</span>
                                <Show when={
                                    let id = entry.id.clone();
                                    move || ctx.selected_scope.with(|s| *s == id)
                                }>
                                    <span class="company-selector__check">{icon("check")}</span>
                                </Show>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::scope::ScopeConfig;

    #[test]
    fn test_entries_follow_grouped_view() {
        let (registry, _, _) = ScopeConfig::embedded().unwrap().build().unwrap();
        let entries = selector_entries(&registry);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "all",
                "group-1",
                "business-1",
                "project-1",
                "project-2",
                "business-2",
                "project-3",
                "group-2",
                "business-3",
            ]
        );
        assert_eq!(entries[0].indent(), 0);
        assert_eq!(entries[1].indent(), 0);
        assert_eq!(entries[2].indent(), 1);
        assert_eq!(entries[3].indent(), 2);
    }

    #[test]
    fn test_kind_icons_are_distinct() {
        assert_ne!(kind_icon(Some(UnitKind::Group)), kind_icon(Some(UnitKind::Business)));
        assert_ne!(kind_icon(Some(UnitKind::Business)), kind_icon(Some(UnitKind::Project)));
        assert_eq!(kind_icon(None), "globe");
    }

    #[test]
    fn test_scope_path_label() {
        let (registry, _, _) = ScopeConfig::embedded().unwrap().build().unwrap();
        assert_eq!(
            scope_path_label(&registry, &UnitId::from("project-1")),
            "Grupo Logística Global / Logística Norte / Proyecto Distribución A"
        );
        assert_eq!(scope_path_label(&registry, &UnitId::from("group-2")), "Grupo Transportes Unidos");
        assert_eq!(scope_path_label(&registry, &UnitId::all()), "All Companies");
        assert_eq!(scope_path_label(&registry, &UnitId::from("missing")), "");
    }
}
