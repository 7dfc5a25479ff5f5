use crate::layout::pages::AppPage;
use contracts::shared::scope::{ScopeContext, ScopeFilter, UnitId};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Query string of the shell: `?active=purchases/orders`
#[derive(Debug, Default, Serialize, Deserialize)]
struct ShellQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active: Option<String>,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Ключ активного пункта меню
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
    /// Зеркало `ScopeContext::current()` для реактивного графа
    pub selected_scope: RwSignal<UnitId>,
}

impl AppGlobalContext {
    pub fn new(selected_scope: UnitId) -> Self {
        Self {
            active: RwSignal::new(AppPage::Dashboard.key().to_string()),
            left_open: RwSignal::new(true),
            selected_scope: RwSignal::new(selected_scope),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: ShellQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = query.active.filter(|k| !k.is_empty()) {
            self.navigate(&active_key);
        }

        let this = *self;
        Effect::new(move |_| {
            let query_string = serde_qs::to_string(&ShellQuery {
                active: Some(this.active.get()),
            })
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, key: &str) {
        leptos::logging::log!("🔷 navigate: key='{}' -> {:?}", key, AppPage::from_key(key));
        self.active.set(key.to_string());
    }

    /// Страница для активного ключа (реактивно)
    pub fn page(&self) -> AppPage {
        self.active.with(|key| AppPage::from_key(key))
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

/// Selects a unit through the shared `ScopeContext`; rejected ids are logged and ignored
pub fn select_scope(scope: &ScopeContext, id: &UnitId) {
    match scope.select(id) {
        Ok(true) => leptos::logging::log!("🏢 scope selected: '{}'", id),
        Ok(false) => {}
        Err(e) => log::warn!("scope selection ignored: {}", e),
    }
}

/// Scope predicate for the current selection; tracks `selected_scope`
pub fn scope_filter<'a>(ctx: &AppGlobalContext, scope: &'a ScopeContext) -> ScopeFilter<'a> {
    ScopeFilter::new(scope.registry(), ctx.selected_scope.get(), scope.mode())
}
