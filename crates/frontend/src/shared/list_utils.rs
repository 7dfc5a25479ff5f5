/// UI-утилиты для страниц списков: поиск с debounce, выпадающие фильтры
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use contracts::domain::common::{AggregateRoot, StatusCode};
use contracts::shared::list_filter::ALL_OPTION;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const DEBOUNCE_MS: u32 = 300;

/// Опции выпадающего списка статусов: (code, display name)
pub fn status_options<S: StatusCode>() -> Vec<(String, String)> {
    S::all()
        .iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect()
}

/// Опции из уже отобранных значений (категории), значение = подпись
pub fn value_options(values: Vec<String>) -> Vec<(String, String)> {
    values.into_iter().map(|v| (v.clone(), v)).collect()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние input до debounce
    let input_value = RwSignal::new(value.get_untracked());
    // Only the latest keystroke's timer may fire
    let generation = StoredValue::new(0_u64);

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();

        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_value() == current {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=move || !value.get().trim().is_empty()>
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Выпадающий фильтр; первая опция `"all"` снимает ограничение
#[component]
pub fn FilterSelect(
    value: RwSignal<String>,
    /// Подпись опции "all", например "All Status"
    #[prop(into)]
    all_label: String,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <div class="filter-select">
            <Select value=value>
                <option value=ALL_OPTION>{all_label}</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(code, label)| view! { <option value=code>{label}</option> })
                        .collect_view()
                }}
            </Select>
        </div>
    }
}

/// Имя файла выгрузки: "a001_project.csv"
pub fn export_filename<T: AggregateRoot>() -> String {
    format!("{}.csv", T::full_name())
}

/// Заголовок карточки списка с количеством строк
pub fn list_title<T: AggregateRoot>(count: usize) -> String {
    format!("{} ({})", T::list_name(), count)
}

/// Выгрузка видимых строк в CSV
#[component]
pub fn ExportButton<T>(#[prop(into)] rows: Signal<Vec<T>>) -> impl IntoView
where
    T: CsvExportable + AggregateRoot + Clone + Send + Sync + 'static,
{
    let on_export = move |_| {
        let data = rows.get_untracked();
        let filename = export_filename::<T>();
        if let Err(e) = export_to_csv(&data, &filename) {
            log::warn!("export of {} failed: {}", filename, e);
        }
    };

    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            size=ButtonSize::Small
            on_click=on_export
            disabled=Signal::derive(move || rows.with(|r| r.is_empty()))
        >
            {icon("download")}
            " Export"
        </Button>
    }
}

/// Строка-заглушка для пустой таблицы
pub fn empty_row(colspan: u32, text: &'static str) -> AnyView {
    view! {
        <TableRow>
            <TableCell attr:colspan=colspan.to_string()>
                <TableCellLayout>
                    <span class="table__cell--muted">{text}</span>
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_project::{Project, ProjectStatus};
    use contracts::domain::a005_transaction::Transaction;

    #[test]
    fn test_status_options_follow_enum_order() {
        let options = status_options::<ProjectStatus>();
        assert_eq!(options.len(), ProjectStatus::all().len());
        assert_eq!(options[0].0, ProjectStatus::all()[0].code());
        assert!(options.iter().any(|(code, _)| code == "on-hold"));
    }

    #[test]
    fn test_value_options() {
        let options = value_options(vec!["Equipment".into(), "Supplies".into()]);
        assert_eq!(
            options,
            vec![
                ("Equipment".to_string(), "Equipment".to_string()),
                ("Supplies".to_string(), "Supplies".to_string())
            ]
        );
    }

    #[test]
    fn test_export_filename_and_title() {
        assert_eq!(export_filename::<Project>(), "a001_project.csv");
        assert_eq!(export_filename::<Transaction>(), "a005_transaction.csv");
        assert_eq!(list_title::<Project>(3), "Projects (3)");
        assert_eq!(list_title::<Transaction>(0), "Transactions (0)");
    }
}
