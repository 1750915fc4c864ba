/// Универсальные утилиты для работы со списками (поиск, сортировка, UI компоненты)
use leptos::prelude::*;
use std::cmp::Ordering;

/// Локальный фильтр включается только с этой длины запроса
pub const MIN_FILTER_LEN: usize = 3;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу (запрос уже в нижнем регистре)
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Активен ли фильтр с таким текстом
pub fn is_filter_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_FILTER_LEN
}

/// Фильтрует список по поисковому запросу (case-insensitive)
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if !is_filter_active(filter) {
        return items;
    }
    let needle = filter.trim().to_lowercase();
    items
        .into_iter()
        .filter(|item| item.matches_filter(&needle))
        .collect()
}

/// Сортирует список по указанному полю (стабильно)
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Регистронезависимое сравнение строк
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Поле поиска с кнопкой очистки
///
/// `on_input` получает каждое изменение. Если задан `on_commit`, он вызывается
/// по Enter, по кнопке поиска и после очистки: так поиск уходит на сервер
/// только по явному подтверждению.
#[component]
pub fn SearchInput(
    /// Текущее значение поля
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_input: Callback<String>,
    #[prop(optional)]
    on_commit: Option<Callback<()>>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        format!("Поиск (мин. {} символа)...", MIN_FILTER_LEN)
    } else {
        placeholder
    };

    let commit = move || {
        if let Some(on_commit) = on_commit {
            on_commit.run(());
        }
    };

    let clear = move |_| {
        on_input.run(String::new());
        commit();
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        commit();
                    }
                }
            />
            <Show when=move || !value.get().is_empty()>
                <button class="search-input__clear" title="Очистить" on:click=clear>
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
            {on_commit.map(|_| view! {
                <button class="button button--secondary" title="Найти" on:click=move |_| commit()>
                    {crate::shared::icons::icon("search")}
                </button>
            })}
        </div>
    }
}
