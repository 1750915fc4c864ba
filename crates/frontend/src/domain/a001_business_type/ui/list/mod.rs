use crate::domain::a001_business_type::api::fetch_business_types;
use crate::shared::api_utils::use_api_config;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    compare_text, filter_list, get_sort_indicator, sort_list, SearchInput, Searchable, Sortable,
};
use crate::system::auth::context::use_auth;
use contracts::domain::a001_business_type::aggregate::BusinessType;
use contracts::shared::collection::FetchOutcome;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct BusinessTypeRow {
    pub id: String,
    pub name: String,
    /// Без имени тип не попадает в фильтр категорий каталога
    pub has_name: bool,
}

impl From<BusinessType> for BusinessTypeRow {
    fn from(t: BusinessType) -> Self {
        let name = t.display_name().map(str::to_string);
        Self {
            id: t.id.to_string(),
            has_name: name.is_some(),
            name: name.unwrap_or_else(|| "—".to_string()),
        }
    }
}

impl Searchable for BusinessTypeRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter) || self.id.to_lowercase().contains(filter)
    }
}

impl Sortable for BusinessTypeRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => compare_text(&self.id, &other.id),
            "name" => compare_text(&self.name, &other.name),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BusinessTypeList() -> impl IntoView {
    let deps = StoredValue::new((use_api_config(), use_auth()));
    let (items, set_items) = signal::<Vec<BusinessTypeRow>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter, set_filter) = signal(String::new());
    let (sort_field, set_sort_field) = signal("name".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let load = move || {
        let (config, auth) = deps.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match fetch_business_types(&config, &auth).await {
                FetchOutcome::Loaded(collection) => {
                    set_items.try_set(collection.items.into_iter().map(Into::into).collect());
                    set_error.try_set(None);
                }
                // Предыдущий список остаётся на экране
                FetchOutcome::Failed(e) => {
                    set_error.try_set(Some(e.to_string()));
                }
            }
            set_loading.try_set(false);
        });
    };

    let visible = move || {
        let mut rows = filter_list(items.get(), &filter.get());
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get() == field {
                set_sort_ascending.update(|v| *v = !*v);
            } else {
                set_sort_field.set(field.to_string());
                set_sort_ascending.set(true);
            }
        }
    };

    load();

    view! {
        <div class="page">
            <PageHeader title="Типы бизнеса" count=Signal::derive(move || visible().len())>
                <SearchInput
                    value=filter
                    on_input=Callback::new(move |v: String| set_filter.set(v))
                />
                <button
                    class="button button--secondary"
                    on:click=move |_| load()
                    disabled=move || loading.get()
                >
                    {icon("refresh")}
                    {move || if loading.get() { "Загрузка..." } else { "Обновить" }}
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{format!("Не удалось загрузить типы бизнеса: {}", e)}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("id")>
                                {move || format!("ID{}", get_sort_indicator(&sort_field.get(), "id", sort_ascending.get()))}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                {move || format!("Наименование{}", get_sort_indicator(&sort_field.get(), "name", sort_ascending.get()))}
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|row| view! {
                            <tr class="table__row" class:table__row--muted=!row.has_name>
                                <td class="table__cell"><code>{row.id}</code></td>
                                <td class="table__cell">{row.name}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityId;

    #[test]
    fn test_row_from_unnamed_type() {
        let row = BusinessTypeRow::from(BusinessType {
            id: EntityId::from("4"),
            name: Some("  ".to_string()),
        });
        assert_eq!(row.id, "4");
        assert_eq!(row.name, "—");
        assert!(!row.has_name);
    }

    #[test]
    fn test_filter_matches_name_or_id() {
        let rows = vec![
            BusinessTypeRow::from(BusinessType {
                id: EntityId::from("101"),
                name: Some("Retail".to_string()),
            }),
            BusinessTypeRow::from(BusinessType {
                id: EntityId::from("7"),
                name: Some("Cafe".to_string()),
            }),
        ];
        assert_eq!(filter_list(rows.clone(), "reta").len(), 1);
        assert_eq!(filter_list(rows, "101").len(), 1);
    }
}
