use crate::domain::a002_feature_type::api::fetch_feature_types;
use crate::shared::api_utils::use_api_config;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    compare_text, filter_list, get_sort_indicator, sort_list, SearchInput, Searchable, Sortable,
};
use crate::system::auth::context::use_auth;
use contracts::domain::a002_feature_type::aggregate::FeatureType;
use contracts::shared::collection::FetchOutcome;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct FeatureTypeRow {
    pub id: String,
    pub title: String,
    pub slug: String,
}

impl From<FeatureType> for FeatureTypeRow {
    fn from(f: FeatureType) -> Self {
        Self {
            id: f.id.to_string(),
            title: f.display_title().unwrap_or("—").to_string(),
            slug: f
                .slug
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

impl Searchable for FeatureTypeRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.title.to_lowercase().contains(filter) || self.slug.to_lowercase().contains(filter)
    }
}

impl Sortable for FeatureTypeRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => compare_text(&self.title, &other.title),
            "slug" => compare_text(&self.slug, &other.slug),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn FeatureTypeList() -> impl IntoView {
    let deps = StoredValue::new((use_api_config(), use_auth()));
    let (items, set_items) = signal::<Vec<FeatureTypeRow>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter, set_filter) = signal(String::new());
    let (sort_field, set_sort_field) = signal("title".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let load = move || {
        let (config, auth) = deps.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match fetch_feature_types(&config, &auth).await {
                FetchOutcome::Loaded(collection) => {
                    set_items.try_set(collection.items.into_iter().map(Into::into).collect());
                    set_error.try_set(None);
                }
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
            <PageHeader title="Признаки доступности" count=Signal::derive(move || visible().len())>
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
                    <span class="warning-box__text">{format!("Не удалось загрузить признаки доступности: {}", e)}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"ID"</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("title")>
                                {move || format!("Наименование{}", get_sort_indicator(&sort_field.get(), "title", sort_ascending.get()))}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("slug")>
                                {move || format!("Slug{}", get_sort_indicator(&sort_field.get(), "slug", sort_ascending.get()))}
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|row| view! {
                            <tr class="table__row">
                                <td class="table__cell"><code>{row.id}</code></td>
                                <td class="table__cell">{row.title}</td>
                                <td class="table__cell"><code>{row.slug}</code></td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
