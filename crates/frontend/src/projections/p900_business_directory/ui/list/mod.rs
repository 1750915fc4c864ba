use crate::domain::a001_business_type::api::fetch_business_types;
use crate::domain::a002_feature_type::api::fetch_feature_types;
use crate::domain::a003_business::api::fetch_businesses;
use crate::projections::p900_business_directory::state::{
    create_state, BusinessRequest, DirectoryState, FetchApplied,
};
use crate::shared::api_utils::use_api_config;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::export::{export_to_excel, ExcelExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::system::auth::context::use_auth;
use contracts::domain::a003_business::status::BusinessStatus;
use contracts::projections::p900_business_directory::{
    DirectoryRow, ResolvedLabel, SortOption, StatusFilter,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

impl ExcelExportable for DirectoryRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Наименование",
            "Адрес",
            "Типы бизнеса",
            "Признаки доступности",
            "Статус",
            "Активен",
            "Заблокирован",
            "Создан",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.address.clone(),
            self.type_names().join(", "),
            self.feature_names().join(", "),
            self.status.label().to_string(),
            yes_no(self.active).to_string(),
            yes_no(self.blocked).to_string(),
            format_datetime(self.created_at),
        ]
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Да"
    } else {
        "Нет"
    }
}

fn label_badges(labels: Vec<ResolvedLabel>) -> impl IntoView {
    labels
        .into_iter()
        .map(|label| {
            let resolved = label.is_resolved();
            view! {
                <span class="badge" class:badge--muted=!resolved>{label.text}</span>
            }
        })
        .collect_view()
}

#[component]
#[allow(non_snake_case)]
pub fn BusinessDirectoryList() -> impl IntoView {
    let state = create_state();
    let deps = StoredValue::new((use_api_config(), use_auth()));
    let (export_error, set_export_error) = signal::<Option<String>>(None);

    // Загрузка списка бизнесов по выданному билету
    let run_business_fetch = move |request: BusinessRequest| {
        let (config, auth) = deps.get_value();
        spawn_local(async move {
            let outcome = fetch_businesses(&config, &auth, request.search.as_deref()).await;
            match state.try_update(|s| s.complete_business_fetch(request.ticket, outcome)) {
                Some(FetchApplied::Applied) => {}
                Some(FetchApplied::Stale) => {
                    log::debug!("Discarded stale business list response {:?}", request.ticket)
                }
                Some(FetchApplied::Disposed) | None => {
                    log::debug!("Business directory closed, response ignored")
                }
            }
        });
    };

    let load_references = move || {
        let (config, auth) = deps.get_value();
        let feature_deps = (config.clone(), auth.clone());
        spawn_local(async move {
            let outcome = fetch_business_types(&config, &auth).await;
            state.try_update(|s| s.apply_business_types(outcome));
        });
        spawn_local(async move {
            let (config, auth) = feature_deps;
            let outcome = fetch_feature_types(&config, &auth).await;
            state.try_update(|s| s.apply_feature_types(outcome));
        });
    };

    let refresh = move || {
        if let Some(request) = state.try_update(DirectoryState::refresh) {
            run_business_fetch(request);
        }
    };

    let commit_search = move || {
        if let Some(Some(request)) = state.try_update(DirectoryState::commit_search) {
            run_business_fetch(request);
        }
    };

    on_cleanup(move || {
        state.try_update_untracked(DirectoryState::teardown);
    });

    // Проекция пересчитывается только при смене её входов, а не на каждый ввод в поиск
    let revision = Memo::new(move |_| state.with(|s| s.projection_revision()));
    let rows = Memo::new(move |_| {
        revision.track();
        state.with_untracked(|s| s.rows())
    });
    let loading = Signal::derive(move || state.with(|s| s.is_loading()));

    let on_export = move |_| {
        let data = rows.get_untracked();
        let filename = format!(
            "businesses_{}.csv",
            chrono::Utc::now().format("%Y%m%d_%H%M")
        );
        match export_to_excel(&data, &filename) {
            Ok(()) => set_export_error.set(None),
            Err(e) => {
                log::warn!("CSV export failed: {}", e);
                set_export_error.set(Some(e));
            }
        }
    };

    load_references();
    refresh();

    view! {
        <div class="page">
            <PageHeader title="Каталог бизнесов" count=Signal::derive(move || rows.with(Vec::len))>
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.view.search_term.clone()))
                    on_input=Callback::new(move |v: String| state.update(|s| s.set_search_term(v)))
                    on_commit=Callback::new(move |_| commit_search())
                    placeholder="Поиск по названию (Enter)"
                />
                <button
                    class="button button--secondary"
                    on:click=move |_| refresh()
                    disabled=move || loading.get()
                >
                    {icon("refresh")}
                    {move || if loading.get() { "Загрузка..." } else { "Обновить" }}
                </button>
                <button
                    class="button button--secondary"
                    on:click=on_export
                    disabled=move || rows.with(Vec::is_empty)
                >
                    {icon("download")}
                    "Excel (CSV)"
                </button>
            </PageHeader>

            <div class="filter-panel">
                <label class="filter-panel__field">
                    <span class="filter-panel__label">"Категория"</span>
                    <select
                        class="filter-panel__select"
                        prop:value=move || state.with(|s| {
                            s.view.selected_category_id.as_ref().map(|id| id.to_string()).unwrap_or_default()
                        })
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.set_selected_category_id(&value));
                        }
                    >
                        <option value="">"Все категории"</option>
                        {move || {
                            revision.track();
                            state
                                .with_untracked(|s| s.category_options())
                                .into_iter()
                                .map(|(id, name)| view! { <option value=id.to_string()>{name}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>

                <label class="filter-panel__field">
                    <span class="filter-panel__label">"Сортировка"</span>
                    <select
                        class="filter-panel__select"
                        prop:value=move || state.with(|s| s.view.sort_option.as_str())
                        on:change=move |ev| {
                            let option = SortOption::parse(&event_target_value(&ev));
                            state.update(|s| s.set_sort_option(option));
                        }
                    >
                        {SortOption::ALL.into_iter().map(|option| view! {
                            <option value=option.as_str()>{option.label()}</option>
                        }).collect_view()}
                    </select>
                </label>

                <label class="filter-panel__field">
                    <span class="filter-panel__label">"Статус"</span>
                    <select
                        class="filter-panel__select"
                        prop:value=move || state.with(|s| s.view.status_filter.as_str())
                        on:change=move |ev| {
                            let filter = StatusFilter::parse(&event_target_value(&ev));
                            state.update(|s| s.set_status_filter(filter));
                        }
                    >
                        <option value=StatusFilter::All.as_str()>
                            {move || {
                                revision.track();
                                format!("Все ({})", state.with_untracked(|s| s.businesses().len()))
                            }}
                        </option>
                        {BusinessStatus::ALL.into_iter().map(|status| view! {
                            <option value=status.as_str()>
                                {move || {
                                    revision.track();
                                    let count = state.with_untracked(|s| s.status_counts().get(&status).copied().unwrap_or(0));
                                    format!("{} ({})", status.label(), count)
                                }}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
            </div>

            {move || state.with(|s| s.refresh_error().map(str::to_string)).map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">
                        {format!("Не удалось обновить список, показаны последние загруженные данные. {}", e)}
                    </span>
                </div>
            })}

            {move || state.with(|s| s.reference_errors()).into_iter().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{format!("Справочник не загружен ({}). Подписи показаны по id.", e)}</span>
                </div>
            }).collect_view()}

            {move || export_error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Логотип"</th>
                            <th class="table__header-cell">"Наименование"</th>
                            <th class="table__header-cell">"Типы бизнеса"</th>
                            <th class="table__header-cell">"Признаки доступности"</th>
                            <th class="table__header-cell">"Статус"</th>
                            <th class="table__header-cell">"Создан"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| {
                            let status_class = format!("badge badge--status-{}", row.status.as_str());
                            view! {
                                <tr class="table__row" class:table__row--muted=!row.active>
                                    <td class="table__cell">
                                        {match row.logo_url {
                                            Some(url) => view! { <img class="table__logo" src=url alt="" /> }.into_any(),
                                            None => view! { <span class="table__logo table__logo--empty">{icon("building")}</span> }.into_any(),
                                        }}
                                    </td>
                                    <td class="table__cell">
                                        <div class="table__title">{row.name}</div>
                                        <div class="table__subtitle">{row.address}</div>
                                    </td>
                                    <td class="table__cell">{label_badges(row.type_labels)}</td>
                                    <td class="table__cell">{label_badges(row.feature_labels)}</td>
                                    <td class="table__cell">
                                        <span class=status_class>{row.status.label()}</span>
                                    </td>
                                    <td class="table__cell" title=format_datetime(row.created_at)>
                                        {format_date(row.created_at)}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>

                <Show when=move || rows.with(Vec::is_empty)>
                    <div class="table__empty">
                        {move || {
                            if state.with(|s| !s.has_loaded()) {
                                if loading.get() { "Загрузка..." } else { "Список не загружен" }
                            } else {
                                "Ничего не найдено"
                            }
                        }}
                    </div>
                </Show>
            </div>
        </div>
    }
}
