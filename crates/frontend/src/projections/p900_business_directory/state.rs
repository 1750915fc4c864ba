//! Состояние страницы каталога бизнесов.
//!
//! Два независимых триггера:
//! - смена категории, сортировки или статуса только пересчитывает проекцию,
//!   эти сеттеры не возвращают запроса и не могут вызвать загрузку;
//! - подтверждение поиска (`commit_search`) выдаёт [`BusinessRequest`] на
//!   новую загрузку списка бизнесов.
//!
//! Каждый запрос несёт номер поколения. Ответ применяется, только если его
//! поколение последнее; после `teardown` никакие ответы не пишут в состояние.

use std::collections::BTreeMap;

use contracts::domain::a001_business_type::aggregate::BusinessType;
use contracts::domain::a002_feature_type::aggregate::FeatureType;
use contracts::domain::a003_business::aggregate::Business;
use contracts::domain::a003_business::status::BusinessStatus;
use contracts::domain::common::EntityId;
use contracts::projections::p900_business_directory::{
    category_options, project, status_counts, DirectoryRow, ReferenceMaps, SortOption,
    StatusFilter, ViewState,
};
use contracts::shared::collection::FetchOutcome;
use leptos::prelude::*;

/// Номер поколения запроса списка бизнесов
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Что и с каким билетом нужно загрузить
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessRequest {
    pub ticket: FetchTicket,
    pub search: Option<String>,
}

/// Чем закончилось применение ответа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchApplied {
    Applied,
    /// Ответ устарел: после него уже был выдан более новый запрос
    Stale,
    /// Страница уже закрыта
    Disposed,
}

#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    pub view: ViewState,
    businesses: Vec<Business>,
    business_types: Vec<BusinessType>,
    feature_types: Vec<FeatureType>,
    maps: ReferenceMaps,
    loading: bool,
    has_loaded: bool,
    refresh_error: Option<String>,
    business_types_error: Option<String>,
    feature_types_error: Option<String>,
    generation: u64,
    /// Растёт при каждом изменении, которое влияет на `rows()`
    projection_revision: u64,
    disposed: bool,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Локальные фильтры: только пересчёт проекции
    // ------------------------------------------------------------------

    /// Пустая строка снимает фильтр по категории
    pub fn set_selected_category_id(&mut self, value: &str) {
        self.view.selected_category_id = EntityId::from_selection(value);
        self.projection_revision += 1;
    }

    pub fn set_sort_option(&mut self, option: SortOption) {
        self.view.sort_option = option;
        self.projection_revision += 1;
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.view.status_filter = filter;
        self.projection_revision += 1;
    }

    /// Меняет только поле ввода; сеть и проекция не трогаются до `commit_search`
    pub fn set_search_term(&mut self, term: String) {
        self.view.search_term = term;
    }

    // ------------------------------------------------------------------
    // Загрузка списка бизнесов
    // ------------------------------------------------------------------

    /// Принять введённый поиск. Запрос выдаётся, только если принятое
    /// значение изменилось.
    pub fn commit_search(&mut self) -> Option<BusinessRequest> {
        let term = self.view.search_term.trim().to_string();
        if term == self.view.applied_search {
            return None;
        }
        self.view.applied_search = term;
        Some(self.begin_business_fetch())
    }

    /// Перезагрузить список с текущим принятым поиском
    pub fn refresh(&mut self) -> BusinessRequest {
        self.begin_business_fetch()
    }

    /// Новое поколение запроса; все ответы на предыдущие станут устаревшими
    pub fn begin_business_fetch(&mut self) -> BusinessRequest {
        self.generation += 1;
        self.loading = true;
        BusinessRequest {
            ticket: FetchTicket(self.generation),
            search: self.view.applied_search().map(str::to_string),
        }
    }

    /// Применить ответ на запрос `ticket`
    ///
    /// Успех заменяет коллекцию целиком. Ошибка оставляет последний успешно
    /// загруженный список и выставляет `refresh_error`.
    pub fn complete_business_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: FetchOutcome<Business>,
    ) -> FetchApplied {
        if self.disposed {
            return FetchApplied::Disposed;
        }
        if ticket != FetchTicket(self.generation) {
            return FetchApplied::Stale;
        }

        self.loading = false;
        match outcome {
            FetchOutcome::Loaded(collection) => {
                self.businesses = collection.items;
                self.has_loaded = true;
                self.projection_revision += 1;
                self.refresh_error = None;
            }
            FetchOutcome::Failed(e) => {
                self.refresh_error = Some(e.to_string());
            }
        }
        FetchApplied::Applied
    }

    // ------------------------------------------------------------------
    // Справочники
    // ------------------------------------------------------------------

    pub fn apply_business_types(&mut self, outcome: FetchOutcome<BusinessType>) -> FetchApplied {
        if self.disposed {
            return FetchApplied::Disposed;
        }
        match outcome {
            FetchOutcome::Loaded(collection) => {
                self.business_types = collection.items;
                self.business_types_error = None;
                self.rebuild_maps();
            }
            FetchOutcome::Failed(e) => self.business_types_error = Some(e.to_string()),
        }
        FetchApplied::Applied
    }

    pub fn apply_feature_types(&mut self, outcome: FetchOutcome<FeatureType>) -> FetchApplied {
        if self.disposed {
            return FetchApplied::Disposed;
        }
        match outcome {
            FetchOutcome::Loaded(collection) => {
                self.feature_types = collection.items;
                self.feature_types_error = None;
                self.rebuild_maps();
            }
            FetchOutcome::Failed(e) => self.feature_types_error = Some(e.to_string()),
        }
        FetchApplied::Applied
    }

    /// Карты всегда строятся заново из обоих текущих снимков
    fn rebuild_maps(&mut self) {
        self.maps = ReferenceMaps::build(&self.business_types, &self.feature_types);
        self.projection_revision += 1;
    }

    /// Страница закрыта: все последующие ответы игнорируются
    pub fn teardown(&mut self) {
        self.disposed = true;
        self.loading = false;
    }

    // ------------------------------------------------------------------
    // Чтение
    // ------------------------------------------------------------------

    pub fn rows(&self) -> Vec<DirectoryRow> {
        project(&self.businesses, &self.maps, &self.view)
    }

    pub fn category_options(&self) -> Vec<(EntityId, String)> {
        category_options(&self.maps)
    }

    pub fn status_counts(&self) -> BTreeMap<BusinessStatus, usize> {
        status_counts(&self.businesses)
    }

    /// Номер версии входов проекции; ввод в поле поиска его не меняет
    pub fn projection_revision(&self) -> u64 {
        self.projection_revision
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn maps(&self) -> &ReferenceMaps {
        &self.maps
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Ошибка последней перезагрузки (на экране остаётся прежний список)
    pub fn refresh_error(&self) -> Option<&str> {
        self.refresh_error.as_deref()
    }

    /// Ошибки загрузки справочников; подписи при этом берутся из запасных вариантов
    pub fn reference_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if let Some(e) = &self.business_types_error {
            errors.push(format!("Типы бизнеса: {}", e));
        }
        if let Some(e) = &self.feature_types_error {
            errors.push(format!("Признаки доступности: {}", e));
        }
        errors
    }
}

// Сигнал создаётся в области компонента и освобождается вместе с ним
pub fn create_state() -> RwSignal<DirectoryState> {
    RwSignal::new(DirectoryState::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::projections::p900_business_directory::LabelSource;
    use contracts::shared::collection::{Collection, FetchError};
    use serde_json::json;

    fn businesses(value: serde_json::Value) -> FetchOutcome<Business> {
        FetchOutcome::Loaded(Collection::new(serde_json::from_value(value).unwrap()))
    }

    fn names(state: &DirectoryState) -> Vec<String> {
        state.rows().into_iter().map(|r| r.name).collect()
    }

    fn loaded_state() -> DirectoryState {
        let mut state = DirectoryState::new();
        let request = state.begin_business_fetch();
        state.complete_business_fetch(
            request.ticket,
            businesses(json!([
                {"id": "1", "name": "Zeta", "linkedTypes": [{"business_type_id": "10"}]},
                {"id": "2", "name": "alpha", "business_status": "approved"},
                {"id": "3", "name": "Beta", "linkedTypes": [{"business_type_id": "10"}]}
            ])),
        );
        state
    }

    #[test]
    fn test_local_filters_do_not_issue_requests() {
        let mut state = loaded_state();
        let generation = state.generation;

        state.set_sort_option(SortOption::NameAsc);
        assert_eq!(names(&state), vec!["alpha", "Beta", "Zeta"]);

        state.set_selected_category_id("10");
        assert_eq!(names(&state), vec!["Beta", "Zeta"]);

        state.set_status_filter(StatusFilter::Only(BusinessStatus::Approved));
        assert!(state.rows().is_empty());

        state.set_selected_category_id("");
        assert_eq!(names(&state), vec!["alpha"]);

        state.set_search_term("cafe".to_string());
        assert_eq!(state.generation, generation);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_commit_search_issues_exactly_one_request() {
        let mut state = loaded_state();
        state.set_search_term("  cafe ".to_string());

        let request = state.commit_search().expect("new search must fetch");
        assert_eq!(request.search.as_deref(), Some("cafe"));
        assert_eq!(state.view.applied_search, "cafe");
        assert!(state.is_loading());

        // повторное подтверждение того же значения сеть не трогает
        assert_eq!(state.commit_search(), None);
    }

    #[test]
    fn test_clearing_search_fetches_unfiltered_list() {
        let mut state = loaded_state();
        state.set_search_term("cafe".to_string());
        state.commit_search();

        state.set_search_term(String::new());
        let request = state.commit_search().unwrap();
        assert_eq!(request.search, None);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = DirectoryState::new();
        state.set_search_term("first".to_string());
        let first = state.commit_search().unwrap();
        state.set_search_term("second".to_string());
        let second = state.commit_search().unwrap();

        let applied = state.complete_business_fetch(
            second.ticket,
            businesses(json!([{"id": "2", "name": "Second"}])),
        );
        assert_eq!(applied, FetchApplied::Applied);

        let late = state.complete_business_fetch(
            first.ticket,
            businesses(json!([{"id": "1", "name": "First"}])),
        );
        assert_eq!(late, FetchApplied::Stale);
        assert_eq!(names(&state), vec!["Second"]);
    }

    #[test]
    fn test_stale_response_does_not_clear_loading() {
        let mut state = DirectoryState::new();
        let first = state.begin_business_fetch();
        let _second = state.begin_business_fetch();

        state.complete_business_fetch(first.ticket, businesses(json!([])));
        assert!(state.is_loading());
        assert!(!state.has_loaded());
    }

    #[test]
    fn test_failed_refresh_keeps_last_good_list() {
        let mut state = loaded_state();
        let request = state.refresh();

        let applied = state.complete_business_fetch(
            request.ticket,
            FetchOutcome::Failed(FetchError::Http(502)),
        );
        assert_eq!(applied, FetchApplied::Applied);
        assert_eq!(state.businesses().len(), 3);
        assert_eq!(state.refresh_error(), Some("HTTP ошибка: 502"));
        assert!(!state.is_loading());

        let request = state.refresh();
        state.complete_business_fetch(request.ticket, businesses(json!([])));
        assert_eq!(state.refresh_error(), None);
        assert!(state.businesses().is_empty());
    }

    #[test]
    fn test_no_writes_after_teardown() {
        let mut state = DirectoryState::new();
        let request = state.begin_business_fetch();
        state.teardown();

        let applied = state.complete_business_fetch(
            request.ticket,
            businesses(json!([{"id": "1", "name": "Late"}])),
        );
        assert_eq!(applied, FetchApplied::Disposed);
        assert!(state.businesses().is_empty());

        let applied = state.apply_business_types(FetchOutcome::Loaded(Collection::new(vec![
            BusinessType {
                id: EntityId::from("1"),
                name: Some("Retail".to_string()),
            },
        ])));
        assert_eq!(applied, FetchApplied::Disposed);
        assert!(state.maps().business_types.is_empty());
        assert!(state.is_disposed());
    }

    #[test]
    fn test_reference_maps_arrive_after_businesses() {
        let mut state = loaded_state();
        let rows = state.rows();
        assert_eq!(rows[0].type_labels[0].source, LabelSource::RawId);

        state.apply_business_types(FetchOutcome::Loaded(Collection::new(vec![BusinessType {
            id: EntityId::from("10"),
            name: Some("Retail".to_string()),
        }])));
        let rows = state.rows();
        assert_eq!(rows[0].type_names(), vec!["Retail"]);
        assert_eq!(
            state.category_options(),
            vec![(EntityId::from("10"), "Retail".to_string())]
        );
    }

    #[test]
    fn test_reference_failure_keeps_previous_maps() {
        let mut state = DirectoryState::new();
        state.apply_business_types(FetchOutcome::Loaded(Collection::new(vec![BusinessType {
            id: EntityId::from("10"),
            name: Some("Retail".to_string()),
        }])));
        state.apply_business_types(FetchOutcome::Failed(FetchError::Network("offline".into())));

        assert_eq!(
            state.maps().business_type_name(&EntityId::from("10")),
            Some("Retail")
        );
        assert_eq!(state.reference_errors().len(), 1);

        state.apply_feature_types(FetchOutcome::Failed(FetchError::MissingField("items".into())));
        assert_eq!(state.reference_errors().len(), 2);
    }

    #[test]
    fn test_feature_reload_rebuilds_maps_wholesale() {
        let mut state = DirectoryState::new();
        let feature = |id: &str, title: &str| FeatureType {
            id: EntityId::from(id),
            title: Some(title.to_string()),
            slug: None,
        };
        state.apply_feature_types(FetchOutcome::Loaded(Collection::new(vec![feature("1", "Ramp")])));
        state.apply_feature_types(FetchOutcome::Loaded(Collection::new(vec![feature("2", "Lift")])));

        assert_eq!(state.maps().feature_title(&EntityId::from("1")), None);
        assert_eq!(state.maps().feature_title(&EntityId::from("2")), Some("Lift"));
    }

    #[test]
    fn test_reference_loads_never_touch_loading() {
        let retail = || {
            FetchOutcome::Loaded(Collection::new(vec![BusinessType {
                id: EntityId::from("10"),
                name: Some("Retail".to_string()),
            }]))
        };

        // без загрузки бизнесов
        let mut state = DirectoryState::new();
        state.apply_business_types(retail());
        state.apply_feature_types(FetchOutcome::Loaded(Collection::default()));
        assert!(!state.is_loading());
        state.apply_business_types(FetchOutcome::Failed(FetchError::Http(500)));
        state.apply_feature_types(FetchOutcome::Failed(FetchError::Http(500)));
        assert!(!state.is_loading());

        // пока запрос бизнесов в полёте
        let request = state.begin_business_fetch();
        state.apply_business_types(retail());
        assert!(state.is_loading());
        state.apply_feature_types(FetchOutcome::Loaded(Collection::default()));
        assert!(state.is_loading());
        state.apply_business_types(FetchOutcome::Failed(FetchError::Network("offline".into())));
        assert!(state.is_loading());
        state.apply_feature_types(FetchOutcome::Failed(FetchError::Http(503)));
        assert!(state.is_loading());

        state.complete_business_fetch(request.ticket, businesses(json!([])));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_typing_in_search_keeps_projection_revision() {
        let mut state = loaded_state();
        let revision = state.projection_revision();

        state.set_search_term("caf".to_string());
        state.set_search_term("cafe".to_string());
        assert_eq!(state.projection_revision(), revision);

        state.commit_search();
        assert_eq!(state.projection_revision(), revision);

        state.set_sort_option(SortOption::NameDesc);
        assert!(state.projection_revision() > revision);

        let revision = state.projection_revision();
        state.apply_feature_types(FetchOutcome::Loaded(Collection::default()));
        assert!(state.projection_revision() > revision);

        let revision = state.projection_revision();
        let request = state.refresh();
        state.complete_business_fetch(request.ticket, FetchOutcome::Failed(FetchError::Http(502)));
        assert_eq!(state.projection_revision(), revision);
    }

    #[test]
    fn test_status_counts_follow_loaded_collection() {
        let state = loaded_state();
        let counts = state.status_counts();
        assert_eq!(counts[&BusinessStatus::Pending], 2);
        assert_eq!(counts[&BusinessStatus::Approved], 1);
    }
}
