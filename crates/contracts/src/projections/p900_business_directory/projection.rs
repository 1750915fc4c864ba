//! Проекция каталога: фильтр по категории и статусу, сортировка, подписи.
//!
//! Поиск здесь не применяется: он уже выполнен сервером через `applied_search`,
//! состав загруженной коллекции принимается как есть.
//! Функции чистые: одинаковые входы всегда дают одинаковый упорядоченный результат.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::dto::DirectoryRow;
use super::labels::{resolve_feature_label, resolve_linked_type_label};
use super::reference_maps::ReferenceMaps;
use super::view_state::{SortOption, ViewState};
use crate::domain::a003_business::aggregate::Business;
use crate::domain::a003_business::status::BusinessStatus;
use crate::domain::common::EntityId;

pub fn project(businesses: &[Business], maps: &ReferenceMaps, state: &ViewState) -> Vec<DirectoryRow> {
    let mut retained: Vec<&Business> = businesses
        .iter()
        .filter(|b| {
            state
                .selected_category_id
                .as_ref()
                .map_or(true, |category| b.has_type(category))
        })
        .filter(|b| state.status_filter.matches(b.status()))
        .collect();

    // sort_by стабилен: при равенстве сохраняется серверный порядок
    match state.sort_option {
        SortOption::None => {}
        SortOption::NameAsc => retained.sort_by(|a, b| compare_names(a, b)),
        SortOption::NameDesc => retained.sort_by(|a, b| compare_names(b, a)),
        SortOption::CreatedAsc => {
            retained.sort_by(|a, b| compare_created(a.created_at, b.created_at, false))
        }
        SortOption::CreatedDesc => {
            retained.sort_by(|a, b| compare_created(a.created_at, b.created_at, true))
        }
    }

    retained.into_iter().map(|b| to_row(b, maps)).collect()
}

fn to_row(business: &Business, maps: &ReferenceMaps) -> DirectoryRow {
    DirectoryRow {
        id: business.id.clone(),
        name: business.name.trim().to_string(),
        address: business.address.trim().to_string(),
        logo_url: business.logo().map(str::to_string),
        type_labels: business
            .linked_types
            .iter()
            .map(|lt| resolve_linked_type_label(lt, &maps.business_types))
            .collect(),
        feature_labels: business
            .accessibility_features
            .iter()
            .map(|f| resolve_feature_label(f, &maps.features))
            .collect(),
        status: business.status(),
        active: business.active,
        blocked: business.blocked,
        created_at: business.created_at,
    }
}

fn compare_names(a: &Business, b: &Business) -> Ordering {
    a.name
        .trim()
        .to_lowercase()
        .cmp(&b.name.trim().to_lowercase())
}

/// Записи без даты всегда в конце, в обоих направлениях
fn compare_created(
    a: Option<DateTime<Utc>>,
    b: Option<DateTime<Utc>>,
    descending: bool,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Варианты фильтра по категории, отсортированные по названию
pub fn category_options(maps: &ReferenceMaps) -> Vec<(EntityId, String)> {
    let mut options: Vec<(EntityId, String)> = maps
        .business_types
        .iter()
        .map(|(id, name)| (id.clone(), name.clone()))
        .collect();
    options.sort_by(|a, b| a.1.to_lowercase().cmp(&b.1.to_lowercase()));
    options
}

/// Количество бизнесов в каждом статусе (для подписей фильтра)
pub fn status_counts(businesses: &[Business]) -> BTreeMap<BusinessStatus, usize> {
    let mut counts: BTreeMap<BusinessStatus, usize> =
        BusinessStatus::ALL.into_iter().map(|s| (s, 0)).collect();
    for business in businesses {
        *counts.entry(business.status()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_business_type::aggregate::BusinessType;
    use crate::projections::p900_business_directory::labels::LabelSource;
    use crate::projections::p900_business_directory::view_state::StatusFilter;
    use serde_json::json;

    fn business(value: serde_json::Value) -> Business {
        serde_json::from_value(value).unwrap()
    }

    fn named(names: &[&str]) -> Vec<Business> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| business(json!({"id": i.to_string(), "name": name})))
            .collect()
    }

    fn names(rows: &[DirectoryRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    fn sorted_by(option: SortOption) -> ViewState {
        ViewState {
            sort_option: option,
            ..ViewState::default()
        }
    }

    #[test]
    fn test_retail_scenario_uses_map_fallback() {
        let maps = ReferenceMaps::build(
            &[BusinessType {
                id: EntityId::from("1"),
                name: Some("Retail".to_string()),
            }],
            &[],
        );
        let businesses = vec![business(json!({
            "id": "b1",
            "name": "Acme",
            "linkedTypes": [{"id": "l1", "business_type_id": "1"}],
            "accessibilityFeatures": [],
            "active": true,
            "blocked": false,
            "created_at": "2024-01-01T00:00:00Z"
        }))];

        let rows = project(&businesses, &maps, &ViewState::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].type_names(), vec!["Retail"]);
        assert_eq!(rows[0].type_labels[0].source, LabelSource::ReferenceMap);
        assert!(rows[0].feature_labels.is_empty());
    }

    #[test]
    fn test_empty_maps_fall_back_gracefully() {
        let businesses = vec![business(json!({
            "id": "b1",
            "name": "Acme",
            "linkedTypes": [{"business_type_id": "1"}],
            "accessibilityFeatures": [{"label": "Ramp"}, {}]
        }))];
        let rows = project(&businesses, &ReferenceMaps::default(), &ViewState::default());
        assert_eq!(rows[0].type_names(), vec!["1"]);
        assert_eq!(rows[0].feature_names(), vec!["Ramp", "Unknown"]);
    }

    #[test]
    fn test_sort_name_asc_is_case_insensitive() {
        let rows = project(
            &named(&["Zeta", "alpha", "Beta"]),
            &ReferenceMaps::default(),
            &sorted_by(SortOption::NameAsc),
        );
        assert_eq!(names(&rows), vec!["alpha", "Beta", "Zeta"]);
    }

    #[test]
    fn test_sort_name_desc() {
        let rows = project(
            &named(&["Zeta", "alpha", "Beta"]),
            &ReferenceMaps::default(),
            &sorted_by(SortOption::NameDesc),
        );
        assert_eq!(names(&rows), vec!["Zeta", "Beta", "alpha"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let businesses = vec![
            business(json!({"id": "1", "name": "acme"})),
            business(json!({"id": "2", "name": "Acme"})),
            business(json!({"id": "3", "name": "ACME"})),
        ];
        for option in [SortOption::NameAsc, SortOption::NameDesc] {
            let rows = project(&businesses, &ReferenceMaps::default(), &sorted_by(option));
            let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids, vec!["1", "2", "3"]);
        }
    }

    #[test]
    fn test_sort_created() {
        let businesses = vec![
            business(json!({"id": "t2", "name": "b", "created_at": "2024-02-01T00:00:00Z"})),
            business(json!({"id": "none", "name": "x"})),
            business(json!({"id": "t3", "name": "c", "created_at": "2024-03-01 10:00:00"})),
            business(json!({"id": "t1", "name": "a", "created_at": "2024-01-01"})),
        ];
        let ids = |option| -> Vec<String> {
            project(&businesses, &ReferenceMaps::default(), &sorted_by(option))
                .into_iter()
                .map(|r| r.id.to_string())
                .collect()
        };
        assert_eq!(ids(SortOption::CreatedDesc), vec!["t3", "t2", "t1", "none"]);
        assert_eq!(ids(SortOption::CreatedAsc), vec!["t1", "t2", "t3", "none"]);
    }

    #[test]
    fn test_no_sort_keeps_server_order() {
        let rows = project(
            &named(&["Zeta", "alpha", "Beta"]),
            &ReferenceMaps::default(),
            &ViewState::default(),
        );
        assert_eq!(names(&rows), vec!["Zeta", "alpha", "Beta"]);
    }

    #[test]
    fn test_category_filter() {
        let businesses = vec![
            business(json!({"id": "b1", "linkedTypes": [{"business_type_id": "1"}]})),
            business(json!({"id": "b2", "linkedTypes": [{"business_type_id": 2}, {"business_type_id": "1"}]})),
            business(json!({"id": "b3", "linkedTypes": [{"business_type_id": "2"}]})),
            business(json!({"id": "b4"})),
        ];
        let state = ViewState {
            selected_category_id: Some(EntityId::from("2")),
            ..ViewState::default()
        };
        let rows = project(&businesses, &ReferenceMaps::default(), &state);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b2", "b3"]);

        let unfiltered = project(&businesses, &ReferenceMaps::default(), &ViewState::default());
        assert_eq!(unfiltered.len(), 4);
    }

    #[test]
    fn test_status_filter() {
        let businesses = vec![
            business(json!({"id": "blocked", "blocked": true, "business_status": "approved"})),
            business(json!({"id": "approved", "business_status": "approved", "active": true})),
            business(json!({"id": "new"})),
            business(json!({"id": "claimed", "business_status": "claimed"})),
        ];
        let ids_for = |status| -> Vec<String> {
            let state = ViewState {
                status_filter: StatusFilter::Only(status),
                ..ViewState::default()
            };
            project(&businesses, &ReferenceMaps::default(), &state)
                .into_iter()
                .map(|r| r.id.to_string())
                .collect()
        };
        assert_eq!(ids_for(BusinessStatus::Archived), vec!["blocked"]);
        assert_eq!(ids_for(BusinessStatus::Approved), vec!["approved"]);
        assert_eq!(ids_for(BusinessStatus::Pending), vec!["new"]);
        assert_eq!(ids_for(BusinessStatus::Claimed), vec!["claimed"]);
    }

    #[test]
    fn test_projection_is_pure() {
        let businesses = named(&["b", "a", "c"]);
        let maps = ReferenceMaps::default();
        let state = sorted_by(SortOption::NameAsc);
        assert_eq!(
            project(&businesses, &maps, &state),
            project(&businesses, &maps, &state)
        );
    }

    #[test]
    fn test_category_options_sorted_by_label() {
        let maps = ReferenceMaps::build(
            &[
                BusinessType { id: EntityId::from("1"), name: Some("retail".to_string()) },
                BusinessType { id: EntityId::from("2"), name: Some("Cafe".to_string()) },
                BusinessType { id: EntityId::from("3"), name: None },
            ],
            &[],
        );
        let options = category_options(&maps);
        assert_eq!(
            options,
            vec![
                (EntityId::from("2"), "Cafe".to_string()),
                (EntityId::from("1"), "retail".to_string()),
            ]
        );
    }

    #[test]
    fn test_status_counts() {
        let businesses = vec![
            business(json!({"id": "1", "blocked": true})),
            business(json!({"id": "2"})),
            business(json!({"id": "3", "business_status": "pending"})),
        ];
        let counts = status_counts(&businesses);
        assert_eq!(counts[&BusinessStatus::Archived], 1);
        assert_eq!(counts[&BusinessStatus::Pending], 2);
        assert_eq!(counts[&BusinessStatus::Approved], 0);
        assert_eq!(counts[&BusinessStatus::Claimed], 0);
    }
}
