use std::collections::BTreeMap;

use crate::domain::a001_business_type::aggregate::BusinessType;
use crate::domain::a002_feature_type::aggregate::FeatureType;
use crate::domain::common::EntityId;

/// `id → обрезанное наименование`
pub type ReferenceMap = BTreeMap<EntityId, String>;

/// Справочные карты для разрешения подписей
///
/// Всегда строятся заново из последних снимков обеих коллекций и никогда не
/// сливаются с предыдущими, поэтому для одной пары снимков результат один.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceMaps {
    pub business_types: ReferenceMap,
    pub features: ReferenceMap,
}

impl ReferenceMaps {
    pub fn build(business_types: &[BusinessType], features: &[FeatureType]) -> Self {
        Self {
            business_types: build_business_type_map(business_types),
            features: build_feature_map(features),
        }
    }

    pub fn business_type_name(&self, id: &EntityId) -> Option<&str> {
        self.business_types.get(id).map(String::as_str)
    }

    pub fn feature_title(&self, id: &EntityId) -> Option<&str> {
        self.features.get(id).map(String::as_str)
    }
}

/// Записи без имени в карту не попадают (в коллекции они остаются).
/// Повторный id перезаписывает предыдущий: последняя запись выигрывает.
pub fn build_business_type_map(items: &[BusinessType]) -> ReferenceMap {
    items
        .iter()
        .filter_map(|t| t.display_name().map(|name| (t.id.clone(), name.to_string())))
        .collect()
}

pub fn build_feature_map(items: &[FeatureType]) -> ReferenceMap {
    items
        .iter()
        .filter_map(|f| f.display_title().map(|title| (f.id.clone(), title.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business_type(id: &str, name: Option<&str>) -> BusinessType {
        BusinessType {
            id: EntityId::from(id),
            name: name.map(str::to_string),
        }
    }

    fn feature(id: &str, title: Option<&str>) -> FeatureType {
        FeatureType {
            id: EntityId::from(id),
            title: title.map(str::to_string),
            slug: None,
        }
    }

    #[test]
    fn test_map_contains_only_named_entries() {
        let types = vec![
            business_type("1", Some(" Retail ")),
            business_type("2", Some("   ")),
            business_type("3", None),
            business_type("4", Some("Cafe")),
        ];
        let map = build_business_type_map(&types);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&EntityId::from("1")).map(String::as_str), Some("Retail"));
        assert_eq!(map.get(&EntityId::from("4")).map(String::as_str), Some("Cafe"));
        assert!(!map.contains_key(&EntityId::from("2")));
        assert!(!map.contains_key(&EntityId::from("3")));
    }

    #[test]
    fn test_repeated_id_last_write_wins() {
        let types = vec![
            business_type("1", Some("Retail")),
            business_type("1", Some("Shop")),
        ];
        let map = build_business_type_map(&types);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&EntityId::from("1")).map(String::as_str), Some("Shop"));
    }

    #[test]
    fn test_build_both_maps() {
        let maps = ReferenceMaps::build(
            &[business_type("1", Some("Retail"))],
            &[feature("9", Some("Ramp")), feature("10", None)],
        );
        assert_eq!(maps.business_type_name(&EntityId::from("1")), Some("Retail"));
        assert_eq!(maps.feature_title(&EntityId::from("9")), Some("Ramp"));
        assert_eq!(maps.feature_title(&EntityId::from("10")), None);
    }

    #[test]
    fn test_rebuild_does_not_keep_stale_entries() {
        let first = ReferenceMaps::build(&[business_type("1", Some("Retail"))], &[]);
        let second = ReferenceMaps::build(&[business_type("2", Some("Cafe"))], &[]);
        assert!(first.business_type_name(&EntityId::from("1")).is_some());
        assert_eq!(second.business_type_name(&EntityId::from("1")), None);
    }
}
