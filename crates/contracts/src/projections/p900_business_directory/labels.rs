//! Единая точка выбора отображаемого имени для связующих записей.
//!
//! Порядок фиксирован: собственные поля записи, затем вложенный объект,
//! затем справочная карта по внешнему ключу, затем сам ключ, затем заглушка.
//! Конкретные данные всегда важнее производного справочного значения.

use super::reference_maps::ReferenceMap;
use crate::domain::a003_business::aggregate::{AccessibilityFeature, LinkedType};
use crate::domain::common::lenient::non_blank;
use crate::domain::common::EntityId;

/// Подпись, когда нет ни имени, ни ключа
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Откуда взялась подпись (для отладки неполных данных backend'а)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelSource {
    /// Собственное поле записи, с именем поля
    Inline(&'static str),
    /// Вложенный объект `businessType` / `featureType`
    Nested,
    ReferenceMap,
    /// В карте ключа нет: показываем сам id
    RawId,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLabel {
    pub text: String,
    pub source: LabelSource,
}

impl ResolvedLabel {
    /// Подпись получена из данных, а не из заглушки/сырого id
    pub fn is_resolved(&self) -> bool {
        !matches!(self.source, LabelSource::RawId | LabelSource::Placeholder)
    }
}

pub fn resolve_linked_type_label(linked: &LinkedType, map: &ReferenceMap) -> ResolvedLabel {
    let nested = linked.business_type.as_ref();
    resolve(
        &[
            ("name", linked.name.as_deref()),
            ("business_type_name", linked.business_type_name.as_deref()),
            ("businessTypeName", linked.business_type_name_camel.as_deref()),
        ],
        &[nested.and_then(|n| n.name.as_deref())],
        linked.type_id(),
        map,
    )
}

pub fn resolve_feature_label(feature: &AccessibilityFeature, map: &ReferenceMap) -> ResolvedLabel {
    let nested = feature.feature_type.as_ref();
    resolve(
        &[
            ("title", feature.title.as_deref()),
            ("name", feature.name.as_deref()),
            ("feature_name", feature.feature_name.as_deref()),
            ("label", feature.label.as_deref()),
        ],
        &[
            nested.and_then(|n| n.name.as_deref()),
            nested.and_then(|n| n.title.as_deref()),
        ],
        feature.feature_id(),
        map,
    )
}

fn resolve(
    inline: &[(&'static str, Option<&str>)],
    nested: &[Option<&str>],
    foreign_key: Option<&EntityId>,
    map: &ReferenceMap,
) -> ResolvedLabel {
    let found = inline
        .iter()
        .find_map(|(field, value)| non_blank(*value).map(|v| (v, LabelSource::Inline(*field))))
        .or_else(|| {
            nested
                .iter()
                .find_map(|value| non_blank(*value).map(|v| (v, LabelSource::Nested)))
        })
        .or_else(|| {
            foreign_key
                .and_then(|id| map.get(id))
                .map(|name| (name.as_str(), LabelSource::ReferenceMap))
        })
        .or_else(|| foreign_key.map(|id| (id.as_str(), LabelSource::RawId)));

    match found {
        Some((text, source)) => ResolvedLabel {
            text: text.to_string(),
            source,
        },
        None => ResolvedLabel {
            text: UNKNOWN_LABEL.to_string(),
            source: LabelSource::Placeholder,
        },
    }
}
