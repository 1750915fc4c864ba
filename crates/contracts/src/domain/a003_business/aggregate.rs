use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::BusinessStatus;
use crate::domain::common::lenient::{
    bool_or_false, non_blank, string_or_empty, string_or_none, timestamp_or_none, value_or_none,
    vec_or_empty,
};
use crate::domain::common::EntityId;

/// Endpoint списка бизнесов (поддерживает `?search=`)
pub const LIST_PATH: &str = "/business/list";

pub const LIST_FIELD: &str = "data";

/// Query-параметр серверного поиска
pub const SEARCH_PARAM: &str = "search";

// ============================================================================
// Nested references
// ============================================================================

/// Вложенный объект-ссылка (`businessType` / `featureType`), который backend
/// иногда кладёт прямо в связующую запись
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedRef {
    #[serde(default, deserialize_with = "value_or_none")]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub title: Option<String>,
}

// ============================================================================
// Join entities
// ============================================================================

/// Связь бизнеса с типом бизнеса
///
/// Имя типа может прийти в любом из нескольких полей, а может не прийти вовсе;
/// выбор отображаемого имени делает `projections::p900_business_directory::labels`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedType {
    #[serde(default, deserialize_with = "value_or_none")]
    pub id: Option<EntityId>,
    #[serde(default, alias = "businessTypeId", deserialize_with = "value_or_none")]
    pub business_type_id: Option<EntityId>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub business_type_name: Option<String>,
    #[serde(default, rename = "businessTypeName", deserialize_with = "string_or_none")]
    pub business_type_name_camel: Option<String>,
    #[serde(default, rename = "businessType", deserialize_with = "value_or_none")]
    pub business_type: Option<NestedRef>,
}

impl LinkedType {
    /// Внешний ключ на тип бизнеса: собственное поле, затем вложенный объект
    pub fn type_id(&self) -> Option<&EntityId> {
        self.business_type_id
            .as_ref()
            .or_else(|| self.business_type.as_ref().and_then(|n| n.id.as_ref()))
            .filter(|id| !id.is_empty())
    }
}

/// Назначение признака доступности конкретному бизнесу
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityFeature {
    #[serde(default, deserialize_with = "value_or_none")]
    pub id: Option<EntityId>,
    #[serde(default, alias = "featureTypeId", deserialize_with = "value_or_none")]
    pub feature_type_id: Option<EntityId>,
    #[serde(default, alias = "accessibleFeatureId", deserialize_with = "value_or_none")]
    pub accessible_feature_id: Option<EntityId>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub feature_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub label: Option<String>,
    #[serde(default, rename = "featureType", deserialize_with = "value_or_none")]
    pub feature_type: Option<NestedRef>,
}

impl AccessibilityFeature {
    /// Внешний ключ на признак каталога
    pub fn feature_id(&self) -> Option<&EntityId> {
        self.feature_type_id
            .as_ref()
            .or(self.accessible_feature_id.as_ref())
            .or_else(|| self.feature_type.as_ref().and_then(|n| n.id.as_ref()))
            .filter(|id| !id.is_empty())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Бизнес из каталога
///
/// Клиент держит только копию для чтения: коллекция целиком заменяется при
/// каждой успешной загрузке и никогда не патчится по частям.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: EntityId,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub address: String,
    #[serde(default, alias = "logoUrl", deserialize_with = "string_or_none")]
    pub logo_url: Option<String>,
    #[serde(default, alias = "linkedTypes", deserialize_with = "vec_or_empty")]
    pub linked_types: Vec<LinkedType>,
    #[serde(
        default,
        alias = "accessibilityFeatures",
        deserialize_with = "vec_or_empty"
    )]
    pub accessibility_features: Vec<AccessibilityFeature>,
    #[serde(default, deserialize_with = "bool_or_false")]
    pub active: bool,
    #[serde(default, deserialize_with = "bool_or_false")]
    pub blocked: bool,
    #[serde(default, alias = "businessStatus", deserialize_with = "string_or_none")]
    pub business_status: Option<String>,
    #[serde(default, alias = "createdAt", deserialize_with = "timestamp_or_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Business {
    /// Производный статус (см. [`BusinessStatus::derive`])
    pub fn status(&self) -> BusinessStatus {
        BusinessStatus::derive(self.blocked, self.business_status.as_deref())
    }

    /// Входит ли бизнес в категорию `type_id`
    pub fn has_type(&self, type_id: &EntityId) -> bool {
        self.linked_types
            .iter()
            .any(|lt| lt.type_id() == Some(type_id))
    }

    pub fn logo(&self) -> Option<&str> {
        non_blank(self.logo_url.as_deref())
    }
}
