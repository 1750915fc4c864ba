use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{non_blank, string_or_none};
use crate::domain::common::EntityId;

/// Endpoint каталога признаков доступности
pub const LIST_PATH: &str = "/accessible-feature/list";

/// Этот endpoint кладёт массив в `items`, а не в `data`
pub const LIST_FIELD: &str = "items";

/// Признак доступности из каталога (пандус, лифт, шрифт Брайля и т.п.)
///
/// Описывает категорию как таковую, независимо от того, какому бизнесу она назначена.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureType {
    pub id: EntityId,
    #[serde(default, deserialize_with = "string_or_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub slug: Option<String>,
}

impl FeatureType {
    pub fn display_title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_feature_type() {
        let f: FeatureType = serde_json::from_value(json!({
            "id": 5,
            "title": "Wheelchair ramp",
            "slug": "wheelchair-ramp"
        }))
        .unwrap();
        assert_eq!(f.id.as_str(), "5");
        assert_eq!(f.display_title(), Some("Wheelchair ramp"));
        assert_eq!(f.slug.as_deref(), Some("wheelchair-ramp"));
    }

    #[test]
    fn test_blank_title() {
        let f: FeatureType = serde_json::from_value(json!({"id": 5, "title": "  "})).unwrap();
        assert_eq!(f.display_title(), None);
    }
}
