use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Идентификатор сущности удалённого справочника
///
/// Backend отдаёт id то строкой, то числом; внутри клиента id всегда строка,
/// поэтому `"1"` и `1` считаются одним и тем же ключом.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Пустая строка из select означает "не выбрано"
    pub fn from_selection(value: &str) -> Option<Self> {
        let id = Self::new(value);
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => EntityId::new(s),
            RawId::Signed(n) => EntityId(n.to_string()),
            RawId::Unsigned(n) => EntityId(n.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_ids_are_equal() {
        let from_number: EntityId = serde_json::from_str("42").unwrap();
        let from_text: EntityId = serde_json::from_str("\" 42 \"").unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(from_number.as_str(), "42");
    }

    #[test]
    fn test_from_selection() {
        assert_eq!(EntityId::from_selection(""), None);
        assert_eq!(EntityId::from_selection("  "), None);
        assert_eq!(EntityId::from_selection("7"), Some(EntityId::from("7")));
    }

    #[test]
    fn test_rejects_objects() {
        assert!(serde_json::from_str::<EntityId>("{\"id\": 1}").is_err());
    }
}
