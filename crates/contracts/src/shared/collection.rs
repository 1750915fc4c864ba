//! Разбор ответов списочных endpoint'ов вида `{ "<field>": [ ... ] }`.
//!
//! Любой сбой (сеть, HTTP-статус, невалидный JSON, нет нужного поля) — это
//! одна категория "не удалось загрузить". Вызывающая сторона получает явный
//! [`FetchOutcome`], а не молчаливую пустую коллекцию.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Ошибка запроса: {0}")]
    Network(String),

    #[error("HTTP ошибка: {0}")]
    Http(u16),

    #[error("Ошибка парсинга: {0}")]
    Parse(String),

    #[error("В ответе нет массива '{0}'")]
    MissingField(String),
}

/// Успешно загруженная коллекция
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    pub items: Vec<T>,
    /// Сколько элементов массива не удалось разобрать и пришлось пропустить
    pub skipped: usize,
}

impl<T> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, skipped: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Результат одной загрузки: "загружено (возможно пусто)" или "не загрузилось"
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Loaded(Collection<T>),
    Failed(FetchError),
}

impl<T> From<Result<Collection<T>, FetchError>> for FetchOutcome<T> {
    fn from(result: Result<Collection<T>, FetchError>) -> Self {
        match result {
            Ok(collection) => FetchOutcome::Loaded(collection),
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}

/// Извлекает массив `field` из тела ответа
///
/// Каждый элемент разбирается отдельно: один битый элемент не роняет
/// всю коллекцию, он учитывается в [`Collection::skipped`].
pub fn parse_collection<T>(body: &str, field: &str) -> Result<Collection<T>, FetchError>
where
    T: DeserializeOwned,
{
    let mut root: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let array = match root.get_mut(field).map(serde_json::Value::take) {
        Some(serde_json::Value::Array(values)) => values,
        _ => return Err(FetchError::MissingField(field.to_string())),
    };

    let total = array.len();
    let items: Vec<T> = array
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect();

    Ok(Collection {
        skipped: total - items.len(),
        items,
    })
}
