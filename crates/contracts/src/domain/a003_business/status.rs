use serde::{Deserialize, Serialize};

/// Производный статус бизнеса
///
/// Это не хранимое значение, а корзина, вычисляемая из `blocked` и
/// `business_status`. Правило:
/// 1. `blocked == true` → `Archived`;
/// 2. иначе `business_status` (без учёта регистра и пробелов) равный
///    `archived` / `pending` / `approved` / `claimed` → соответствующий статус;
/// 3. иначе (`null`, пусто, неизвестное значение) → `Pending`.
///
/// Поле `active` в вычислении не участвует.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessStatus {
    Archived,
    Pending,
    Approved,
    Claimed,
}

impl BusinessStatus {
    pub const ALL: [BusinessStatus; 4] = [
        BusinessStatus::Archived,
        BusinessStatus::Pending,
        BusinessStatus::Approved,
        BusinessStatus::Claimed,
    ];

    pub fn derive(blocked: bool, business_status: Option<&str>) -> Self {
        if blocked {
            return BusinessStatus::Archived;
        }
        business_status
            .and_then(Self::parse)
            .unwrap_or(BusinessStatus::Pending)
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value))
    }

    /// Значение для query/select
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessStatus::Archived => "archived",
            BusinessStatus::Pending => "pending",
            BusinessStatus::Approved => "approved",
            BusinessStatus::Claimed => "claimed",
        }
    }

    /// Подпись для UI
    pub fn label(&self) -> &'static str {
        match self {
            BusinessStatus::Archived => "Архив",
            BusinessStatus::Pending => "На модерации",
            BusinessStatus::Approved => "Одобрен",
            BusinessStatus::Claimed => "Подтверждён владельцем",
        }
    }
}
