use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{non_blank, string_or_none};
use crate::domain::common::EntityId;

/// Endpoint списка типов бизнеса
pub const LIST_PATH: &str = "/business-type/list";

/// Поле ответа, в котором лежит массив
pub const LIST_FIELD: &str = "data";

/// Тип бизнеса (категория справочника)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessType {
    pub id: EntityId,
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
}

impl BusinessType {
    /// Наименование для отображения; `None`, если имя пустое
    pub fn display_name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }
}
