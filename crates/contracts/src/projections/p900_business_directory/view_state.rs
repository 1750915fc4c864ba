use crate::domain::a003_business::status::BusinessStatus;
use crate::domain::common::EntityId;

/// Вариант сортировки списка
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOption {
    /// Порядок, в котором список пришёл с сервера
    #[default]
    None,
    NameAsc,
    NameDesc,
    CreatedAsc,
    CreatedDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::None,
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::CreatedAsc,
        SortOption::CreatedDesc,
    ];

    /// Неизвестное значение трактуется как отсутствие сортировки
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == value.trim())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::None => "",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::CreatedAsc => "created-asc",
            SortOption::CreatedDesc => "created-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::None => "Без сортировки",
            SortOption::NameAsc => "Название (А-Я)",
            SortOption::NameDesc => "Название (Я-А)",
            SortOption::CreatedAsc => "Сначала старые",
            SortOption::CreatedDesc => "Сначала новые",
        }
    }
}

/// Фильтр по производному статусу
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BusinessStatus),
}

impl StatusFilter {
    pub fn parse(value: &str) -> Self {
        BusinessStatus::parse(value)
            .map(StatusFilter::Only)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, status: BusinessStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

/// Состояние фильтров списка
///
/// `search_term` хранит текст в поле ввода, `applied_search` принятое
/// значение, по которому делается запрос. Только `applied_search` влияет на сеть.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub selected_category_id: Option<EntityId>,
    pub sort_option: SortOption,
    pub status_filter: StatusFilter,
    pub search_term: String,
    pub applied_search: String,
}

impl ViewState {
    /// Принятый поиск для query-параметра; пустая строка означает "без поиска"
    pub fn applied_search(&self) -> Option<&str> {
        let term = self.applied_search.trim();
        if term.is_empty() {
            None
        } else {
            Some(term)
        }
    }
}
