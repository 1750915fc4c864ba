//! Каталог бизнесов: справочные карты, разрешение подписей и проекция
//! отфильтрованного/отсортированного списка для отображения.

pub mod dto;
pub mod labels;
pub mod projection;
pub mod reference_maps;
pub mod view_state;

pub use dto::DirectoryRow;
pub use labels::{LabelSource, ResolvedLabel};
pub use projection::{category_options, project, status_counts};
pub use reference_maps::{ReferenceMap, ReferenceMaps};
pub use view_state::{SortOption, StatusFilter, ViewState};
