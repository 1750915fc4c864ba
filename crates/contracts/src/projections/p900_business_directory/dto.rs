use chrono::{DateTime, Utc};

use super::labels::ResolvedLabel;
use crate::domain::a003_business::status::BusinessStatus;
use crate::domain::common::EntityId;

/// Строка каталога, готовая к отображению
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRow {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub logo_url: Option<String>,
    pub type_labels: Vec<ResolvedLabel>,
    pub feature_labels: Vec<ResolvedLabel>,
    pub status: BusinessStatus,
    pub active: bool,
    pub blocked: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl DirectoryRow {
    pub fn type_names(&self) -> Vec<&str> {
        self.type_labels.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn feature_names(&self) -> Vec<&str> {
        self.feature_labels.iter().map(|l| l.text.as_str()).collect()
    }
}
