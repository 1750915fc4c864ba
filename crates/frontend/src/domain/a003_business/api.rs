use contracts::domain::a003_business::aggregate::{Business, LIST_FIELD, LIST_PATH, SEARCH_PARAM};
use contracts::shared::collection::FetchOutcome;

use crate::shared::api_utils::{fetch_collection, ApiConfig};
use crate::system::auth::context::AuthContext;

/// Путь списка бизнесов; поиск выполняет сервер
pub fn business_list_path(applied_search: Option<&str>) -> String {
    match applied_search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(term) => format!(
            "{}?{}={}",
            LIST_PATH,
            SEARCH_PARAM,
            urlencoding::encode(term)
        ),
        None => LIST_PATH.to_string(),
    }
}

/// GET /business/list[?search=<term>] → `{ data: Business[] }`
pub async fn fetch_businesses(
    config: &ApiConfig,
    auth: &AuthContext,
    applied_search: Option<&str>,
) -> FetchOutcome<Business> {
    fetch_collection(config, auth, &business_list_path(applied_search), LIST_FIELD).await
}
