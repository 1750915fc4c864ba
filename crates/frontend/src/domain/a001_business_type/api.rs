use contracts::domain::a001_business_type::aggregate::{BusinessType, LIST_FIELD, LIST_PATH};
use contracts::shared::collection::FetchOutcome;

use crate::shared::api_utils::{fetch_collection, ApiConfig};
use crate::system::auth::context::AuthContext;

/// GET /business-type/list → `{ data: BusinessType[] }`
pub async fn fetch_business_types(config: &ApiConfig, auth: &AuthContext) -> FetchOutcome<BusinessType> {
    fetch_collection(config, auth, LIST_PATH, LIST_FIELD).await
}
