use contracts::domain::a002_feature_type::aggregate::{FeatureType, LIST_FIELD, LIST_PATH};
use contracts::shared::collection::FetchOutcome;

use crate::shared::api_utils::{fetch_collection, ApiConfig};
use crate::system::auth::context::AuthContext;

/// GET /accessible-feature/list → `{ items: FeatureType[] }`
pub async fn fetch_feature_types(config: &ApiConfig, auth: &AuthContext) -> FetchOutcome<FeatureType> {
    fetch_collection(config, auth, LIST_PATH, LIST_FIELD).await
}
