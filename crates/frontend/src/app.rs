use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiConfig;
use crate::system::auth::context::AuthContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::resolve();
    let auth = AuthContext::from_storage();
    log::info!(
        "API base: {}, authenticated: {}",
        config.base_url,
        auth.is_authenticated()
    );

    // Конфигурация и авторизация читаются один раз и раздаются через контекст
    provide_context(config);
    provide_context(auth);
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
