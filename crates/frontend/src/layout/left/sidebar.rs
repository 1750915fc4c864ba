use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::PAGES;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let auth = use_auth();

    view! {
        <nav class="sidebar">
            <div class="sidebar__group-label">"Справочники"</div>
            {PAGES.into_iter().map(|(key, label, icon_name)| view! {
                <button
                    class="sidebar__item"
                    class:sidebar__item--active=move || ctx.active.get() == key
                    on:click=move |_| ctx.activate(key)
                >
                    {icon(icon_name)}
                    <span class="sidebar__label">{label}</span>
                </button>
            }).collect_view()}

            {(!auth.is_authenticated()).then(|| view! {
                <div class="sidebar__hint">"Нет токена доступа, запросы отправляются без авторизации"</div>
            })}
        </nav>
    }
}
