pub mod global_context;
pub mod left;
pub mod pages;

use global_context::AppGlobalContext;
use leptos::prelude::*;

/// Оболочка приложения: шапка, боковое меню и область страницы
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <header class="top-header">
                <button class="top-header__toggle" on:click=move |_| ctx.toggle_left()>"☰"</button>
                <span class="top-header__title">
                    {move || pages::page_label_for_key(&ctx.active.get())}
                </span>
            </header>

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
