use leptos::prelude::*;

/// Заголовок страницы-списка: название, счётчик записей и кнопки действий
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Количество показанных записей
    #[prop(optional, into)]
    count: Option<Signal<usize>>,

    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <h1 class="page-header__title">{title}</h1>
                {count.map(|count| view! {
                    <span class="badge badge--primary">{move || count.get()}</span>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
