//! Реестр страниц приложения

use crate::domain::a001_business_type::ui::list::BusinessTypeList;
use crate::domain::a002_feature_type::ui::list::FeatureTypeList;
use crate::projections::p900_business_directory::ui::list::BusinessDirectoryList;
use leptos::prelude::*;

pub const DEFAULT_PAGE: &str = "p900_business_directory";

/// (ключ, заголовок, иконка)
pub const PAGES: [(&str, &str, &str); 3] = [
    ("p900_business_directory", "Каталог бизнесов", "building"),
    ("a001_business_type", "Типы бизнеса", "tag"),
    ("a002_feature_type", "Признаки доступности", "accessibility"),
];

pub fn is_known_page(key: &str) -> bool {
    PAGES.iter().any(|(k, _, _)| *k == key)
}

pub fn page_label_for_key(key: &str) -> &'static str {
    PAGES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, label, _)| *label)
        .unwrap_or("Страница не найдена")
}

pub fn render_page(key: &str) -> AnyView {
    match key {
        "p900_business_directory" => view! { <BusinessDirectoryList /> }.into_any(),
        "a001_business_type" => view! { <BusinessTypeList /> }.into_any(),
        "a002_feature_type" => view! { <FeatureTypeList /> }.into_any(),
        _ => view! {
            <div class="page">
                <div class="warning-box">{format!("Страница '{}' не найдена", key)}</div>
            </div>
        }
        .into_any(),
    }
}
