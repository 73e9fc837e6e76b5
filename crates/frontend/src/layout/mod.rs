pub mod configuration;

use crate::domain::a001_page_type::urls::PAGE_TYPE_SECTION;
use configuration::CONFIGURATION_MENU_URL;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Каркас приложения.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="top-header">
                <span class="top-header__title">"Back office"</span>
            </header>
            <div class="app-body">
                <nav class="sidebar">
                    <A href=CONFIGURATION_MENU_URL attr:class="sidebar__item">
                        {icon("filter")}
                        <span>"Настройки"</span>
                    </A>
                    <A href=PAGE_TYPE_SECTION attr:class="sidebar__item">
                        {icon("file-text")}
                        <span>"Типы страниц"</span>
                    </A>
                </nav>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
