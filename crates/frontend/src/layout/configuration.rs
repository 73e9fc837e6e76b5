//! Меню настроек: точка входа в справочники back office.

use crate::domain::a001_page_type::urls::PAGE_TYPE_SECTION;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

pub const CONFIGURATION_MENU_URL: &str = "/configuration";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigurationSection {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub fn configuration_sections() -> Vec<ConfigurationSection> {
    vec![ConfigurationSection {
        title: "Типы страниц",
        description: "Шаблоны атрибутов для страниц витрины",
        href: PAGE_TYPE_SECTION,
        icon: "file-text",
    }]
}

#[component]
pub fn ConfigurationMenu() -> impl IntoView {
    view! {
        <div class="page" id="configuration-menu">
            <PageHeader title="Настройки">
                {()}
            </PageHeader>
            <div class="configuration-menu">
                {configuration_sections()
                    .into_iter()
                    .map(|section| view! {
                        <A href=section.href attr:class="configuration-menu__item">
                            {icon(section.icon)}
                            <div>
                                <div class="configuration-menu__title">{section.title}</div>
                                <div class="configuration-menu__description">{section.description}</div>
                            </div>
                        </A>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
