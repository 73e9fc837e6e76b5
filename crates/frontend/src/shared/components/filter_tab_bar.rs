//! Полоса вкладок сохранённых фильтров над списком.
//!
//! Вкладка 0: "Все"; 1..=N: сохранённые; N + 1: несохранённый поиск.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn FilterTabBar(
    /// Названия сохранённых вкладок по порядку
    #[prop(into)]
    tabs: Signal<Vec<String>>,
    /// Текущая вкладка
    #[prop(into)]
    current: Signal<usize>,
    #[prop(into)]
    all_label: String,
    on_change: Callback<usize>,
    on_save: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let is_custom = move || current.get() == tabs.with(|t| t.len()) + 1;
    let is_saved = move || {
        let c = current.get();
        c >= 1 && c <= tabs.with(|t| t.len())
    };

    view! {
        <div class="filter-tabs" role="tablist">
            <button
                class="filter-tabs__tab"
                class:filter-tabs__tab--active=move || current.get() == 0
                on:click=move |_| on_change.run(0)
            >
                {all_label}
            </button>
            {move || {
                tabs.get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let index = i + 1;
                        view! {
                            <button
                                class="filter-tabs__tab"
                                class:filter-tabs__tab--active=move || current.get() == index
                                on:click=move |_| on_change.run(index)
                            >
                                {name}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <Show when=is_custom>
                <span class="filter-tabs__tab filter-tabs__tab--active filter-tabs__tab--custom">
                    {icon("filter")}
                    "Поиск"
                </span>
            </Show>
            <div class="filter-tabs__actions">
                <Show when=is_custom>
                    <button class="button button--secondary" on:click=move |_| on_save.run(())>
                        {icon("save")}
                        "Сохранить поиск"
                    </button>
                </Show>
                <Show when=is_saved>
                    <button class="button button--secondary" on:click=move |_| on_delete.run(())>
                        {icon("delete")}
                        "Удалить вкладку"
                    </button>
                </Show>
            </div>
        </div>
    }
}
