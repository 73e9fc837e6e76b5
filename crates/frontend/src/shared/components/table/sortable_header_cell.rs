//! Сортируемая ячейка заголовка таблицы.
//!
//! Клик по заголовку сообщает наверх ключ колонки; само направление
//! решает вызывающий код (оно живёт в URL).

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Ключ колонки, как он пишется в URL
    sort_field: &'static str,

    /// Текущее поле сортировки
    #[prop(into)]
    current_sort_field: Signal<String>,

    /// Направление сортировки
    #[prop(into)]
    sort_ascending: Signal<bool>,

    on_sort: Callback<&'static str>,

    #[prop(optional, default = 120.0)]
    min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px;"
                on:click=move |_| on_sort.run(sort_field)
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), sort_field)>
                    {move || {
                        get_sort_indicator(&current_sort_field.get(), sort_field, sort_ascending.get())
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
