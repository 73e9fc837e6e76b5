//! Чекбокс выбора строки.

use leptos::prelude::*;
use thaw::*;

/// Ячейка с чекбоксом. Клик не доходит до строки (`stop_propagation`),
/// поэтому выбор не открывает карточку.
#[component]
pub fn TableCellCheckbox(
    /// ID строки
    #[prop(into)]
    item_id: String,

    /// Выбрана ли строка
    #[prop(into)]
    checked: Signal<bool>,

    /// Вызывается с ID строки
    on_toggle: Callback<String>,

    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                prop:disabled=move || disabled.get().unwrap_or(false)
                on:change=move |_| on_toggle.run(item_id.clone())
            />
        </TableCell>
    }
}
