//! Чекбокс в заголовке таблицы: выбрать / снять все видимые строки.

use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckboxState {
    pub fn from_counts(selected: usize, total: usize) -> Self {
        if total == 0 || selected == 0 {
            CheckboxState::Unchecked
        } else if selected >= total {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    }
}

/// Показывает три состояния (unchecked, checked, indeterminate).
/// Клик всегда сообщает наверх; что выбрать, решает вызывающий код.
#[component]
pub fn TableHeaderCheckbox(
    /// Сколько видимых строк выбрано
    #[prop(into)]
    selected_count: Signal<usize>,

    /// Сколько строк видно
    #[prop(into)]
    total_count: Signal<usize>,

    on_toggle_all: Callback<()>,

    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let checkbox_state =
        Signal::derive(move || CheckboxState::from_counts(selected_count.get(), total_count.get()));

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate доступен только через DOM
    Effect::new(move |_| {
        let state = checkbox_state.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(state == CheckboxState::Indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checkbox_state.get() == CheckboxState::Checked
                prop:disabled=move || disabled.get().unwrap_or(false) || total_count.get() == 0
                on:change=move |_| on_toggle_all.run(())
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_state_from_counts() {
        assert_eq!(CheckboxState::from_counts(0, 0), CheckboxState::Unchecked);
        assert_eq!(CheckboxState::from_counts(0, 5), CheckboxState::Unchecked);
        assert_eq!(CheckboxState::from_counts(2, 5), CheckboxState::Indeterminate);
        assert_eq!(CheckboxState::from_counts(5, 5), CheckboxState::Checked);
    }
}
