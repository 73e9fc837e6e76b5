//! Диалог подтверждения действия.
//!
//! Кнопка подтверждения показывает ход операции (`ConfirmButtonState`),
//! закрытие и открытие диалога управляются снаружи (через URL).

use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmButtonState {
    #[default]
    Default,
    Loading,
    Success,
    Error,
}

impl ConfirmButtonState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ConfirmButtonState::Loading)
    }
}

#[component]
pub fn ActionDialog(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    title: String,
    #[prop(into)]
    confirm_label: String,
    #[prop(into)]
    confirm_state: Signal<ConfirmButtonState>,
    /// Кнопка подтверждения в "опасном" стиле (удаление)
    #[prop(optional)]
    danger: bool,
    /// Запретить подтверждение (например, пустое имя)
    #[prop(optional, into)]
    confirm_disabled: MaybeProp<bool>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);
    let title = StoredValue::new(title);
    let confirm_label = StoredValue::new(confirm_label);

    let confirm_class = move || {
        let mut class = String::from("confirm-button");
        if danger {
            class.push_str(" confirm-button--danger");
        }
        match confirm_state.get() {
            ConfirmButtonState::Success => class.push_str(" confirm-button--success"),
            ConfirmButtonState::Error => class.push_str(" confirm-button--error"),
            _ => {}
        }
        class
    };

    view! {
        <Show when=move || open.get()>
            <Modal title=title.get_value() on_close=on_close>
                {children.with_value(|children| children())}
                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Отмена"
                    </Button>
                    <span class=confirm_class>
                        <Button
                            appearance=ButtonAppearance::Primary
                            loading=Signal::derive(move || confirm_state.get().is_loading())
                            disabled=Signal::derive(move || {
                                confirm_state.get().is_loading()
                                    || confirm_disabled.get().unwrap_or(false)
                            })
                            on_click=move |_| on_confirm.run(())
                        >
                            {confirm_label.get_value()}
                            {move || (confirm_state.get() == ConfirmButtonState::Error).then_some(" ⚠")}
                        </Button>
                    </span>
                </div>
            </Modal>
        </Show>
    }
}
