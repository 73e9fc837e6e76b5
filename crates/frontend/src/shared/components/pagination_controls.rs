use crate::shared::icons::icon;
use crate::shared::list_settings::ROW_NUMBER_OPTIONS;
use leptos::prelude::*;

/// Курсорная пагинация: "назад" / "вперёд" и выбор размера страницы.
///
/// Номеров страниц нет: сервер отдаёт только признаки соседних страниц.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    has_previous_page: Signal<bool>,

    #[prop(into)]
    has_next_page: Signal<bool>,

    /// Всего записей с учётом фильтра
    #[prop(into)]
    total_count: Signal<u64>,

    /// Текущий размер страницы
    #[prop(into)]
    row_number: Signal<u32>,

    on_previous_page: Callback<()>,
    on_next_page: Callback<()>,
    on_row_number_change: Callback<u32>,

    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || format!("Всего: {}", total_count.get())}
            </span>
            <select
                class="page-size-select"
                title="Строк на странице"
                prop:disabled=is_disabled
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<u32>() {
                        Ok(value) => on_row_number_change.run(value),
                        Err(e) => log::warn!("Bad row number option: {}", e),
                    }
                }
                prop:value=move || row_number.get().to_string()
            >
                {ROW_NUMBER_OPTIONS.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || row_number.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <button
                class="pagination-btn"
                on:click=move |_| on_previous_page.run(())
                disabled=move || is_disabled() || !has_previous_page.get()
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_next_page.run(())
                disabled=move || is_disabled() || !has_next_page.get()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
