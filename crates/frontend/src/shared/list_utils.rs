/// Утилиты для списков: индикаторы сортировки, склонение, поле поиска
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Задержка применения поискового запроса
const SEARCH_DEBOUNCE_MS: i32 = 300;

/// CSS-класс индикатора сортировки для заголовка
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// Русское склонение по числу: (1 тип, 2 типа, 5 типов)
pub fn plural_ru<'a>(n: usize, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let n100 = n % 100;
    let n10 = n % 10;
    if (11..=14).contains(&n100) {
        many
    } else if n10 == 1 {
        one
    } else if (2..=4).contains(&n10) {
        few
    } else {
        many
    }
}

/// Поле поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Начальное значение (из URL)
    #[prop(into)]
    initial: String,
    /// Вызывается после паузы ввода
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(initial);

    let debounce_timeout = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
            debounce_timeout.set_value(None);
        }
    };

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
        closure.forget();
    };

    let clear_filter = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !input_value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                prop:disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Очистить">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_ru() {
        let forms = |n| plural_ru(n, "тип", "типа", "типов");
        assert_eq!(forms(1), "тип");
        assert_eq!(forms(2), "типа");
        assert_eq!(forms(4), "типа");
        assert_eq!(forms(5), "типов");
        assert_eq!(forms(11), "типов");
        assert_eq!(forms(14), "типов");
        assert_eq!(forms(21), "тип");
        assert_eq!(forms(22), "типа");
        assert_eq!(forms(111), "типов");
        assert_eq!(forms(0), "типов");
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "slug", true), " ⇅");
        assert_eq!(get_sort_class("slug", "slug"), "sort-indicator sort-indicator--active");
    }
}
