use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Шапка страницы: заголовок, подзаголовок и кнопки действий справа
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Ссылка "назад" слева от заголовка
    #[prop(optional, into)]
    back_href: MaybeProp<String>,

    /// Кнопки действий (можно пустой фрагмент)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            {move || back_href.get().map(|href| view! {
                <A href=href attr:class="page-header__back">
                    {icon("arrow-left")}
                </A>
            })}
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
