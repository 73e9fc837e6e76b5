mod view_model;

use self::view_model::PageTypeCreateViewModel;
use crate::domain::a001_page_type::urls::{page_type_url, PAGE_TYPE_SECTION};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::notifier::use_notifier;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

#[component]
pub fn PageTypeCreate() -> impl IntoView {
    let vm = PageTypeCreateViewModel::new();
    let notifier = use_notifier();
    let navigate = StoredValue::new_local(use_navigate());

    let on_save = move |_: leptos::ev::MouseEvent| {
        vm.save(move |id| {
            notifier.success("Тип страницы создан");
            navigate.with_value(|nav| nav(&page_type_url(&id), NavigateOptions::default()));
        });
    };

    let on_cancel = move |_: leptos::ev::MouseEvent| {
        navigate.with_value(|nav| nav(PAGE_TYPE_SECTION, NavigateOptions::default()));
    };

    view! {
        <div class="page page--detail" id="a001_page_type--create">
            <PageHeader title="Новый тип страницы">
                <Button appearance=ButtonAppearance::Secondary on_click=on_cancel>
                    {icon("arrow-left")}
                    "К списку"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    loading=vm.saving
                    disabled=Signal::derive(move || vm.saving.get() || !vm.is_form_valid())
                    on_click=on_save
                >
                    {icon("save")}
                    "Сохранить"
                </Button>
            </PageHeader>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">"Наименование"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Например: Блог"
                    />
                </div>

                <div class="form-group">
                    <label for="slug">"Slug"</label>
                    <input
                        type="text"
                        id="slug"
                        prop:value=move || vm.form.with(|f| f.slug.clone().unwrap_or_default())
                        on:input=move |ev| vm.form.update(|f| f.slug = Some(event_target_value(&ev)))
                        placeholder=move || vm.slug_preview()
                    />
                    <div class="help-text">"Если не указан, формируется из наименования"</div>
                </div>
            </div>
        </div>
    }
}
