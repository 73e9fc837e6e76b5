use crate::domain::a001_page_type::api;
use crate::domain::a001_page_type::urls::PAGE_TYPE_SECTION;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use contracts::domain::a001_page_type::aggregate::PageType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use thaw::*;

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Значения карточки, уже приведённые к строкам
#[derive(Debug, Clone, PartialEq)]
struct DetailsFields {
    id: String,
    name: String,
    slug: String,
    created_at: String,
    updated_at: String,
    version: i32,
}

impl DetailsFields {
    fn from_page_type(page_type: &PageType) -> Self {
        Self {
            id: page_type.to_string_id(),
            name: page_type.name.clone(),
            slug: page_type.slug.clone(),
            created_at: format_timestamp(page_type.metadata.created_at),
            updated_at: format_timestamp(page_type.metadata.updated_at),
            version: page_type.metadata.version,
        }
    }
}

/// Карточка типа страницы (только чтение)
#[component]
pub fn PageTypeDetails() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let navigate = StoredValue::new_local(use_navigate());

    let (item, set_item) = signal(None::<PageType>);
    let (not_found, set_not_found) = signal(false);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let id = id.get();
        spawn_local(async move {
            match api::get_page_type(&id).await {
                Ok(Some(page_type)) => {
                    set_item.set(Some(page_type));
                    set_not_found.set(false);
                    set_error.set(None);
                }
                Ok(None) => set_not_found.set(true),
                Err(e) => {
                    log::error!("Failed to load page type {}: {}", id, e);
                    set_error.set(Some(e));
                }
            }
        });
    });

    let title = Signal::derive(move || {
        item.with(|i| i.as_ref().map(|i| i.name.clone()))
            .unwrap_or_else(|| "Тип страницы".to_string())
    });

    view! {
        <div class="page page--detail" id="a001_page_type--detail">
            {move || view! {
                <PageHeader title=title.get()>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| navigate.with_value(|nav| nav(PAGE_TYPE_SECTION, NavigateOptions::default()))
                    >
                        {icon("arrow-left")}
                        "К списку"
                    </Button>
                </PageHeader>
            }}

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || not_found.get()>
                <div class="table__empty">"Тип страницы не найден или удалён"</div>
            </Show>

            {move || item.get().map(|page_type| {
                let DetailsFields { id, name, slug, created_at, updated_at, version } =
                    DetailsFields::from_page_type(&page_type);
                view! {
                    <dl class="details-list">
                        <dt>"Наименование"</dt>
                        <dd>{name}</dd>
                        <dt>"Slug"</dt>
                        <dd>
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                {slug}
                            </Badge>
                        </dd>
                        <dt>"ID"</dt>
                        <dd><code>{id}</code></dd>
                        <dt>"Создан"</dt>
                        <dd>{created_at}</dd>
                        <dt>"Изменён"</dt>
                        <dd>{updated_at}</dd>
                        <dt>"Версия"</dt>
                        <dd>{version}</dd>
                    </dl>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_details_fields_take_values_from_page_type() {
        let mut page_type = PageType::new_for_insert("Блог".into(), Some("blog".into()));
        page_type.metadata.created_at = chrono::Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        page_type.metadata.version = 3;

        let fields = DetailsFields::from_page_type(&page_type);

        assert_eq!(fields.id, page_type.to_string_id());
        assert_eq!(fields.name, "Блог");
        assert_eq!(fields.slug, "blog");
        assert_eq!(fields.created_at, "2024-03-05 07:08:09");
        assert_eq!(fields.version, 3);
    }
}
