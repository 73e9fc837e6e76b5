use crate::domain::a001_page_type::api;
use contracts::domain::a001_page_type::aggregate::{slugify, PageTypeDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel формы создания типа страницы
#[derive(Clone, Copy)]
pub struct PageTypeCreateViewModel {
    pub form: RwSignal<PageTypeDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl PageTypeCreateViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PageTypeDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| !f.name.trim().is_empty())
    }

    /// Slug, который получит запись, если поле оставить пустым
    pub fn slug_preview(&self) -> String {
        self.form.with(|f| effective_slug(f))
    }

    /// Sends the form; `on_saved` gets the new id
    pub fn save(&self, on_saved: impl FnOnce(String) + 'static) {
        if !self.is_form_valid() {
            self.error.set(Some("Укажите наименование".to_string()));
            return;
        }

        let dto = normalize(&self.form.get_untracked());
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);

        spawn_local(async move {
            match api::create_page_type(&dto).await {
                Ok(id) => {
                    log::info!("Created page type {}", id);
                    on_saved(id);
                }
                Err(e) => {
                    log::error!("Failed to create page type: {}", e);
                    error.set(Some(e));
                }
            }
            saving.set(false);
        });
    }
}

impl Default for PageTypeCreateViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Trimmed copy of the form; a blank slug is left to the server
pub fn normalize(form: &PageTypeDto) -> PageTypeDto {
    PageTypeDto {
        name: form.name.trim().to_string(),
        slug: form
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    }
}

pub fn effective_slug(form: &PageTypeDto) -> String {
    match normalize(form).slug {
        Some(slug) => slug,
        None => slugify(&form.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_blank_slug() {
        let dto = normalize(&PageTypeDto {
            name: "  Блог ".into(),
            slug: Some("   ".into()),
        });
        assert_eq!(dto.name, "Блог");
        assert_eq!(dto.slug, None);
    }

    #[test]
    fn test_effective_slug() {
        let derived = PageTypeDto {
            name: "Landing Page".into(),
            slug: None,
        };
        assert_eq!(effective_slug(&derived), "landing-page");

        let explicit = PageTypeDto {
            name: "Landing Page".into(),
            slug: Some(" promo ".into()),
        };
        assert_eq!(effective_slug(&explicit), "promo");
    }
}
