use crate::routes::routes::AppRoutes;
use crate::shared::notifier::{NotificationHost, Notifier};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Уведомления доступны всем страницам через контекст
    provide_context(Notifier::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
            <NotificationHost />
        </ConfigProvider>
    }
}
