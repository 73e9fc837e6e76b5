//! Всплывающие уведомления.
//!
//! `Notifier` кладётся в контекст в `App`, `NotificationHost` рисует стек
//! уведомлений в углу экрана. Каждое уведомление закрывается само.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationStatus {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub status: NotificationStatus,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct Notifier {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NotificationStatus::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NotificationStatus::Error, text.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, status: NotificationStatus, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| items.push(Notification { id, status, text }));

        let notifier = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            notifier.dismiss(id);
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not found in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="notifications">
            <For
                each=move || notifier.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let class = match n.status {
                        NotificationStatus::Success => "notification notification--success",
                        NotificationStatus::Error => "notification notification--error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| notifier.dismiss(id)>
                            {n.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
