//! Transient notifications ("toasts").
//!
//! `NotificationService` lives in context; `NotificationHost` is mounted once
//! at the app root and renders the queue. Every entry removes itself after
//! [`DISMISS_AFTER_MS`].

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use leptos::task::spawn_local;

pub const DISMISS_AFTER_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, "Éxito", message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, "Error", message.into());
    }

    fn push(&self, kind: NotificationKind, title: &str, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        match kind {
            NotificationKind::Success => log::info!("{}", message),
            NotificationKind::Error => log::warn!("{}", message),
        }

        self.queue.update(|q| {
            q.push(Notification {
                id,
                kind,
                title: title.to_string(),
                message,
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.retain(|n| n.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided")
}

/// Renders the queue. Mount once.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="notification-host">
            <For
                each=move || svc.queue.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let intent = match n.kind {
                        NotificationKind::Success => MessageBarIntent::Success,
                        NotificationKind::Error => MessageBarIntent::Error,
                    };
                    view! {
                        <div class="notification-host__item" on:click=move |_| svc.dismiss(id)>
                            <MessageBar intent=intent>
                                <div>
                                    <strong>{n.title.clone()}</strong>
                                    " "
                                    <span>{n.message.clone()}</span>
                                </div>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, kind: NotificationKind) -> Notification {
        Notification {
            id,
            kind,
            title: "Error".to_string(),
            message: format!("mensaje {}", id),
        }
    }

    #[test]
    fn test_dismiss_removes_only_that_entry() {
        let svc = NotificationService::new();
        svc.queue.set(vec![
            entry(1, NotificationKind::Error),
            entry(2, NotificationKind::Success),
        ]);

        svc.dismiss(1);
        svc.dismiss(42);

        let ids: Vec<u64> = svc.queue.with_untracked(|q| q.iter().map(|n| n.id).collect());
        assert_eq!(ids, vec![2]);
    }
}
