use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "toast success",
            NoticeKind::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Transient toasts, newest last
#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, message.into())
    }

    fn push(&self, kind: NoticeKind, message: String) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| items.push(Notice { id, kind, message }));
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.items.try_update(|items| items.retain(|n| n.id != id));
    }

    pub fn snapshot(&self) -> Vec<Notice> {
        self.items.get_untracked()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toasts; each one removes itself after `lifetime_ms`.
#[component]
pub fn ToastHost(lifetime_ms: u32) -> impl IntoView {
    let notifications =
        use_context::<Notifications>().expect("Notifications not provided in context");

    view! {
        <div class="toast-container">
            <For
                each=move || notifications.items.get()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    spawn_local(async move {
                        TimeoutFuture::new(lifetime_ms).await;
                        notifications.dismiss(id);
                    });
                    view! { <div class=notice.kind.class()>{notice.message}</div> }
                }
            />
        </div>
    }
}
