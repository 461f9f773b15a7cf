//! Toast Notifications
//!
//! Signal-backed toast store. Toasts auto-dismiss after a few seconds or
//! when closed manually; rendering lives in `components::ToastList`.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::view::Notify;

const TOAST_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone)]
pub struct Toasts {
    entries: ArcRwSignal<Vec<Toast>>,
    next_id: Arc<AtomicU32>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            entries: ArcRwSignal::new(Vec::new()),
            next_id: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn entries(&self) -> ArcReadSignal<Vec<Toast>> {
        self.entries.read_only()
    }

    pub fn dismiss(&self, id: u32) {
        self.entries.update(|entries| entries.retain(|toast| toast.id != id));
    }

    fn push(&self, kind: ToastKind, message: &str) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries.update(|entries| {
            entries.push(Toast {
                id,
                kind,
                message: message.to_string(),
            })
        });

        let toasts = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            toasts.dismiss(id);
        });
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Notify for Toasts {
    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}
