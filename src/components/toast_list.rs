//! Toast List Component

use leptos::prelude::*;

use crate::toast::{ToastKind, Toasts};

#[component]
pub fn ToastList(toasts: Toasts) -> impl IntoView {
    let entries = toasts.entries();

    view! {
        <div class="toast-container">
            <For
                each={let entries = entries.clone(); move || entries.get()}
                key=|toast| toast.id
                children={move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    let toasts = toasts.clone();
                    view! {
                        <div class=class>
                            <span class="toast-message">{toast.message.clone()}</span>
                            <button class="toast-close" on:click=move |_| toasts.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }}
            />
        </div>
    }
}
