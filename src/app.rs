//! Application Root
//!
//! Wires the store, controller, session and collaborators together and
//! gates the protected page on the resolved session. Config loads first
//! (it needs no authentication), then the session settles.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{DemoApi, HttpApi};
use crate::components::{DemoPage, SignedOut, ToastList};
use crate::controller::Controller;
use crate::session::{AuthState, Session};
use crate::store::AppStore;
use crate::toast::Toasts;
use crate::view::{BrowserConfirm, DemoView};

#[component]
pub fn App() -> impl IntoView {
    let api: Arc<dyn DemoApi> = Arc::new(HttpApi::from_window());
    let store = AppStore::new();
    let controller = Controller::new(store.clone(), Arc::clone(&api));
    let toasts = Toasts::new();
    let session = Session::new();
    let model = DemoView::new(
        controller.clone(),
        Arc::new(BrowserConfirm),
        Arc::new(toasts.clone()),
    );

    {
        let controller = controller.clone();
        let session = session.clone();
        Effect::new(move |_| {
            let controller = controller.clone();
            let session = session.clone();
            let api = Arc::clone(&api);
            spawn_local(async move {
                // Config failure is terminal for this attempt; defaults apply.
                let _ = controller.load_config().await;
                session.initialize(&api).await;
            });
        });
    }

    let auth = session.state();
    view! {
        <div class="app-layout">
            <ToastList toasts=toasts.clone() />
            {move || match auth.get() {
                AuthState::Unknown => view! {
                    <div class="loading">"Loading..."</div>
                }
                .into_any(),
                AuthState::SignedOut => view! {
                    <SignedOut session=session.clone() />
                }
                .into_any(),
                AuthState::SignedIn(_) => view! {
                    <DemoPage store=store.clone() model=model.clone() />
                }
                .into_any(),
            }}
        </div>
    }
}
