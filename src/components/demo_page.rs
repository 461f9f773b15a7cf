//! Demo Page Component
//!
//! The protected list view: loading and error states with retry, the add
//! form, per-item delete and the diagnostic error-handling button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AddDemoForm;
use crate::store::AppStore;
use crate::view::DemoView;

#[component]
pub fn DemoPage(store: AppStore, model: DemoView) -> impl IntoView {
    let demos = store.demos();
    let loading = store.loading();
    let error = store.error();

    // Initial load on mount.
    {
        let model = model.clone();
        Effect::new(move |_| {
            let model = model.clone();
            spawn_local(async move { model.controller().load_demos().await });
        });
    }

    let on_toggle_form = {
        let model = model.clone();
        move |_| model.toggle_add_form()
    };
    let on_test_error = {
        let model = model.clone();
        move |_| {
            let model = model.clone();
            spawn_local(async move { model.test_error_handling().await });
        }
    };
    let on_retry = {
        let model = model.clone();
        move |_| {
            let model = model.clone();
            spawn_local(async move { model.on_retry().await });
        }
    };

    let form_model = model.clone();
    view! {
        <div class="demo-page">
            <h1>"Demo Items"</h1>

            <div class="demo-actions">
                <button class="btn" on:click=on_toggle_form>
                    {
                        let show = model.show_add_form();
                        move || if show.get() { "Cancel" } else { "Add Demo Item" }
                    }
                </button>
                <button class="btn" on:click=on_test_error>"Test Error Handling"</button>
            </div>

            <Show when={let show = model.show_add_form(); move || show.get()}>
                <AddDemoForm model=form_model.clone() />
            </Show>

            <Show when={let loading = loading.clone(); move || loading.get()}>
                <div class="loading">"Loading..."</div>
            </Show>

            {
                let error = error.clone();
                move || error.get().map(|message| view! {
                    <div class="error-banner">
                        <span>{message}</span>
                        <button class="btn" on:click=on_retry.clone()>"Retry"</button>
                    </div>
                })
            }

            <ul class="demo-list">
                <For
                    each={let demos = demos.clone(); move || demos.get()}
                    key=|demo| demo.id.clone()
                    children={
                        let model = model.clone();
                        move |demo| {
                            let id = demo.id.clone();
                            let model = model.clone();
                            view! {
                                <li class="demo-item">
                                    <span class="demo-id">{demo.id.clone()}</span>
                                    <button
                                        class="delete-btn"
                                        on:click=move |_| {
                                            let model = model.clone();
                                            let id = id.clone();
                                            spawn_local(async move {
                                                model.delete_demo(&id).await
                                            });
                                        }
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        }
                    }
                />
            </ul>

            <p class="item-count">
                {let demos = demos.clone(); move || format!("{} items", demos.get().len())}
            </p>
        </div>
    }
}
