//! Add Demo Form Component
//!
//! The server assigns every field on creation, so the form is just a
//! submit with inline error and in-flight state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::view::DemoView;

#[component]
pub fn AddDemoForm(model: DemoView) -> impl IntoView {
    let submitting = model.form_submitting();
    let form_error = model.form_error();

    let on_submit = {
        let model = model.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let model = model.clone();
            spawn_local(async move { model.on_submit_add().await });
        }
    };

    view! {
        <form class="add-demo-form" on:submit=on_submit>
            <p>"Create a new demo item. The server assigns the id."</p>
            {
                let form_error = form_error.clone();
                move || form_error.get().map(|message| view! {
                    <div class="form-error">{message}</div>
                })
            }
            <button
                type="submit"
                disabled={let submitting = submitting.clone(); move || submitting.get()}
            >
                {
                    let submitting = submitting.clone();
                    move || if submitting.get() { "Creating..." } else { "Create" }
                }
            </button>
        </form>
    }
}
