//! Signed Out Component
//!
//! Shown instead of the protected page when no session cookie is present.

use leptos::prelude::*;

use crate::session::Session;

#[component]
pub fn SignedOut(session: Session) -> impl IntoView {
    view! {
        <div class="signed-out">
            <h1>"Sign in required"</h1>
            <p>"You need to sign in to view demo items."</p>
            <button class="btn btn-primary" on:click=move |_| session.sign_in()>
                "Sign In"
            </button>
        </div>
    }
}
