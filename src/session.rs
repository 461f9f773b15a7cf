//! Session State
//!
//! Sign-in is a full-page browser navigation, never a background fetch:
//! the identity provider walks the browser through authorize, user
//! authentication, callback and session-cookie issuance before landing
//! back on the app. After reload the app asks the user endpoint who owns
//! the cookie and gates the protected page on the answer.

use std::sync::Arc;

use leptos::prelude::*;
use log::{info, warn};

use crate::api::DemoApi;
use crate::models::SessionInfo;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Initialization has not completed yet; nothing protected renders.
    #[default]
    Unknown,
    SignedIn(SessionInfo),
    SignedOut,
}

#[derive(Clone)]
pub struct Session {
    state: ArcRwSignal<AuthState>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: ArcRwSignal::new(AuthState::Unknown),
        }
    }

    pub fn state(&self) -> ArcReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Resolve the cookie session before any protected view is shown.
    /// Any failure, including 401, means signed out.
    pub async fn initialize(&self, api: &Arc<dyn DemoApi>) {
        match api.current_user().await {
            Ok(user) => {
                info!("signed in as {}", user.username);
                self.state.set(AuthState::SignedIn(user));
            }
            Err(err) => {
                warn!("no active session: {err}");
                self.state.set(AuthState::SignedOut);
            }
        }
    }

    /// Kick off the redirect chain by navigating the whole page.
    pub fn sign_in(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/api/auth/login");
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
