//! Demo Page View Logic
//!
//! Transient form state and the user-intent handlers behind the page,
//! kept apart from the rendering components so they can be exercised
//! without a DOM. The confirmation prompt and the notifier are opaque
//! collaborators passed in at construction.

use std::sync::Arc;

use async_trait::async_trait;
use leptos::prelude::*;
use log::info;

use crate::controller::Controller;
use crate::error::ApiError;

pub const CREATE_DEMO_ERROR: &str = "Failed to create demo item. Please try again.";
pub const DELETE_DEMO_ERROR: &str = "Failed to delete demo item. Please try again.";

/// Options for the confirmation prompt.
pub struct ConfirmOptions {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_text: &'static str,
    pub cancel_text: &'static str,
}

/// Blocking question to the user; answering `false` is a no-op, not an error.
#[async_trait(?Send)]
pub trait ConfirmDialog: Send + Sync {
    async fn confirm(&self, options: ConfirmOptions) -> bool;
}

/// Toast-style notifications.
pub trait Notify: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Browser-native confirmation prompt.
pub struct BrowserConfirm;

#[async_trait(?Send)]
impl ConfirmDialog for BrowserConfirm {
    async fn confirm(&self, options: ConfirmOptions) -> bool {
        web_sys::window()
            .and_then(|window| {
                window
                    .confirm_with_message(&format!("{}\n\n{}", options.title, options.message))
                    .ok()
            })
            .unwrap_or(false)
    }
}

/// Page-level state and handlers for the demo list.
///
/// Owns the transient form state exclusively; the store is never touched
/// directly from here, only through the controller.
#[derive(Clone)]
pub struct DemoView {
    controller: Controller,
    confirm: Arc<dyn ConfirmDialog>,
    notify: Arc<dyn Notify>,
    show_add_form: ArcRwSignal<bool>,
    form_submitting: ArcRwSignal<bool>,
    form_error: ArcRwSignal<Option<String>>,
}

impl DemoView {
    pub fn new(
        controller: Controller,
        confirm: Arc<dyn ConfirmDialog>,
        notify: Arc<dyn Notify>,
    ) -> Self {
        Self {
            controller,
            confirm,
            notify,
            show_add_form: ArcRwSignal::new(false),
            form_submitting: ArcRwSignal::new(false),
            form_error: ArcRwSignal::new(None),
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn show_add_form(&self) -> ArcReadSignal<bool> {
        self.show_add_form.read_only()
    }

    pub fn form_submitting(&self) -> ArcReadSignal<bool> {
        self.form_submitting.read_only()
    }

    pub fn form_error(&self) -> ArcReadSignal<Option<String>> {
        self.form_error.read_only()
    }

    /// Form state resets whenever the form opens.
    pub fn toggle_add_form(&self) {
        let open = !self.show_add_form.get_untracked();
        self.show_add_form.set(open);
        if open {
            self.form_error.set(None);
        }
    }

    pub async fn on_retry(&self) {
        self.controller.load_demos().await;
    }

    pub async fn on_submit_add(&self) {
        self.form_submitting.set(true);
        self.form_error.set(None);

        match self.controller.create_demo().await {
            Ok(_) => {
                self.notify.success("Demo item created successfully");
                self.show_add_form.set(false);
            }
            Err(_) => {
                self.form_error.set(Some(CREATE_DEMO_ERROR.to_string()));
            }
        }
        self.form_submitting.set(false);
    }

    /// Delete is only ever issued after an affirmative confirmation.
    pub async fn delete_demo(&self, id: &str) {
        let confirmed = self
            .confirm
            .confirm(ConfirmOptions {
                title: "Delete Demo Item",
                message: "Are you sure you want to delete this demo item? \
                          This action cannot be undone.",
                confirm_text: "Delete",
                cancel_text: "Cancel",
            })
            .await;
        if !confirmed {
            return;
        }

        match self.controller.delete_demo(id).await {
            Ok(()) => self.notify.success("Demo item deleted successfully"),
            Err(_) => self.notify.error(DELETE_DEMO_ERROR),
        }
    }

    /// Diagnostic path: the problem's title and detail are surfaced
    /// verbatim instead of a generic message.
    pub async fn test_error_handling(&self) {
        match self.controller.trigger_error().await {
            Ok(()) => self
                .notify
                .error("Error endpoint should have thrown an error!"),
            Err(err) => {
                info!("problem details: {err}");
                self.notify.error(&format_problem(&err));
            }
        }
    }
}

fn format_problem(err: &ApiError) -> String {
    match err.problem() {
        Some(problem) => {
            let title = problem.title.as_deref().unwrap_or("Error");
            format!("{title}: {}", problem.message())
        }
        None => format!("Error: {err}"),
    }
}
