//! Application State Store
//!
//! Holds the last server-derived state as independently observable values.
//! Setters replace wholesale and never merge or validate; only the
//! controller writes here. Everything runs on the single UI task.

use leptos::prelude::*;

use crate::models::{Config, Demo};

#[derive(Clone)]
pub struct AppStore {
    demos: ArcRwSignal<Vec<Demo>>,
    loading: ArcRwSignal<bool>,
    error: ArcRwSignal<Option<String>>,
    config: ArcRwSignal<Option<Config>>,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            demos: ArcRwSignal::new(Vec::new()),
            loading: ArcRwSignal::new(false),
            error: ArcRwSignal::new(None),
            config: ArcRwSignal::new(None),
        }
    }

    pub fn demos(&self) -> ArcReadSignal<Vec<Demo>> {
        self.demos.read_only()
    }

    pub fn loading(&self) -> ArcReadSignal<bool> {
        self.loading.read_only()
    }

    pub fn error(&self) -> ArcReadSignal<Option<String>> {
        self.error.read_only()
    }

    pub fn config(&self) -> ArcReadSignal<Option<Config>> {
        self.config.read_only()
    }

    pub fn set_demos(&self, demos: Vec<Demo>) {
        self.demos.set(demos);
    }

    pub fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    pub fn set_error(&self, error: Option<String>) {
        self.error.set(error);
    }

    pub fn set_config(&self, config: Config) {
        self.config.set(Some(config));
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}
