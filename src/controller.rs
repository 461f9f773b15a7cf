//! Action Controller
//!
//! Maps user actions to HTTP calls and keeps the store in sync with the
//! server. Every mutating action refreshes the canonical list instead of
//! patching the local collection: an extra round trip buys consistency
//! with server-assigned fields.

use std::sync::Arc;

use log::{debug, error};

use crate::api::DemoApi;
use crate::error::ApiError;
use crate::models::{Config, Demo};
use crate::store::AppStore;

/// Generic message shown when the list fetch fails.
pub const LOAD_DEMOS_ERROR: &str = "Failed to load demos";

#[derive(Clone)]
pub struct Controller {
    store: AppStore,
    api: Arc<dyn DemoApi>,
}

impl Controller {
    pub fn new(store: AppStore, api: Arc<dyn DemoApi>) -> Self {
        Self { store, api }
    }

    /// Replace the collection with the canonical server list.
    ///
    /// Failures never escape: they become store state (empty collection plus
    /// a generic error message) for the page to render. Overlapping calls
    /// are not coordinated; the last one to settle wins.
    pub async fn load_demos(&self) {
        self.store.set_loading(true);
        self.store.set_error(None);
        match self.api.list_demos().await {
            Ok(demos) => {
                debug!("loaded {} demos", demos.len());
                self.store.set_demos(demos);
            }
            Err(err) => {
                error!("error loading demos: {err}");
                self.store.set_demos(Vec::new());
                self.store.set_error(Some(LOAD_DEMOS_ERROR.to_string()));
            }
        }
        self.store.set_loading(false);
    }

    /// Create an item server-side. The collection is only ever updated via
    /// the awaited refresh, never by splicing the created item in.
    pub async fn create_demo(&self) -> Result<Demo, ApiError> {
        match self.api.create_demo().await {
            Ok(created) => {
                self.load_demos().await;
                Ok(created)
            }
            Err(err) => {
                error!("error creating demo: {err}");
                Err(err)
            }
        }
    }

    pub async fn update_demo(&self, demo: &Demo) -> Result<Demo, ApiError> {
        match self.api.update_demo(demo).await {
            Ok(updated) => {
                self.load_demos().await;
                Ok(updated)
            }
            Err(err) => {
                error!("error updating demo: {err}");
                Err(err)
            }
        }
    }

    pub async fn delete_demo(&self, id: &str) -> Result<(), ApiError> {
        match self.api.delete_demo(id).await {
            Ok(()) => {
                self.load_demos().await;
                Ok(())
            }
            Err(err) => {
                error!("error deleting demo: {err}");
                Err(err)
            }
        }
    }

    /// Hit the always-failing diagnostic endpoint. The error is handed back
    /// untouched so the page can surface the problem details verbatim.
    pub async fn trigger_error(&self) -> Result<(), ApiError> {
        match self.api.trigger_error().await {
            Ok(()) => Ok(()),
            Err(err) => {
                error!("error response: {err}");
                Err(err)
            }
        }
    }

    /// One-shot fetch of the public runtime config. On success the console
    /// log level follows the configured value.
    pub async fn load_config(&self) -> Result<Config, ApiError> {
        match self.api.load_config().await {
            Ok(config) => {
                crate::logging::set_level(&config.log_level);
                self.store.set_config(config.clone());
                Ok(config)
            }
            Err(err) => {
                error!("error loading config: {err}");
                Err(err)
            }
        }
    }
}
