//! Test doubles for the API boundary and the view collaborators.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::DemoApi;
use crate::error::ApiError;
use crate::models::{Config, Demo, Problem, SessionInfo};
use crate::view::{ConfirmDialog, ConfirmOptions, Notify};

pub(crate) fn demos(ids: &[&str]) -> Vec<Demo> {
    ids.iter().map(|id| Demo { id: (*id).to_string() }).collect()
}

pub(crate) fn problem_error(title: &str, detail: &str) -> ApiError {
    ApiError::Problem(Problem {
        title: Some(title.to_string()),
        detail: Some(detail.to_string()),
        ..Problem::default()
    })
}

/// Recording `DemoApi` double. Responses are queued per operation; when
/// nothing is queued a benign default answers instead.
#[derive(Default)]
pub(crate) struct MockApi {
    list_responses: Mutex<VecDeque<Result<Vec<Demo>, ApiError>>>,
    list_calls: AtomicUsize,
    create_response: Mutex<Option<Result<Demo, ApiError>>>,
    create_calls: AtomicUsize,
    update_response: Mutex<Option<Result<Demo, ApiError>>>,
    delete_response: Mutex<Option<Result<(), ApiError>>>,
    delete_calls: AtomicUsize,
    error_response: Mutex<Option<Result<(), ApiError>>>,
    config_response: Mutex<Option<Result<Config, ApiError>>>,
    user_response: Mutex<Option<Result<SessionInfo, ApiError>>>,
}

impl MockApi {
    pub fn with_list(demos: Vec<Demo>) -> Arc<Self> {
        let api = Arc::new(Self::default());
        api.push_list(Ok(demos));
        api
    }

    pub fn push_list(&self, response: Result<Vec<Demo>, ApiError>) {
        self.list_responses.lock().unwrap().push_back(response);
    }

    pub fn set_create(&self, response: Result<Demo, ApiError>) {
        *self.create_response.lock().unwrap() = Some(response);
    }

    pub fn set_update(&self, response: Result<Demo, ApiError>) {
        *self.update_response.lock().unwrap() = Some(response);
    }

    pub fn set_delete(&self, response: Result<(), ApiError>) {
        *self.delete_response.lock().unwrap() = Some(response);
    }

    pub fn set_error(&self, response: Result<(), ApiError>) {
        *self.error_response.lock().unwrap() = Some(response);
    }

    pub fn set_config(&self, response: Result<Config, ApiError>) {
        *self.config_response.lock().unwrap() = Some(response);
    }

    pub fn set_user(&self, response: Result<SessionInfo, ApiError>) {
        *self.user_response.lock().unwrap() = Some(response);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl DemoApi for MockApi {
    async fn list_demos(&self) -> Result<Vec<Demo>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create_demo(&self) -> Result<Demo, ApiError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.create_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Demo { id: "123".into() }))
    }

    async fn update_demo(&self, demo: &Demo) -> Result<Demo, ApiError> {
        self.update_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(demo.clone()))
    }

    async fn delete_demo(&self, _id: &str) -> Result<(), ApiError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.delete_response.lock().unwrap().take().unwrap_or(Ok(()))
    }

    async fn trigger_error(&self) -> Result<(), ApiError> {
        self.error_response.lock().unwrap().take().unwrap_or_else(|| {
            Err(problem_error("Demo Error", "This endpoint always fails"))
        })
    }

    async fn load_config(&self) -> Result<Config, ApiError> {
        self.config_response.lock().unwrap().take().unwrap_or_else(|| {
            Ok(Config {
                log_level: "info".into(),
            })
        })
    }

    async fn current_user(&self) -> Result<SessionInfo, ApiError> {
        self.user_response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(problem_error("Unauthorized", "no session")))
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotify {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotify {
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notify for RecordingNotify {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Confirmation prompt that always answers the same way.
pub(crate) struct StaticConfirm {
    answer: bool,
    calls: AtomicUsize,
}

impl StaticConfirm {
    pub fn answering(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl ConfirmDialog for StaticConfirm {
    async fn confirm(&self, _options: ConfirmOptions) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}
