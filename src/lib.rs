//! Demo CRUD Frontend
//!
//! Leptos CSR single-page app for the "Demo" resource. The store holds the
//! last server-derived state, the controller maps user actions to HTTP calls
//! and refreshes the canonical list after every mutation, and sign-in runs
//! through a full-page redirect handshake with the identity provider.

pub mod api;
pub mod app;
pub mod components;
pub mod controller;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod store;
pub mod toast;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;
