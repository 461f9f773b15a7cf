//! UI Components
//!
//! Leptos components for the demo page, the signed-out gate and toasts.

mod add_demo_form;
mod demo_page;
mod signed_out;
mod toast_list;

pub use add_demo_form::AddDemoForm;
pub use demo_page::DemoPage;
pub use signed_out::SignedOut;
pub use toast_list::ToastList;
