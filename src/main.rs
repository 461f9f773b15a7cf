//! Demo Frontend Entry Point

use demo_ui::app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    demo_ui::logging::init();
    mount_to_body(App);
}
