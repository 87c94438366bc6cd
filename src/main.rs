//! Demo Pages Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod markdown;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("DemoPages") {
        web_sys::console::error_1(&format!("logger setup failed: {}", e).into());
    }
    mount_to_body(App);
}
