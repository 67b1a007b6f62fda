#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;

/// Install panic/log hooks and mount the app.
pub fn start() {
    use app::App;
    console_error_panic_hook::set_once();
    services::logging::init();
    // Client-side only rendering (no SSR)
    leptos::mount::mount_to_body(App);
}
