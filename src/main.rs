//! Palavras do Dharma frontend
//!
//! Client-side rendered Leptos app; talks to the Tauri backend over `invoke`.

mod app;
mod components;
mod ipc;
mod models;

fn main() {
    // Surface panics in the browser console
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
