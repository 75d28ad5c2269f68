//! WASM entry point for the Leptos CSR app
//!
//! Trunk compiles this to WASM; it mounts the App component to the body.

use leptos::prelude::*;
use travelconnect_ui::App;

fn main() {
    // Panic messages go to the browser console
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! {
            <App />
        }
    })
}
