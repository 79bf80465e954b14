pub mod app;
pub mod components;
pub mod dom;
pub mod models;
pub mod net;
pub mod pages;
pub mod sections;
pub mod server_fns;
pub mod state;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(all(test, feature = "ssr"))]
mod testing;

// Re-export for convenience
pub use app::App;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
