#![allow(non_snake_case)]

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod routes;

pub use app::{shell, App};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use tracing_subscriber::prelude::*;

    console_error_panic_hook::set_once();

    let consoleLayer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());
    tracing_subscriber::registry().with(consoleLayer).init();

    leptos::mount::hydrate_body(App);
}
