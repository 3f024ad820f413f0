//! Hong Kong Lunar New Year red-packet calculator.
//!
//! Tally banknotes by denomination, show a deposit report for the bank
//! teller, and browse a few illustrative savings charts.

pub mod app;
pub mod chart;
pub mod components;
pub mod content;
pub mod error;
pub mod format;
pub mod settings;
pub mod tally;
pub mod view;

pub use error::{AppError, Result};

/// Installs the panic hook and console logging, then mounts the app on `<body>`.
pub fn run() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("starting red-packet calculator");
    yew::Renderer::<app::App>::new().render();
}
