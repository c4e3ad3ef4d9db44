//! Browser module: the injected-wallet bindings and the Yew view.
//!
//! Architecture:
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        WalletConnect (Yew view)         │
//! │  install prompt / connect / connected   │
//! └─────────────────┬───────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────┐
//! │       PhantomAdapter (capability)       │
//! │  promises → typed results, rejections   │
//! │  → ProviderError                        │
//! └─────────────────┬───────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────┐
//! │     phantom (extern "C" bindings)       │
//! │  window.solana probe + raw JS surface   │
//! └─────────────────────────────────────────┘
//! ```

mod adapter;
mod app;
mod phantom;

pub use adapter::PhantomAdapter;
pub use app::{WalletConnect, INSTALL_URL};
pub use phantom::{locate, PhantomProvider, PROVIDER_GLOBAL};

use wasm_bindgen::prelude::*;

/// Initialize WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Mount the connection view onto the document body.
#[wasm_bindgen(js_name = "runApp")]
pub fn run_app() {
    yew::Renderer::<WalletConnect>::new().render();
}
