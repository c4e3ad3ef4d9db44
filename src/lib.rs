//! Solconnect: browser connection view for a Phantom-style injected
//! Solana wallet.
//!
//! # Architecture
//!
//! ```text
//! WalletConnect (Yew view, wasm32)
//!   │
//!   ├── WalletSession (pure state)
//!   │     provider presence + account identifier + action notice
//!   │     branch(): install prompt / connect / connected
//!   │
//!   └── WalletProvider (capability seam)
//!         ├── PhantomAdapter → window.solana (wasm32)
//!         └── fakes (tests)
//! ```
//!
//! The wallet extension keeps custody of keys and does all signing; this
//! crate only finds the injected provider, asks it to connect or
//! disconnect, and mirrors the outcome into view state. The seam is
//! explicit so the whole state model tests off the browser.
//!
//! # Usage
//!
//! ```ignore
//! use solconnect::{connect_flow, SessionAction, WalletSession};
//!
//! let session = WalletSession::default()
//!     .apply(SessionAction::ProviderDetected(true));
//! let action = connect_flow(&provider).await;
//! let session = session.apply(action);
//! ```

// =============================================================================
// Shared modules (compile everywhere)
// =============================================================================
pub mod provider;
pub mod session;

// =============================================================================
// Browser-only modules (wasm-bindgen, Yew)
// =============================================================================
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// =============================================================================
// Re-exports: Shared
// =============================================================================
pub use provider::{
    ConnectOpts, ConnectResponse, DisplayEncoding, EventHandler, ProviderError, ProviderResult,
    SignedMessage, WalletEvent, WalletEventKind, WalletProvider,
};
pub use session::{
    connect_flow, disconnect_flow, ActionNotice, Branch, FailedAction, SessionAction, WalletSession,
};

// =============================================================================
// Re-exports: Browser
// =============================================================================
#[cfg(target_arch = "wasm32")]
pub use wasm::{locate, PhantomAdapter, PhantomProvider, WalletConnect};
