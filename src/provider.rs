//! The wallet capability contract.
//!
//! Everything the view needs from a wallet lives behind [`WalletProvider`]:
//! account custody, signing, and lifecycle events all happen inside the
//! provider (in the browser, a wallet extension injected into the page).
//! The view only discovers a provider, calls `connect`/`disconnect`, and
//! mirrors the result into its own state.
//!
//! Production code supplies `PhantomAdapter` (wasm32); tests supply a fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Rejection from the wallet provider.
///
/// Providers reject with an object carrying a numeric code and a message,
/// e.g. `{ code: 4001, message: "User rejected the request." }` when the
/// user declines the permission prompt. Non-conforming rejections carry
/// no code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("wallet provider rejected the request: {message}")]
pub struct ProviderError {
    pub code: Option<i32>,
    pub message: String,
}

impl ProviderError {
    /// Code sent by wallets when the user declines the permission prompt.
    pub const USER_REJECTED_CODE: i32 = 4001;

    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    /// Rejection without a numeric code.
    pub fn other(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn user_rejected() -> Self {
        Self::new(Self::USER_REJECTED_CODE, "User rejected the request.")
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == Some(Self::USER_REJECTED_CODE)
    }
}

/// Options for [`WalletProvider::connect`].
///
/// `only_if_trusted` restricts the connect to sessions the user has
/// already approved, skipping the permission prompt. The connection view
/// always connects without options so first-time users get the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectOpts {
    pub only_if_trusted: bool,
}

/// Successful connect response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectResponse {
    /// String form of the connected account's public key.
    pub public_key: String,
}

/// Encoding hint for `sign_message` payloads, wire-spelled as the
/// provider expects it ("utf8" / "hex").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayEncoding {
    Utf8,
    Hex,
}

/// Signature produced by `sign_message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedMessage {
    pub signature: Vec<u8>,
    /// Signing account, when the provider reports one.
    pub public_key: Option<String>,
}

/// Lifecycle events a provider can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletEventKind {
    Connect,
    Disconnect,
    AccountChanged,
}

impl WalletEventKind {
    /// Event name as the provider spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletEventKind::Connect => "connect",
            WalletEventKind::Disconnect => "disconnect",
            WalletEventKind::AccountChanged => "accountChanged",
        }
    }
}

/// Decoded lifecycle event payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    Connect { account: Option<String> },
    Disconnect,
    AccountChanged { account: Option<String> },
}

/// Handler registered for provider lifecycle events. Handlers live for
/// the lifetime of the page.
pub type EventHandler = Box<dyn FnMut(WalletEvent)>;

/// The capability set of an injected wallet provider.
///
/// Absence of a provider is modeled at the locator, not here: once a
/// `WalletProvider` exists, its operations either resolve or reject with
/// a [`ProviderError`]. Transactions cross this boundary as opaque
/// serialized bytes; building and decoding them is the caller's business.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Currently connected account, if the provider exposes one.
    fn account(&self) -> Option<String>;

    /// Connected flag as reported by the provider. `None` when the
    /// provider has not decided yet.
    fn connected(&self) -> Option<bool>;

    /// Request a connection. Prompts the user unless `opts` restricts
    /// the call to already-trusted sessions.
    async fn connect(&self, opts: Option<ConnectOpts>) -> ProviderResult<ConnectResponse>;

    /// Drop the current connection.
    async fn disconnect(&self) -> ProviderResult<()>;

    async fn sign_message(
        &self,
        message: &[u8],
        display: DisplayEncoding,
    ) -> ProviderResult<SignedMessage>;

    async fn sign_transaction(&self, transaction: &[u8]) -> ProviderResult<Vec<u8>>;

    async fn sign_all_transactions(&self, transactions: &[Vec<u8>]) -> ProviderResult<Vec<Vec<u8>>>;

    /// Subscribe to a lifecycle event.
    fn on_event(&self, event: WalletEventKind, handler: EventHandler);
}
