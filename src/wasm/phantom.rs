//! Typed bindings to the injected Phantom provider.
//!
//! Phantom injects one object at `window.solana` and marks it with an
//! `isPhantom` flag. [`locate`] probes for that object and hands back a
//! typed reference; everything else here is the raw JS surface the
//! extension exposes, promises included.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Global binding the extension injects on.
pub const PROVIDER_GLOBAL: &str = "solana";

#[wasm_bindgen]
extern "C" {
    /// The provider object injected by the wallet extension.
    #[derive(Clone)]
    pub type PhantomProvider;

    /// Marker identifying the object as a Phantom implementation.
    #[wasm_bindgen(method, getter, js_name = "isPhantom")]
    pub fn is_phantom(this: &PhantomProvider) -> Option<bool>;

    /// Tri-state connected flag. Unset until the provider decides.
    #[wasm_bindgen(method, getter, js_name = "isConnected")]
    pub fn is_connected(this: &PhantomProvider) -> Option<bool>;

    /// Connected account's public key object, or null/undefined.
    /// Its `toString()` yields the base58 identifier.
    #[wasm_bindgen(method, getter, js_name = "publicKey")]
    pub fn public_key(this: &PhantomProvider) -> JsValue;

    /// Request a connection. Resolves with `{ publicKey }`, rejects with
    /// `{ code, message }` when the user declines.
    #[wasm_bindgen(method, catch)]
    pub async fn connect(this: &PhantomProvider, opts: JsValue) -> Result<JsValue, JsValue>;

    /// Drop the connection. Same rejection shape as `connect`.
    #[wasm_bindgen(method, catch)]
    pub async fn disconnect(this: &PhantomProvider) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = "signMessage")]
    pub async fn sign_message(
        this: &PhantomProvider,
        message: js_sys::Uint8Array,
        display: JsValue,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = "signTransaction")]
    pub async fn sign_transaction(
        this: &PhantomProvider,
        transaction: JsValue,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = "signAllTransactions")]
    pub async fn sign_all_transactions(
        this: &PhantomProvider,
        transactions: js_sys::Array,
    ) -> Result<JsValue, JsValue>;

    /// Subscribe to a lifecycle event ("connect", "disconnect",
    /// "accountChanged").
    #[wasm_bindgen(method)]
    pub fn on(this: &PhantomProvider, event: &str, handler: &js_sys::Function);

    /// Raw RPC escape hatch. Declared by the extension; the connection
    /// view does not use it.
    #[wasm_bindgen(method, catch)]
    pub async fn request(
        this: &PhantomProvider,
        method: &str,
        params: JsValue,
    ) -> Result<JsValue, JsValue>;
}

/// Find the injected provider, if any.
///
/// Reads `window.solana` and checks the `isPhantom` marker. Absence is a
/// normal outcome, not a failure; the probe has no side effects and can
/// be called per action to pick up a binding that changed after mount.
pub fn locate() -> Option<PhantomProvider> {
    let window = web_sys::window()?;
    let candidate = js_sys::Reflect::get(&window, &JsValue::from_str(PROVIDER_GLOBAL)).ok()?;
    if candidate.is_undefined() || candidate.is_null() {
        return None;
    }
    let provider: PhantomProvider = candidate.unchecked_into();
    if provider.is_phantom().unwrap_or(false) {
        Some(provider)
    } else {
        None
    }
}
