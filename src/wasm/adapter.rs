//! `WalletProvider` implementation over the injected Phantom object.
//!
//! Bridges the promise-based JS surface into the typed capability seam:
//! resolved values are decoded with `js_sys` reflection, rejections are
//! mapped onto [`ProviderError`] by reading their `code`/`message`
//! fields, and transactions cross as opaque byte buffers.

use async_trait::async_trait;
use js_sys::{Array, Object, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::phantom::PhantomProvider;
use crate::provider::{
    ConnectOpts, ConnectResponse, DisplayEncoding, EventHandler, ProviderError, ProviderResult,
    SignedMessage, WalletEvent, WalletEventKind, WalletProvider,
};

/// Typed adapter around the injected provider object.
pub struct PhantomAdapter {
    inner: PhantomProvider,
}

impl PhantomAdapter {
    pub fn new(inner: PhantomProvider) -> Self {
        Self { inner }
    }
}

/// Decode a provider rejection `{ code, message }`.
fn rejection(value: JsValue) -> ProviderError {
    let code = Reflect::get(&value, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|c| c as i32);
    let message = Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| String::from("provider rejected the request"));
    ProviderError { code, message }
}

/// Stringify a public-key object via its own `toString()`.
fn pubkey_string(value: &JsValue) -> Option<String> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let object: &Object = value.unchecked_ref();
    let text = String::from(object.to_string());
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn field(value: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(value, &JsValue::from_str(name)).ok()
}

fn decode_event(kind: WalletEventKind, value: &JsValue) -> WalletEvent {
    match kind {
        WalletEventKind::Connect => WalletEvent::Connect {
            account: pubkey_string(value),
        },
        WalletEventKind::Disconnect => WalletEvent::Disconnect,
        WalletEventKind::AccountChanged => WalletEvent::AccountChanged {
            account: pubkey_string(value),
        },
    }
}

#[async_trait(?Send)]
impl WalletProvider for PhantomAdapter {
    fn account(&self) -> Option<String> {
        pubkey_string(&self.inner.public_key())
    }

    fn connected(&self) -> Option<bool> {
        self.inner.is_connected()
    }

    async fn connect(&self, opts: Option<ConnectOpts>) -> ProviderResult<ConnectResponse> {
        let opts = match opts {
            Some(opts) => serde_wasm_bindgen::to_value(&opts)
                .map_err(|err| ProviderError::other(err.to_string()))?,
            None => JsValue::UNDEFINED,
        };
        let response = self.inner.connect(opts).await.map_err(rejection)?;
        let public_key = field(&response, "publicKey")
            .and_then(|v| pubkey_string(&v))
            .ok_or_else(|| ProviderError::other("connect response carried no publicKey"))?;
        Ok(ConnectResponse { public_key })
    }

    async fn disconnect(&self) -> ProviderResult<()> {
        self.inner.disconnect().await.map_err(rejection)?;
        Ok(())
    }

    async fn sign_message(
        &self,
        message: &[u8],
        display: DisplayEncoding,
    ) -> ProviderResult<SignedMessage> {
        let display = serde_wasm_bindgen::to_value(&display).unwrap_or(JsValue::UNDEFINED);
        let response = self
            .inner
            .sign_message(Uint8Array::from(message), display)
            .await
            .map_err(rejection)?;
        let signature = field(&response, "signature")
            .map(|v| Uint8Array::new(&v).to_vec())
            .unwrap_or_default();
        let public_key = field(&response, "publicKey").and_then(|v| pubkey_string(&v));
        Ok(SignedMessage {
            signature,
            public_key,
        })
    }

    async fn sign_transaction(&self, transaction: &[u8]) -> ProviderResult<Vec<u8>> {
        let signed = self
            .inner
            .sign_transaction(Uint8Array::from(transaction).into())
            .await
            .map_err(rejection)?;
        Ok(Uint8Array::new(&signed).to_vec())
    }

    async fn sign_all_transactions(&self, transactions: &[Vec<u8>]) -> ProviderResult<Vec<Vec<u8>>> {
        let payload = Array::new();
        for transaction in transactions {
            payload.push(&Uint8Array::from(transaction.as_slice()));
        }
        let signed = self
            .inner
            .sign_all_transactions(payload)
            .await
            .map_err(rejection)?;
        Ok(Array::from(&signed)
            .iter()
            .map(|tx| Uint8Array::new(&tx).to_vec())
            .collect())
    }

    fn on_event(&self, event: WalletEventKind, mut handler: EventHandler) {
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            handler(decode_event(event, &value));
        });
        self.inner.on(event.as_str(), closure.as_ref().unchecked_ref());
        // Handler lives for the page lifetime.
        closure.forget();
    }
}
