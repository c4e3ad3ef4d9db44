//! The wallet connection view.
//!
//! One Yew function component owning a [`WalletSession`] reducer. On
//! mount it runs the provider lookup once and subscribes to the
//! provider's lifecycle events; afterwards the connect and disconnect
//! buttons each re-read the injected object fresh from the window, run
//! the matching flow, and dispatch the resulting transition.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::adapter::PhantomAdapter;
use super::phantom;
use crate::provider::{WalletEvent, WalletEventKind, WalletProvider};
use crate::session::{
    connect_flow, disconnect_flow, Branch, FailedAction, SessionAction, WalletSession,
};

/// Where to send users who have no wallet extension.
pub const INSTALL_URL: &str = "https://phantom.app/";

impl Reducible for WalletSession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[function_component(WalletConnect)]
pub fn wallet_connect() -> Html {
    let session = use_reducer(WalletSession::default);

    // Mount-time lookup, once. Lifecycle events keep the session honest
    // when the wallet switches accounts or drops us on its own.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let provider = phantom::locate();
            session.dispatch(SessionAction::ProviderDetected(provider.is_some()));
            if let Some(provider) = provider {
                let adapter = PhantomAdapter::new(provider);
                let changed = session.clone();
                adapter.on_event(
                    WalletEventKind::AccountChanged,
                    Box::new(move |event| {
                        if let WalletEvent::AccountChanged { account } = event {
                            changed.dispatch(SessionAction::AccountChanged(account));
                        }
                    }),
                );
                let dropped = session.clone();
                adapter.on_event(
                    WalletEventKind::Disconnect,
                    Box::new(move |_| {
                        dropped.dispatch(SessionAction::Disconnected);
                    }),
                );
            }
        });
    }

    let on_connect = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            spawn_local(async move {
                // Re-read the injected object instead of trusting state
                // captured at mount.
                if let Some(provider) = phantom::locate() {
                    let action = connect_flow(&PhantomAdapter::new(provider)).await;
                    session.dispatch(action);
                }
            });
        })
    };

    let on_disconnect = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            spawn_local(async move {
                if let Some(provider) = phantom::locate() {
                    let action = disconnect_flow(&PhantomAdapter::new(provider)).await;
                    session.dispatch(action);
                }
            });
        })
    };

    let on_dismiss = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::NoticeDismissed))
    };

    let notice = session.notice().map(|notice| {
        let label = match notice.action {
            FailedAction::Connect => "Connect failed",
            FailedAction::Disconnect => "Disconnect failed",
        };
        html! {
            <p class="notice">
                { format!("{label}: {}", notice.message) }
                <button onclick={on_dismiss}>{ "Dismiss" }</button>
            </p>
        }
    });

    let body = match session.branch() {
        Branch::ConnectControl => html! {
            <div>
                <button onclick={on_connect}>{ "Connect Wallet" }</button>
                { for notice }
            </div>
        },
        Branch::Connected(account) => html! {
            <div>
                <p class="connected">{ format!("Connected To: {account}") }</p>
                <button onclick={on_disconnect}>{ "Disconnect" }</button>
                { for notice }
            </div>
        },
        Branch::InstallPrompt => html! {
            <div>
                <p>
                    { "No provider found. Install " }
                    <a href={INSTALL_URL}>{ "Phantom Browser extension" }</a>
                </p>
            </div>
        },
    };

    html! {
        <div class="wallet-connect">
            <h1>{ "Connect to Phantom Wallet" }</h1>
            { body }
        </div>
    }
}
