//! Connection view state.
//!
//! [`WalletSession`] is a pure state cell: every mutation goes through
//! [`WalletSession::apply`], so the whole branch table is testable off
//! the browser. The view renders one of three mutually exclusive
//! branches:
//!
//! | provider | account | branch |
//! |----------|---------|--------|
//! | present  | absent  | connect control |
//! | present  | present | connected indicator + disconnect control |
//! | absent   | —       | install prompt |
//!
//! A rejected connect or disconnect never escapes as an error. It is
//! folded into an [`ActionNotice`] the view may show and the user may
//! dismiss; the account cell itself keeps the last known value.

use crate::provider::{ProviderError, WalletProvider};

/// Which user action a rejection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedAction {
    Connect,
    Disconnect,
}

/// Recoverable record of the last rejected action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionNotice {
    pub action: FailedAction,
    pub message: String,
}

/// Render branch selected from the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch<'a> {
    /// No compatible provider in the host environment.
    InstallPrompt,
    /// Provider present, nothing connected yet.
    ConnectControl,
    /// Provider present and an account connected.
    Connected(&'a str),
}

/// State transitions of the connection view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Outcome of the mount-time provider lookup.
    ProviderDetected(bool),
    /// Connect resolved with the account's public key string.
    Connected(String),
    ConnectRejected(ProviderError),
    /// Disconnect resolved, or the provider emitted its disconnect event.
    Disconnected,
    DisconnectRejected(ProviderError),
    /// Provider-side account switch. `None` clears the account.
    AccountChanged(Option<String>),
    NoticeDismissed,
}

/// View-local wallet connection state.
///
/// The account identifier can only become non-empty through
/// [`SessionAction::Connected`] while a provider is detected, so a
/// connected indicator is never rendered without a prior successful
/// connect response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletSession {
    provider_detected: bool,
    account: Option<String>,
    notice: Option<ActionNotice>,
}

impl WalletSession {
    pub fn provider_detected(&self) -> bool {
        self.provider_detected
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn notice(&self) -> Option<&ActionNotice> {
        self.notice.as_ref()
    }

    /// Select the render branch. Pure function of state.
    pub fn branch(&self) -> Branch<'_> {
        if !self.provider_detected {
            return Branch::InstallPrompt;
        }
        match self.account.as_deref() {
            Some(account) => Branch::Connected(account),
            None => Branch::ConnectControl,
        }
    }

    /// Apply one transition, producing the next state.
    pub fn apply(&self, action: SessionAction) -> WalletSession {
        let mut next = self.clone();
        match action {
            SessionAction::ProviderDetected(found) => {
                next.provider_detected = found;
                if !found {
                    next.account = None;
                }
            }
            SessionAction::Connected(public_key) => {
                if next.provider_detected && !public_key.is_empty() {
                    next.account = Some(public_key);
                    next.notice = None;
                }
            }
            SessionAction::ConnectRejected(err) => {
                next.notice = Some(ActionNotice {
                    action: FailedAction::Connect,
                    message: err.message,
                });
            }
            SessionAction::Disconnected => {
                next.account = None;
                next.notice = None;
            }
            SessionAction::DisconnectRejected(err) => {
                // The account may now be stale; a provider disconnect
                // event will clear it if the wallet really dropped us.
                next.notice = Some(ActionNotice {
                    action: FailedAction::Disconnect,
                    message: err.message,
                });
            }
            SessionAction::AccountChanged(account) => {
                if next.provider_detected {
                    next.account = account.filter(|a| !a.is_empty());
                }
            }
            SessionAction::NoticeDismissed => {
                next.notice = None;
            }
        }
        next
    }
}

/// Run the user-triggered connect operation against a freshly located
/// provider and report the transition to apply.
///
/// Connects without options, so the wallet prompts even for sessions it
/// has not trusted before. A rejection is returned as a transition, not
/// an error.
pub async fn connect_flow<P: WalletProvider + ?Sized>(provider: &P) -> SessionAction {
    match provider.connect(None).await {
        Ok(response) => {
            tracing::info!(account = %response.public_key, "wallet connected");
            SessionAction::Connected(response.public_key)
        }
        Err(err) => SessionAction::ConnectRejected(err),
    }
}

/// Run the user-triggered disconnect operation. A rejection leaves the
/// session untouched apart from the notice.
pub async fn disconnect_flow<P: WalletProvider + ?Sized>(provider: &P) -> SessionAction {
    match provider.disconnect().await {
        Ok(()) => SessionAction::Disconnected,
        Err(err) => SessionAction::DisconnectRejected(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;

    fn detected() -> WalletSession {
        WalletSession::default().apply(SessionAction::ProviderDetected(true))
    }

    fn connected(key: &str) -> WalletSession {
        detected().apply(SessionAction::Connected(key.to_string()))
    }

    #[test]
    fn test_branch_table() {
        // absent provider: install prompt regardless of anything else
        let session = WalletSession::default();
        assert_eq!(session.branch(), Branch::InstallPrompt);

        // provider present, account absent: connect control
        assert_eq!(detected().branch(), Branch::ConnectControl);

        // provider present, account present: connected indicator
        let session = connected("ABC123");
        assert_eq!(session.branch(), Branch::Connected("ABC123"));
    }

    #[test]
    fn test_no_account_without_provider() {
        // a connect response arriving with no detected provider is dropped
        let session = WalletSession::default().apply(SessionAction::Connected("ABC123".into()));
        assert_eq!(session.account(), None);
        assert_eq!(session.branch(), Branch::InstallPrompt);
    }

    #[test]
    fn test_empty_identifier_is_not_an_account() {
        let session = detected().apply(SessionAction::Connected(String::new()));
        assert_eq!(session.account(), None);
        assert_eq!(session.branch(), Branch::ConnectControl);
    }

    #[test]
    fn test_detection_failure_clears_account() {
        let session = connected("ABC123").apply(SessionAction::ProviderDetected(false));
        assert_eq!(session.account(), None);
        assert_eq!(session.branch(), Branch::InstallPrompt);
    }

    #[test]
    fn test_connect_rejection_leaves_account_absent() {
        let session = detected().apply(SessionAction::ConnectRejected(
            ProviderError::user_rejected(),
        ));
        assert_eq!(session.account(), None);
        assert_eq!(session.branch(), Branch::ConnectControl);
        let notice = session.notice().expect("notice");
        assert_eq!(notice.action, FailedAction::Connect);
        assert_eq!(notice.message, "User rejected the request.");
    }

    #[test]
    fn test_disconnect_rejection_leaves_account_unchanged() {
        let session = connected("ABC123").apply(SessionAction::DisconnectRejected(
            ProviderError::user_rejected(),
        ));
        assert_eq!(session.account(), Some("ABC123"));
        assert_eq!(session.branch(), Branch::Connected("ABC123"));
        assert_eq!(
            session.notice().map(|n| n.action),
            Some(FailedAction::Disconnect)
        );
    }

    #[test]
    fn test_disconnect_clears_account_and_notice() {
        let session = connected("ABC123")
            .apply(SessionAction::DisconnectRejected(
                ProviderError::user_rejected(),
            ))
            .apply(SessionAction::Disconnected);
        assert_eq!(session.account(), None);
        assert_eq!(session.notice(), None);
        assert_eq!(session.branch(), Branch::ConnectControl);
    }

    #[test]
    fn test_account_changed_event() {
        let session = connected("ABC123").apply(SessionAction::AccountChanged(Some("DEF456".into())));
        assert_eq!(session.account(), Some("DEF456"));

        let session = session.apply(SessionAction::AccountChanged(None));
        assert_eq!(session.account(), None);
        assert_eq!(session.branch(), Branch::ConnectControl);

        // event with no detected provider is ignored
        let session = WalletSession::default().apply(SessionAction::AccountChanged(Some("X".into())));
        assert_eq!(session.account(), None);
    }

    #[test]
    fn test_successful_connect_clears_stale_notice() {
        let session = detected()
            .apply(SessionAction::ConnectRejected(
                ProviderError::user_rejected(),
            ))
            .apply(SessionAction::Connected("ABC123".into()));
        assert_eq!(session.account(), Some("ABC123"));
        assert_eq!(session.notice(), None);
    }

    #[test]
    fn test_notice_dismissed() {
        let session = detected()
            .apply(SessionAction::ConnectRejected(
                ProviderError::user_rejected(),
            ))
            .apply(SessionAction::NoticeDismissed);
        assert_eq!(session.notice(), None);
    }
}
