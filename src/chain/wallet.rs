//! Wallet connection session.
//!
//! A `WalletSession` owns its connector outright; components that need
//! the connected account borrow the session. Disconnect listeners are
//! registered on the session and fire exactly once per connected account,
//! whether the player disconnects locally or the wallet drops the link.

use std::future::Future;

use crate::core::{Notifier, TracingNotifier};
use crate::error::WalletError;

/// External wallet SDK.
pub trait WalletConnector {
    /// Ask the wallet for accounts, prompting the player.
    fn connect(&mut self) -> impl Future<Output = Result<Vec<String>, WalletError>>;

    /// Resume a previously approved session. Empty when there is none.
    fn reconnect_session(&mut self) -> impl Future<Output = Result<Vec<String>, WalletError>>;

    /// Tear down the link on the wallet side.
    fn disconnect(&mut self);
}

type DisconnectListener = Box<dyn FnMut(&str)>;

/// Explicitly owned wallet connection.
pub struct WalletSession<C> {
    connector: C,
    account: Option<String>,
    listeners: Vec<DisconnectListener>,
    notifier: Box<dyn Notifier>,
}

impl<C: WalletConnector> WalletSession<C> {
    /// Create a disconnected session.
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            account: None,
            listeners: Vec::new(),
            notifier: Box::new(TracingNotifier),
        }
    }

    /// Route notices to `notifier`.
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// The connected account, if any.
    #[must_use]
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// Check if an account is connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// The underlying connector.
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Register a callback for when the connected account goes away.
    pub fn on_disconnect(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Connect and adopt the wallet's first account.
    pub async fn connect(&mut self) -> Result<&str, WalletError> {
        let result = self
            .connector
            .connect()
            .await
            .and_then(|accounts| accounts.into_iter().next().ok_or(WalletError::NoAccounts));

        match result {
            Ok(account) => Ok(self.adopt(account)),
            Err(e) => {
                tracing::warn!("wallet connect failed: {e}");
                self.notifier.notify(&e.to_string());
                Err(e)
            }
        }
    }

    /// Resume a prior session. `Ok(None)` when the wallet has none.
    pub async fn reconnect(&mut self) -> Result<Option<&str>, WalletError> {
        let accounts = match self.connector.reconnect_session().await {
            Ok(accounts) => accounts,
            Err(e) => {
                tracing::warn!("wallet reconnect failed: {e}");
                self.notifier.notify(&e.to_string());
                return Err(e);
            }
        };

        Ok(match accounts.into_iter().next() {
            Some(account) => Some(self.adopt(account)),
            None => None,
        })
    }

    /// Disconnect at the player's request.
    pub fn disconnect(&mut self) {
        self.connector.disconnect();
        self.release();
    }

    /// The wallet reported that it dropped the link.
    pub fn handle_remote_disconnect(&mut self) {
        self.release();
    }

    fn adopt(&mut self, account: String) -> &str {
        if self.account.as_deref().is_some_and(|current| current != account) {
            self.release();
        }
        tracing::info!("connected wallet account {account}");
        self.notifier.notify("Connected to wallet");
        self.account.insert(account)
    }

    fn release(&mut self) {
        if let Some(account) = self.account.take() {
            tracing::info!("wallet account {account} disconnected");
            for listener in &mut self.listeners {
                listener(&account);
            }
        }
    }
}

impl<C> std::fmt::Debug for WalletSession<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletSession")
            .field("account", &self.account)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
