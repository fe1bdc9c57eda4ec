//! Session store: the single source of truth for who is logged in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component builds one [`SessionStore`] per page load, runs
//! [`SessionStore::initialize`] once, and provides it to the tree as a signal.
//! Route guards read it; the login page and logout buttons are its only
//! mutators.
//!
//! LIFECYCLE
//! =========
//! - Boot: `initializing` is true until the one recovery attempt completes.
//! - Recovery: a stored identity is restored; a corrupt one is purged.
//! - Login: a backend-issued identity replaces the session and is persisted.
//! - Logout: the session and its stored entry are cleared.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use crate::net::error::AuthError;
use crate::net::types::{Credentials, Role, User};
use crate::state::storage::{BrowserStorage, SessionStorage};

/// The store as wired into the browser app.
pub type BrowserSession = SessionStore<BrowserStorage>;

/// Anything that can exchange credentials for an identity.
pub trait AuthBackend {
    /// Authenticate `credentials` against the backend.
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<User, AuthError>>;
}

/// Observable session snapshot consumed by route guards and pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    user: Option<User>,
    initializing: bool,
}

impl SessionState {
    /// State at process start: no user, recovery pending.
    pub fn booting() -> Self {
        Self {
            user: None,
            initializing: true,
        }
    }

    /// Settled state holding `user`. Mostly useful for guard tests.
    pub fn settled(user: Option<User>) -> Self {
        Self {
            user,
            initializing: false,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Role of the current user, if any.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Always exactly `user.is_some()`.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_initializing(&self) -> bool {
        self.initializing
    }
}

/// Outcome of the boot-time recovery attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recovery {
    /// No stored entry (or storage unreadable); logged out.
    Empty,
    /// A stored identity was restored.
    Restored(Role),
    /// The stored entry was malformed and has been removed.
    Purged,
    /// Recovery already ran for this store.
    AlreadyRan,
}

/// Session state plus its durable backing entry.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    state: SessionState,
    storage: S,
    storage_key: String,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Create a store in the booting state. Nothing is read until
    /// [`initialize`](Self::initialize) runs.
    pub fn new(storage: S, storage_key: impl Into<String>) -> Self {
        Self {
            state: SessionState::booting(),
            storage,
            storage_key: storage_key.into(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn is_initializing(&self) -> bool {
        self.state.is_initializing()
    }

    /// Restore the persisted session, once.
    ///
    /// Never fails: unreadable storage counts as an absent entry and a corrupt
    /// entry is removed. `initializing` is false afterwards in every case.
    pub fn initialize(&mut self) -> Recovery {
        if !self.state.initializing {
            return Recovery::AlreadyRan;
        }
        let outcome = self.recover();
        self.state.initializing = false;
        outcome
    }

    fn recover(&mut self) -> Recovery {
        let raw = match self.storage.read(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("session: no stored session");
                return Recovery::Empty;
            }
            Err(err) => {
                log::warn!("session: storage unreadable, starting logged out: {err}");
                return Recovery::Empty;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                let role = user.role;
                log::info!("session: restored {} ({role})", user.username);
                self.state.user = Some(user);
                Recovery::Restored(role)
            }
            Err(err) => {
                log::warn!("session: purging corrupt stored session: {err}");
                if let Err(err) = self.storage.remove(&self.storage_key) {
                    log::warn!("session: failed to purge stored session: {err}");
                }
                Recovery::Purged
            }
        }
    }

    /// Authenticate through `backend` and establish the returned identity.
    ///
    /// The store is only touched after the backend resolves.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`AuthError`]; the session is left unchanged.
    pub async fn login<B: AuthBackend>(
        &mut self,
        backend: &B,
        credentials: &Credentials,
    ) -> Result<Role, AuthError> {
        let outcome = backend.login(credentials).await;
        self.complete_login(outcome)
    }

    /// Apply a resolved login attempt.
    ///
    /// Split from [`login`](Self::login) so UI code can await the backend
    /// without holding the store borrowed, then apply the outcome only if the
    /// requesting view still exists.
    ///
    /// # Errors
    ///
    /// Passes the failure through untouched; the session is left unchanged.
    pub fn complete_login(&mut self, outcome: Result<User, AuthError>) -> Result<Role, AuthError> {
        match outcome {
            Ok(user) => {
                let role = user.role;
                log::info!("session: {} logged in ({role})", user.username);
                self.persist(&user);
                self.state.user = Some(user);
                Ok(role)
            }
            Err(err) => {
                log::warn!("session: login failed: {err}");
                Err(err)
            }
        }
    }

    /// Clear the session and its stored entry. Idempotent.
    pub fn logout(&mut self) {
        if let Some(user) = self.state.user.take() {
            log::info!("session: {} logged out", user.username);
        }
        if let Err(err) = self.storage.remove(&self.storage_key) {
            log::warn!("session: failed to remove stored session: {err}");
        }
    }

    fn persist(&self, user: &User) {
        let raw = match serde_json::to_string(user) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("session: could not serialize identity: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.write(&self.storage_key, &raw) {
            log::warn!("session: identity kept in memory only: {err}");
        }
    }
}
