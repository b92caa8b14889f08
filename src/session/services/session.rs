//! Session handle and the sign-in/sign-up/sign-out service.

use crate::session::{
    domain::{
        AccessToken, Credentials, Identity, Registration, SessionDomainError, SessionState,
        SignUpOutcome,
    },
    ports::{AuthError, AuthProvider},
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// Errors returned by session service operations.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Input validation failed before contacting the service.
    #[error(transparent)]
    Domain(#[from] SessionDomainError),

    /// The auth service failed or refused the request.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Result type for session service operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Shared, observable handle on the current session.
///
/// Clones observe the same state. Components receive a handle explicitly
/// instead of reaching for process-wide state.
#[derive(Debug, Clone)]
pub struct Session {
    state: Arc<watch::Sender<SessionState>>,
}

impl Session {
    fn with_state(state: SessionState) -> Self {
        Self {
            state: Arc::new(watch::Sender::new(state)),
        }
    }

    /// Creates a handle whose identity is still being resolved.
    #[must_use]
    pub fn resolving() -> Self {
        Self::with_state(SessionState::resolving())
    }

    /// Creates a resolved handle with no identity.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::with_state(SessionState::signed_out())
    }

    /// Creates a resolved handle for `identity`.
    #[must_use]
    pub fn signed_in(identity: Identity) -> Self {
        Self::with_state(SessionState::signed_in(identity))
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Returns the current identity, if signed in.
    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.state.borrow().identity.clone()
    }

    /// Returns `true` while the initial resolution is running.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    fn replace(&self, state: SessionState) {
        self.state.send_replace(state);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::resolving()
    }
}

/// Drives the session through the auth provider.
#[derive(Clone)]
pub struct SessionService<A>
where
    A: AuthProvider,
{
    provider: Arc<A>,
    session: Session,
}

impl<A> SessionService<A>
where
    A: AuthProvider,
{
    /// Creates a service whose session starts out resolving.
    #[must_use]
    pub fn new(provider: Arc<A>) -> Self {
        Self {
            provider,
            session: Session::resolving(),
        }
    }

    /// Returns a handle on the managed session.
    #[must_use]
    pub fn session(&self) -> Session {
        self.session.clone()
    }

    /// Resolves a previously stored token into the current identity.
    ///
    /// With no token the session resolves to signed out. A token the service
    /// no longer accepts also resolves to signed out, and the error is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Auth`] when the identity lookup fails.
    pub async fn restore(&self, token: Option<&AccessToken>) -> SessionResult<Option<Identity>> {
        let Some(stored) = token else {
            self.session.replace(SessionState::signed_out());
            return Ok(None);
        };

        match self.provider.current_identity(stored).await {
            Ok(identity) => {
                tracing::debug!(user_id = %identity.user_id(), "restored session");
                self.session
                    .replace(SessionState::signed_in(identity.clone()));
                Ok(Some(identity))
            }
            Err(err) => {
                tracing::warn!(error = %err, "stored session could not be restored");
                self.session.replace(SessionState::signed_out());
                Err(err.into())
            }
        }
    }

    /// Signs in with e-mail and password.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Domain`] for malformed input (no request is
    /// sent) and [`SessionError::Auth`] when the service rejects the
    /// credentials. The session is left unchanged on error.
    pub async fn sign_in(&self, email: &str, password: &str) -> SessionResult<Identity> {
        let credentials = Credentials::new(email, password)?;
        let identity = self
            .provider
            .sign_in(&credentials)
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "sign-in failed"))?;
        tracing::debug!(user_id = %identity.user_id(), "signed in");
        self.session
            .replace(SessionState::signed_in(identity.clone()));
        Ok(identity)
    }

    /// Registers a new account.
    ///
    /// When the service opens a session straight away the handle switches to
    /// the new identity; otherwise it stays as it was until the address is
    /// confirmed and the user signs in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Domain`] for malformed input and
    /// [`SessionError::Auth`] when the service refuses the registration.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> SessionResult<SignUpOutcome> {
        let registration = Registration::new(Credentials::new(email, password)?, display_name)?;
        let outcome = self
            .provider
            .sign_up(&registration)
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "sign-up failed"))?;
        if let SignUpOutcome::SignedIn(identity) = &outcome {
            self.session
                .replace(SessionState::signed_in(identity.clone()));
        }
        Ok(outcome)
    }

    /// Signs out of the current session.
    ///
    /// The local session is cleared even when the service call fails, so a
    /// stale token is never reused.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Auth`] when the service call fails.
    pub async fn sign_out(&self) -> SessionResult<()> {
        let current = self.session.identity();
        self.session.replace(SessionState::signed_out());
        let Some(identity) = current else {
            return Ok(());
        };
        self.provider
            .sign_out(&identity)
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "sign-out failed"))?;
        tracing::debug!(user_id = %identity.user_id(), "signed out");
        Ok(())
    }
}
