//! In-memory auth provider for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::session::{
    domain::{AccessToken, Credentials, Identity, Registration, SignUpOutcome, UserId},
    ports::{AuthError, AuthProvider, AuthResult},
};

/// Thread-safe in-memory auth provider.
///
/// Accounts are keyed by e-mail address. When built with
/// [`InMemoryAuthProvider::requiring_confirmation`], sign-up never opens a
/// session, mirroring a service that sends confirmation e-mails.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuthProvider {
    state: Arc<RwLock<InMemoryAuthState>>,
    require_confirmation: bool,
}

#[derive(Debug, Default)]
struct InMemoryAuthState {
    accounts: HashMap<String, Account>,
    sessions: HashMap<String, String>,
}

#[derive(Debug, Clone)]
struct Account {
    user_id: UserId,
    password: String,
    display_name: Option<String>,
}

impl InMemoryAuthProvider {
    /// Creates a provider with no accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider whose sign-ups require e-mail confirmation.
    #[must_use]
    pub fn requiring_confirmation() -> Self {
        Self {
            require_confirmation: true,
            ..Self::default()
        }
    }

    /// Registers an account directly, bypassing sign-up.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] when the address is already taken.
    pub fn register(&self, credentials: &Credentials) -> AuthResult<UserId> {
        let mut state = self.write_state()?;
        insert_account(&mut state, credentials, None)
    }

    fn write_state(&self) -> AuthResult<std::sync::RwLockWriteGuard<'_, InMemoryAuthState>> {
        self.state
            .write()
            .map_err(|err| AuthError::transport(std::io::Error::other(err.to_string())))
    }

    fn read_state(&self) -> AuthResult<std::sync::RwLockReadGuard<'_, InMemoryAuthState>> {
        self.state
            .read()
            .map_err(|err| AuthError::transport(std::io::Error::other(err.to_string())))
    }
}

fn insert_account(
    state: &mut InMemoryAuthState,
    credentials: &Credentials,
    display_name: Option<String>,
) -> AuthResult<UserId> {
    if state.accounts.contains_key(credentials.email()) {
        return Err(AuthError::Rejected {
            status: 422,
            message: "user already registered".to_owned(),
        });
    }
    let user_id = UserId::new();
    state.accounts.insert(
        credentials.email().to_owned(),
        Account {
            user_id,
            password: credentials.password().to_owned(),
            display_name,
        },
    );
    Ok(user_id)
}

fn open_session(state: &mut InMemoryAuthState, email: &str, account: &Account) -> Identity {
    let token = Uuid::new_v4().to_string();
    state.sessions.insert(token.clone(), email.to_owned());
    identity_for(email, account, AccessToken::new(token))
}

fn identity_for(email: &str, account: &Account, token: AccessToken) -> Identity {
    let identity = Identity::new(account.user_id, email, token);
    match &account.display_name {
        Some(name) => identity.with_display_name(name.clone()),
        None => identity,
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Identity> {
        let mut state = self.write_state()?;
        let account = state
            .accounts
            .get(credentials.email())
            .filter(|account| account.password == credentials.password())
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;
        Ok(open_session(&mut state, credentials.email(), &account))
    }

    async fn sign_up(&self, registration: &Registration) -> AuthResult<SignUpOutcome> {
        let mut state = self.write_state()?;
        let credentials = registration.credentials();
        insert_account(
            &mut state,
            credentials,
            Some(registration.display_name().to_owned()),
        )?;

        if self.require_confirmation {
            return Ok(SignUpOutcome::ConfirmationRequired {
                email: credentials.email().to_owned(),
            });
        }

        let account = state
            .accounts
            .get(credentials.email())
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;
        Ok(SignUpOutcome::SignedIn(open_session(
            &mut state,
            credentials.email(),
            &account,
        )))
    }

    async fn sign_out(&self, identity: &Identity) -> AuthResult<()> {
        let mut state = self.write_state()?;
        state.sessions.remove(identity.access_token().expose());
        Ok(())
    }

    async fn current_identity(&self, token: &AccessToken) -> AuthResult<Identity> {
        let state = self.read_state()?;
        let email = state
            .sessions
            .get(token.expose())
            .ok_or(AuthError::InvalidToken)?;
        let account = state.accounts.get(email).ok_or(AuthError::InvalidToken)?;
        Ok(identity_for(email, account, token.clone()))
    }
}
