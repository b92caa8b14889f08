//! REST adapter for the hosted auth service (`/auth/v1`).

use async_trait::async_trait;
use reqwest::{Method, Response};
use serde::{Deserialize, Serialize};

use crate::backend::{BackendClient, ServiceFailure};
use crate::session::{
    domain::{AccessToken, Credentials, Identity, Registration, SignUpOutcome, UserId},
    ports::{AuthError, AuthProvider, AuthResult},
};

const TOKEN_PATH: &str = "/auth/v1/token?grant_type=password";
const SIGNUP_PATH: &str = "/auth/v1/signup";
const LOGOUT_PATH: &str = "/auth/v1/logout";
const USER_PATH: &str = "/auth/v1/user";

/// Auth provider backed by the hosted auth API.
#[derive(Debug, Clone)]
pub struct RestAuthProvider {
    client: BackendClient,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    display_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct UserBody {
    id: UserId,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    display_name: Option<String>,
}

/// Session payload; sign-up answers with a bare user when confirmation is
/// pending, so every field is optional.
#[derive(Debug, Deserialize)]
struct SessionBody {
    #[serde(default)]
    access_token: Option<AccessToken>,
    #[serde(default)]
    user: Option<UserBody>,
    #[serde(default)]
    email: Option<String>,
}

impl UserBody {
    fn into_identity(self, fallback_email: &str, token: AccessToken) -> Identity {
        let email = self.email.unwrap_or_else(|| fallback_email.to_owned());
        let identity = Identity::new(self.id, email, token);
        match self.user_metadata.display_name {
            Some(name) => identity.with_display_name(name),
            None => identity,
        }
    }
}

impl RestAuthProvider {
    /// Creates a provider using `client`.
    #[must_use]
    pub const fn new(client: BackendClient) -> Self {
        Self { client }
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        classify: fn(ServiceFailure) -> AuthError,
    ) -> AuthResult<Response> {
        let response = request.send().await.map_err(transport_error)?;
        if response.status().is_success() {
            return Ok(response);
        }
        let failure = ServiceFailure::from_response(response).await;
        tracing::warn!(
            status = failure.status,
            message = %failure.message,
            "auth request failed"
        );
        Err(classify(failure))
    }
}

fn transport_error(err: reqwest::Error) -> AuthError {
    if err.is_timeout() {
        AuthError::Timeout
    } else {
        AuthError::transport(err)
    }
}

fn rejected(failure: ServiceFailure) -> AuthError {
    AuthError::Rejected {
        status: failure.status,
        message: failure.message,
    }
}

fn credentials_rejected(failure: ServiceFailure) -> AuthError {
    match failure.status {
        400 | 401 => AuthError::InvalidCredentials,
        _ => rejected(failure),
    }
}

fn token_rejected(failure: ServiceFailure) -> AuthError {
    match failure.status {
        401 | 403 => AuthError::InvalidToken,
        _ => rejected(failure),
    }
}

#[async_trait]
impl AuthProvider for RestAuthProvider {
    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Identity> {
        let request = self
            .client
            .request(Method::POST, TOKEN_PATH, None)
            .json(&PasswordGrant {
                email: credentials.email(),
                password: credentials.password(),
            });
        let body: SessionBody = self
            .send(request, credentials_rejected)
            .await?
            .json()
            .await
            .map_err(transport_error)?;
        match (body.access_token, body.user) {
            (Some(token), Some(user)) => Ok(user.into_identity(credentials.email(), token)),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    async fn sign_up(&self, registration: &Registration) -> AuthResult<SignUpOutcome> {
        let credentials = registration.credentials();
        let request = self
            .client
            .request(Method::POST, SIGNUP_PATH, None)
            .json(&SignUpBody {
                email: credentials.email(),
                password: credentials.password(),
                data: SignUpMetadata {
                    display_name: registration.display_name(),
                },
            });
        let body: SessionBody = self
            .send(request, rejected)
            .await?
            .json()
            .await
            .map_err(transport_error)?;
        match (body.access_token, body.user) {
            (Some(token), Some(user)) => Ok(SignUpOutcome::SignedIn(
                user.into_identity(credentials.email(), token),
            )),
            _ => Ok(SignUpOutcome::ConfirmationRequired {
                email: body.email.unwrap_or_else(|| credentials.email().to_owned()),
            }),
        }
    }

    async fn sign_out(&self, identity: &Identity) -> AuthResult<()> {
        let request = self.client.request(
            Method::POST,
            LOGOUT_PATH,
            Some(identity.access_token()),
        );
        self.send(request, token_rejected).await?;
        Ok(())
    }

    async fn current_identity(&self, token: &AccessToken) -> AuthResult<Identity> {
        let request = self.client.request(Method::GET, USER_PATH, Some(token));
        let user: UserBody = self
            .send(request, token_rejected)
            .await?
            .json()
            .await
            .map_err(transport_error)?;
        Ok(user.into_identity("", token.clone()))
    }
}
