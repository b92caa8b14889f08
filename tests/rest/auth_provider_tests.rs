//! Contract tests for the REST auth provider.

use super::helpers::{ACCESS_TOKEN, API_KEY, backend, identity};
use serde_json::json;
use taskflow::session::{
    adapters::rest::RestAuthProvider,
    domain::{AccessToken, Credentials, Registration, SignUpOutcome, UserId},
    ports::{AuthError, AuthProvider},
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials::new("ada@example.com", "secret1").expect("valid input")
}

#[tokio::test]
async fn sign_in_uses_the_password_grant() {
    let server = MockServer::start().await;
    let user_id = UserId::new();

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", API_KEY))
        .and(header("authorization", format!("Bearer {API_KEY}")))
        .and(body_json(json!({
            "email": "ada@example.com",
            "password": "secret1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh-token",
            "token_type": "bearer",
            "user": {
                "id": user_id,
                "email": "ada@example.com",
                "user_metadata": {"display_name": "Ada"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = RestAuthProvider::new(backend(&server));
    let signed_in = provider
        .sign_in(&credentials())
        .await
        .expect("sign in should succeed");

    assert_eq!(signed_in.user_id(), user_id);
    assert_eq!(signed_in.display_name(), Some("Ada"));
    assert_eq!(signed_in.access_token().expose(), "fresh-token");
}

#[tokio::test]
async fn rejected_password_is_invalid_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let provider = RestAuthProvider::new(backend(&server));

    assert!(matches!(
        provider.sign_in(&credentials()).await,
        Err(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn sign_up_sends_display_name_metadata() {
    let server = MockServer::start().await;
    let user_id = UserId::new();

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "password": "secret1",
            "data": {"display_name": "Ada"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh-token",
            "user": {"id": user_id, "email": "ada@example.com"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = RestAuthProvider::new(backend(&server));
    let registration = Registration::new(credentials(), "Ada").expect("valid registration");
    let outcome = provider
        .sign_up(&registration)
        .await
        .expect("sign up should succeed");

    let SignUpOutcome::SignedIn(signed_in) = outcome else {
        panic!("expected an immediate session, got {outcome:?}");
    };
    assert_eq!(signed_in.user_id(), user_id);
}

#[tokio::test]
async fn sign_up_without_session_requires_confirmation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": UserId::new(),
            "email": "ada@example.com",
            "confirmation_sent_at": "2024-06-15T09:30:00Z"
        })))
        .mount(&server)
        .await;

    let provider = RestAuthProvider::new(backend(&server));
    let registration = Registration::new(credentials(), "Ada").expect("valid registration");
    let outcome = provider
        .sign_up(&registration)
        .await
        .expect("sign up should succeed");

    assert_eq!(
        outcome,
        SignUpOutcome::ConfirmationRequired {
            email: "ada@example.com".to_owned(),
        }
    );
}

#[tokio::test]
async fn duplicate_sign_up_is_rejected_with_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"msg": "User already registered"})),
        )
        .mount(&server)
        .await;

    let provider = RestAuthProvider::new(backend(&server));
    let registration = Registration::new(credentials(), "Ada").expect("valid registration");
    let result = provider.sign_up(&registration).await;

    let Err(AuthError::Rejected { status, message }) = result else {
        panic!("expected a rejection, got {result:?}");
    };
    assert_eq!(status, 422);
    assert_eq!(message, "User already registered");
}

#[tokio::test]
async fn sign_out_revokes_with_session_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("authorization", format!("Bearer {ACCESS_TOKEN}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let provider = RestAuthProvider::new(backend(&server));

    provider
        .sign_out(&identity())
        .await
        .expect("sign out should succeed");
}

#[tokio::test]
async fn current_identity_resolves_the_token() {
    let server = MockServer::start().await;
    let user_id = UserId::new();

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer stored-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": user_id,
            "email": "ada@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = RestAuthProvider::new(backend(&server));
    let resolved = provider
        .current_identity(&AccessToken::new("stored-token"))
        .await
        .expect("token should resolve");

    assert_eq!(resolved.user_id(), user_id);
    assert_eq!(resolved.email(), "ada@example.com");
    assert_eq!(resolved.display_name(), None);
}

#[tokio::test]
async fn expired_token_is_invalid() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"msg": "JWT expired"})))
        .mount(&server)
        .await;

    let provider = RestAuthProvider::new(backend(&server));

    assert!(matches!(
        provider.current_identity(&AccessToken::new("stale")).await,
        Err(AuthError::InvalidToken)
    ));
}
