//! Tests for the login gateway and sign-in flow.

use mockall::predicate::always;
use rstest::{fixture, rstest};
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{
    AccessToken, AuthenticatedUser, HttpLoginGateway, LoginCredentials, LoginError, LoginGateway,
    LoginGatewayConfig, LoginOutcome, MockLoginGateway, SignInError, sign_in,
};
use crate::session::{InMemorySessionStore, SessionProvider, SessionSnapshot};

#[fixture]
fn credentials() -> LoginCredentials {
    LoginCredentials::new("ayu@example.com", "hunter2")
}

fn gateway_for(server: &MockServer) -> HttpLoginGateway {
    let base = Url::parse(&format!("{}/api", server.uri())).expect("mock server URI should parse");
    HttpLoginGateway::new(&LoginGatewayConfig::new(base)).expect("gateway should build")
}

async fn mount_response(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(serde_json::json!({
            "email": "ayu@example.com",
            "password": "hunter2",
        })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[rstest]
#[tokio::test]
async fn successful_login_returns_user_and_token(credentials: LoginCredentials) {
    let server = MockServer::start().await;
    mount_response(
        &server,
        ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "user": {"id": 7, "name": "Ayu"},
            "access_token": "jwt-token",
        })),
    )
    .await;

    let outcome = gateway_for(&server)
        .login(&credentials)
        .await
        .expect("login should succeed");

    assert_eq!(outcome.user.name, "Ayu");
    assert_eq!(outcome.token.as_str(), "jwt-token");
}

#[rstest]
#[tokio::test]
async fn rejection_carries_server_message_verbatim(credentials: LoginCredentials) {
    let server = MockServer::start().await;
    mount_response(
        &server,
        ResponseTemplate::new(401)
            .set_body_json(serde_json::json!({"message": "Invalid credentials"})),
    )
    .await;

    let error = gateway_for(&server)
        .login(&credentials)
        .await
        .expect_err("login should be rejected");

    assert_eq!(error.to_string(), "Invalid credentials");
    assert!(
        matches!(error, LoginError::Rejected { status: 401, .. }),
        "expected Rejected with status 401, got {error:?}"
    );
}

#[rstest]
#[case(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))]
#[case(ResponseTemplate::new(400).set_body_json(serde_json::json!({"error": "Bad Request"})))]
#[case(ResponseTemplate::new(503))]
#[tokio::test]
async fn rejection_without_message_uses_generic_text(
    credentials: LoginCredentials,
    #[case] response: ResponseTemplate,
) {
    let server = MockServer::start().await;
    mount_response(&server, response).await;

    let error = gateway_for(&server)
        .login(&credentials)
        .await
        .expect_err("login should be rejected");

    assert_eq!(error.to_string(), "Login failed");
}

#[rstest]
#[tokio::test]
async fn malformed_success_body_is_invalid_response(credentials: LoginCredentials) {
    let server = MockServer::start().await;
    mount_response(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"user": {"name": "Ayu"}})),
    )
    .await;

    let error = gateway_for(&server)
        .login(&credentials)
        .await
        .expect_err("missing token should be rejected");

    assert!(
        matches!(error, LoginError::InvalidResponse { .. }),
        "expected InvalidResponse, got {error:?}"
    );
}

#[rstest]
#[tokio::test]
async fn unreachable_server_is_network_error(credentials: LoginCredentials) {
    let server = MockServer::start().await;
    let gateway = gateway_for(&server);
    drop(server);

    let error = gateway
        .login(&credentials)
        .await
        .expect_err("closed server should fail");

    assert!(
        matches!(error, LoginError::Network { .. }),
        "expected Network, got {error:?}"
    );
}

fn outcome() -> LoginOutcome {
    LoginOutcome {
        user: AuthenticatedUser {
            name: String::from("Ayu"),
        },
        token: AccessToken::new("jwt-token"),
    }
}

#[rstest]
#[tokio::test]
async fn sign_in_stores_session_on_success(credentials: LoginCredentials) {
    let mut gateway = MockLoginGateway::new();
    gateway
        .expect_login()
        .with(always())
        .times(1)
        .returning(|_| Ok(outcome()));
    let store = InMemorySessionStore::default();

    let result = sign_in(&gateway, &store, &credentials)
        .await
        .expect("sign-in should succeed");

    assert_eq!(result, outcome());
    assert_eq!(
        store.read(),
        Some(SessionSnapshot::new("jwt-token", "Ayu"))
    );
}

#[rstest]
#[tokio::test]
async fn sign_in_leaves_store_untouched_on_rejection(credentials: LoginCredentials) {
    let mut gateway = MockLoginGateway::new();
    gateway.expect_login().times(1).returning(|_| {
        Err(LoginError::Rejected {
            status: 401,
            message: String::from("Invalid credentials"),
        })
    });
    let store = InMemorySessionStore::default();

    let error = sign_in(&gateway, &store, &credentials)
        .await
        .expect_err("sign-in should fail");

    assert_eq!(error.to_string(), "Invalid credentials");
    assert!(matches!(error, SignInError::Login(_)));
    assert_eq!(store.read(), None);
}
