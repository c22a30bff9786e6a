//! Behavioural tests for the login request helper.

mod support;

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::json;
use support::runtime::{SharedRuntime, ensure_runtime_and_server, server_url};
use werent::auth::{
    HttpLoginGateway, LoginCredentials, LoginGatewayConfig, LoginOutcome, SignInError, sign_in,
};
use werent::session::{InMemorySessionStore, SessionProvider};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type StepResult = Result<(), Box<dyn std::error::Error>>;

#[derive(ScenarioState, Default)]
struct LoginState {
    runtime: Slot<SharedRuntime>,
    server: Slot<MockServer>,
    store: Slot<InMemorySessionStore>,
    outcome: Slot<LoginOutcome>,
    error: Slot<SignInError>,
}

#[fixture]
fn login_state() -> LoginState {
    LoginState::default()
}

fn mount(login_state: &LoginState, mock: Mock) -> StepResult {
    let runtime = ensure_runtime_and_server(&login_state.runtime, &login_state.server)?;
    login_state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .ok_or("mock server not started")?;
    Ok(())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a login endpoint that accepts {email} as {name} with token {token}")]
fn accepting_endpoint(
    login_state: &LoginState,
    email: String,
    name: String,
    token: String,
) -> StepResult {
    let body = json!({
        "user": { "id": 1, "name": name.trim_matches('"') },
        "access_token": token.trim_matches('"'),
    });
    let mock = Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_partial_json(json!({ "email": email.trim_matches('"') })))
        .respond_with(ResponseTemplate::new(201).set_body_json(body));
    mount(login_state, mock)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a login endpoint that rejects with status {status:u16} and message {message}")]
fn rejecting_endpoint(login_state: &LoginState, status: u16, message: String) -> StepResult {
    let response = ResponseTemplate::new(status)
        .set_body_json(json!({ "statusCode": status, "message": message.trim_matches('"') }));
    let mock = Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(response);
    mount(login_state, mock)
}

#[given("a login endpoint that rejects with status {status:u16} and no message")]
fn silent_rejecting_endpoint(login_state: &LoginState, status: u16) -> StepResult {
    let mock = Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(status).set_body_string("Internal Server Error"));
    mount(login_state, mock)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the client logs in as {email} with password {password}")]
fn log_in(login_state: &LoginState, email: String, password: String) -> StepResult {
    let runtime = ensure_runtime_and_server(&login_state.runtime, &login_state.server)?;
    let gateway = HttpLoginGateway::new(&LoginGatewayConfig::new(server_url(
        &login_state.server,
    )?))?;
    let credentials = LoginCredentials::new(email.trim_matches('"'), password.trim_matches('"'));
    let store = InMemorySessionStore::default();

    let result = runtime.block_on(sign_in(&gateway, &store, &credentials));
    login_state.store.set(store);

    match result {
        Ok(outcome) => login_state.outcome.set(outcome),
        Err(error) => login_state.error.set(error),
    }
    Ok(())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the login succeeds for {name}")]
fn assert_login_succeeded(login_state: &LoginState, name: String) -> StepResult {
    if let Some(error) = login_state.error.get() {
        return Err(format!("login failed unexpectedly: {error}").into());
    }
    let user = login_state
        .outcome
        .with_ref(|outcome| outcome.user.name.clone())
        .ok_or("login outcome missing")?;

    let expected = name.trim_matches('"');
    if user == expected {
        Ok(())
    } else {
        Err(format!("expected user {expected}, got {user}").into())
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the stored session belongs to {name}")]
fn assert_stored_session(login_state: &LoginState, name: String) -> StepResult {
    let snapshot = login_state
        .store
        .with_ref(SessionProvider::read)
        .flatten()
        .ok_or("no session stored")?;

    let expected = name.trim_matches('"');
    if snapshot.display_name() == expected && snapshot.token() == "jwt-token" {
        Ok(())
    } else {
        Err(format!("unexpected stored session {snapshot:?}").into())
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the login fails with message {message}")]
fn assert_login_failed(login_state: &LoginState, message: String) -> StepResult {
    let error = login_state
        .error
        .with_ref(ToString::to_string)
        .ok_or("expected the login to fail")?;

    let expected = message.trim_matches('"');
    if error == expected {
        Ok(())
    } else {
        Err(format!("expected error message {expected:?}, got {error:?}").into())
    }
}

#[then("no session is stored")]
fn assert_no_session(login_state: &LoginState) -> StepResult {
    match login_state.store.with_ref(SessionProvider::read).flatten() {
        None => Ok(()),
        Some(snapshot) => Err(format!("session stored after failure: {snapshot:?}").into()),
    }
}

#[scenario(path = "tests/features/login.feature", index = 0)]
fn login_accepts_valid_credentials(login_state: LoginState) {
    let _ = login_state;
}

#[scenario(path = "tests/features/login.feature", index = 1)]
fn login_surfaces_server_message(login_state: LoginState) {
    let _ = login_state;
}

#[scenario(path = "tests/features/login.feature", index = 2)]
fn login_falls_back_to_generic_message(login_state: LoginState) {
    let _ = login_state;
}
