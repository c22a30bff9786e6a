//! Gateways for the WeRent authentication endpoint.
//!
//! The trait lets the login flow be exercised with a mock while
//! [`HttpLoginGateway`] performs the real request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::error::{GENERIC_LOGIN_FAILURE, LoginError};
use super::models::{ApiErrorBody, ApiLoginResponse, LoginCredentials, LoginOutcome};

const LOGIN_PATH: &str = "auth/login";

/// Gateway that exchanges credentials for a session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginGateway: Send + Sync {
    /// Submits `credentials` to the authentication endpoint.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginOutcome, LoginError>;
}

/// Configuration for [`HttpLoginGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGatewayConfig {
    /// API base URL, e.g. `https://api.werent.example/api`.
    pub base_url: Url,
    /// Optional request timeout. Requests wait indefinitely when unset.
    pub timeout: Option<Duration>,
}

impl LoginGatewayConfig {
    /// Creates configuration for `base_url` without a timeout.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Reqwest-backed login gateway.
#[derive(Debug, Clone)]
pub struct HttpLoginGateway {
    client: Client,
    endpoint: String,
}

impl HttpLoginGateway {
    /// Builds the gateway and its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Configuration`] when the HTTP client cannot be
    /// built.
    pub fn new(config: &LoginGatewayConfig) -> Result<Self, LoginError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|error| LoginError::Configuration {
                message: format!("failed to configure login HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            endpoint: login_endpoint(&config.base_url),
        })
    }

    /// Returns the URL that login requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl LoginGateway for HttpLoginGateway {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginOutcome, LoginError> {
        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(credentials)
            .send()
            .await
            .map_err(|error| LoginError::Network {
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = ApiErrorBody::message_from(body.as_str())
                .unwrap_or_else(|| GENERIC_LOGIN_FAILURE.to_owned());
            tracing::warn!(status = status.as_u16(), "login rejected: {message}");
            return Err(LoginError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let payload: ApiLoginResponse =
            response
                .json()
                .await
                .map_err(|error| LoginError::InvalidResponse {
                    message: error.to_string(),
                })?;
        let outcome = LoginOutcome::from(payload);
        tracing::info!(user = %outcome.user.name, "login succeeded");
        Ok(outcome)
    }
}

fn login_endpoint(base_url: &Url) -> String {
    format!("{}/{LOGIN_PATH}", base_url.as_str().trim_end_matches('/'))
}
