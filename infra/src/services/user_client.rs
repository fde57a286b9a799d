//! HTTP client for the user service implementing the UserLookup contract

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use blog_core::domain::entities::user::VerifiedUser;
use blog_core::errors::LookupError;
use blog_core::lookup::UserLookup;

#[derive(Serialize)]
struct AuthenticateRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct AuthenticateResponse {
    id: i64,
    display_name: String,
}

/// User service client over HTTP
///
/// Maps the user service's response surface onto the collaborator contract:
/// 200 with an identity body on success, 401 for a wrong password, 404 for
/// an unknown user, anything else (including transport failures) is treated
/// as the service being unavailable.
pub struct HttpUserLookup {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserLookup {
    /// Create a new client for the user service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn authenticate_url(&self) -> String {
        format!("{}/internal/users/authenticate", self.base_url)
    }
}

#[async_trait]
impl UserLookup for HttpUserLookup {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<VerifiedUser, LookupError> {
        let response = self
            .client
            .post(self.authenticate_url())
            .json(&AuthenticateRequest { username, password })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "user service unreachable");
                LookupError::Unavailable {
                    message: e.to_string(),
                }
            })?;

        match response.status() {
            StatusCode::OK => {
                let body: AuthenticateResponse =
                    response.json().await.map_err(|e| LookupError::Unavailable {
                        message: format!("invalid user service response: {e}"),
                    })?;
                Ok(VerifiedUser::new(body.id, body.display_name))
            }
            StatusCode::UNAUTHORIZED => Err(LookupError::InvalidCredentials),
            StatusCode::NOT_FOUND => Err(LookupError::NotFound),
            status => {
                tracing::warn!(%status, "unexpected user service status");
                Err(LookupError::Unavailable {
                    message: format!("user service returned {status}"),
                })
            }
        }
    }
}
