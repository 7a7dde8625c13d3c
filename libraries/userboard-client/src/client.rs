//! HTTP client for the users service.

use crate::error::{ClientError, Result};
use crate::types::ClientConfig;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use userboard_core::{Draft, HealthReport, User};

/// Client for the users service REST API.
///
/// No request timeout is configured; requests rely on the transport defaults.
///
/// # Example
///
/// ```ignore
/// use userboard_client::{ClientConfig, UserboardClient};
///
/// let client = UserboardClient::new(ClientConfig::new("http://localhost:5000"))?;
/// let users = client.list_users().await?;
/// println!("Found {} users", users.len());
/// ```
#[derive(Debug, Clone)]
pub struct UserboardClient {
    http: Client,
    base_url: String,
}

impl UserboardClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .user_agent(format!("Userboard/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the service's welcome text (`GET /`).
    pub async fn welcome(&self) -> Result<String> {
        let url = format!("{}/", self.base_url);
        debug!(url = %url, "Fetching welcome message");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let response = Self::check_status(response).await?;

        response
            .text()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to read welcome message: {}", e)))
    }

    /// Probe the service's health endpoint.
    pub async fn health(&self) -> Result<HealthReport> {
        let url = format!("{}/api/health", self.base_url);
        debug!(url = %url, "Checking backend health");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let report: HealthReport = Self::parse(response, "health").await?;

        debug!(uptime = report.uptime, "Backend is healthy");
        Ok(report)
    }

    /// Fetch all users, in server order.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = format!("{}/api/users", self.base_url);
        debug!(url = %url, "Fetching users");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let users: Vec<User> = Self::parse(response, "users").await?;

        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    /// Create a user from a draft. Returns the server's record.
    pub async fn create_user(&self, draft: &Draft) -> Result<User> {
        let url = format!("{}/api/users", self.base_url);
        debug!(url = %url, name = %draft.name, "Creating user");

        let response = self
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let user: User = Self::parse(response, "created user").await?;

        info!(id = %user.id, name = %user.name, "User created");
        Ok(user)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse {} response: {}", what, e))
        })
    }
}
