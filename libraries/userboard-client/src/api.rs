//! The seam between the controller and the users service.

use crate::client::UserboardClient;
use crate::error::Result;
use async_trait::async_trait;
use userboard_core::{Draft, HealthReport, User};

/// Remote operations the view-sync controller depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Fetch the full user collection.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Create a user and return the stored record.
    async fn create_user(&self, draft: &Draft) -> Result<User>;

    /// Probe service health.
    async fn health(&self) -> Result<HealthReport>;
}

#[async_trait]
impl UsersApi for UserboardClient {
    async fn list_users(&self) -> Result<Vec<User>> {
        UserboardClient::list_users(self).await
    }

    async fn create_user(&self, draft: &Draft) -> Result<User> {
        UserboardClient::create_user(self, draft).await
    }

    async fn health(&self) -> Result<HealthReport> {
        UserboardClient::health(self).await
    }
}
