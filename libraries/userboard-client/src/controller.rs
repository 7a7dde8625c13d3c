//! View-sync controller.
//!
//! Reconciles the remote user collection with a local [`ViewState`]. Each
//! operation records its progress as [`ViewEvent`]s; failures end up only as
//! strings in the view, never as returned errors.
//!
//! Operations are not serialized against each other. A list and a create that
//! overlap both write to the shared state and whichever resolves last wins,
//! including clearing `loading` while the other is still in flight.

use crate::api::UsersApi;
use crate::client::UserboardClient;
use crate::error::Result;
use crate::types::ClientConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};
use userboard_core::{AppConfig, Draft, ViewEvent, ViewState};

/// Owns the view state and drives it from the users service.
///
/// Cloning is cheap; clones share the same state.
pub struct ViewSyncController<A = UserboardClient> {
    api: Arc<A>,
    config: Arc<AppConfig>,
    state: Arc<Mutex<ViewState>>,
    activated: Arc<AtomicBool>,
}

impl<A> Clone for ViewSyncController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            config: Arc::clone(&self.config),
            state: Arc::clone(&self.state),
            activated: Arc::clone(&self.activated),
        }
    }
}

impl ViewSyncController<UserboardClient> {
    /// Build a controller talking HTTP to `config.api_url`.
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = UserboardClient::new(ClientConfig::from(&config))?;
        Ok(Self::with_api(client, config))
    }
}

impl<A: UsersApi> ViewSyncController<A> {
    /// Build a controller over any [`UsersApi`] implementation.
    pub fn with_api(api: A, config: AppConfig) -> Self {
        Self {
            api: Arc::new(api),
            config: Arc::new(config),
            state: Arc::new(Mutex::new(ViewState::default())),
            activated: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Configuration the controller was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Copy of the current view state.
    pub fn snapshot(&self) -> ViewState {
        lock(&self.state).clone()
    }

    /// First-activation hook: loads users and checks health concurrently.
    ///
    /// Only the first call does anything.
    pub async fn activate(&self) {
        if self.activated.swap(true, Ordering::SeqCst) {
            debug!("Controller already activated");
            return;
        }

        info!(api_url = %self.config.api_url, "Activating view");
        tokio::join!(self.list_users(), self.check_health());
    }

    /// Replace the local collection with the server's.
    pub async fn list_users(&self) {
        self.dispatch(ViewEvent::ListStarted);
        let _settle = SettleGuard::new(&self.state);

        match self.api.list_users().await {
            Ok(users) => {
                info!(count = users.len(), "Users loaded");
                self.dispatch(ViewEvent::ListSucceeded(users));
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch users");
                self.dispatch(ViewEvent::ListFailed(e.to_string()));
            }
        }
    }

    /// Submit `draft` as a new user. Incomplete drafts never reach the network.
    pub async fn create_user(&self, draft: Draft) {
        if let Err(e) = draft.validate() {
            debug!(error = %e, "Rejected incomplete draft");
            self.dispatch(ViewEvent::CreateRejected);
            return;
        }

        self.dispatch(ViewEvent::CreateStarted);
        let _settle = SettleGuard::new(&self.state);

        match self.api.create_user(&draft).await {
            Ok(user) => {
                info!(id = %user.id, "User added");
                self.dispatch(ViewEvent::CreateSucceeded(user));
            }
            Err(e) => {
                warn!(error = %e, "Failed to add user");
                self.dispatch(ViewEvent::CreateFailed(e.to_string()));
            }
        }
    }

    /// Submit the controller's own draft.
    pub async fn submit_draft(&self) {
        let draft = lock(&self.state).draft.clone();
        self.create_user(draft).await;
    }

    pub fn set_draft_name(&self, name: impl Into<String>) {
        self.dispatch(ViewEvent::DraftNameChanged(name.into()));
    }

    pub fn set_draft_email(&self, email: impl Into<String>) {
        self.dispatch(ViewEvent::DraftEmailChanged(email.into()));
    }

    /// Refresh the backend status line. Never touches `loading`.
    pub async fn check_health(&self) {
        match self.api.health().await {
            Ok(report) => {
                debug!(uptime = report.uptime, "Health check passed");
                self.dispatch(ViewEvent::HealthSucceeded(report));
            }
            Err(e) => {
                warn!(error = %e, "Health check failed");
                self.dispatch(ViewEvent::HealthFailed(e.to_string()));
            }
        }
    }

    fn dispatch(&self, event: ViewEvent) {
        lock(&self.state).apply(event);
    }
}

fn lock(state: &Mutex<ViewState>) -> std::sync::MutexGuard<'_, ViewState> {
    // A panic mid-transition leaves a valid ViewState behind.
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears `loading` when a list or create finishes, including when its
/// future is dropped before completion.
struct SettleGuard<'a> {
    state: &'a Mutex<ViewState>,
}

impl<'a> SettleGuard<'a> {
    fn new(state: &'a Mutex<ViewState>) -> Self {
        Self { state }
    }
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        lock(self.state).apply(ViewEvent::RequestSettled);
    }
}
