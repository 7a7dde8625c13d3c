//! View state and its transition function.
//!
//! Every change the controller makes to the view goes through
//! [`ViewState::apply`], so any interleaving of asynchronous operations can be
//! replayed synchronously as a sequence of [`ViewEvent`]s.

use crate::types::{Draft, HealthReport, User};

/// Message shown when a create is attempted with an incomplete draft.
///
/// Carries [`ERROR_MARKER`] so it is presented like any other error.
pub const VALIDATION_MESSAGE: &str = "Error: Please fill in all fields";

/// Message shown after a user was created.
pub const CREATED_MESSAGE: &str = "User added successfully!";

/// Substring that marks a status message as an error.
pub const ERROR_MARKER: &str = "Error";

/// Local view of the remote user collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Users in server order
    pub users: Vec<User>,
    /// True while a list or create request is in flight
    pub loading: bool,
    /// Status message (empty = none)
    pub message: String,
    /// Human-readable backend health
    pub backend_status: String,
    /// Pending new-user input
    pub draft: Draft,
}

/// A single state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    ListStarted,
    ListSucceeded(Vec<User>),
    ListFailed(String),
    /// Draft failed the presence check; nothing was sent.
    CreateRejected,
    CreateStarted,
    CreateSucceeded(User),
    CreateFailed(String),
    /// A list or create request finished, successfully or not.
    RequestSettled,
    HealthSucceeded(HealthReport),
    HealthFailed(String),
    DraftNameChanged(String),
    DraftEmailChanged(String),
}

impl ViewState {
    /// Apply one event in place.
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::ListStarted => {
                self.loading = true;
                self.message.clear();
            }
            ViewEvent::ListSucceeded(users) => {
                self.users = users;
                self.message.clear();
            }
            ViewEvent::ListFailed(reason) => {
                self.message = format!("Error fetching users: {}", reason);
            }
            ViewEvent::CreateRejected => {
                self.message = VALIDATION_MESSAGE.to_string();
            }
            ViewEvent::CreateStarted => {
                self.loading = true;
            }
            ViewEvent::CreateSucceeded(user) => {
                self.users.push(user);
                self.draft = Draft::default();
                self.message = CREATED_MESSAGE.to_string();
            }
            ViewEvent::CreateFailed(reason) => {
                self.message = format!("Error adding user: {}", reason);
            }
            ViewEvent::RequestSettled => {
                self.loading = false;
            }
            ViewEvent::HealthSucceeded(report) => {
                self.backend_status =
                    format!("Backend is healthy! Uptime: {}s", report.uptime_secs());
            }
            ViewEvent::HealthFailed(reason) => {
                self.backend_status = format!("Backend connection failed: {}", reason);
            }
            ViewEvent::DraftNameChanged(name) => {
                self.draft.name = name;
            }
            ViewEvent::DraftEmailChanged(email) => {
                self.draft.email = email;
            }
        }
    }

    /// Classification of the current status message.
    pub fn status_kind(&self) -> Option<StatusKind> {
        StatusKind::of(&self.message)
    }
}

/// Pure form of [`ViewState::apply`].
pub fn reduce(mut state: ViewState, event: ViewEvent) -> ViewState {
    state.apply(event);
    state
}

/// How a status message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// `None` for an empty message, otherwise `Error` iff the message
    /// contains [`ERROR_MARKER`].
    pub fn of(message: &str) -> Option<Self> {
        if message.is_empty() {
            None
        } else if message.contains(ERROR_MARKER) {
            Some(Self::Error)
        } else {
            Some(Self::Success)
        }
    }
}
