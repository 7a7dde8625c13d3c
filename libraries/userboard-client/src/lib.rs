//! Userboard Client
//!
//! HTTP client and view-sync controller for the Userboard users service.
//!
//! # Features
//!
//! - **Users**: list and create user records
//! - **Health**: probe the service and report its uptime
//! - **View sync**: `ViewSyncController` keeps a `ViewState` in step with the
//!   remote collection and reports every failure as a status string
//!
//! # Example
//!
//! ```ignore
//! use userboard_client::ViewSyncController;
//! use userboard_core::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let controller = ViewSyncController::new(AppConfig::load()?)?;
//!     controller.activate().await;
//!
//!     let state = controller.snapshot();
//!     println!("{} ({} users)", state.backend_status, state.users.len());
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod controller;
mod error;
mod types;

pub use api::UsersApi;
pub use client::UserboardClient;
pub use controller::ViewSyncController;
pub use error::{ClientError, Result};
pub use types::ClientConfig;
