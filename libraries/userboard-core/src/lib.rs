//! Userboard Core
//!
//! Domain types, configuration, and the view-state transition function
//! shared by the Userboard client and front-ends.
//!
//! # Architecture
//!
//! - **Domain Types**: `User`, `UserId`, `Draft`, `HealthReport`
//! - **View State**: `ViewState`, `ViewEvent` and the pure `reduce` function
//! - **Configuration**: `AppConfig` (API base URL and environment label)
//! - **Error Handling**: `CoreError` and `Result`
//!
//! Status messages are classified by the substring "Error", so every failure
//! message carries it, including the rejection of an incomplete draft
//! (`"Error: Please fill in all fields"`).
//!
//! # Example
//!
//! ```rust
//! use userboard_core::state::{reduce, ViewEvent, ViewState};
//! use userboard_core::types::HealthReport;
//!
//! let state = reduce(ViewState::default(), ViewEvent::ListStarted);
//! assert!(state.loading);
//!
//! let state = reduce(state, ViewEvent::HealthSucceeded(HealthReport { uptime: 125.9 }));
//! assert!(state.backend_status.contains("125s"));
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod state;
pub mod types;

pub use config::AppConfig;
pub use error::{CoreError, Result};
pub use state::{reduce, StatusKind, ViewEvent, ViewState};
pub use types::{Draft, HealthReport, User, UserId};
