//! Plain-text rendering of the view state.

use userboard_core::{AppConfig, StatusKind, ViewState};

const ENDPOINTS: [(&str, &str); 4] = [
    ("GET /", "Welcome message"),
    ("GET /api/health", "Health check"),
    ("GET /api/users", "Get all users"),
    ("POST /api/users", "Create new user"),
];

/// Render the whole board: backend status, message, users, API info.
pub fn board(state: &ViewState, config: &AppConfig) -> String {
    let mut out = String::new();

    out.push_str("== Backend Status ==\n");
    out.push_str(&format!("{}\n\n", state.backend_status));

    out.push_str("== Users ==\n");
    match state.status_kind() {
        Some(StatusKind::Error) => out.push_str(&format!("[error] {}\n", state.message)),
        Some(StatusKind::Success) => out.push_str(&format!("[ok] {}\n", state.message)),
        None => {}
    }

    if state.loading && state.users.is_empty() {
        out.push_str("Loading users...\n");
    } else if state.users.is_empty() {
        out.push_str("No users yet.\n");
    }

    for user in &state.users {
        out.push_str(&format!("- {} <{}>\n", user.name, user.email));
        if let Some(created) = user.created_at {
            out.push_str(&format!(
                "  Created: {}\n",
                created.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
    }
    out.push('\n');

    out.push_str("== API Information ==\n");
    out.push_str(&format!("Backend URL: {}\n", config.api_url));
    out.push_str(&format!("Environment: {}\n", config.environment));
    for (endpoint, purpose) in ENDPOINTS {
        out.push_str(&format!("  {:<18} {}\n", endpoint, purpose));
    }

    out
}
