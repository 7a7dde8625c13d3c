use serde::{Deserialize, Serialize};

/// Body of the collaborator's health probe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Server uptime in (fractional) seconds
    pub uptime: f64,
}

impl HealthReport {
    /// Uptime floored to whole seconds.
    pub fn uptime_secs(&self) -> i64 {
        self.uptime.floor() as i64
    }
}
