/// Pending new-user input
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Unsaved user input, sent as the body of a create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub email: String,
}

impl Draft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Presence check only: both fields must be non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(CoreError::MissingField("name"));
        }
        if self.email.is_empty() {
            return Err(CoreError::MissingField("email"));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_both_fields() {
        assert!(Draft::new("Al", "a@b.com").validate().is_ok());

        match Draft::new("", "a@b.com").validate() {
            Err(CoreError::MissingField(field)) => assert_eq!(field, "name"),
            other => panic!("Expected MissingField(name), got: {:?}", other),
        }

        match Draft::new("Al", "").validate() {
            Err(CoreError::MissingField(field)) => assert_eq!(field, "email"),
            other => panic!("Expected MissingField(email), got: {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        assert!(Draft::new(" ", " ").validate().is_ok());
    }

    #[test]
    fn test_serializes_as_request_body() {
        let body = serde_json::to_value(Draft::new("Al", "a@b.com")).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "Al", "email": "a@b.com" }));
    }
}
