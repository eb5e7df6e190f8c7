//! Shared validation plumbing. Every entity runs its required-field checks in
//! a fixed order and only the first violation is reported; nothing remote
//! happens while a draft is invalid.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Facts about the surrounding edit the draft itself cannot know.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationContext {
    /// A stored image URL exists or a new upload accompanies the draft.
    pub has_image: bool,
    /// The draft targets an existing record rather than a new one.
    pub is_editing: bool,
}

pub fn require(
    field: &'static str,
    value: &str,
    message: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new(field, message))
    } else {
        Ok(())
    }
}

fn url_pattern() -> &'static Regex {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    URL_RE.get_or_init(|| {
        Regex::new(r"^(https?://)?([\w-]+(\.[\w-]+)+)([\w.,@?^=%&:/~+#-]*[\w@?^=%&/~+#-])?$")
            .expect("url pattern is valid")
    })
}

/// Shape check only. Runs after the required-field pass, so an empty value
/// is accepted here.
pub fn require_url_shape(
    field: &'static str,
    value: &str,
    message: &str,
) -> Result<(), ValidationError> {
    let value = value.trim();
    if !value.is_empty() && !url_pattern().is_match(value) {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank_and_whitespace() {
        assert!(require("name", "", "Name is required.").is_err());
        assert!(require("name", "   ", "Name is required.").is_err());
        assert!(require("name", "ok", "Name is required.").is_ok());
    }

    #[test]
    fn url_shape_accepts_common_forms() {
        assert!(require_url_shape("github", "https://github.com/someone", "bad").is_ok());
        assert!(require_url_shape("github", "github.com/someone", "bad").is_ok());
        assert!(require_url_shape("github", "", "bad").is_ok());
    }

    #[test]
    fn url_shape_rejects_garbage() {
        let err = require_url_shape("github", "not a url", "Please enter a valid GitHub URL.")
            .unwrap_err();
        assert_eq!(err.field, "github");
        assert_eq!(err.message, "Please enter a valid GitHub URL.");
    }
}
