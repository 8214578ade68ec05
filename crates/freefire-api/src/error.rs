//! Error types for freefire-api

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Fetch failure classification.
///
/// The three variants are distinguished for logging only; callers surface
/// all of them as one service-unavailable condition.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Profile service responded with HTTP {0}")]
    Status(u16),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unparseable response body: {0}")]
    Body(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = Error::Status(503);
        assert_eq!(err.to_string(), "Profile service responded with HTTP 503");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(err.to_string().starts_with("Unparseable response body:"));
    }
}
