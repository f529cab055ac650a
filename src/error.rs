//! Error types for Bearbot.

use thiserror::Error;

/// Everything that can go wrong between a chat command and the API.
///
/// Display strings double as the user-facing reply text the dispatcher
/// posts back to the channel, so they stay short and self-contained.
#[derive(Debug, Error)]
pub enum BotError {
    /// Sign-in returned something other than HTTP 201.
    #[error("Authentication failed.")]
    AuthenticationFailed,

    /// A response body did not match the expected schema.
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    /// The API reported an error of its own (e.g. a 401 body).
    #[error("{0}")]
    Api(String),

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The `URL` environment variable is not set.
    #[error("URL environment variable not set")]
    MissingBaseUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_failed_display() {
        // The exact wording is part of the chat contract.
        assert_eq!(
            BotError::AuthenticationFailed.to_string(),
            "Authentication failed."
        );
    }

    #[test]
    fn test_api_error_display_is_verbatim() {
        let err = BotError::Api("invalid credentials".to_string());
        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[test]
    fn test_malformed_response_display() {
        let err = BotError::MalformedResponse("sign-in response: missing field".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed API response: sign-in response: missing field"
        );
    }
}
