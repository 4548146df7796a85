//! Error types for Pokedex.
//!
//! One error hierarchy built with `thiserror`, shared by the cache, the
//! API client, and the CLI. Cache reads and writes never produce errors;
//! everything here comes from construction, the network, or decoding.

use thiserror::Error;

/// Result type alias using `PokedexError`.
pub type Result<T> = std::result::Result<T, PokedexError>;

/// Main error type for all Pokedex operations.
#[derive(Debug, Error)]
pub enum PokedexError {
    // ═══════════════════════════════════════════════════════════════════════════
    // NETWORK ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// HTTP transport failed (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Server answered with a non-success status.
    #[error("Response failed with status code: {status}, and body:\n {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body, lossily decoded
        body: String,
    },

    /// URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // SERIALIZATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ═══════════════════════════════════════════════════════════════════════════
    // SETUP ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The async runtime or its timer is unavailable.
    #[error("Runtime unavailable: {0}")]
    Runtime(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // VALIDATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Caller supplied an unusable argument.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PokedexError {
    /// Returns true if this error is recoverable (can retry).
    pub fn is_recoverable(&self) -> bool {
        match self {
            PokedexError::Http(_) => true,
            PokedexError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Returns true if the remote side reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokedexError::HttpStatus { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_error_display() {
        let err = PokedexError::HttpStatus {
            status: 404,
            body: "Not Found".into(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not Found"));
    }

    #[test_case(PokedexError::Http("reset".into()), true ; "transport")]
    #[test_case(PokedexError::HttpStatus { status: 503, body: String::new() }, true ; "server error")]
    #[test_case(PokedexError::HttpStatus { status: 429, body: String::new() }, true ; "rate limited")]
    #[test_case(PokedexError::HttpStatus { status: 404, body: String::new() }, false ; "not found")]
    #[test_case(PokedexError::Config("zero ttl".into()), false ; "config")]
    fn test_error_classification(err: PokedexError, recoverable: bool) {
        assert_eq!(err.is_recoverable(), recoverable);
    }

    #[test]
    fn test_not_found() {
        assert!(PokedexError::HttpStatus { status: 404, body: String::new() }.is_not_found());
        assert!(!PokedexError::Http("x".into()).is_not_found());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_result: std::result::Result<serde_json::Value, _> = serde_json::from_str("invalid");
        let result: Result<serde_json::Value> = json_result.map_err(PokedexError::from);
        assert!(matches!(result, Err(PokedexError::Json(_))));
    }
}
