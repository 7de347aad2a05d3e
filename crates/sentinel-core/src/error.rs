//! Error types for the validation pipeline
//!
//! Covers the four failure families of a validation round trip:
//! - Configuration failures at client construction
//! - Transport failures (HTTP, subprocess)
//! - Protocol anomalies (transport succeeded, nothing usable came back)
//! - Decode failures (content came back, but not a valid verdict)

/// Convenience result alias for pipeline operations
pub type Result<T> = std::result::Result<T, GuardError>;

/// Main guard error type
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    /// A required credential or setting is missing at construction time
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP transport failed (connect, send, or body decode)
    #[error("http transport failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("backend returned status {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, as returned by the vendor
        body: String,
    },

    /// Delegate process could not be spawned or awaited
    #[error("failed to run agent process: {0}")]
    Process(#[from] std::io::Error),

    /// Delegate process ran but exited with a failure status
    #[error("agent process exited with status {status}: {stderr}")]
    AgentFailed {
        /// Process exit code (-1 when terminated by signal)
        status: i32,
        /// Captured standard error output
        stderr: String,
    },

    /// Transport succeeded but returned no usable choice/message/content
    #[error("empty response: {0}")]
    EmptyResponse(String),

    /// Content was present but failed strict verdict decoding
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl GuardError {
    /// Check if error originates in the transport layer
    #[inline]
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Api { .. } | Self::Process(_) | Self::AgentFailed { .. }
        )
    }

    /// Check if error was raised at client construction
    #[inline]
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = GuardError::Config("CEREBRAS_API_KEY is required".to_string());
        assert!(err.to_string().contains("configuration error"));
        assert!(err.is_config());
        assert!(!err.is_transport());
    }

    #[test]
    fn transport_family() {
        let err = GuardError::AgentFailed {
            status: 1,
            stderr: "boom".to_string(),
        };
        assert!(err.is_transport());

        let err = GuardError::Api {
            status: 500,
            body: "server error".to_string(),
        };
        assert!(err.is_transport());
    }

    #[test]
    fn empty_and_malformed_are_distinct() {
        let empty = GuardError::EmptyResponse("no choices returned".to_string());
        let malformed = GuardError::MalformedResponse("not valid json".to_string());
        assert!(!empty.is_transport());
        assert!(empty.to_string().starts_with("empty response"));
        assert!(malformed.to_string().starts_with("malformed response"));
    }
}
