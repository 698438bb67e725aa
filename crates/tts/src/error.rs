/// Errors returned by synthesis backends and audio post-processing
#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    /// Backend or encoder is misconfigured
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// HTTP transport or connection error
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// Backend rejected the API key
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Backend rejected the request as malformed
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Backend returned a non-success status
    #[error("provider API error ({status}): {message}")]
    ProviderApiError {
        /// HTTP status from the backend
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// Filesystem failure while handling an audio artifact
    #[error("artifact I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for fallible TTS operations
pub type Result<T> = std::result::Result<T, TtsError>;
