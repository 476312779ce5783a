use thiserror::Error;

/// HTTP-related errors with detailed context for outbound network operations.
///
/// The only outbound traffic of the backend goes to the community theme
/// registry, so these errors describe failures of that client: building it,
/// sending the request, and reading the body back.
///
/// # Error Categories
///
/// - [`ClientCreation`] - HTTP client initialization failures
/// - [`RequestFailed`] - General request failures with URL and reason
/// - [`Timeout`] - Request timeout with duration and target URL
///
/// # Examples
///
/// ```no_run
/// use server::common::HttpError;
///
/// fn log_http_error(error: &HttpError) {
///     match error {
///         HttpError::RequestFailed { url, reason } => {
///             log::error!("HTTP request failed: url={}, reason={}", url, reason);
///         }
///         HttpError::Timeout { url, seconds } => {
///             log::warn!("HTTP request timeout: url={}, duration={}s", url, seconds);
///         }
///         HttpError::ClientCreation { reason } => {
///             log::error!("HTTP client could not be created: {}", reason);
///         }
///     }
/// }
/// ```
///
/// [`ClientCreation`]: HttpError::ClientCreation
/// [`RequestFailed`]: HttpError::RequestFailed
/// [`Timeout`]: HttpError::Timeout
#[derive(Debug, Error)]
pub enum HttpError {
    /// HTTP client initialization failed.
    ///
    /// Occurs when the configured user agent is not a valid header value or
    /// the TLS backend cannot be initialized.
    #[error("HTTP client creation failed: {reason}")]
    ClientCreation { reason: String },

    /// HTTP request execution failed.
    ///
    /// Covers connection failures, DNS errors and failures while reading the
    /// response body.
    #[error("Request failed: {url} - {reason}")]
    RequestFailed { url: String, reason: String },

    /// HTTP request timed out.
    #[error("Request timeout after {seconds}s: {url}")]
    Timeout { url: String, seconds: u64 },
}

impl HttpError {
    /// Classify a `reqwest` failure for the given URL.
    pub fn from_reqwest(url: &str, timeout_secs: u64, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            HttpError::Timeout {
                url: url.to_string(),
                seconds: timeout_secs,
            }
        } else {
            HttpError::RequestFailed {
                url: url.to_string(),
                reason: error.to_string(),
            }
        }
    }
}
