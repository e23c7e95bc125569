use thiserror::Error;

/// Errors raised inside the cookie pipeline.
///
/// None of these reach callers of [`CookieService`](crate::cookies::service::CookieService);
/// the service degrades them to an empty read or a dropped write. They are
/// exposed for the lower-level building blocks and for configuration loading.
#[derive(Debug, Error)]
pub enum CookieError {
    #[error("Invalid cookie name pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid header value for {header}: {reason}")]
    InvalidHeaderValue { header: &'static str, reason: String },

    #[error("Failed to format cookie date: {0}")]
    DateFormat(#[from] time::error::Format),

    #[error("Cookie date out of range")]
    DateOutOfRange,

    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl CookieError {
    /// Create an invalid header value error.
    pub fn invalid_header_value(header: &'static str, reason: impl Into<String>) -> Self {
        CookieError::InvalidHeaderValue {
            header,
            reason: reason.into(),
        }
    }

    /// Create a config IO error.
    pub fn config_io(path: impl Into<String>, source: std::io::Error) -> Self {
        CookieError::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// True when the error came from loading configuration rather than from
    /// processing a cookie.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CookieError::ConfigIo { .. } | CookieError::ConfigParse(_)
        )
    }
}

/// Warnings reported to a [`CookieDiagnostics`](crate::cookies::diagnostics::CookieDiagnostics)
/// sink. A warning means the request was honoured after a correction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CookieWarning {
    /// `SameSite=None` was requested together with `secure: false`; browsers
    /// drop such cookies, so `Secure` was added.
    #[error("Cookie {name} was forced with secure flag because sameSite=None")]
    SecureForced { name: String },
}

impl CookieWarning {
    /// Name of the cookie the warning is about.
    pub fn cookie_name(&self) -> &str {
        match self {
            CookieWarning::SecureForced { name } => name,
        }
    }
}
