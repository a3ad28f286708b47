use std::fmt;

/// Custom error type for Heroku operations
#[derive(Debug)]
pub enum HerokuError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// No credentials in any source
    CredentialsNotFound(String),
    /// Credentials were found but could not be used
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// YAML serialization error
    Yaml(String),
    /// Local file or stream error
    Io(String),
}

impl fmt::Display for HerokuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HerokuError::Http(e) => write!(f, "HTTP request failed: {}", e),
            HerokuError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            HerokuError::CredentialsNotFound(msg) => write!(f, "{}", msg),
            HerokuError::Credentials(msg) => write!(f, "{}", msg),
            HerokuError::Json(msg) => write!(f, "JSON error: {}", msg),
            HerokuError::Yaml(msg) => write!(f, "YAML error: {}", msg),
            HerokuError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for HerokuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HerokuError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HerokuError {
    fn from(err: reqwest::Error) -> Self {
        HerokuError::Http(err)
    }
}

impl From<serde_json::Error> for HerokuError {
    fn from(err: serde_json::Error) -> Self {
        HerokuError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for HerokuError {
    fn from(err: serde_yml::Error) -> Self {
        HerokuError::Yaml(err.to_string())
    }
}

impl From<std::io::Error> for HerokuError {
    fn from(err: std::io::Error) -> Self {
        HerokuError::Io(err.to_string())
    }
}

/// Result type alias for Heroku operations
pub type Result<T> = std::result::Result<T, HerokuError>;
