use std::fmt;

/// Result type for mealdeck-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Network-level failures. An empty result set is not an error.
#[derive(Debug)]
pub enum Error {
    /// Transport failure or non-success HTTP status
    Http(reqwest::Error),

    /// Response body was not the expected JSON
    Json(serde_json::Error),

    /// Base URL could not be parsed or joined
    Url(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Url(msg) => write!(f, "URL error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Url(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
