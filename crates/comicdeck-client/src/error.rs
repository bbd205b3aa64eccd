use std::fmt;

/// Result type for comicdeck-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while talking to the catalog
#[derive(Debug)]
pub enum Error {
    /// Backend base address could not be turned into an endpoint URL
    InvalidUrl(String),

    /// Connection, TLS or body transfer failed
    Transport(reqwest::Error),

    /// Catalog answered with a non-2xx status
    Status {
        status: u16,
        /// Message extracted from the error body, if the server sent one
        message: Option<String>,
    },

    /// Body was not a JSON array of comics
    Decode(String),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidUrl(msg) => write!(f, "Invalid catalog URL: {}", msg),
            Error::Transport(err) => write!(f, "Could not reach the catalog: {}", err),
            Error::Status {
                message: Some(message),
                ..
            } => write!(f, "{}", message),
            Error::Status {
                status,
                message: None,
            } => write!(f, "Failed to load comics (HTTP {})", status),
            Error::Decode(msg) => write!(f, "Unexpected catalog response: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::InvalidUrl(_) | Error::Status { .. } | Error::Decode(_) | Error::Config(_) => {
                None
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_prefers_server_message() {
        let err = Error::Status {
            status: 503,
            message: Some("Catalog is warming up".to_string()),
        };
        assert_eq!(err.to_string(), "Catalog is warming up");
    }

    #[test]
    fn test_status_generic_message() {
        let err = Error::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "Failed to load comics (HTTP 500)");
    }
}
