use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures reported by the item API itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("{0}")]
    Rejected(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_status_message_names_the_code() {
        let err = Error::from(ApiError::Status { status: 503 });
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[test]
    fn api_rejection_is_transparent() {
        let err = Error::from(ApiError::Rejected("rate limited".into()));
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn config_errors_convert_into_crate_error() {
        let err: Error = ConfigError::MissingField { field: "api.url" }.into();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField { field: "api.url" })
        ));
    }
}
