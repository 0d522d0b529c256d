use thiserror::Error;

#[derive(Error, Debug)]
pub enum JokeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to parse configuration file: {message}")]
    ConfigParseError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl JokeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            JokeError::HttpError(_) | JokeError::UrlError(_) => ErrorCategory::Network,
            JokeError::SerializationError(_) => ErrorCategory::Data,
            JokeError::IoError(_) => ErrorCategory::System,
            JokeError::ConfigError { .. }
            | JokeError::MissingConfigError { .. }
            | JokeError::InvalidConfigValueError { .. }
            | JokeError::ConfigParseError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            JokeError::HttpError(e) if e.is_connect() => {
                "Could not reach the server.".to_string()
            }
            JokeError::HttpError(e) if e.is_timeout() => "The request timed out.".to_string(),
            JokeError::HttpError(_) => "The HTTP request failed.".to_string(),
            JokeError::SerializationError(_) => {
                "The joke service returned a response that could not be read.".to_string()
            }
            JokeError::IoError(e) => format!("I/O failure: {}", e),
            JokeError::UrlError(e) => format!("Invalid URL: {}", e),
            JokeError::ConfigError { message } => format!("Configuration problem: {}", message),
            JokeError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
            JokeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            JokeError::ConfigParseError { message } => {
                format!("Could not parse the configuration file: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and the configured URLs",
            ErrorCategory::Data => "Check that the joke endpoint returns JSON with a 'joke' field",
            ErrorCategory::Configuration => "Review the command line flags or the TOML file",
            ErrorCategory::System => "Check file permissions and available resources",
        }
    }
}

pub type Result<T> = std::result::Result<T, JokeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = JokeError::MissingConfigError {
            field: "explain_url".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("explain_url"));
    }

    #[test]
    fn test_url_error_is_network_category() {
        let err: JokeError = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_json_error_message() {
        let err: JokeError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.category(), ErrorCategory::Data);
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
