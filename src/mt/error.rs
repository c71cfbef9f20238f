/// Error types for the Machine Translation module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Missing or unusable credential, or a client that could not be built
    ConfigError(String),
    /// User-correctable input problem (no file, unknown direction)
    ValidationError(String),
    /// The translation service could not be reached or answered with a failure status
    UpstreamError(String),
    /// The translation service answered successfully but not in the expected shape
    ParseError(String),
    /// General error with context
    Other(String),
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MtError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            MtError::UpstreamError(msg) => write!(f, "Upstream error: {}", msg),
            MtError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            MtError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_decode() {
            MtError::ParseError(format!("Failed to decode response: {}", err))
        } else {
            MtError::UpstreamError(format!("Request failed: {}", err))
        }
    }
}

/// Result type for MT operations
pub type MtResult<T> = Result<T, MtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            MtError::ConfigError("no key".to_string()).to_string(),
            "Configuration error: no key"
        );
        assert_eq!(
            MtError::UpstreamError("503".to_string()).to_string(),
            "Upstream error: 503"
        );
        assert_eq!(MtError::Other("plain".to_string()).to_string(), "plain");
    }
}
