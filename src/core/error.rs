use std::fmt;

/// Comprehensive error types for credcheck operations
#[derive(Debug)]
pub enum CredCheckError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Submission capture error
    Submission(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// Analysis server responded with a non-success status
    Server { status: u16 },

    /// Malformed JSON in the analysis response body
    JsonParsing(serde_json::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// File not found error
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for CredCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredCheckError::Io(err) => write!(f, "IO error: {err}"),
            CredCheckError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CredCheckError::Submission(msg) => write!(f, "Submission error: {msg}"),
            CredCheckError::Http(err) => write!(f, "HTTP error: {err}"),
            CredCheckError::Server { status } => {
                write!(f, "Server error: HTTP status {status}")
            }
            CredCheckError::JsonParsing(err) => write!(f, "JSON parsing error: {err}"),
            CredCheckError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            CredCheckError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CredCheckError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for CredCheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CredCheckError::Io(err) => Some(err),
            CredCheckError::Http(err) => Some(err),
            CredCheckError::JsonParsing(err) => Some(err),
            CredCheckError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CredCheckError {
    fn from(err: std::io::Error) -> Self {
        CredCheckError::Io(err)
    }
}

impl From<reqwest::Error> for CredCheckError {
    fn from(err: reqwest::Error) -> Self {
        CredCheckError::Http(err)
    }
}

impl From<serde_json::Error> for CredCheckError {
    fn from(err: serde_json::Error) -> Self {
        CredCheckError::JsonParsing(err)
    }
}

impl From<toml::de::Error> for CredCheckError {
    fn from(err: toml::de::Error) -> Self {
        CredCheckError::TomlParsing(err)
    }
}

/// Type alias for Results using CredCheckError
pub type Result<T> = std::result::Result<T, CredCheckError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = CredCheckError::Config("Invalid timeout".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Invalid timeout"
        );

        let file_error = CredCheckError::FileNotFound("/path/to/file".to_string());
        assert_eq!(format!("{file_error}"), "File not found: /path/to/file");

        let server_error = CredCheckError::Server { status: 500 };
        assert_eq!(format!("{server_error}"), "Server error: HTTP status 500");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let credcheck_error = CredCheckError::from(io_error);

        match credcheck_error {
            CredCheckError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let credcheck_error = CredCheckError::from(json_error);

        match credcheck_error {
            CredCheckError::JsonParsing(_) => {} // Expected
            _ => panic!("Expected JsonParsing variant"),
        }
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let credcheck_error = CredCheckError::from(toml_error);

        match credcheck_error {
            CredCheckError::TomlParsing(_) => {} // Expected
            _ => panic!("Expected TomlParsing variant"),
        }
    }

    #[test]
    fn test_string_error_variants_display() {
        let errors = vec![
            CredCheckError::Config("Bad config".to_string()),
            CredCheckError::Submission("Nothing to submit".to_string()),
            CredCheckError::FileNotFound("/missing".to_string()),
            CredCheckError::InvalidArgument("Bad arg".to_string()),
        ];

        for error in errors {
            let display_str = format!("{error}");
            assert!(!display_str.is_empty());
            assert!(display_str.contains(":"));
        }
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let credcheck_error = CredCheckError::Io(io_error);

        assert!(credcheck_error.source().is_some());

        let config_error = CredCheckError::Config("test".to_string());
        assert!(config_error.source().is_none());

        let server_error = CredCheckError::Server { status: 502 };
        assert!(server_error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CredCheckError>();
    }

    #[test]
    fn test_result_type_alias() {
        let success: Result<i32> = Ok(42);
        let error: Result<i32> = Err(CredCheckError::Config("test".to_string()));

        assert!(success.is_ok());
        assert!(error.is_err());
        if let Ok(value) = success {
            assert_eq!(value, 42);
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let credcheck_error = CredCheckError::Io(io_error);

        let source = credcheck_error.source();
        assert!(source.is_some());

        let source_display = format!("{}", source.unwrap());
        assert!(source_display.contains("file not found"));
    }

    #[test]
    fn test_error_debug_format() {
        let errors = vec![
            CredCheckError::Config("debug config".to_string()),
            CredCheckError::Submission("debug submission".to_string()),
            CredCheckError::FileNotFound("debug file".to_string()),
            CredCheckError::InvalidArgument("debug arg".to_string()),
        ];

        for error in errors {
            let debug_str = format!("{error:?}");
            assert!(!debug_str.is_empty());
            assert!(debug_str.contains("debug"));
        }
    }
}
