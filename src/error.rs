use thiserror::Error;

/// Main error type for Biohop
///
/// Covers the fallible setup and output paths (configuration, client
/// construction, serialization). Failures during a hop itself never surface
/// here: the graph client normalizes them into the `ERROR` sentinel so a
/// failing branch cannot abort its siblings.
#[derive(Error, Debug)]
pub enum BiohopError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization / response parse errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using BiohopError
pub type Result<T> = std::result::Result<T, BiohopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BiohopError::Config("Test error".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("Test error"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let biohop_err: BiohopError = io_err.into();
        assert!(matches!(biohop_err, BiohopError::Io(_)));
    }

    #[test]
    fn test_error_invalid_input_display() {
        let err = BiohopError::InvalidInput("empty query path".to_string());
        assert!(err.to_string().contains("Invalid input"));
    }
}
