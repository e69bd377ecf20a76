use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config not found: {name}")]
    ConfigNotFound { name: String },

    #[error("config \"{name}\" already exists")]
    ConfigExists { name: String },

    #[error("config \"{name}\" is malformed: {detail}")]
    ConfigParse { name: String, detail: String },

    #[error("invalid pattern \"{pattern}\": {detail}")]
    InvalidPattern { pattern: String, detail: String },

    #[error("line {line} is not \"pattern | path\": {content}")]
    RuleFormat { line: usize, content: String },

    #[error("style file not found: {0}")]
    MissingStyleFile(PathBuf),

    #[error("config name must not be empty")]
    EmptyName,
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::ConfigNotFound {
            name: "roads".to_string(),
        };
        assert_eq!(err.to_string(), "config not found: roads");

        let err = AppError::InvalidPattern {
            pattern: "[".to_string(),
            detail: "unclosed character class".to_string(),
        };
        assert!(err.to_string().contains('['));
        assert!(err.to_string().contains("unclosed character class"));

        let err = AppError::RuleFormat {
            line: 3,
            content: "no separator here".to_string(),
        };
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_missing_style_file_display() {
        let err = AppError::MissingStyleFile(PathBuf::from("/tmp/road.qml"));
        assert!(err.to_string().contains("road.qml"));
    }
}
