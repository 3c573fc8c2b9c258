use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieNightError {
    #[error("Invalid rating: {rating}")]
    InvalidRating { rating: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Catalog,
    Configuration,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl MovieNightError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MovieNightError::InvalidRating { .. } => ErrorCategory::Catalog,
            MovieNightError::ConfigError { .. }
            | MovieNightError::ConfigValidationError { .. }
            | MovieNightError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            MovieNightError::IoError(_) => ErrorCategory::Io,
            MovieNightError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MovieNightError::InvalidRating { .. }
            | MovieNightError::ConfigError { .. }
            | MovieNightError::ConfigValidationError { .. }
            | MovieNightError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            MovieNightError::SerializationError(_) => ErrorSeverity::Medium,
            MovieNightError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 目錄建構時的驗證失敗 (呼叫端可選擇略過該筆資料)
    pub fn is_validation_error(&self) -> bool {
        matches!(self, MovieNightError::InvalidRating { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MovieNightError::InvalidRating { rating } => {
                format!("'{}' is not a recognized content rating", rating)
            }
            MovieNightError::IoError(e) => format!("Could not read or write a file: {}", e),
            MovieNightError::SerializationError(e) => {
                format!("Could not render the recommendations: {}", e)
            }
            MovieNightError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            MovieNightError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            MovieNightError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for {}: {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MovieNightError::InvalidRating { .. } => format!(
                "Use one of the recognized ratings: {}",
                crate::domain::model::RECOGNIZED_RATINGS.join(", ")
            ),
            MovieNightError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            MovieNightError::SerializationError(_) => {
                "Try the text output format instead".to_string()
            }
            MovieNightError::ConfigError { .. } | MovieNightError::ConfigValidationError { .. } => {
                "Make sure the configuration file is valid TOML".to_string()
            }
            MovieNightError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and try again", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MovieNightError>;
