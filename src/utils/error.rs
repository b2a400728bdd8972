use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Invalid argument received: {message}")]
    ArgumentError { message: String },

    #[error("Year is not a number: '{value}'")]
    InvalidYearFormat { value: String },

    #[error("Year provided is not 4 digit year: '{year}'")]
    YearTooShort { year: String },

    #[error("Path '{}' does not exist", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Path '{}' is not a directory", path.display())]
    PathNotDirectory { path: PathBuf },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("An unexpected error occurred while making '{}' directory: {source}", path.display())]
    DirectoryCreationError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Filesystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScaffoldError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ArgumentError { .. }
            | Self::InvalidYearFormat { .. }
            | Self::YearTooShort { .. }
            | Self::PathNotFound { .. }
            | Self::PathNotDirectory { .. } => ErrorCategory::Input,
            Self::InvalidConfigValue { .. } | Self::ConfigError { .. } => {
                ErrorCategory::Configuration
            }
            Self::DirectoryCreationError { .. } | Self::IoError(_) => ErrorCategory::Filesystem,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ArgumentError { .. }
            | Self::InvalidYearFormat { .. }
            | Self::YearTooShort { .. }
            | Self::PathNotFound { .. }
            | Self::PathNotDirectory { .. }
            | Self::InvalidConfigValue { .. } => ErrorSeverity::High,
            Self::DirectoryCreationError { .. } | Self::ConfigError { .. } | Self::IoError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// 程序結束碼：輸入錯誤 2、檔案系統錯誤 1、設定/日誌錯誤 3
    pub fn exit_code(&self) -> i32 {
        match (self.category(), self) {
            (ErrorCategory::Input, _) => 2,
            (ErrorCategory::Configuration, Self::InvalidConfigValue { .. }) => 2,
            (ErrorCategory::Configuration, _) => 3,
            (ErrorCategory::Filesystem, _) => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ArgumentError { message } => format!("Unrecognized argument: {}", message),
            Self::InvalidYearFormat { value } => {
                format!("'{}' is not a valid year", value)
            }
            Self::YearTooShort { year } => {
                format!("Year '{}' is shorter than 4 digits. Y2K all over again?", year)
            }
            Self::PathNotFound { path } => format!("Path '{}' does not exist", path.display()),
            Self::PathNotDirectory { path } => {
                format!("Path '{}' is not a directory", path.display())
            }
            Self::InvalidConfigValue { field, value, .. } => {
                format!("Invalid value '{}' for {}", value, field)
            }
            Self::DirectoryCreationError { path, .. } => {
                format!("Could not create directory '{}'", path.display())
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ArgumentError { .. } => {
                "Run with --help to see the accepted arguments".to_string()
            }
            Self::InvalidYearFormat { .. } | Self::YearTooShort { .. } => {
                "Pass a 4 digit year, e.g. `aoc-new-year 2024` or `y:2024`".to_string()
            }
            Self::PathNotFound { .. } => {
                "Create the target directory first or pass an existing one".to_string()
            }
            Self::PathNotDirectory { .. } => {
                "Point the path at a directory, not a file".to_string()
            }
            Self::InvalidConfigValue { reason, .. } => reason.clone(),
            Self::DirectoryCreationError { .. } => {
                "Check that the year directory does not already exist and that the path is writable"
                    .to_string()
            }
            Self::ConfigError { .. } => {
                "Check the configuration file and log file location".to_string()
            }
            Self::IoError(_) => "Check file permissions and available disk space".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_exit_with_usage_code() {
        let err = ScaffoldError::YearTooShort {
            year: "202".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Year provided is not 4 digit year: '202'");
    }

    #[test]
    fn test_filesystem_errors_are_critical() {
        let err = ScaffoldError::DirectoryCreationError {
            path: PathBuf::from("2020"),
            source: std::io::Error::from(std::io::ErrorKind::AlreadyExists),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("already exist"));
    }

    #[test]
    fn test_config_errors_exit_code() {
        let err = ScaffoldError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(err.exit_code(), 3);

        let err = ScaffoldError::InvalidConfigValue {
            field: "layout.days".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 25".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
    }
}
