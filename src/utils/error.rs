use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to write rules to {path}: {source}")]
    OutputError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ExtractError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ExtractError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ExtractError::SerializationError(_) => ErrorSeverity::Medium,
            ExtractError::IoError(_) | ExtractError::OutputError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    /// 對應到程序退出碼，設定錯誤一律為 1
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ExtractError::InvalidConfigValueError { field, reason, .. } => {
                format!("Argument <{}> is invalid: {}", field, reason)
            }
            ExtractError::OutputError { path, .. } => {
                format!("Could not write the rule list to {}", path)
            }
            ExtractError::SerializationError(_) => "Could not render run statistics".to_string(),
            ExtractError::IoError(e) => format!("I/O failure: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ExtractError::InvalidConfigValueError { .. } => {
                "Pass an --output path that is not an existing directory"
            }
            ExtractError::OutputError { .. } => {
                "Check that the output location is writable and the disk is not full"
            }
            ExtractError::SerializationError(_) => "Retry with --stats text",
            ExtractError::IoError(_) => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
