use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GreetError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            GreetError::IoError(e) => {
                format!("Network or filesystem problem: {}", e)
            }
            GreetError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            GreetError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!("{} is set to '{}', which is not usable: {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GreetError::IoError(_) => {
                "Check that the port is free and that the process may bind it".to_string()
            }
            GreetError::ConfigError { .. } | GreetError::InvalidConfigValueError { .. } => {
                "Set PORT to an integer between 1 and 65535, or unset it to use 3000".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GreetError>;
