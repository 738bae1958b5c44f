use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobBoardError {
    #[error("Validation error: missing required field '{field}'")]
    ValidationError { field: String },

    #[error("Job '{title}' not found")]
    NotFoundError { title: String },

    #[error("Invalid field: {field}")]
    InvalidFieldError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl JobBoardError {
    /// Store errors never end the session; everything else happens at startup.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            JobBoardError::ValidationError { .. }
                | JobBoardError::NotFoundError { .. }
                | JobBoardError::InvalidFieldError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            JobBoardError::ValidationError { .. } => {
                "Invalid job structure. Please ensure all required fields are present.".to_string()
            }
            JobBoardError::NotFoundError { title } => format!("Job '{}' not found.", title),
            JobBoardError::InvalidFieldError { field } => {
                format!("Invalid field '{}'. Please try again.", field)
            }
            JobBoardError::IoError(e) => format!("Could not read or write a file: {}", e),
            JobBoardError::SerializationError(e) => format!("Malformed JSON data: {}", e),
            JobBoardError::ConfigError { message } => format!("Configuration problem: {}", message),
            JobBoardError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            JobBoardError::ValidationError { .. } => {
                "Provide every job field and every company field"
            }
            JobBoardError::NotFoundError { .. } => {
                "Titles are case-sensitive; use 'List Jobs' to see the exact titles"
            }
            JobBoardError::InvalidFieldError { .. } => {
                "Use one of: title, type, description, location, salary, company"
            }
            JobBoardError::IoError(_) => "Check that the file exists and is readable",
            JobBoardError::SerializationError(_) => {
                "Seed files must contain a JSON array of job objects"
            }
            JobBoardError::ConfigError { .. } | JobBoardError::InvalidConfigValueError { .. } => {
                "Check the TOML configuration file and command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, JobBoardError>;
