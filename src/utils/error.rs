use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {message}")]
    TomlError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl DemoError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not read the scenario file: {}", e),
            DemoError::SerializationError(e) => format!("Could not render the client: {}", e),
            DemoError::TomlError { message } => format!("The scenario file is not valid TOML: {}", message),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            DemoError::MissingConfigError { field } => {
                format!("The scenario is missing '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that the --config path exists and is readable",
            DemoError::SerializationError(_) => "Retry with --output debug",
            DemoError::TomlError { .. } => "Compare the file against the [client]/[city]/[[pokemon]] layout",
            DemoError::InvalidConfigValueError { .. } => "Run with --help to see accepted values",
            DemoError::MissingConfigError { .. } => "Add the missing table to the scenario file",
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
