#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{DemoError, Result};
use std::str::FromStr;

pub const VALID_OUTPUT_FORMATS: [&str; 3] = ["blank", "debug", "json"];

/// What the binary prints once the scenario has been wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// A single empty line
    #[default]
    Blank,
    /// Pretty-printed Debug form of the client
    Debug,
    /// Pretty-printed JSON of the client
    Json,
}

impl FromStr for OutputFormat {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "blank" => Ok(OutputFormat::Blank),
            "debug" => Ok(OutputFormat::Debug),
            "json" => Ok(OutputFormat::Json),
            other => Err(DemoError::InvalidConfigValueError {
                field: "output".to_string(),
                value: other.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    VALID_OUTPUT_FORMATS.join(", ")
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("blank".parse::<OutputFormat>().unwrap(), OutputFormat::Blank);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(DemoError::InvalidConfigValueError { .. })
        ));
    }
}
