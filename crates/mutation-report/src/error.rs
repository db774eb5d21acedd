//! # Report Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Report Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Tool / I/O    │  │     Report Text         │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  ConfigParse    │  │  ToolSpawn      │  │  HeaderOutsideSection   │ │
//! │  │  InvalidConfig  │  │  Io / Json      │  │  InvalidCount           │ │
//! │  │                 │  │                 │  │  InvalidRange           │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Everything that can go wrong between running the tool and writing JSON.
#[derive(Debug, Error)]
pub enum ReportError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Config file is not valid TOML for [`crate::config::ReportConfig`].
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but holds unusable values.
    #[error("Invalid report configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // Tool / I/O Errors
    // =========================================================================
    /// The mutation tool could not be started.
    #[error("Failed to run '{command}': {source}")]
    ToolSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading the report text or writing the JSON file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // =========================================================================
    // Report Text Errors
    // =========================================================================
    /// A file header appeared before any status section.
    #[error("line {line_number}: file header '{line}' appears before any status section")]
    HeaderOutsideSection { line_number: usize, line: String },

    /// The mutant count in a file header is not a number.
    #[error("line {line_number}: invalid mutant count '{value}'")]
    InvalidCount { line_number: usize, value: String },

    /// A `start-end` token is not two line numbers.
    #[error("line {line_number}: invalid line range '{token}'")]
    InvalidRange { line_number: usize, token: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ReportError::InvalidRange {
            line_number: 7,
            token: "3-x".to_string(),
        };
        assert_eq!(err.to_string(), "line 7: invalid line range '3-x'");

        let err = ReportError::ToolSpawn {
            command: "mutmut".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to run 'mutmut': not found");
    }
}
