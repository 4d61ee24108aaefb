//! Error types for scanner construction.
//!
//! Extraction itself never fails: short matches, filtered words and empty
//! searches are dropped silently. Only building a scanner (compiling custom
//! patterns, parsing configuration) can go wrong.

use std::fmt;

#[derive(Debug)]
pub enum ScanError {
    /// A custom pattern did not compile
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    /// Configuration could not be parsed
    InvalidConfig(String),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, source } => {
                write!(f, "Invalid pattern '{}': {}", pattern, source)
            }
            Self::InvalidConfig(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidConfig(e.to_string())
    }
}
