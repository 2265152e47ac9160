use std::fmt;

/// Rejected gesture configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonFinite { option: &'static str },
    Negative { option: &'static str, value: f32 },
}

impl ConfigError {
    /// Name of the offending option, e.g. `"pan.threshold"`.
    pub fn option(&self) -> &'static str {
        match self {
            ConfigError::NonFinite { option } | ConfigError::Negative { option, .. } => option,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite { option } => write!(f, "{option} must be a finite number"),
            ConfigError::Negative { option, value } => {
                write!(f, "{option} must not be negative; got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
