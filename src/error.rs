use thiserror::Error;

// =============================================================================
// Lot errors
// =============================================================================

/// The only way a lot operation can fail: pointing at a slot that isn't there
/// or that has already been moved out of.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LotError {
    #[error("index {index} is out of range for `{lot}` (len {len})")]
    OutOfRange { lot: String, index: usize, len: usize },

    #[error("slot {index} in `{lot}` is already empty")]
    Vacant { lot: String, index: usize },
}

impl LotError {
    pub fn out_of_range(lot: impl Into<String>, index: usize, len: usize) -> Self {
        Self::OutOfRange {
            lot: lot.into(),
            index,
            len,
        }
    }

    pub fn vacant(lot: impl Into<String>, index: usize) -> Self {
        Self::Vacant {
            lot: lot.into(),
            index,
        }
    }
}

// =============================================================================
// Config errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse {format} config: {message}")]
    Parse { format: String, message: String },

    #[error("Invalid value for field '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::parse(
            "JSON",
            format!("{err} (line {}, column {})", err.line(), err.column()),
        )
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::parse("TOML", err.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================
