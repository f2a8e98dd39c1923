//! Settings violations.

use thiserror::Error;

/// Problems found while reading or checking [`Settings`](super::Settings)
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SettingsError {
    #[error("Failed to parse settings: {0}")]
    Parse(String),

    #[error("Precision {found} is out of range (max: {max})")]
    PrecisionOutOfRange { found: u32, max: u32 },

    #[error("Error marker must not be empty")]
    EmptyErrorMarker,

    #[error("Error marker '{0}' reads as a number")]
    NumericErrorMarker(String),

    #[error("Tape limit must be greater than zero")]
    ZeroTapeLimit,
}
