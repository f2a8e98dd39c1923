//! Build errors for the calculator builder.

use crate::settings::SettingsError;
use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Invalid settings: {}", join(.0))]
    InvalidSettings(Vec<SettingsError>),

    #[error("Resume state is inconsistent: {0}")]
    InvalidState(String),
}

fn join(errors: &[SettingsError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
