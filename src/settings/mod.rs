//! Engine settings and their validation.
//!
//! Settings are plain serde values. Hosts usually build them in code or
//! read them from TOML text:
//!
//! ```toml
//! precision = 8
//! error_marker = "E"
//! angle_unit = "radians"
//! tape_limit = 100
//! ```
//!
//! Missing keys take their defaults. Validation uses Stillwater's
//! `Validation` so every problem is reported at once, not just the first.
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::settings::{AngleUnit, Settings};
//!
//! let settings = Settings::from_toml_str("angle_unit = \"radians\"").unwrap();
//! assert_eq!(settings.angle_unit, AngleUnit::Radians);
//! assert_eq!(settings.precision, 10);
//! assert!(settings.validate().is_success());
//! ```

pub mod violations;

pub use crate::core::AngleUnit;
pub use violations::SettingsError;

use crate::core::{DEFAULT_PRECISION, MAX_PRECISION};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

fn default_error_marker() -> String {
    "Error".to_string()
}

/// Tape entries kept when no limit is configured.
pub const DEFAULT_TAPE_LIMIT: usize = 1000;

fn default_tape_limit() -> Option<usize> {
    Some(DEFAULT_TAPE_LIMIT)
}

/// Tunable engine behavior.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Decimal places kept when formatting results
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Text shown in place of a number after a failed calculation
    #[serde(default = "default_error_marker")]
    pub error_marker: String,

    /// Unit for sin, cos and tan arguments
    #[serde(default)]
    pub angle_unit: AngleUnit,

    /// Maximum tape entries kept; `None` keeps everything
    #[serde(default = "default_tape_limit")]
    pub tape_limit: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            error_marker: default_error_marker(),
            angle_unit: AngleUnit::default(),
            tape_limit: default_tape_limit(),
        }
    }
}

impl Settings {
    /// Read settings from TOML text. The result is not validated yet.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        toml::from_str(text).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<Settings, NonEmptyVec<SettingsError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<SettingsError>>> = Vec::new();

        checks.push(if self.precision > MAX_PRECISION {
            Validation::fail(SettingsError::PrecisionOutOfRange {
                found: self.precision,
                max: MAX_PRECISION,
            })
        } else {
            Validation::success(())
        });

        let marker = self.error_marker.trim();
        checks.push(if marker.is_empty() {
            Validation::fail(SettingsError::EmptyErrorMarker)
        } else if marker.parse::<f64>().is_ok() {
            Validation::fail(SettingsError::NumericErrorMarker(
                self.error_marker.clone(),
            ))
        } else {
            Validation::success(())
        });

        if self.tape_limit == Some(0) {
            checks.push(Validation::fail(SettingsError::ZeroTapeLimit));
        }

        Validation::all_vec(checks).map(|_| self.clone())
    }

    /// Validate and convert to a `Result` listing every violation.
    pub fn validated(&self) -> Result<Settings, Vec<SettingsError>> {
        match self.validate() {
            Validation::Success(settings) => Ok(settings),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }
}
