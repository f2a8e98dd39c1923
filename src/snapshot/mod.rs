//! Export and import of calculator state.
//!
//! A snapshot captures everything needed to rebuild a calculator: the
//! four-field state, the settings and the tape. Snapshots serialize to JSON
//! for readability or to bincode for compactness. Where the bytes are kept
//! is up to the host.
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::core::Token;
//! use pocketcalc::snapshot::Snapshot;
//! use pocketcalc::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.apply_all([Token::Digit(4), Token::Digit(2)]);
//!
//! let bytes = Snapshot::capture(&calc).to_bytes().unwrap();
//! let restored = Snapshot::from_bytes(&bytes).unwrap().restore().unwrap();
//!
//! assert_eq!(restored.display().text, "42");
//! assert_eq!(restored.tape().len(), 2);
//! ```

use crate::core::{CalculatorState, Tape};
use crate::engine::Calculator;
use crate::settings::Settings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of one calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Engine state at capture time
    pub state: CalculatorState,

    /// Settings the engine ran with
    pub settings: Settings,

    /// Tape recorded so far
    pub tape: Tape,
}

impl Snapshot {
    pub fn capture(calculator: &Calculator) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            state: calculator.state().clone(),
            settings: calculator.settings().clone(),
            tape: calculator.tape().clone(),
        }
    }

    /// Rebuild a calculator from this snapshot.
    pub fn restore(&self) -> Result<Calculator, SnapshotError> {
        let calculator = Calculator::builder()
            .settings(self.settings.clone())
            .resume(self.state.clone())
            .tape(self.tape.clone())
            .build()?;
        Ok(calculator)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(text)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version == SNAPSHOT_VERSION {
            Ok(self)
        } else {
            Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            })
        }
    }
}
