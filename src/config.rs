//! Runtime configuration for the Shift Roster Engine.
//!
//! Loaded from a YAML file. The only tunable today is the sanity ceiling on
//! a single assignment's earnings; the ceiling is an operational guard, not
//! part of the ledger's contract.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::RosterConfig;
//!
//! let config = RosterConfig::load_or_default("./config/roster.yaml").unwrap();
//! println!("earnings ceiling: {}", config.max_assignment_earnings);
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// The largest earnings amount accepted for one shift assignment.
    #[serde(default = "default_max_assignment_earnings")]
    pub max_assignment_earnings: Decimal,
}

fn default_max_assignment_earnings() -> Decimal {
    Decimal::new(100_000, 0)
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            max_assignment_earnings: default_max_assignment_earnings(),
        }
    }
}

impl RosterConfig {
    /// Loads configuration from a YAML file.
    ///
    /// Returns `ConfigNotFound` if the file does not exist and
    /// `ConfigParseError` if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> RosterResult<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
                path: path.display().to_string(),
            })?;
        serde_yaml::from_str(&contents).map_err(|err| RosterError::ConfigParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }

    /// Loads configuration from a YAML file, falling back to defaults when
    /// the file is absent. A present-but-unreadable file is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> RosterResult<Self> {
        match Self::load(&path) {
            Ok(config) => Ok(config),
            Err(RosterError::ConfigNotFound { .. }) => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }
}
