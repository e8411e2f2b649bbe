use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session cadence. Scoring tolerances are fixed constants in each scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThresholdProfile {
    /// Accuracy (percent) that starts the hold timer.
    pub target_score: f64,
    pub hold_secs: f64,
    /// Minimum spacing between score log entries while holding.
    pub log_interval_secs: f64,
    /// Feedback lines kept per pose outcome in coach mode.
    pub max_feedback_lines: usize,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse profile {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid profile: {0}")]
    Invalid(String),
}

impl Default for ThresholdProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl ThresholdProfile {
    pub fn default_v1() -> Self {
        Self {
            target_score: 90.0,
            hold_secs: 10.0,
            log_interval_secs: 0.5,
            max_feedback_lines: 4,
        }
    }

    pub fn from_json(text: &str, path: &Path) -> Result<Self, ProfileError> {
        let profile: ThresholdProfile =
            serde_json::from_str(text).map_err(|source| ProfileError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let text = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text, path)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if !(0.0..=100.0).contains(&self.target_score) {
            return Err(ProfileError::Invalid(format!(
                "target_score must be within [0, 100], got {}",
                self.target_score
            )));
        }
        if !(self.hold_secs >= 0.0) {
            return Err(ProfileError::Invalid(format!(
                "hold_secs must be non-negative, got {}",
                self.hold_secs
            )));
        }
        if !(self.log_interval_secs > 0.0) {
            return Err(ProfileError::Invalid(format!(
                "log_interval_secs must be positive, got {}",
                self.log_interval_secs
            )));
        }
        Ok(())
    }
}
