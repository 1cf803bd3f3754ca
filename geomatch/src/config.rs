//! Configuration of correspondences.

use serde::{Deserialize, Serialize};

use crate::error::MatchingError;

/// Parameters used when building a correspondence.
///
/// ```
/// use geomatch::config::CorrespondenceConfig;
///
/// let config: CorrespondenceConfig = serde_json::from_str(r#"{ "merge_tolerance": 0.01 }"#).unwrap();
/// assert_eq!(config, CorrespondenceConfig::default().with_merge_tolerance(0.01));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrespondenceConfig {
    /// Maximum planar distance between the end of a sub-line and the start of the next one for the two vertices to
    /// be merged into one when the sub-lines are compiled into a single line. With the default value of `0` only
    /// exactly coincident vertices are merged. Must be finite and not negative.
    pub merge_tolerance: f64,
}

impl Default for CorrespondenceConfig {
    fn default() -> Self {
        Self {
            merge_tolerance: 0.0,
        }
    }
}

impl CorrespondenceConfig {
    /// Sets the merge tolerance.
    pub fn with_merge_tolerance(mut self, merge_tolerance: f64) -> Self {
        self.merge_tolerance = merge_tolerance;
        self
    }

    /// Checks that the parameters are usable. Correspondences check their configuration when created.
    pub fn validate(&self) -> Result<(), MatchingError> {
        if !(self.merge_tolerance.is_finite() && self.merge_tolerance >= 0.0) {
            return Err(MatchingError::InvalidMergeTolerance(self.merge_tolerance));
        }

        Ok(())
    }
}
