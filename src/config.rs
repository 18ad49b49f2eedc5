#[cfg(test)]
mod tests;

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// Tolerance used when checking that a direction sums to one
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Ceiling for the resolution search in [`crate::directions_for_count`]
pub const DEFAULT_MAX_SECTIONS: usize = 100;

/// Numeric settings shared by every generator.
///
/// Missing fields fall back to their defaults when loaded from JSON:
/// ```json
/// { "tolerance": 1e-6 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceDirectionsConfig {
    /// Allowed drift of a direction's sum from one.
    ///
    /// Must stay well below the grid step `1 / n_sections`. A larger value is
    /// accepted, but then grid combinations that are off the simplex are kept,
    /// and the enumeration no longer matches [`crate::count_directions`].
    pub tolerance: f64,
    pub max_sections: usize,
}

impl Default for ReferenceDirectionsConfig {
    fn default() -> Self {
        ReferenceDirectionsConfig {
            tolerance: DEFAULT_TOLERANCE,
            max_sections: DEFAULT_MAX_SECTIONS,
        }
    }
}

impl ReferenceDirectionsConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self
    {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_sections(mut self, max_sections: usize) -> Self
    {
        self.max_sections = max_sections;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self>
    {
        let config: ReferenceDirectionsConfig = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self>
    {
        let json = std::fs::read_to_string(path)?;

        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()>
    {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0
        {
            return Err(Error::InvalidArgument(format!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            )));
        }

        if self.max_sections == 0
        {
            return Err(Error::InvalidArgument("max_sections must be positive".to_string()));
        }

        Ok(())
    }
}
