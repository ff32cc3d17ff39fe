//! Bounds for genome values
//!
//! This module provides the bounds type used to sample initial coordinates.

use serde::{Deserialize, Serialize};

use crate::error::EvolutionError;

/// Sampling bounds shared by both coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (exclusive when sampling)
    pub max: f64,
}

impl Bounds {
    /// Create new bounds
    ///
    /// # Panics
    /// Panics if min > max
    pub fn new(min: f64, max: f64) -> Self {
        assert!(
            min <= max,
            "Invalid bounds: min ({}) must be <= max ({})",
            min,
            max
        );
        Self { min, max }
    }

    /// Create bounds, returning an error instead of panicking
    pub fn try_new(min: f64, max: f64) -> Result<Self, EvolutionError> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Create symmetric bounds centered at 0
    pub fn symmetric(half_width: f64) -> Self {
        Self::new(-half_width, half_width)
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Check if a value is within bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check that both ends are finite and ordered, and that the width fits in an `f64`
    pub fn validate(&self) -> Result<(), EvolutionError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(EvolutionError::Configuration(format!(
                "bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(EvolutionError::Configuration(format!(
                "bounds min ({}) must be <= max ({})",
                self.min, self.max
            )));
        }
        if !self.range().is_finite() {
            return Err(EvolutionError::Configuration(format!(
                "bounds width overflows, got [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::symmetric(5.0)
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_default_matches_search_box() {
        let bounds = Bounds::default();
        assert_eq!(bounds.min, -5.0);
        assert_eq!(bounds.max, 5.0);
        assert_eq!(bounds.range(), 10.0);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new(-1.0, 2.0);
        assert!(bounds.contains(-1.0));
        assert!(bounds.contains(2.0));
        assert!(!bounds.contains(2.5));
    }

    #[test]
    fn test_bounds_try_new_rejects_inverted() {
        assert!(Bounds::try_new(1.0, -1.0).is_err());
        assert!(Bounds::try_new(f64::NEG_INFINITY, 0.0).is_err());
        assert!(Bounds::try_new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_bounds_validate_rejects_overflowing_width() {
        let bounds = Bounds::new(-1e308, 1e308);
        let err = bounds.validate().unwrap_err();
        assert!(matches!(err, EvolutionError::Configuration(_)));
        assert!(err.to_string().contains("width"));

        assert!(Bounds::new(-1e307, 1e307).validate().is_ok());
    }

    #[test]
    #[should_panic(expected = "Invalid bounds")]
    fn test_bounds_new_panics_on_inverted() {
        Bounds::new(1.0, 0.0);
    }
}
