//! Error types for peak-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for operator construction
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperatorError {
    /// Invalid operator configuration
    #[error("Invalid operator configuration: {0}")]
    InvalidConfiguration(String),
}

/// Top-level error type for evolution operations
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Operator error
    #[error("Operator error: {0}")]
    Operator(#[from] OperatorError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Configuration could not be read or parsed
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_error_display() {
        let err = OperatorError::InvalidConfiguration("sigma must be non-negative".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid operator configuration: sigma must be non-negative"
        );
    }

    #[test]
    fn test_evolution_error_from_operator_error() {
        let op_err = OperatorError::InvalidConfiguration("bad rate".to_string());
        let evo_err: EvolutionError = op_err.into();
        assert!(matches!(evo_err, EvolutionError::Operator(_)));
    }

    #[test]
    fn test_configuration_error_display() {
        let err = EvolutionError::Configuration("population size must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: population size must be at least 1"
        );
        assert_eq!(EvolutionError::EmptyPopulation.to_string(), "Empty population");
    }
}
