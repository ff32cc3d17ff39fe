//! Evolutionary algorithms
//!
//! This module provides the generational GA and the paired strategy comparison.

pub mod comparison;
pub mod simple_ga;

pub mod prelude {
    pub use super::comparison::*;
    pub use super::simple_ga::*;
}
