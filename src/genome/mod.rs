//! Genome representations
//!
//! This module provides the two-dimensional point genome and its search bounds.

pub mod bounds;
pub mod point;

pub mod prelude {
    pub use super::bounds::*;
    pub use super::point::*;
}
