//! # peak-evo
//!
//! A generational genetic algorithm over two-dimensional points.
//!
//! The library evolves a fixed-size population toward the maximum of a
//! pluggable objective `f(x, y)` and compares fitness-proportional (roulette)
//! selection against greedy elitist selection.
//!
//! ## Core Concepts
//!
//! - **Individuals** carry a point and its cached fitness; the fitness is
//!   recomputed whenever the point moves
//! - **Operators** (selection, crossover, mutation) are traits, so new
//!   strategies plug into the driver without changing it
//! - **Randomness** is injected as any `rand::Rng`, so seeded runs are reproducible
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use peak_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let comparison = compare_strategies(&SimpleGAConfig::default(), PeakFitness, &mut rng)?;
//! println!("{}", comparison);
//! ```

pub mod algorithms;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
}
