//! Domain model types for Euclidean TSP instances.
//!
//! Provides the core abstractions: points in the plane identified by
//! their index in the instance, and tours as cyclic permutations of
//! those indices.

mod point;
mod tour;

pub use point::Point;
pub use tour::Tour;

pub(crate) use tour::cycle_length;
