//! Problem-modelling crate for three-dimensional bin packing: items, containers,
//! placements, the extreme point structure and the permutation-space splitter.

/// Entities to model 3D bin packing problems
pub mod entities;

/// Free-space bookkeeping for a single container
pub mod geometry;

/// Counting, ranking and splitting of multiset permutations
pub mod permutation;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
