//! Ordering fonts by visual similarity.
//!
//! Every font is described by a fixed-length feature vector and a scalar glyph density. This crate arranges a batch of such fonts into a single open path
//! through feature space so that similar fonts end up next to each other, and then stratifies that path into density groups.
//!
//! ## Pipeline
//!
//! - [`DistanceMatrix`]: The full pairwise Euclidean distance matrix of a [`Batch`].
//! - [`tour::construct_greedy`]: An initial tour seeded at one end of the farthest pair and extended by nearest neighbors.
//! - [`tour::Improve`]: Local search that relocates single fonts until no relocation shortens the path. See [`tour::Strategy`] for the available variants.
//! - [`Groups`]: Density buckets over the final tour, typically split at the quartiles of the batch densities.
//! - [`report`]: Path lengths, nearest-neighbor queries and plain-text serialization of the results.

mod batch;
pub mod groups;
mod matrix;
pub mod metric;
pub mod report;
pub mod tour;
mod utils;

pub use batch::{Batch, Item};
pub use groups::Groups;
pub use matrix::DistanceMatrix;
pub use tour::Tour;
pub use utils::DistanceValue;
