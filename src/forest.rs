//! The files in `forest/` directory define the forest,
//! its builder, and the storage of its trees.

/// Defines the forest struct.
pub mod ensemble;
/// Defines the builder that trains or loads a forest.
pub mod builder;
/// Defines the naming scheme of the tree artifacts.
pub mod storage;


pub use ensemble::Forest;
pub use builder::{ForestBuilder, TrainedForest};
pub use storage::TreeStorage;
