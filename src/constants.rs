//! Default values shared by the builders in this crate.

/// A split value larger than any real feature magnitude.
/// The tree learner uses it to mark a numeric split as consumed.
pub const DEFAULT_SENTINEL: f64 = 100_000_000_000f64;

/// Fraction of a single class in a node at which the tree stops splitting.
pub const DEFAULT_STOP_PURITY: f64 = 0.84;

/// Number of trees grown by [`ForestBuilder`](crate::ForestBuilder)
/// unless specified.
pub const DEFAULT_N_TREES: usize = 100;

/// Default prefix of the tree artifacts.
pub const DEFAULT_TREE_BASE: &str = "tree";

/// Default extension of the tree artifacts.
pub const DEFAULT_TREE_EXTENSION: &str = ".txt";

/// Positive class in binary (anomaly/normal) evaluation.
pub const ANOMALY_CLASS: u32 = 2;

/// Negative class in binary (anomaly/normal) evaluation.
pub const NORMAL_CLASS: u32 = 1;
