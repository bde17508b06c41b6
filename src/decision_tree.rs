//! Defines the decision tree learner used to grow each member of a forest.

/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the decision tree learner.
pub mod dtree;
/// Defines the tree produced by `DecisionTree`.
pub mod classifier;

/// Defines the inner representations of `DecisionTreeClassifier`.
mod node;
mod criterion;
mod split_rule;


pub use builder::DecisionTreeBuilder;
pub use classifier::DecisionTreeClassifier;
pub use dtree::DecisionTree;
pub use criterion::Criterion;
pub use split_rule::{Splitter, LR};
