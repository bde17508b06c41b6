#![warn(missing_docs)]

//! 
//! A crate that provides bagged decision forests.
//! 
//! - Bagging with an out-of-bag (OOB) set.
//!     Every tree is grown from a bootstrap resample of the pool
//!     by a [`TreeLearner`] (e.g., [`DecisionTree`]).
//!     The data no round ever used make up the OOB set.
//! 
//! - Majority vote.
//!     A [`Forest`] predicts the class most trees vote for.
//!     Ties go to the lowest class.
//! 
//! - Analytics.
//!     The OOB set evaluates the forest ([`oob`]),
//!     and leaf co-occurrence across trees gives a
//!     [`DissimilarityMatrix`] ([`proximity`]).
//! 
//! - Self-training.
//!     [`SelfTraining`] labels unlabeled data with a forest
//!     and grows a new forest over the enlarged pool.
//! 
//! Class labels are positive integers `1, 2, ...`.
//! 
//! # Example
//! ```no_run
//! use miniforest::prelude::*;
//! 
//! let pool = SampleReader::default()
//!     .file("/path/to/sample.csv")
//!     .has_header(true)
//!     .target_feature("class")
//!     .read()
//!     .unwrap();
//! 
//! let learner = DecisionTreeBuilder::new().build();
//! let trained = ForestBuilder::new(learner, 2)
//!     .n_trees(100)
//!     .seed(1234)
//!     .print_results(true)
//!     .run(&pool)
//!     .unwrap()
//!     .unwrap();
//! 
//! let matrix = trained.dissimilarity();
//! println!("{:?}", matrix.shape());
//! ```

pub mod constants;
pub mod error;
pub mod sample;
pub mod tree;
pub mod decision_tree;
pub mod bagging;
pub mod vote;
pub mod forest;
pub mod oob;
pub mod proximity;
pub mod self_training;
pub mod prelude;

mod common;
mod report;


pub use error::{ForestError, Result};

pub use sample::{Datum, Label, Value, SampleReader};

pub use tree::{Tree, TreeLearner, TreeIo, LeafId, GrowParams};

pub use decision_tree::{
    DecisionTreeBuilder,
    DecisionTree,
    DecisionTreeClassifier,
    Criterion,
};

pub use forest::{Forest, ForestBuilder, TrainedForest, TreeStorage};
pub use vote::VoteTally;
pub use oob::{OobReport, BinaryConfusion};
pub use proximity::DissimilarityMatrix;
pub use self_training::SelfTraining;
