//! Traits at the seam between the forest and a single tree.
//!
//! The forest only needs three things from a tree learner:
//! a way to grow a tree from a bootstrap sample ([`TreeLearner`]),
//! a way to query a grown tree ([`Tree`]),
//! and a way to persist it ([`TreeIo`]).
use serde::{Serialize, Deserialize};

use std::path::Path;

use crate::{Datum, Label, Result};


/// Identity of the leaf a datum lands in.
/// Two identities are comparable only if they come from the same tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct LeafId(pub usize);


/// Parameters handed to the learner for every tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowParams {
    /// A split value larger than any real feature magnitude.
    /// The learner uses it to mark a split as consumed.
    pub sentinel: f64,
    /// Fraction of a single class in a node,
    /// at or above which the node is not split any further.
    pub stop_purity: f64,
    /// The declared number of classes.
    pub n_classes: usize,
}


/// A trained tree.
pub trait Tree {
    /// Predicts the class of `datum`.
    /// The returned label is positive.
    fn classify(&self, datum: &Datum) -> Label;


    /// Returns the leaf `datum` reaches.
    fn leaf(&self, datum: &Datum) -> LeafId;
}


/// A tree learner grows one tree from one bootstrap sample.
pub trait TreeLearner {
    /// The tree this learner produces.
    type Tree: Tree;


    /// Returns the name of the learner.
    fn name(&self) -> &str;


    /// Returns the information of the learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Grow a tree from `sample`.
    /// `sample` may contain the same datum more than once.
    fn produce(&self, sample: &[&Datum], params: &GrowParams) -> Self::Tree;
}


/// Reads/writes a tree from/to a single artifact.
pub trait TreeIo: Sized {
    /// Write `self` to `path`.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()>;


    /// Read a tree from `path`.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self>;
}
