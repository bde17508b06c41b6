use std::borrow::Borrow;

use crate::{Datum, Label, Result};
use crate::tree::{LeafId, Tree};
use crate::vote::VoteTally;


/// An ordered collection of trees.
/// The order is the training round order,
/// or the artifact index order for a loaded forest.
#[derive(Debug, Clone, PartialEq)]
pub struct Forest<T> {
    trees: Vec<T>,
}


impl<T> Default for Forest<T> {
    fn default() -> Self {
        Self { trees: Vec::new() }
    }
}


impl<T> From<Vec<T>> for Forest<T> {
    #[inline]
    fn from(trees: Vec<T>) -> Self {
        Self { trees }
    }
}


impl<T> Forest<T> {
    /// Returns the number of trees.
    #[inline]
    pub fn len(&self) -> usize {
        self.trees.len()
    }


    /// Returns `true` if the forest has no tree.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }


    /// Returns the trees in order.
    #[inline]
    pub fn trees(&self) -> &[T] {
        &self.trees[..]
    }


    /// Append a tree.
    #[inline]
    pub fn push(&mut self, tree: T) {
        self.trees.push(tree);
    }


    /// Decompose the forest into its trees.
    #[inline]
    pub fn into_trees(self) -> Vec<T> {
        self.trees
    }
}


impl<T: Tree> Forest<T> {
    /// Returns one vote per tree, in tree order.
    pub fn votes(&self, datum: &Datum) -> Vec<Label> {
        self.trees.iter()
            .map(|tree| tree.classify(datum))
            .collect()
    }


    /// Returns the vote counts of all trees for `datum`.
    /// Fails if a tree votes for class `0`.
    pub fn tally(&self, datum: &Datum) -> Result<VoteTally> {
        let mut tally = VoteTally::new();
        for tree in &self.trees {
            tally.record(tree.classify(datum))?;
        }
        Ok(tally)
    }


    /// Predicts the class of `datum` by majority vote.
    /// Ties go to the lowest class.
    /// A forest with no tree predicts class `1`.
    #[inline]
    pub fn predict(&self, datum: &Datum) -> Result<Label> {
        self.tally(datum).map(|tally| tally.winner())
    }


    /// Predicts the classes of `data`.
    pub fn predict_all<D>(&self, data: &[D]) -> Result<Vec<Label>>
        where D: Borrow<Datum>
    {
        data.iter()
            .map(|datum| self.predict(datum.borrow()))
            .collect()
    }


    /// Returns the leaf `datum` reaches in each tree.
    pub fn leaves(&self, datum: &Datum) -> Vec<LeafId> {
        self.trees.iter()
            .map(|tree| tree.leaf(datum))
            .collect()
    }
}
