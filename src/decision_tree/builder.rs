use super::criterion::Criterion;
use super::dtree::DecisionTree;


/// A struct that builds [`DecisionTree`].
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use miniforest::prelude::*;
///
/// let learner = DecisionTreeBuilder::new()
///     .max_depth(8)
///     .criterion(Criterion::Entropy)
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct DecisionTreeBuilder {
    max_depth: Option<usize>,
    criterion: Criterion,
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// max_depth: None (grow until the stopping purity is reached),
    /// criterion: Criterion::Gini,
    /// ```
    pub fn new() -> Self {
        Self { max_depth: None, criterion: Criterion::Gini, }
    }


    /// Specify the maximal depth of the tree.
    pub fn max_depth(mut self, depth: usize) -> Self {
        assert!(depth > 0, "Tree must have positive depth");
        self.max_depth = Some(depth);

        self
    }


    /// Set the node splitting rule.
    /// Default value is `Criterion::Gini`.
    /// See [`Criterion`] for other rules.
    #[inline]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::from_components(self.criterion, self.max_depth)
    }
}
