//! Self-training (pseudo-labeling) over a labeled and an unlabeled pool.
use std::time::Instant;

use crate::{Datum, ForestError, Result};
use crate::forest::{Forest, ForestBuilder, TrainedForest};
use crate::tree::{Tree, TreeIo, TreeLearner};


/// One generation of self-training.
///
/// 1. Obtain a forest: generation `0` trains one over the labeled pool,
///    generation `g > 0` loads `g * n_trees` trees from the storage.
/// 2. Label every unlabeled datum with the majority vote of that forest
///    and append it to the labeled pool.
/// 3. Train the final forest over the enlarged pool.
///
/// With [`ForestBuilder::write_trees`] set, the final forest of generation
/// `g` is written at indices `g * n_trees, ...`,
/// so generation `g + 1` loads the final forests of all earlier generations.
///
/// # Example
/// ```no_run
/// use miniforest::prelude::*;
///
/// let mut labeled: Vec<Datum> = Vec::new();
/// let unlabeled: Vec<Datum> = Vec::new();
///
/// let builder = ForestBuilder::new(DecisionTreeBuilder::new().build(), 2)
///     .n_trees(20)
///     .write_trees(true)
///     .storage(TreeStorage::new("/tmp/self/tree"));
///
/// let trained = SelfTraining::new(&builder)
///     .generation(0)
///     .run(&mut labeled, unlabeled)
///     .unwrap();
/// ```
pub struct SelfTraining<'b, L> {
    builder: &'b ForestBuilder<L>,
    generation: usize,
}


impl<'b, L> SelfTraining<'b, L> {
    /// Construct a new instance of generation `0`.
    pub fn new(builder: &'b ForestBuilder<L>) -> Self {
        Self { builder, generation: 0 }
    }


    /// Set the generation index.
    #[inline]
    pub fn generation(mut self, generation: usize) -> Self {
        self.generation = generation;
        self
    }
}


impl<'b, L> SelfTraining<'b, L>
    where L: TreeLearner,
          L::Tree: TreeIo,
{
    /// Run one generation.
    ///
    /// The classes the unlabeled data carry on input are ignored
    /// and overwritten. On success, `labeled` holds the promoted data
    /// after the originally labeled ones and the returned OOB set
    /// borrows from it.
    /// If the previous forest cannot be loaded, `labeled` is left as is.
    pub fn run<'d>(&self, labeled: &'d mut Vec<Datum>, unlabeled: Vec<Datum>)
        -> Result<TrainedForest<'d, L::Tree>>
    {
        let now = Instant::now();
        let n_trees = self.builder.n_trees;
        let offset = self.generation * n_trees;

        let promoted = if self.generation == 0 {
            let forest = self.builder.train(&labeled[..]).forest;
            pseudo_label(&forest, labeled, unlabeled)?
        } else {
            if offset == 0 {
                return Err(ForestError::InvalidInput(format!(
                    "generation {} has no previous trees to load",
                    self.generation,
                )));
            }
            let forest = self.builder.storage
                .read_forest::<L::Tree>(offset)?;
            pseudo_label(&forest, labeled, unlabeled)?
        };
        log::info!(
            "generation {}: promoted {promoted} data, {} labeled in total",
            self.generation, labeled.len(),
        );

        let pool: &'d Vec<Datum> = labeled;
        let trained = self.builder.train(&pool[..]);
        let millisec = now.elapsed().as_millis();
        self.builder.report_and_store(&trained, offset, millisec)?;
        Ok(trained)
    }
}


/// Label every datum of `unlabeled` by the majority vote of `forest`
/// and append it to `labeled` in order.
/// Returns the number of appended data.
///
/// All predictions are made before `labeled` is touched,
/// so on error `labeled` is unchanged.
pub fn pseudo_label<T: Tree>(
    forest: &Forest<T>,
    labeled: &mut Vec<Datum>,
    mut unlabeled: Vec<Datum>,
) -> Result<usize>
{
    let classes = forest.predict_all(&unlabeled[..])?;
    for (datum, class) in unlabeled.iter_mut().zip(classes) {
        datum.promote(class)?;
    }

    let n = unlabeled.len();
    labeled.append(&mut unlabeled);
    Ok(n)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Label, Value};
    use crate::tree::LeafId;

    struct Constant(Label);

    impl Tree for Constant {
        fn classify(&self, _: &Datum) -> Label { self.0 }
        fn leaf(&self, _: &Datum) -> LeafId { LeafId(0) }
    }

    fn datum(id: &str, class: Label) -> Datum {
        Datum::new(id, vec![Value::from(0.0)], class).unwrap()
    }

    #[test]
    fn pseudo_label_promotes_and_appends() {
        let forest = Forest::from(vec![Constant(2), Constant(2), Constant(1)]);
        let mut labeled = vec![datum("a", 1)];
        let unlabeled = vec![datum("b", 1), datum("c", 1)];

        let n = pseudo_label(&forest, &mut labeled, unlabeled).unwrap();
        assert_eq!(n, 2);
        let ids = labeled.iter().map(Datum::id).collect::<Vec<_>>();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(labeled[1].class(), 2);
        assert_eq!(labeled[2].class(), 2);
    }

    #[test]
    fn zero_vote_leaves_labeled_untouched() {
        let forest = Forest::from(vec![Constant(0)]);
        let mut labeled = vec![datum("a", 1)];
        let unlabeled = vec![datum("b", 1)];

        assert!(pseudo_label(&forest, &mut labeled, unlabeled).is_err());
        assert_eq!(labeled.len(), 1);
    }

    #[test]
    fn empty_unlabeled_pool() {
        let forest = Forest::from(vec![Constant(1)]);
        let mut labeled = vec![datum("a", 1)];
        let n = pseudo_label(&forest, &mut labeled, Vec::new()).unwrap();
        assert_eq!(n, 0);
        assert_eq!(labeled.len(), 1);
    }
}
