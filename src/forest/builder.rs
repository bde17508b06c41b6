use rand::prelude::*;

use std::time::Instant;

use crate::{Datum, Result};
use crate::bagging::{bagging, Bootstrap};
use crate::common::checker;
use crate::constants::{DEFAULT_N_TREES, DEFAULT_SENTINEL, DEFAULT_STOP_PURITY};
use crate::oob::{self, OobReport};
use crate::proximity::{self, DissimilarityMatrix};
use crate::report;
use crate::tree::{GrowParams, Tree, TreeIo, TreeLearner};
use super::ensemble::Forest;
use super::storage::TreeStorage;


/// A freshly trained forest paired with its out-of-bag (OOB) set.
/// The OOB data borrow from the pool the forest was trained on.
#[derive(Debug, Clone)]
pub struct TrainedForest<'d, T> {
    /// The trees, in training round order.
    pub forest: Forest<T>,
    /// The combined OOB set of all bagging rounds.
    pub oob: Vec<&'d Datum>,
}


impl<'d, T: Tree> TrainedForest<'d, T> {
    /// Evaluate the forest over its OOB set.
    #[inline]
    pub fn evaluate(&self, n_classes: usize) -> Result<OobReport> {
        oob::evaluate(&self.forest, &self.oob[..], n_classes)
    }


    /// Compute the dissimilarity matrix over the OOB set.
    #[inline]
    pub fn dissimilarity(&self) -> DissimilarityMatrix {
        proximity::dissimilarity(&self.forest, &self.oob[..])
    }
}


/// A struct that trains, or loads, a forest of trees
/// produced by a [`TreeLearner`].
///
/// # Example
/// The following code trains a forest of 50 decision trees
/// and evaluates it over its out-of-bag set.
///
/// ```no_run
/// use miniforest::prelude::*;
///
/// let pool = SampleReader::default()
///     .file("/path/to/sample.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let learner = DecisionTreeBuilder::new()
///     .criterion(Criterion::Gini)
///     .build();
///
/// let builder = ForestBuilder::new(learner, 2)
///     .n_trees(50)
///     .stop_purity(0.9)
///     .seed(1234)
///     .print_results(true);
///
/// let trained = builder.train(&pool);
/// let report = trained.evaluate(2).unwrap();
/// println!("OOB error: {}", report.misclassification_rate());
/// ```
#[derive(Debug, Clone)]
pub struct ForestBuilder<L> {
    pub(crate) learner: L,
    pub(crate) n_classes: usize,
    pub(crate) n_trees: usize,
    stop_purity: f64,
    sentinel: f64,
    seed: Option<u64>,
    print_results: bool,
    pub(crate) write_trees: bool,
    read_trees: bool,
    pub(crate) storage: TreeStorage,
}


impl<L> ForestBuilder<L> {
    /// Construct a new instance of [`ForestBuilder`].
    /// By default, [`ForestBuilder`] sets the parameters as follows;
    /// ```text
    /// n_trees: 100,
    /// stop_purity: 0.84,
    /// sentinel: 1e11,
    /// seed: None (seeded from the OS),
    /// print_results: false,
    /// write_trees: false,
    /// read_trees: false,
    /// storage: TreeStorage::default() ("tree0.txt", "tree1.txt", ...),
    /// ```
    pub fn new(learner: L, n_classes: usize) -> Self {
        Self {
            learner,
            n_classes,
            n_trees: DEFAULT_N_TREES,
            stop_purity: DEFAULT_STOP_PURITY,
            sentinel: DEFAULT_SENTINEL,
            seed: None,
            print_results: false,
            write_trees: false,
            read_trees: false,
            storage: TreeStorage::default(),
        }
    }


    /// Set the number of trees.
    #[inline]
    pub fn n_trees(mut self, n_trees: usize) -> Self {
        self.n_trees = n_trees;
        self
    }


    /// Set the stopping purity handed to the tree learner.
    /// `stop_purity` must be in `(0, 1]`.
    #[inline]
    pub fn stop_purity(mut self, stop_purity: f64) -> Self {
        checker::check_stop_purity(stop_purity);
        self.stop_purity = stop_purity;
        self
    }


    /// Set the sentinel split value handed to the tree learner.
    /// It must exceed the magnitude of every numeric feature.
    #[inline]
    pub fn sentinel(mut self, sentinel: f64) -> Self {
        checker::check_sentinel_value(sentinel);
        self.sentinel = sentinel;
        self
    }


    /// Fix the seed of the bootstrap sampler.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }


    /// Print the configuration and the results table.
    #[inline]
    pub fn print_results(mut self, flag: bool) -> Self {
        self.print_results = flag;
        self
    }


    /// Write every trained tree to the storage.
    #[inline]
    pub fn write_trees(mut self, flag: bool) -> Self {
        self.write_trees = flag;
        self
    }


    /// Load the trees from the storage instead of training them.
    /// Affects [`ForestBuilder::run`] only.
    #[inline]
    pub fn read_trees(mut self, flag: bool) -> Self {
        self.read_trees = flag;
        self
    }


    /// Set the naming scheme of the tree artifacts.
    #[inline]
    pub fn storage(mut self, storage: TreeStorage) -> Self {
        self.storage = storage;
        self
    }


    /// Returns the tree learner.
    #[inline]
    pub fn learner(&self) -> &L {
        &self.learner
    }


    /// Returns the parameters handed to the learner for every tree.
    #[inline]
    pub fn grow_params(&self) -> GrowParams {
        GrowParams {
            sentinel: self.sentinel,
            stop_purity: self.stop_purity,
            n_classes: self.n_classes,
        }
    }


    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}


impl<L: TreeLearner> ForestBuilder<L> {
    /// Train a forest over `pool` with the randomness of `rng`.
    pub fn train_with_rng<'d, R>(&self, pool: &'d [Datum], rng: &mut R)
        -> TrainedForest<'d, L::Tree>
        where R: Rng + ?Sized,
    {
        let now = Instant::now();

        let params = self.grow_params();
        let Bootstrap { samples, oob } = bagging(pool, self.n_trees, rng);

        let forest = samples.into_iter()
            .enumerate()
            .map(|(t, sample)| {
                let tree = self.learner.produce(&sample[..], &params);
                log::debug!("grew tree {t} from {} data", sample.len());
                tree
            })
            .collect::<Vec<_>>();
        let forest = Forest::from(forest);

        log::info!(
            "trained {} trees in {}ms ({} OOB data)",
            forest.len(), now.elapsed().as_millis(), oob.len(),
        );
        TrainedForest { forest, oob }
    }


    /// Train a forest over `pool`.
    /// The sampler is seeded by [`ForestBuilder::seed`] if set.
    #[inline]
    pub fn train<'d>(&self, pool: &'d [Datum])
        -> TrainedForest<'d, L::Tree>
    {
        let mut rng = self.rng();
        self.train_with_rng(pool, &mut rng)
    }


    /// Train a forest over `pool` and
    /// compute the dissimilarity matrix of its OOB set.
    /// Nothing is printed or written.
    pub fn dissimilarity_matrix(&self, pool: &[Datum]) -> DissimilarityMatrix {
        let trained = self.train(pool);

        let now = Instant::now();
        let matrix = trained.dissimilarity();
        log::info!(
            "generated a {0}x{0} dissimilarity matrix in {1}ms",
            matrix.size(), now.elapsed().as_millis(),
        );
        matrix
    }


    /// Evaluate `forest` over `data`,
    /// logging the result and printing it if requested.
    fn evaluate_and_report<D>(
        &self,
        forest: &Forest<L::Tree>,
        data: &[D],
        mode: &str,
        millisec: u128,
    ) -> Result<OobReport>
        where D: std::borrow::Borrow<Datum>
    {
        let report = oob::evaluate(forest, data, self.n_classes)?;
        log::info!(
            "{mode}: {} / {} misclassified",
            report.misclassified, report.total(),
        );
        if self.print_results {
            report::print_stats(
                &self.learner, forest.len(), self.stop_purity, mode
            );
            report::print_results(&report, millisec);
        }
        Ok(report)
    }
}


impl<L> ForestBuilder<L>
    where L: TreeLearner,
          L::Tree: TreeIo,
{
    /// Load `n_trees` trees from the storage.
    /// Fails on the first artifact that cannot be read.
    #[inline]
    pub fn load(&self) -> Result<Forest<L::Tree>> {
        self.storage.read_forest(self.n_trees)
    }


    /// Report the OOB results of `trained`
    /// and write its trees at indices `offset, offset + 1, ...`
    /// if [`ForestBuilder::write_trees`] is set.
    pub(crate) fn report_and_store(
        &self,
        trained: &TrainedForest<'_, L::Tree>,
        offset: usize,
        millisec: u128,
    ) -> Result<OobReport>
    {
        let report = self.evaluate_and_report(
            &trained.forest, &trained.oob[..], "Train", millisec
        )?;
        if self.write_trees {
            self.storage.write_forest(&trained.forest, offset)?;
        }
        Ok(report)
    }


    /// Run the forest as configured.
    ///
    /// - With [`ForestBuilder::read_trees`] set,
    ///   load `n_trees` trees, evaluate them over the whole `pool`,
    ///   and return `Ok(None)`.
    /// - Otherwise, train a forest over `pool`,
    ///   evaluate it over its OOB set,
    ///   write the trees if requested,
    ///   and return it.
    pub fn run<'d>(&self, pool: &'d [Datum])
        -> Result<Option<TrainedForest<'d, L::Tree>>>
    {
        let now = Instant::now();
        if self.read_trees {
            let forest = self.load()?;
            let millisec = now.elapsed().as_millis();
            self.evaluate_and_report(&forest, pool, "Load", millisec)?;
            return Ok(None);
        }

        let trained = self.train(pool);
        let millisec = now.elapsed().as_millis();
        self.report_and_store(&trained, 0, millisec)?;
        Ok(Some(trained))
    }
}
