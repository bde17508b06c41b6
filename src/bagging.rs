//! Bootstrap resampling (bagging) with out-of-bag set derivation.
//!
//! Every round draws `n` indices uniformly with replacement from a pool
//! of size `n`. The out-of-bag (OOB) contribution of a round consists of
//! the indices that were neither drawn in this round nor marked as used
//! by an earlier round. Both drawn indices and OOB indices are marked as
//! used, and the mark is shared by all rounds of one bagging call.
//! Hence an index joins the OOB set at most once, and the composition of
//! the OOB set depends on the order of the rounds.
use fixedbitset::FixedBitSet;
use rand::Rng;

use crate::Datum;


/// Indices drawn by [`bootstrap_indices`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapIndices {
    /// One vector of `n` draws per round, in draw order.
    pub draws: Vec<Vec<usize>>,
    /// OOB indices of all rounds, concatenated in round order.
    pub oob: Vec<usize>,
}


/// Bootstrap samples over a pool, see [`bagging`].
#[derive(Debug, Clone)]
pub struct Bootstrap<'d> {
    /// One training sample per round.
    /// Each has the same length as the pool and may contain duplicates.
    pub samples: Vec<Vec<&'d Datum>>,
    /// OOB data of all rounds, concatenated in round order.
    pub oob: Vec<&'d Datum>,
}


/// Draw `n_rounds` bootstrap rounds of size `n`
/// and derive the combined OOB indices.
///
/// If `n == 0`, every round is empty and so is the OOB set.
pub fn bootstrap_indices<R>(n: usize, n_rounds: usize, rng: &mut R)
    -> BootstrapIndices
    where R: Rng + ?Sized,
{
    // Marks the indices that were drawn or joined the OOB set
    // in this round or an earlier one.
    let mut used = FixedBitSet::with_capacity(n);

    let mut draws = Vec::with_capacity(n_rounds);
    let mut oob = Vec::new();
    for _ in 0..n_rounds {
        let round = if n == 0 {
            Vec::new()
        } else {
            (0..n).map(|_| rng.gen_range(0..n)).collect::<Vec<_>>()
        };

        let mut drawn = FixedBitSet::with_capacity(n);
        round.iter().for_each(|&i| drawn.insert(i));

        for j in 0..n {
            if !drawn.contains(j) && !used.contains(j) {
                oob.push(j);
            }
            used.insert(j);
        }

        draws.push(round);
    }

    BootstrapIndices { draws, oob }
}


/// Draw `n_rounds` bootstrap samples from `pool`
/// and derive the combined OOB set.
///
/// # Example
/// ```no_run
/// use miniforest::bagging::bagging;
/// use rand::prelude::*;
///
/// let pool = Vec::new();
/// let mut rng = StdRng::seed_from_u64(1234);
/// let bootstrap = bagging(&pool, 10, &mut rng);
/// assert_eq!(bootstrap.samples.len(), 10);
/// ```
pub fn bagging<'d, R>(pool: &'d [Datum], n_rounds: usize, rng: &mut R)
    -> Bootstrap<'d>
    where R: Rng + ?Sized,
{
    let BootstrapIndices { draws, oob } = bootstrap_indices(
        pool.len(), n_rounds, rng
    );

    let samples = draws.into_iter()
        .map(|round| round.into_iter().map(|i| &pool[i]).collect())
        .collect();
    let oob = oob.into_iter()
        .map(|i| &pool[i])
        .collect();

    Bootstrap { samples, oob }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn empty_pool_gives_empty_rounds() {
        let mut rng = StdRng::seed_from_u64(0);
        let bootstrap = bootstrap_indices(0, 3, &mut rng);
        assert_eq!(bootstrap.draws, vec![Vec::<usize>::new(); 3]);
        assert!(bootstrap.oob.is_empty());
    }

    #[test]
    fn zero_rounds() {
        let mut rng = StdRng::seed_from_u64(0);
        let bootstrap = bootstrap_indices(5, 0, &mut rng);
        assert!(bootstrap.draws.is_empty());
        assert!(bootstrap.oob.is_empty());
    }

    #[test]
    fn first_round_oob_is_its_complement() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 20;
        let bootstrap = bootstrap_indices(n, 1, &mut rng);
        let drawn = &bootstrap.draws[0];
        let complement = (0..n)
            .filter(|j| !drawn.contains(j))
            .collect::<Vec<_>>();
        assert_eq!(bootstrap.oob, complement);
    }

    #[test]
    fn later_rounds_never_revisit_marked_indices() {
        // After one round every index is either drawn or OOB,
        // so no later round contributes anything new.
        let mut rng = StdRng::seed_from_u64(7);
        let one = bootstrap_indices(30, 1, &mut rng);
        let mut rng = StdRng::seed_from_u64(7);
        let many = bootstrap_indices(30, 8, &mut rng);

        assert_eq!(one.draws[0], many.draws[0]);
        assert_eq!(one.oob, many.oob);
    }

    #[test]
    fn same_seed_same_rounds() {
        let mut rng = StdRng::seed_from_u64(99);
        let a = bootstrap_indices(15, 4, &mut rng);
        let mut rng = StdRng::seed_from_u64(99);
        let b = bootstrap_indices(15, 4, &mut rng);
        assert_eq!(a, b);
    }
}
