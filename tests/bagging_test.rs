use rand::prelude::*;
use miniforest::prelude::*;
use miniforest::bagging::{bagging, bootstrap_indices};

use std::collections::HashSet;


/// Tests for bagging.
#[cfg(test)]
pub mod bagging_tests {
    use super::*;

    fn pool(n: usize) -> Vec<Datum> {
        (0..n).map(|i| {
            let class = if i < n / 2 { 1 } else { 2 };
            Datum::new(format!("d{i}"), vec![Value::from(i as f64)], class)
                .unwrap()
        })
        .collect()
    }

    #[test]
    fn every_index_is_drawn_or_out_of_bag() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let n = 1 + seed as usize;
            let k = 1 + (seed as usize % 4);
            let bootstrap = bootstrap_indices(n, k, &mut rng);

            let covered = bootstrap.draws.iter()
                .flatten()
                .chain(bootstrap.oob.iter())
                .copied()
                .collect::<HashSet<_>>();
            assert_eq!(covered, (0..n).collect::<HashSet<_>>());
        }
    }

    #[test]
    fn no_index_is_out_of_bag_twice() {
        let mut rng = StdRng::seed_from_u64(1234);
        let bootstrap = bootstrap_indices(50, 10, &mut rng);
        let unique = bootstrap.oob.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), bootstrap.oob.len());
    }

    #[test]
    fn ten_points_five_rounds() {
        let pool = pool(10);
        let mut rng = StdRng::seed_from_u64(5);
        let bootstrap = bagging(&pool, 5, &mut rng);

        assert_eq!(bootstrap.samples.len(), 5);
        assert!(bootstrap.samples.iter().all(|s| s.len() == 10));
        assert!(bootstrap.oob.len() <= 50);

        let ids = bootstrap.oob.iter()
            .map(|d| d.id())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), bootstrap.oob.len());
    }
}
