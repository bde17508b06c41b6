use rand::prelude::*;
use miniforest::prelude::*;

use std::env;
use std::fs;


fn line(n: usize, seed: u64, labeled: bool) -> Vec<Datum> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|i| {
        let x: f64 = rng.gen_range(-10.0..10.0);
        let class = if !labeled || x < 0.0 { 1 } else { 2 };
        Datum::new(format!("{seed}-{i}"), vec![Value::from(x)], class).unwrap()
    })
    .collect()
}


/// Tests for `SelfTraining`.
#[cfg(test)]
pub mod self_training_tests {
    use super::*;

    #[test]
    fn labeled_pool_grows_by_the_unlabeled_pool() {
        let builder = ForestBuilder::new(DecisionTreeBuilder::new().build(), 2)
            .n_trees(10)
            .seed(0);

        let mut labeled = line(30, 1, true);
        let unlabeled = line(12, 2, false);
        let trained = SelfTraining::new(&builder)
            .run(&mut labeled, unlabeled)
            .unwrap();

        assert_eq!(trained.forest.len(), 10);
        assert!(trained.oob.len() <= 42);
        assert_eq!(labeled.len(), 42);

        // Promoted data follow the sign of the labeled data.
        let wrong = labeled[30..].iter()
            .filter(|d| {
                let x = d.feature(0).and_then(Value::as_numeric).unwrap();
                (x < 0.0) != (d.class() == 1)
            })
            .count();
        assert!(wrong <= 3, "{wrong} promoted data got the wrong side");
    }

    #[test]
    fn empty_unlabeled_pool_leaves_labeled_unchanged() {
        let builder = ForestBuilder::new(DecisionTreeBuilder::new().build(), 2)
            .n_trees(3)
            .seed(5);
        let mut labeled = line(10, 3, true);
        SelfTraining::new(&builder)
            .run(&mut labeled, Vec::new())
            .unwrap();
        assert_eq!(labeled.len(), 10);
    }

    #[test]
    fn later_generations_load_earlier_forests() {
        let mut dir = env::temp_dir();
        dir.push(format!("miniforest-self-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let storage = TreeStorage::new(dir.join("tree").to_string_lossy());

        let builder = ForestBuilder::new(DecisionTreeBuilder::new().build(), 2)
            .n_trees(4)
            .seed(8)
            .write_trees(true)
            .storage(storage.clone());

        let mut labeled = line(20, 4, true);
        SelfTraining::new(&builder)
            .generation(0)
            .run(&mut labeled, line(5, 5, false))
            .unwrap();
        assert!(storage.path(3).exists());
        assert!(!storage.path(4).exists());

        SelfTraining::new(&builder)
            .generation(1)
            .run(&mut labeled, line(5, 6, false))
            .unwrap();
        assert!(storage.path(7).exists());
        assert_eq!(labeled.len(), 30);

        // Generation 3 needs 12 trees but only 8 were written.
        let before = labeled.len();
        let result = SelfTraining::new(&builder)
            .generation(3)
            .run(&mut labeled, line(5, 7, false));
        assert!(result.is_err());
        assert_eq!(labeled.len(), before);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn generation_without_trees_is_rejected() {
        let builder = ForestBuilder::new(DecisionTreeBuilder::new().build(), 2)
            .n_trees(0);
        let mut labeled = line(5, 9, true);
        let result = SelfTraining::new(&builder)
            .generation(2)
            .run(&mut labeled, Vec::new());
        assert!(matches!(result, Err(miniforest::ForestError::InvalidInput(_))));
    }
}
