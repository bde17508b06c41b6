use rayon::prelude::*;

use std::fmt;
use std::collections::BTreeMap;

use crate::{Datum, Label, Value};
use crate::common::checker;
use crate::tree::{GrowParams, TreeLearner};
use super::{
    node::*,
    criterion::*,
    split_rule::*,
    classifier::DecisionTreeClassifier,
};


/// The Decision Tree algorithm.
/// Given a bootstrap sample, [`DecisionTree`] grows a multiclass
/// decision tree classifier named [`DecisionTreeClassifier`]
/// under the specified parameters.
///
/// A node stops splitting when
/// - it is empty,
/// - the fraction of its majority class reaches
///   [`GrowParams::stop_purity`],
/// - the maximal depth is reached, or
/// - no remaining rule separates its data.
///
/// A rule used on the path to a node is never proposed below it.
/// A consumed numeric split is overwritten with
/// [`GrowParams::sentinel`] in the candidate list,
/// and no threshold of that magnitude is ever proposed.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use miniforest::prelude::*;
///
/// let pool = SampleReader::default()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new()
///     .criterion(Criterion::Gini)
///     .build();
///
/// let sample = pool.iter().collect::<Vec<_>>();
/// let params = GrowParams { sentinel: 1e11, stop_purity: 0.84, n_classes: 2 };
/// let f = tree.produce(&sample, &params);
///
/// let loss = pool.iter()
///     .filter(|datum| f.classify(datum) != datum.class())
///     .count() as f64
///     / pool.len() as f64;
/// println!("loss (train) is: {loss}");
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTree {
    criterion: Criterion,
    max_depth: Option<usize>,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(
        criterion: Criterion,
        max_depth: Option<usize>,
    ) -> Self
    {
        Self { criterion, max_depth, }
    }


    /// Grow the sub-tree over `sample[indices]`.
    fn grow(
        &self,
        sample:  &[&Datum],
        indices: Vec<usize>,
        params:  &GrowParams,
        depth:   usize,
        used:    &mut Vec<Splitter>,
    ) -> Node
    {
        let counts = class_counts(sample, &indices[..], params.n_classes);
        let class = majority(&counts[..]);

        let n_node = indices.len();
        if n_node == 0 {
            return Node::leaf(class);
        }

        let top = counts.iter().copied().max().unwrap_or(0);
        if top as f64 / n_node as f64 >= params.stop_purity {
            return Node::leaf(class);
        }

        if self.max_depth.is_some_and(|max| depth >= max) {
            return Node::leaf(class);
        }

        let splitter = match self.best_split(
            sample, &indices[..], &counts[..], params, &used[..]
        ) {
            Some(splitter) => splitter,
            None => { return Node::leaf(class); },
        };

        // Split the train data for left/right childrens
        let (lindices, rindices): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&i| splitter.split(sample[i]) == LR::Left);

        // If the split has no meaning, construct a leaf node.
        if lindices.is_empty() || rindices.is_empty() {
            return Node::leaf(class);
        }

        used.push(splitter.clone());
        let left = self.grow(sample, lindices, params, depth + 1, used);
        let right = self.grow(sample, rindices, params, depth + 1, used);
        used.pop();

        Node::branch(splitter, left, right)
    }


    /// Find the rule with the smallest weighted child impurity.
    /// Ties go to the smallest feature index.
    fn best_split(
        &self,
        sample:  &[&Datum],
        indices: &[usize],
        counts:  &[usize],
        params:  &GrowParams,
        used:    &[Splitter],
    ) -> Option<Splitter>
    {
        let n_feature = indices.iter()
            .map(|&i| sample[i].features().len())
            .max()
            .unwrap_or(0);

        (0..n_feature).into_par_iter()
            .filter_map(|k| {
                let used = used.iter()
                    .filter(|rule| rule.feature() == k)
                    .collect::<Vec<_>>();
                self.best_split_on(k, sample, indices, counts, params, &used)
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, splitter)| splitter)
    }


    /// Best rule on feature `k` together with its score.
    fn best_split_on(
        &self,
        k:       usize,
        sample:  &[&Datum],
        indices: &[usize],
        counts:  &[usize],
        params:  &GrowParams,
        used:    &[&Splitter],
    ) -> Option<(f64, Splitter)>
    {
        let n_node = indices.len();
        let mut best: Option<(f64, Splitter)> = None;
        let mut propose = |score: f64, splitter: Splitter| {
            let better = best.as_ref()
                .map_or(true, |(s, _)| score < *s);
            if better {
                best = Some((score, splitter));
            }
        };


        // Numeric values: sweep the sorted values from left to right.
        let mut pairs = indices.iter()
            .filter_map(|&i| {
                let x = sample[i].feature(k).and_then(Value::as_numeric)?;
                (!x.is_nan()).then_some((x, sample[i].class()))
            })
            .collect::<Vec<(f64, Label)>>();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        let consumed = used.iter()
            .filter_map(|rule| match rule {
                Splitter::Threshold { threshold, .. } => Some(*threshold),
                _ => None,
            })
            .collect::<Vec<f64>>();

        let mut left = vec![0_usize; counts.len()];
        let mut right = counts.to_vec();
        for w in pairs.windows(2) {
            let (x, y) = w[0];
            let next = w[1].0;
            left[y as usize - 1] += 1;
            right[y as usize - 1] -= 1;
            if x == next {
                continue;
            }

            let mid = x + (next - x) / 2f64;
            let mut threshold = if mid > x { mid } else { next };
            if consumed.contains(&threshold) {
                threshold = params.sentinel;
            }
            if threshold.abs() >= params.sentinel {
                continue;
            }

            let score = self.criterion.score(&left[..], &right[..]);
            propose(score, Splitter::Threshold { feature: k, threshold });
        }


        // Boolean values: `true` goes left.
        let rule = Splitter::IsTrue { feature: k };
        if !used.contains(&&rule) {
            let mut left = vec![0_usize; counts.len()];
            indices.iter()
                .filter(|&&i| {
                    matches!(sample[i].feature(k), Some(Value::Boolean(true)))
                })
                .for_each(|&i| { left[sample[i].class() as usize - 1] += 1; });
            let n_left = left.iter().sum::<usize>();
            if 0 < n_left && n_left < n_node {
                let right = subtract(counts, &left[..]);
                let score = self.criterion.score(&left[..], &right[..]);
                propose(score, rule);
            }
        }


        // Categorical values: one category goes left.
        let mut categories: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for &i in indices {
            if let Some(Value::Categorical(c)) = sample[i].feature(k) {
                let left = categories.entry(c.as_str())
                    .or_insert_with(|| vec![0_usize; counts.len()]);
                left[sample[i].class() as usize - 1] += 1;
            }
        }
        for (category, left) in categories {
            let rule = Splitter::Equals {
                feature: k,
                category: category.to_string(),
            };
            if used.contains(&&rule) {
                continue;
            }
            let n_left = left.iter().sum::<usize>();
            if n_left == n_node {
                continue;
            }
            let right = subtract(counts, &left[..]);
            let score = self.criterion.score(&left[..], &right[..]);
            propose(score, rule);
        }

        best
    }
}


impl TreeLearner for DecisionTree {
    type Tree = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let depth = self.max_depth
            .map_or_else(|| "Unbounded".to_string(), |d| d.to_string());
        let info = Vec::from([
            ("Max depth", depth),
            ("Split criterion", format!("{}", self.criterion)),
        ]);
        Some(info)
    }


    /// This method computes as follows;
    /// 1. grow a tree over the whole bootstrap sample
    ///    (duplicates count as separate examples).
    /// 2. number the leaves in pre-order.
    #[inline]
    fn produce(&self, sample: &[&Datum], params: &GrowParams)
        -> Self::Tree
    {
        checker::check_grow_params(params);
        checker::check_sentinel(sample, params.sentinel);

        let indices = (0..sample.len()).collect::<Vec<_>>();
        let mut used = Vec::new();
        let root = self.grow(sample, indices, params, 0, &mut used);

        DecisionTreeClassifier::from(root)
    }
}


/// Class counts of `sample[indices]`.
/// Entry `c - 1` holds the count of class `c`.
/// The vector has at least `n_classes` entries
/// and grows if a larger label shows up.
fn class_counts(sample: &[&Datum], indices: &[usize], n_classes: usize)
    -> Vec<usize>
{
    let mut counts = vec![0_usize; n_classes];
    for &i in indices {
        let y = sample[i].class() as usize;
        if y > counts.len() {
            counts.resize(y, 0);
        }
        counts[y - 1] += 1;
    }
    counts
}


/// The most frequent class. Ties go to the lowest class,
/// an empty node predicts class `1`.
fn majority(counts: &[usize]) -> Label {
    let mut best = 0_usize;
    for (k, &c) in counts.iter().enumerate() {
        if c > counts[best] {
            best = k;
        }
    }
    best as Label + 1
}


fn subtract(total: &[usize], part: &[usize]) -> Vec<usize> {
    total.iter()
        .zip(part)
        .map(|(t, p)| t - p)
        .collect()
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.max_depth
            .map_or_else(|| "Unbounded".to_string(), |d| d.to_string());
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree Learner\n\n\
            - Max depth: {depth}\n\
            - Splitting criterion: {}\n\
            ----------\
            ",
            self.criterion,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecisionTreeBuilder;
    use crate::tree::Tree;

    // Toy example (1/2 are the classes)
    //
    // 15|                     |
    //   |                   2 |
    //   |                     |         2
    // 10|       2             |________________ 9.5
    //   |                     |             1
    //   |                     |   1
    //  5|                     |                 1
    //   |            2        |
    //   |_____________________|________________
    //  0            5         | 10            15
    //                        9.0
    fn toy() -> Vec<Datum> {
        let xs = [10.0, 14.0, 15.0, 5.0, 3.0, 8.0, 12.0];
        let ys = [5.0, 8.0, 3.0, 1.0, 9.0, 13.0, 11.0];
        let class = [1, 1, 1, 2, 2, 2, 2];
        (0..7).map(|i| {
                let features = vec![Value::from(xs[i]), Value::from(ys[i])];
                Datum::new(i.to_string(), features, class[i]).unwrap()
            })
            .collect()
    }

    fn params(stop_purity: f64) -> GrowParams {
        GrowParams { sentinel: 1e11, stop_purity, n_classes: 2 }
    }

    #[test]
    fn full_tree_fits_toy_sample() {
        let pool = toy();
        let sample = pool.iter().collect::<Vec<_>>();
        let f = DecisionTreeBuilder::new()
            .build()
            .produce(&sample, &params(1.0));

        for datum in &pool {
            assert_eq!(f.classify(datum), datum.class());
        }
        assert!(f.n_leaves() >= 2);
    }

    #[test]
    fn low_stop_purity_gives_a_single_leaf() {
        let pool = toy();
        let sample = pool.iter().collect::<Vec<_>>();
        let f = DecisionTreeBuilder::new()
            .build()
            .produce(&sample, &params(0.5));

        // 4 of 7 points are class 2, so the root is already pure enough.
        assert_eq!(f.n_leaves(), 1);
        assert!(pool.iter().all(|d| f.classify(d) == 2));
        assert!(pool.iter().all(|d| f.leaf(d) == f.leaf(&pool[0])));
    }

    #[test]
    fn empty_sample_predicts_class_one() {
        let pool = toy();
        let f = DecisionTreeBuilder::new()
            .build()
            .produce(&[], &params(0.84));
        assert_eq!(f.n_leaves(), 1);
        assert_eq!(f.classify(&pool[3]), 1);
    }

    #[test]
    fn depth_one_tree_has_two_leaves() {
        let pool = toy();
        let sample = pool.iter().collect::<Vec<_>>();
        let f = DecisionTreeBuilder::new()
            .max_depth(1)
            .criterion(Criterion::Entropy)
            .build()
            .produce(&sample, &params(1.0));
        assert_eq!(f.n_leaves(), 2);
    }

    #[test]
    fn splits_on_categories_and_flags() {
        let rows = [
            ("tcp", true, 1), ("tcp", false, 1), ("udp", true, 2),
            ("udp", false, 2), ("icmp", true, 2), ("tcp", true, 1),
        ];
        let pool = rows.iter()
            .enumerate()
            .map(|(i, (proto, flag, class))| {
                let features = vec![Value::from(*proto), Value::from(*flag)];
                Datum::new(i.to_string(), features, *class).unwrap()
            })
            .collect::<Vec<_>>();
        let sample = pool.iter().collect::<Vec<_>>();
        let f = DecisionTreeBuilder::new()
            .build()
            .produce(&sample, &params(1.0));

        for datum in &pool {
            assert_eq!(f.classify(datum), datum.class());
        }
    }

    #[test]
    fn majority_prefers_lowest_class_on_ties() {
        assert_eq!(majority(&[2, 2, 1]), 1);
        assert_eq!(majority(&[1, 3, 3]), 2);
        assert_eq!(majority(&[]), 1);
    }
}
