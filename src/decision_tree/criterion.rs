//! Splitting criteria for growing a decision tree.
use serde::{Serialize, Deserialize};

use std::fmt;


/// Splitting criteria for growing decision tree.
/// * `Criterion::Gini` minimizes the Gini impurity of the children.
/// * `Criterion::Entropy` minimizes the entropic impurity of the children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion {
    /// Gini index.
    Gini,
    /// Entropy (base 2).
    Entropy,
}


impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gini => "Gini index",
            Self::Entropy => "Entropy",
        };

        write!(f, "{name}")
    }
}


impl Criterion {
    /// Impurity of a node whose class counts are `counts`.
    /// An empty node has zero impurity.
    pub(super) fn impurity(&self, counts: &[usize]) -> f64 {
        let total = counts.iter().sum::<usize>();
        if total == 0 {
            return 0f64;
        }
        let total = total as f64;
        let probs = counts.iter()
            .filter(|&&c| c > 0)
            .map(|&c| c as f64 / total);

        match self {
            Self::Gini => 1f64 - probs.map(|p| p * p).sum::<f64>(),
            Self::Entropy => probs.map(|p| -p * p.log2()).sum::<f64>(),
        }
    }


    /// Weighted impurity of the pair of children.
    pub(super) fn score(&self, left: &[usize], right: &[usize]) -> f64 {
        let n_left = left.iter().sum::<usize>() as f64;
        let n_right = right.iter().sum::<usize>() as f64;
        let total = n_left + n_right;
        if total == 0f64 {
            return 0f64;
        }

        (n_left * self.impurity(left) + n_right * self.impurity(right))
            / total
    }
}
