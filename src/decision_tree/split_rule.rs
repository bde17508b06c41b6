//! This file defines split rules for decision tree.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Datum, Value};


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LR {
    /// The datum goes to the left child.
    Left,
    /// The datum goes to the right child.
    Right,
}


/// A rule that sends a datum to the left or right child.
/// A datum whose feature is missing or of another kind goes right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Splitter {
    /// `x[feature] < threshold` goes left.
    Threshold {
        /// Feature index.
        feature: usize,
        /// Split value.
        threshold: f64,
    },
    /// `x[feature] == true` goes left.
    IsTrue {
        /// Feature index.
        feature: usize,
    },
    /// `x[feature] == category` goes left.
    Equals {
        /// Feature index.
        feature: usize,
        /// Category name.
        category: String,
    },
}


impl Splitter {
    /// Returns the index of the feature this rule looks at.
    #[inline]
    pub fn feature(&self) -> usize {
        match self {
            Self::Threshold { feature, .. }
            | Self::IsTrue { feature }
            | Self::Equals { feature, .. } => *feature,
        }
    }


    /// Defines the splitting.
    #[inline]
    pub fn split(&self, datum: &Datum) -> LR {
        let value = datum.feature(self.feature());
        let left = match (self, value) {
            (Self::Threshold { threshold, .. }, Some(Value::Numeric(x))) => {
                x < threshold
            },
            (Self::IsTrue { .. }, Some(Value::Boolean(b))) => *b,
            (Self::Equals { category, .. }, Some(Value::Categorical(c))) => {
                c == category
            },
            _ => false,
        };

        if left { LR::Left } else { LR::Right }
    }
}


impl fmt::Display for Splitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Threshold { feature, threshold } => {
                write!(f, "x[{feature}] < {threshold:.2}")
            },
            Self::IsTrue { feature } => write!(f, "x[{feature}]"),
            Self::Equals { feature, category } => {
                write!(f, "x[{feature}] == {category}")
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn datum() -> Datum {
        let features = vec![
            Value::from(1.5),
            Value::from(true),
            Value::from("udp"),
        ];
        Datum::new("d", features, 1).unwrap()
    }

    #[test]
    fn each_rule_matches_its_kind() {
        let d = datum();
        let rule = Splitter::Threshold { feature: 0, threshold: 2.0 };
        assert_eq!(rule.split(&d), LR::Left);
        let rule = Splitter::Threshold { feature: 0, threshold: 1.5 };
        assert_eq!(rule.split(&d), LR::Right);
        let rule = Splitter::IsTrue { feature: 1 };
        assert_eq!(rule.split(&d), LR::Left);
        let rule = Splitter::Equals { feature: 2, category: "tcp".into() };
        assert_eq!(rule.split(&d), LR::Right);
    }

    #[test]
    fn other_kinds_and_missing_features_go_right() {
        let d = datum();
        let rule = Splitter::Threshold { feature: 2, threshold: 9.0 };
        assert_eq!(rule.split(&d), LR::Right);
        let rule = Splitter::IsTrue { feature: 7 };
        assert_eq!(rule.split(&d), LR::Right);
    }
}
