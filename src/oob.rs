//! Out-of-bag (OOB) evaluation of a forest.
//!
//! Any held-out data with known classes can be evaluated;
//! the OOB set returned by [`ForestBuilder`](crate::ForestBuilder)
//! is the usual one.
use std::borrow::Borrow;

use crate::{Datum, Label, Result};
use crate::constants::{ANOMALY_CLASS, NORMAL_CLASS};
use crate::forest::Forest;
use crate::tree::Tree;


/// Confusion counts for binary anomaly detection.
/// Class `2` is the positive (anomalous) class,
/// class `1` is the negative (normal) class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryConfusion {
    /// Anomalies predicted as anomalies.
    pub true_positive: usize,
    /// Normal data predicted as normal.
    pub true_negative: usize,
    /// Normal data predicted as anomalies.
    pub false_positive: usize,
    /// Anomalies predicted as normal.
    pub false_negative: usize,
}


impl BinaryConfusion {
    fn record(&mut self, predicted: Label, actual: Label) {
        match (predicted, actual) {
            (ANOMALY_CLASS, ANOMALY_CLASS) => self.true_positive += 1,
            (NORMAL_CLASS, NORMAL_CLASS) => self.true_negative += 1,
            (ANOMALY_CLASS, NORMAL_CLASS) => self.false_positive += 1,
            (NORMAL_CLASS, ANOMALY_CLASS) => self.false_negative += 1,
            _ => {},
        }
    }
}


/// The result of [`evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub struct OobReport {
    /// `(predicted, actual)` per datum, in input order.
    pub predictions: Vec<(Label, Label)>,
    /// Number of data whose prediction differs from its class.
    pub misclassified: usize,
    /// Present only when the declared number of classes is `2`.
    pub confusion: Option<BinaryConfusion>,
}


impl OobReport {
    /// Returns the number of evaluated data.
    #[inline]
    pub fn total(&self) -> usize {
        self.predictions.len()
    }


    /// Returns `misclassified / total`, or `0.0` if nothing was evaluated.
    pub fn misclassification_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0f64;
        }
        self.misclassified as f64 / total as f64
    }
}


/// Predict every datum of `data` by majority vote
/// and compare the prediction with its class.
pub fn evaluate<T, D>(forest: &Forest<T>, data: &[D], n_classes: usize)
    -> Result<OobReport>
    where T: Tree,
          D: Borrow<Datum>,
{
    let mut confusion = (n_classes == 2).then(BinaryConfusion::default);
    let mut misclassified = 0_usize;
    let mut predictions = Vec::with_capacity(data.len());

    for datum in data {
        let datum = datum.borrow();
        let predicted = forest.predict(datum)?;
        let actual = datum.class();

        if predicted != actual {
            misclassified += 1;
        }
        if let Some(confusion) = confusion.as_mut() {
            confusion.record(predicted, actual);
        }
        predictions.push((predicted, actual));
    }

    Ok(OobReport { predictions, misclassified, confusion })
}
