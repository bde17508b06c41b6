use serde::{Serialize, Deserialize};

use super::feature::Value;
use crate::{ForestError, Result};


/// Class label. Classes are numbered `1, 2, ...`.
pub type Label = u32;


/// One observation: an identifier, an ordered feature vector,
/// and a class label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    id: String,
    features: Vec<Value>,
    class: Label,
}


impl Datum {
    /// Construct a new datum.
    /// Returns `Err` if `class` is `0`.
    pub fn new<S>(id: S, features: Vec<Value>, class: Label) -> Result<Self>
        where S: Into<String>
    {
        if class == 0 {
            return Err(ForestError::InvalidLabel(class));
        }
        Ok(Self { id: id.into(), features, class })
    }


    /// Returns the identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }


    /// Returns the feature vector.
    #[inline]
    pub fn features(&self) -> &[Value] {
        &self.features[..]
    }


    /// Returns the `k`-th feature, if present.
    #[inline]
    pub fn feature(&self, k: usize) -> Option<&Value> {
        self.features.get(k)
    }


    /// Returns the class label.
    #[inline]
    pub fn class(&self) -> Label {
        self.class
    }


    /// Overwrite the class label with a predicted one.
    /// This is the only mutation a datum goes through,
    /// performed by [`SelfTraining`](crate::SelfTraining).
    pub(crate) fn promote(&mut self, class: Label) -> Result<()> {
        if class == 0 {
            return Err(ForestError::InvalidLabel(class));
        }
        self.class = class;
        Ok(())
    }
}
