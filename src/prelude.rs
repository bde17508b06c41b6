//! Exports the standard forest components and traits.
//! 
pub use crate::sample::{
    Datum,
    Label,
    Value,
    SampleReader,
};


pub use crate::tree::{
    // Traits at the forest/tree seam
    Tree,
    TreeLearner,
    TreeIo,
    LeafId,
    GrowParams,
};


pub use crate::decision_tree::{
    DecisionTreeBuilder,
    DecisionTree,
    DecisionTreeClassifier,
    Criterion,
};


pub use crate::forest::{
    Forest,
    ForestBuilder,
    TrainedForest,
    TreeStorage,
};


pub use crate::oob::OobReport;
pub use crate::proximity::DissimilarityMatrix;
pub use crate::self_training::SelfTraining;
