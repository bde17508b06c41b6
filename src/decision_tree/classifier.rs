//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use crate::{Datum, ForestError, Label, Result};
use crate::tree::{LeafId, Tree, TreeIo};
use super::node::*;
use super::split_rule::Splitter;


/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
    n_leaves: usize,
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(mut root: Node) -> Self {
        let n_leaves = root.number_leaves(0);
        Self { root, n_leaves }
    }
}


impl Tree for DecisionTreeClassifier {
    #[inline]
    fn classify(&self, datum: &Datum) -> Label {
        self.root.reach(datum).0
    }


    #[inline]
    fn leaf(&self, datum: &Datum) -> LeafId {
        self.root.reach(datum).1
    }
}


impl TreeIo for DecisionTreeClassifier {
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| ForestError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)
            .map_err(|e| ForestError::parse(path, e))?;
        writer.flush()
            .map_err(|e| ForestError::io(path, e))
    }


    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| ForestError::io(path, e))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ForestError::parse(path, e))
    }
}


impl DecisionTreeClassifier {
    /// Returns the number of leaves.
    /// Leaf identities run from `0` to `n_leaves() - 1`.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.n_leaves
    }


    /// Returns the split rules of the branch nodes in pre-order.
    pub fn splitters(&self) -> Vec<&Splitter> {
        let mut rules = Vec::new();
        self.root.collect_splitters(&mut rules);
        rules
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let path = path.as_ref();
        let info = self.root.to_dot_info(0).0;

        let mut dot = String::from("graph DecisionTree {\n");
        info.into_iter()
            .for_each(|row| dot.push_str(&row));
        dot.push('}');

        std::fs::write(path, dot)
            .map_err(|e| ForestError::io(path, e))
    }
}
