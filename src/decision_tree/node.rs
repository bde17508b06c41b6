//! Defines the inner representation
//! of the Decision Tree class.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Datum, Label};
use crate::tree::LeafId;
use super::split_rule::*;


/// Enumeration of branch and leaf nodes.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch {
        splitter: Splitter,
        left:     Box<Node>,
        right:    Box<Node>,
    },
    /// A node that have no child.
    Leaf {
        class: Label,
        leaf:  LeafId,
    },
}


impl Node {
    pub(super) fn branch(splitter: Splitter, left: Node, right: Node) -> Self {
        Self::Branch {
            splitter,
            left: Box::new(left),
            right: Box::new(right),
        }
    }


    /// A leaf without its identity yet.
    /// [`Node::number_leaves`] assigns it.
    pub(super) fn leaf(class: Label) -> Self {
        Self::Leaf { class, leaf: LeafId(0) }
    }


    /// Assign consecutive leaf identities in pre-order.
    /// Returns the number of leaves numbered.
    pub(super) fn number_leaves(&mut self, next: usize) -> usize {
        match self {
            Self::Branch { left, right, .. } => {
                let next = left.number_leaves(next);
                right.number_leaves(next)
            },
            Self::Leaf { leaf, .. } => {
                *leaf = LeafId(next);
                next + 1
            },
        }
    }


    /// Returns the leaf `datum` reaches.
    pub(super) fn reach(&self, datum: &Datum) -> (Label, LeafId) {
        match self {
            Self::Branch { splitter, left, right } => {
                match splitter.split(datum) {
                    LR::Left  => left.reach(datum),
                    LR::Right => right.reach(datum),
                }
            },
            Self::Leaf { class, leaf } => (*class, *leaf),
        }
    }


    /// Push the split rules of this sub-tree in pre-order.
    pub(super) fn collect_splitters<'a>(
        &'a self,
        rules: &mut Vec<&'a Splitter>,
    )
    {
        if let Self::Branch { splitter, left, right } = self {
            rules.push(splitter);
            left.collect_splitters(rules);
            right.collect_splitters(rules);
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch { splitter, left, right } => {
                let splitter = format!(
                    "\tnode_{id} [ label = \"{splitter} ?\" ];\n",
                );

                let left_id = id + 1;
                let (     left,  right_id) = left.to_dot_info(left_id);
                let (mut right, return_id) = right.to_dot_info(right_id);

                let mut info = left;
                info.push(splitter);
                info.append(&mut right);

                let left_edge = format!(
                    "\tnode_{id} -- node_{left_id} [ label = \"Yes\" ];\n",
                );
                info.push(left_edge);
                let right_edge = format!(
                    "\tnode_{id} -- node_{right_id} [ label = \"No\" ];\n",
                );
                info.push(right_edge);

                (info, return_id)
            },
            Self::Leaf { class, leaf } => {
                let info = format!(
                    "\tnode_{id} [ label = \"class {class} (leaf {})\", \
                     shape = box ];\n",
                    leaf.0,
                );

                (vec![info], id + 1)
            }
        }
    }
}


impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch { splitter, left, right } => {
                f.debug_struct("Branch")
                    .field("splitter", &splitter)
                    .field("left", &left)
                    .field("right", &right)
                    .finish()
            },
            Self::Leaf { class, leaf } => {
                f.debug_struct("Leaf")
                    .field("class", &class)
                    .field("leaf", &leaf.0)
                    .finish()
            },
        }
    }
}
