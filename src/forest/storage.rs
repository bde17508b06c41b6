use std::path::PathBuf;

use crate::Result;
use crate::constants::{DEFAULT_TREE_BASE, DEFAULT_TREE_EXTENSION};
use crate::tree::TreeIo;
use super::ensemble::Forest;


/// Naming scheme of the tree artifacts.
/// The `i`-th tree lives at `base + i + extension`, e.g., `tree0.txt`.
///
/// # Example
/// ```
/// use miniforest::TreeStorage;
///
/// let storage = TreeStorage::new("/tmp/forest/tree");
/// assert_eq!(storage.path(3).to_str(), Some("/tmp/forest/tree3.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStorage {
    base: String,
    extension: String,
}


impl Default for TreeStorage {
    fn default() -> Self {
        Self::new(DEFAULT_TREE_BASE)
    }
}


impl TreeStorage {
    /// Construct a new storage with prefix `base`
    /// and the default extension `.txt`.
    pub fn new<S: Into<String>>(base: S) -> Self {
        Self {
            base: base.into(),
            extension: DEFAULT_TREE_EXTENSION.to_string(),
        }
    }


    /// Set the extension, including the leading dot.
    pub fn extension<S: Into<String>>(mut self, extension: S) -> Self {
        self.extension = extension.into();
        self
    }


    /// Returns the path of the `index`-th tree.
    pub fn path(&self, index: usize) -> PathBuf {
        PathBuf::from(format!("{}{index}{}", self.base, self.extension))
    }


    /// Write the trees of `forest` to indices
    /// `offset, offset + 1, ...`.
    pub fn write_forest<T: TreeIo>(&self, forest: &Forest<T>, offset: usize)
        -> Result<()>
    {
        for (t, tree) in forest.trees().iter().enumerate() {
            let path = self.path(offset + t);
            tree.write_to(&path)?;
            log::debug!("wrote tree {} to {path:?}", offset + t);
        }
        Ok(())
    }


    /// Read the trees at indices `0..n_trees`.
    /// Stops at the first artifact that cannot be read or parsed
    /// and returns its error; no partial forest is returned.
    pub fn read_forest<T: TreeIo>(&self, n_trees: usize) -> Result<Forest<T>> {
        let mut forest = Forest::default();
        for t in 0..n_trees {
            let path = self.path(t);
            let tree = T::read_from(&path)
                .map_err(|e| {
                    log::error!("failed to load tree {t}: {e}");
                    e
                })?;
            forest.push(tree);
        }
        log::info!("loaded {n_trees} trees from {:?}", self.base);
        Ok(forest)
    }
}
