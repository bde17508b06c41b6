//! Forest proximities.
//!
//! Two data are similar if many trees send them to the same leaf.
//! For a forest of `T` trees the dissimilarity of `i` and `j` is
//! `sqrt(1 - shared(i, j) / T)`, where `shared(i, j)` is the number of
//! trees in which both reach the same leaf.
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use std::borrow::Borrow;
use std::ops::Index;

use crate::Datum;
use crate::forest::Forest;
use crate::tree::{LeafId, Tree};


/// A square, symmetric matrix with zero diagonal.
/// Rows and columns follow the order of the input data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DissimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}


impl DissimilarityMatrix {
    /// Returns the number of rows (= columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }


    /// Returns the pair `(rows, columns)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.size, self.size)
    }


    /// Returns `true` if the matrix has no row.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }


    /// Returns the entry `(i, j)`, if in range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.size && j < self.size {
            Some(self.values[i * self.size + j])
        } else {
            None
        }
    }


    /// Returns the `i`-th row.
    /// Panics if `i` is out of range.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(
            i < self.size,
            "row {i} is out of range for a {0}x{0} matrix",
            self.size,
        );
        &self.values[i * self.size..(i + 1) * self.size]
    }


    /// Returns the entries in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..]
    }


    /// Consumes the matrix and returns its entries in row-major order.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}


impl Index<(usize, usize)> for DissimilarityMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(
            i < self.size && j < self.size,
            "index ({i}, {j}) is out of range for a {0}x{0} matrix",
            self.size,
        );
        &self.values[i * self.size + j]
    }
}


/// Returns the leaf of every datum in every tree.
/// Entry `t * data.len() + i` holds the leaf of datum `i` in tree `t`.
pub fn leaf_table<T, D>(forest: &Forest<T>, data: &[D]) -> Vec<LeafId>
    where T: Tree,
          D: Borrow<Datum>,
{
    forest.trees()
        .iter()
        .flat_map(|tree| data.iter().map(|datum| tree.leaf(datum.borrow())))
        .collect()
}


/// Returns, for every pair `(i, j)` in row-major order,
/// the number of trees in which `i` and `j` share a leaf.
///
/// Rows are computed in parallel; each row is owned by one task.
pub fn shared_leaf_counts(table: &[LeafId], n_data: usize) -> Vec<usize> {
    if n_data == 0 {
        return Vec::new();
    }
    let n_trees = table.len() / n_data;

    let mut counts = vec![0_usize; n_data * n_data];
    counts.par_chunks_mut(n_data)
        .enumerate()
        .for_each(|(i, row)| {
            for t in 0..n_trees {
                let leaves = &table[t * n_data..(t + 1) * n_data];
                let leaf = leaves[i];
                row.iter_mut()
                    .zip(leaves)
                    .filter(|(_, other)| **other == leaf)
                    .for_each(|(count, _)| { *count += 1; });
            }
        });
    counts
}


/// Computes the dissimilarity matrix of `data` under `forest`.
///
/// A forest without trees separates nothing,
/// so every entry of its matrix is `0`.
pub fn dissimilarity<T, D>(forest: &Forest<T>, data: &[D])
    -> DissimilarityMatrix
    where T: Tree,
          D: Borrow<Datum>,
{
    let size = data.len();
    let n_trees = forest.len();

    let table = leaf_table(forest, data);
    let counts = shared_leaf_counts(&table[..], size);

    let values = counts.into_par_iter()
        .map(|shared| {
            if n_trees == 0 {
                return 0f64;
            }
            let similarity = shared as f64 / n_trees as f64;
            (1f64 - similarity).max(0f64).sqrt()
        })
        .collect::<Vec<_>>();

    DissimilarityMatrix { size, values }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_a_fixed_table() {
        // Two trees, three data.
        // Tree 0: [a, a, b], tree 1: [c, d, d].
        let table = [0, 0, 1, 2, 3, 3].map(LeafId);
        let counts = shared_leaf_counts(&table[..], 3);
        assert_eq!(
            counts,
            vec![
                2, 1, 0,
                1, 2, 1,
                0, 1, 2,
            ]
        );
    }

    #[test]
    fn empty_data_give_empty_counts() {
        assert!(shared_leaf_counts(&[], 0).is_empty());
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let matrix = DissimilarityMatrix { size: 1, values: vec![0f64] };
        let _ = matrix[(0, 1)];
    }

    #[test]
    #[should_panic(expected = "row 2 is out of range")]
    fn row_out_of_range_panics() {
        let matrix = DissimilarityMatrix {
            size: 2,
            values: vec![0f64; 4],
        };
        let _ = matrix.row(2);
    }

    #[test]
    fn rows_and_get() {
        let matrix = DissimilarityMatrix {
            size: 2,
            values: vec![0f64, 0.5, 0.5, 0f64],
        };
        assert_eq!(matrix.row(1), &[0.5, 0f64]);
        assert_eq!(matrix.get(0, 1), Some(0.5));
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix[(1, 0)], 0.5);
    }
}
