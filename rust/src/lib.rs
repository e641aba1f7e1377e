//! B-tree implementation in Rust with an ordered multiset API.
//!
//! This module provides an in-memory B-tree over bare keys, supporting
//! insertion, deletion and existence search in O(log n) comparisons. The
//! branching is controlled by the minimum degree `t` given at construction.
//!
//! Duplicate keys are kept: inserting a present key adds another occurrence,
//! deleting removes one occurrence.
//!
//! The tree does no internal synchronization; share it across threads behind
//! a lock that serializes the mutating operations.

use std::fmt;

mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod types;
mod validation;

pub use error::{BTreeError, BTreeResult, InitResult};
pub use iteration::{IntoIter, KeyIterator};
pub use types::{BTree, Node, DEFAULT_DEGREE, MIN_DEGREE};

impl<K> BTree<K> {
    // ============================================================================
    // OTHER API OPERATIONS
    // ============================================================================

    /// Returns the number of keys in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns true if the root is a leaf node (or the tree is empty).
    pub fn is_leaf_root(&self) -> bool {
        self.root.as_deref().map_or(true, Node::is_leaf)
    }

    /// Clear all keys from the tree. The degree is kept.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

impl<K: fmt::Debug> fmt::Debug for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}

impl<K: Ord> FromIterator<K> for BTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = BTree::with_default_degree();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for BTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: PartialEq> PartialEq for BTree<K> {
    /// Two trees are equal when they hold the same keys in the same order,
    /// regardless of degree or shape.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.keys().eq(other.keys())
    }
}

impl<K: Eq> Eq for BTree<K> {}
