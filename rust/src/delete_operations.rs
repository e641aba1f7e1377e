//! DELETE operations for BTree.
//!
//! This module contains key removal and tree shrinking. The node-level
//! procedure tops up children on the way down; the tree only has to deal with
//! the root, which is exempt from the minimum and may end up empty.

use log::debug;

use crate::error::{BTreeError, BTreeResult};
use crate::types::BTree;

impl<K: Ord> BTree<K> {
    /// Remove one occurrence of `key`, returning whether one was found.
    ///
    /// Deleting an absent key (or deleting from an empty tree) returns `false`
    /// and leaves the stored keys unchanged. The node shape may still change,
    /// since the descent tops up children before it knows the key is missing;
    /// it can even merge away the root and lower the height.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.insert(7);
    /// assert!(tree.delete(&7));
    /// assert!(!tree.delete(&7));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        self.remove(key).is_some()
    }

    /// Remove one occurrence of `key` and hand the stored key back.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        let removed = self.root.as_mut()?.remove(key);
        if removed.is_some() {
            self.len -= 1;
        }
        // A miss can still merge the root's only two children.
        self.collapse_root_if_needed();
        removed
    }

    /// Remove and return the smallest key.
    pub fn pop_first(&mut self) -> Option<K> {
        let first = self.root.as_mut()?.pop_first();
        self.len -= 1;
        self.collapse_root_if_needed();
        Some(first)
    }

    /// Remove and return the largest key.
    pub fn pop_last(&mut self) -> Option<K> {
        let last = self.root.as_mut()?.pop_last();
        self.len -= 1;
        self.collapse_root_if_needed();
        Some(last)
    }

    /// Remove with invariant checks; an absent key is reported as
    /// `BTreeError::KeyNotFound`.
    pub fn try_remove(&mut self, key: &K) -> BTreeResult<K> {
        self.validate_for_operation("remove")?;
        let removed = self.remove(key).ok_or(BTreeError::KeyNotFound)?;
        self.validate_for_operation("remove")?;
        Ok(removed)
    }

    // ============================================================================
    // HELPERS FOR DELETE OPERATIONS
    // ============================================================================

    /// Drop a root left without keys: an internal root is replaced by its only
    /// child, a leaf root leaves the tree empty.
    fn collapse_root_if_needed(&mut self) {
        let Some(root) = self.root.as_mut() else {
            return;
        };
        if !root.is_empty() {
            return;
        }

        if root.is_leaf() {
            self.root = None;
            debug!("last key removed, tree is empty");
        } else {
            let child = root.children.pop();
            self.root = child;
            debug!("root collapsed, tree height is now {}", self.height());
        }
    }
}
