//! INSERT operations for BTree.
//!
//! This module contains key insertion and tree growth. Full nodes are split on
//! the way down, so the only place the tree can gain a level is at the root.

use log::debug;

use crate::error::BTreeResult;
use crate::types::{BTree, Node};

impl<K: Ord> BTree<K> {
    /// Insert a key into the tree.
    ///
    /// Always succeeds. Inserting a key that is already present stores an
    /// additional occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// for key in [10, 20, 5, 6, 12, 30, 7, 17] {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.len(), 8);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, key: K) {
        self.root = Some(match self.root.take() {
            None => Box::new(Node::leaf_with_key(self.degree, key)),
            Some(root) if root.is_full() => self.grow_root(root, key),
            Some(mut root) => {
                root.insert_non_full(key);
                root
            }
        });
        self.len += 1;
    }

    /// Insert with invariant checks before and after the mutation.
    pub fn try_insert(&mut self, key: K) -> BTreeResult<()> {
        self.validate_for_operation("insert")?;
        self.insert(key);
        self.validate_for_operation("insert")
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Put a new root above the full `old_root`, split it, and insert `key`
    /// into whichever half covers it.
    fn grow_root(&self, old_root: Box<Node<K>>, key: K) -> Box<Node<K>> {
        let mut new_root = Node::new_root_above(self.degree, old_root);
        new_root.split_child(0);

        let index = if new_root.keys[0] < key { 1 } else { 0 };
        new_root.children[index].insert_non_full(key);

        debug!("root split, tree height is now {}", new_root.height());
        Box::new(new_root)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::BTree;

    #[test]
    fn test_first_insert_creates_leaf_root() {
        let mut tree = BTree::new(2).unwrap();
        tree.insert(42);
        let root = tree.root().unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.keys(), &[42]);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_full_root_splits_and_grows_height() {
        let mut tree = BTree::new(2).unwrap();
        for key in [10, 20, 5] {
            tree.insert(key);
        }
        assert_eq!(tree.height(), 1);

        tree.insert(6);
        assert_eq!(tree.height(), 2);
        let root = tree.root().unwrap();
        assert_eq!(root.keys(), &[10]);
        let leaves: Vec<&[i32]> = root.children().map(|child| child.keys()).collect();
        assert_eq!(leaves, vec![&[5, 6][..], &[20][..]]);
    }

    #[test]
    fn test_key_above_median_goes_right_on_root_split() {
        let mut tree = BTree::new(2).unwrap();
        for key in [1, 2, 3, 4] {
            tree.insert(key);
        }
        let root = tree.root().unwrap();
        assert_eq!(root.keys(), &[2]);
        let leaves: Vec<&[i32]> = root.children().map(|child| child.keys()).collect();
        assert_eq!(leaves, vec![&[1][..], &[3, 4][..]]);
    }

    #[test]
    fn test_sequential_inserts_keep_invariants() {
        for degree in 2..6 {
            let mut tree = BTree::new(degree).unwrap();
            for key in 0..500 {
                tree.insert(key);
            }
            assert_eq!(tree.len(), 500);
            tree.check_invariants_detailed().unwrap();
        }
    }

    #[test]
    fn test_try_insert_validates() {
        let mut tree = BTree::new(3).unwrap();
        for key in (0..100).rev() {
            tree.try_insert(key).unwrap();
        }
        assert_eq!(tree.first(), Some(&0));
    }
}
