//! GET operations for BTree.
//!
//! Read-only lookups. None of these methods touches the tree structure, so
//! repeated searches always give the same answer on the same tree.

use crate::types::{BTree, Node};

impl<K: Ord> BTree<K> {
    /// Returns true if at least one occurrence of `key` is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// assert!(!tree.search(&1));
    /// tree.insert(1);
    /// assert!(tree.search(&1));
    /// ```
    pub fn search(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// Get a reference to a stored occurrence of `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.locate(key).map(|(node, index)| &node.keys[index])
    }

    /// Find the node and key position holding `key`.
    pub fn locate(&self, key: &K) -> Option<(&Node<K>, usize)> {
        self.root.as_deref()?.search(key)
    }

    /// Number of stored occurrences of `key`.
    pub fn count(&self, key: &K) -> usize {
        self.root.as_deref().map_or(0, |root| root.count(key))
    }
}

impl<K> BTree<K> {
    /// Returns the smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        self.root.as_deref().and_then(Node::first_key)
    }

    /// Returns the largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        self.root.as_deref().and_then(Node::last_key)
    }

    /// Number of levels in the tree: 0 when empty, 1 for a lone leaf root.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// The minimum degree `t` chosen at construction.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The root node, if the tree holds any keys.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use crate::types::BTree;

    fn tree_of(degree: usize, keys: &[i32]) -> BTree<i32> {
        let mut tree = BTree::new(degree).unwrap();
        for &key in keys {
            tree.insert(key);
        }
        tree
    }

    #[test]
    fn test_empty_tree_lookups() {
        let tree = BTree::<i32>::new(2).unwrap();
        assert!(!tree.search(&1));
        assert_eq!(tree.get(&1), None);
        assert_eq!(tree.count(&1), 0);
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert_eq!(tree.height(), 0);
        assert!(tree.root().is_none());
    }

    #[test]
    fn test_search_after_many_inserts() {
        let keys: Vec<i32> = (0..200).map(|i| (i * 37) % 211).collect();
        let tree = tree_of(3, &keys);
        for key in &keys {
            assert!(tree.search(key), "missing {}", key);
            assert_eq!(tree.get(key), Some(key));
        }
        assert!(!tree.search(&-1));
        assert!(!tree.search(&1000));
    }

    #[test]
    fn test_count_duplicates_across_splits() {
        let keys = vec![5; 20];
        let tree = tree_of(2, &keys);
        assert!(tree.height() > 1);
        assert_eq!(tree.count(&5), 20);
        assert_eq!(tree.count(&4), 0);
    }

    #[test]
    fn test_first_and_last() {
        let tree = tree_of(2, &[10, 20, 5, 6, 12, 30, 7, 17]);
        assert_eq!(tree.first(), Some(&5));
        assert_eq!(tree.last(), Some(&30));
    }

    #[test]
    fn test_locate_reports_node_and_index() {
        let tree = tree_of(2, &[10, 20, 5]);
        let (node, index) = tree.locate(&10).unwrap();
        assert_eq!(node.keys()[index], 10);
        assert!(node.is_leaf());
    }
}
