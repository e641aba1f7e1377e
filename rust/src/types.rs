//! Core types and data structures for BTree.
//!
//! This module contains the fundamental data structures and constants used
//! throughout the B-tree implementation.

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest minimum degree a tree accepts (a 2-3-4 tree).
pub const MIN_DEGREE: usize = 2;

/// Minimum degree used by `Default`, `with_default_degree` and `FromIterator`.
pub const DEFAULT_DEGREE: usize = 16;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// In-memory B-tree storing bare keys as an ordered multiset.
///
/// Every node other than the root holds between `t - 1` and `2t - 1` keys,
/// where `t` is the minimum degree chosen at construction. Insertion splits
/// full nodes on the way down, deletion tops up thin nodes on the way down,
/// so neither operation ever walks back up the tree.
///
/// Inserting a key that is already present stores another occurrence;
/// deleting removes exactly one occurrence.
///
/// # Examples
///
/// ```
/// use btree::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(10);
///
/// assert!(tree.search(&10));
/// assert_eq!(tree.count(&10), 2);
/// assert!(tree.delete(&10));
/// assert_eq!(tree.count(&10), 1);
/// assert!(!tree.delete(&99));
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(t log_t n)
/// - **Search**: O(t log_t n)
/// - **Deletion**: O(t log_t n)
/// - **Iteration**: O(n)
#[derive(Clone)]
pub struct BTree<K> {
    /// Minimum degree `t`.
    pub(crate) degree: usize,
    /// The root node; `None` exactly when the tree is empty.
    pub(crate) root: Option<Box<Node<K>>>,
    /// Number of stored keys, duplicates included.
    pub(crate) len: usize,
}

/// A B-tree node: sorted keys and, when internal, `keys.len() + 1` children.
///
/// `children[i]` covers the keys between `keys[i - 1]` and `keys[i]`.
/// Each node is owned outright by its parent (or by the tree for the root).
#[derive(Debug, Clone)]
pub struct Node<K> {
    /// Minimum degree of the owning tree.
    pub(crate) degree: usize,
    /// Keys in non-decreasing order.
    pub(crate) keys: Vec<K>,
    /// Child nodes; empty for a leaf.
    pub(crate) children: Vec<Box<Node<K>>>,
}
