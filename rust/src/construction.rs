//! Construction and initialization logic for BTree and nodes.
//!
//! The minimum degree is the tree's only configuration knob; it is validated
//! here and copied into every node the tree creates.

use crate::error::{BTreeError, InitResult};
use crate::types::{BTree, Node, DEFAULT_DEGREE, MIN_DEGREE};

impl<K> BTree<K> {
    /// Create an empty B-tree with the given minimum degree `t`.
    ///
    /// Non-root nodes will hold between `t - 1` and `2t - 1` keys.
    ///
    /// # Returns
    ///
    /// Returns `Ok(BTree)` if `degree >= 2`, `Err(BTreeError::InvalidDegree)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::<i32>::new(3).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(BTree::<i32>::new(1).is_err());
    /// ```
    pub fn new(degree: usize) -> InitResult<Self> {
        if degree < MIN_DEGREE {
            return Err(BTreeError::invalid_degree(degree, MIN_DEGREE));
        }

        Ok(Self {
            degree,
            root: None,
            len: 0,
        })
    }

    /// Create a B-tree with the default minimum degree.
    ///
    /// This is equivalent to calling `new(DEFAULT_DEGREE)`.
    pub fn with_default_degree() -> Self {
        Self {
            degree: DEFAULT_DEGREE,
            root: None,
            len: 0,
        }
    }
}

impl<K> Default for BTree<K> {
    fn default() -> Self {
        Self::with_default_degree()
    }
}

impl<K> Node<K> {
    /// Creates an empty leaf for a tree of the given minimum degree.
    pub(crate) fn new_leaf(degree: usize) -> Self {
        Self {
            degree,
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a leaf holding a single key (the first root of a tree).
    pub(crate) fn leaf_with_key(degree: usize, key: K) -> Self {
        let mut leaf = Self::new_leaf(degree);
        leaf.keys.push(key);
        leaf
    }

    /// Creates an internal node with no keys and one child.
    ///
    /// Only used while growing the tree: the caller immediately splits the
    /// child so the node ends up with one key and two children.
    pub(crate) fn new_root_above(degree: usize, old_root: Box<Node<K>>) -> Self {
        Self {
            degree,
            keys: Vec::new(),
            children: vec![old_root],
        }
    }

    /// Node capacity `2t - 1`, saturating for degrees too large to double.
    pub(crate) fn max_keys_for(degree: usize) -> usize {
        degree.saturating_mul(2) - 1
    }
}
