//! Node implementation for BTree.
//!
//! This module contains the recursive mechanics of the tree: search,
//! preemptive split-on-insert, and the top-down deletion procedure with its
//! borrowing (rotation) and merging helpers.
//!
//! Every mutating routine here runs on a node that can afford to lose a key:
//! it holds at least `t` keys, or it is the root. Before descending into a
//! child the routines restore that precondition for the child, so nothing
//! ever has to be fixed up on the way back.

use std::mem;

use log::trace;

use crate::types::Node;

// ============================================================================
// STATUS CHECKS
// ============================================================================

impl<K> Node<K> {
    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of keys in this node.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this node holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Get a reference to the keys in this node.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Iterate over the children of this node (empty for a leaf).
    pub fn children(&self) -> impl Iterator<Item = &Node<K>> {
        self.children.iter().map(|child| child.as_ref())
    }

    /// Minimum degree of the tree this node belongs to.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the maximum number of keys this node may hold (`2t - 1`).
    pub fn max_keys(&self) -> usize {
        Self::max_keys_for(self.degree)
    }

    /// Returns the minimum number of keys a non-root node must hold (`t - 1`).
    pub fn min_keys(&self) -> usize {
        self.degree - 1
    }

    /// Returns true if this node is at capacity and must be split before
    /// anything is inserted below it.
    pub fn is_full(&self) -> bool {
        self.keys.len() >= self.max_keys()
    }

    /// Returns true if this node can give up a key and stay within bounds.
    pub fn can_lend(&self) -> bool {
        self.keys.len() >= self.degree
    }

    /// Number of levels from this node down to its leaves (1 for a leaf).
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = self;
        while let Some(child) = node.children.first() {
            height += 1;
            node = child.as_ref();
        }
        height
    }

    /// Smallest key in this subtree.
    pub fn first_key(&self) -> Option<&K> {
        let mut node = self;
        while let Some(child) = node.children.first() {
            node = child.as_ref();
        }
        node.keys.first()
    }

    /// Largest key in this subtree.
    pub fn last_key(&self) -> Option<&K> {
        let mut node = self;
        while let Some(child) = node.children.last() {
            node = child.as_ref();
        }
        node.keys.last()
    }
}

impl<K: Ord> Node<K> {
    // ============================================================================
    // GET OPERATIONS
    // ============================================================================

    /// Index of the first key that is not less than `key`.
    fn lower_bound(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// Index just past the last key that is not greater than `key`.
    fn upper_bound(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k <= key)
    }

    /// Find the node and position holding an occurrence of `key`.
    ///
    /// Stops at the first node on the descent path holding an equal key,
    /// without looking further down for other occurrences.
    pub fn search(&self, key: &K) -> Option<(&Node<K>, usize)> {
        let index = self.lower_bound(key);
        if index < self.keys.len() && self.keys[index] == *key {
            return Some((self, index));
        }
        if self.is_leaf() {
            return None;
        }
        self.children[index].search(key)
    }

    /// Count the occurrences of `key` in this subtree.
    ///
    /// Equal keys can straddle a separator after a split, so every child whose
    /// bounds admit `key` is visited.
    pub fn count(&self, key: &K) -> usize {
        let lower = self.lower_bound(key);
        let upper = self.upper_bound(key);
        let here = upper - lower;
        if self.is_leaf() {
            return here;
        }
        here + self.children[lower..=upper]
            .iter()
            .map(|child| child.count(key))
            .sum::<usize>()
    }

    // ============================================================================
    // INSERT OPERATIONS
    // ============================================================================

    /// Insert `key` into the subtree rooted at this node.
    ///
    /// The caller guarantees this node is not full. A new key lands after any
    /// equal keys already in the leaf.
    pub(crate) fn insert_non_full(&mut self, key: K) {
        let mut index = self.upper_bound(&key);
        if self.is_leaf() {
            self.keys.insert(index, key);
            return;
        }

        if self.children[index].is_full() {
            self.split_child(index);
            if self.keys[index] < key {
                index += 1;
            }
        }
        self.children[index].insert_non_full(key);
    }

    /// Split the full child at `index` around its median.
    ///
    /// The median (position `t - 1`) moves up into this node at `index`, the
    /// upper `t - 1` keys (and upper `t` children) move into a new sibling at
    /// `index + 1`, and the child keeps the lower half.
    pub(crate) fn split_child(&mut self, index: usize) {
        let degree = self.degree;
        let child = &mut self.children[index];
        debug_assert!(child.is_full());

        let mut upper_keys = child.keys.split_off(degree - 1);
        let median = upper_keys.remove(0);
        let upper_children = if child.is_leaf() {
            Vec::new()
        } else {
            child.children.split_off(degree)
        };

        let sibling = Node {
            degree,
            keys: upper_keys,
            children: upper_children,
        };

        self.keys.insert(index, median);
        self.children.insert(index + 1, Box::new(sibling));
        trace!("split child {} of a node with {} keys", index, self.keys.len());
    }

    // ============================================================================
    // DELETE OPERATIONS
    // ============================================================================

    /// Remove one occurrence of `key` from the subtree rooted at this node.
    ///
    /// Returns the removed key, or `None` if no occurrence lies on the descent
    /// path. The caller guarantees this node holds at least `t` keys unless it
    /// is the root.
    pub(crate) fn remove(&mut self, key: &K) -> Option<K> {
        let index = self.lower_bound(key);
        if index < self.keys.len() && self.keys[index] == *key {
            return Some(self.remove_key_at(index));
        }
        if self.is_leaf() {
            return None;
        }

        let index = self.ensure_child_can_lend(index);
        self.children[index].remove(key)
    }

    /// Remove the key at `index` of this node.
    fn remove_key_at(&mut self, index: usize) -> K {
        if self.is_leaf() {
            return self.keys.remove(index);
        }

        if self.children[index].can_lend() {
            let predecessor = self.children[index].pop_last();
            mem::replace(&mut self.keys[index], predecessor)
        } else if self.children[index + 1].can_lend() {
            let successor = self.children[index + 1].pop_first();
            mem::replace(&mut self.keys[index], successor)
        } else {
            // Both neighbours are minimal: the key sinks into the merged child.
            let position = self.children[index].keys.len();
            self.merge_children(index);
            self.children[index].remove_key_at(position)
        }
    }

    /// Remove and return the smallest key of this subtree.
    pub(crate) fn pop_first(&mut self) -> K {
        if self.is_leaf() {
            return self.keys.remove(0);
        }
        let index = self.ensure_child_can_lend(0);
        self.children[index].pop_first()
    }

    /// Remove and return the largest key of this subtree.
    pub(crate) fn pop_last(&mut self) -> K {
        if self.is_leaf() {
            let last = self.keys.len() - 1;
            return self.keys.remove(last);
        }
        let index = self.ensure_child_can_lend(self.children.len() - 1);
        self.children[index].pop_last()
    }

    // ============================================================================
    // BORROWING AND MERGING HELPERS
    // ============================================================================

    /// Make sure the child at `index` holds at least `t` keys before descending.
    ///
    /// Borrows from the left sibling, then the right sibling, and merges with
    /// a sibling (the right one when present) when neither can lend. Returns
    /// the index of the child that now covers the original child's range.
    fn ensure_child_can_lend(&mut self, index: usize) -> usize {
        if self.children[index].can_lend() {
            return index;
        }

        let has_right = index + 1 < self.children.len();
        if index > 0 && self.children[index - 1].can_lend() {
            self.borrow_from_left(index);
            index
        } else if has_right && self.children[index + 1].can_lend() {
            self.borrow_from_right(index);
            index
        } else if has_right {
            self.merge_children(index);
            index
        } else {
            self.merge_children(index - 1);
            index - 1
        }
    }

    /// Rotate the left sibling's last key up through this node into the child
    /// at `index`.
    fn borrow_from_left(&mut self, index: usize) {
        let (before, after) = self.children.split_at_mut(index);
        let left = &mut before[index - 1];
        let child = &mut after[0];

        let last = left.keys.len() - 1;
        let raised = left.keys.remove(last);
        let lowered = mem::replace(&mut self.keys[index - 1], raised);
        child.keys.insert(0, lowered);

        if !left.is_leaf() {
            let last_child = left.children.len() - 1;
            child.children.insert(0, left.children.remove(last_child));
        }
        trace!("rotated a key from child {} into child {}", index - 1, index);
    }

    /// Rotate the right sibling's first key up through this node into the
    /// child at `index`.
    fn borrow_from_right(&mut self, index: usize) {
        let (before, after) = self.children.split_at_mut(index + 1);
        let child = &mut before[index];
        let right = &mut after[0];

        let raised = right.keys.remove(0);
        let lowered = mem::replace(&mut self.keys[index], raised);
        child.keys.push(lowered);

        if !right.is_leaf() {
            child.children.push(right.children.remove(0));
        }
        trace!("rotated a key from child {} into child {}", index + 1, index);
    }

    /// Merge `children[index]`, `keys[index]` and `children[index + 1]` into
    /// the child at `index`. The right child is dropped.
    fn merge_children(&mut self, index: usize) {
        let right = *self.children.remove(index + 1);
        let separator = self.keys.remove(index);

        let left = &mut self.children[index];
        left.keys.reserve(right.keys.len() + 1);
        left.keys.push(separator);
        left.keys.extend(right.keys);
        left.children.extend(right.children);
        trace!("merged children {} and {}", index, index + 1);
    }
}
