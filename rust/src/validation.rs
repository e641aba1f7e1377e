//! Validation and debugging utilities for BTree.
//!
//! This module contains invariant checking, structure dumps and the helpers the
//! tests use to look inside a tree.

use std::fmt;

use crate::error::{BTreeError, BTreeResult};
use crate::types::{BTree, Node};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord> BTree<K> {
    /// Check if the tree maintains B-tree invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies key counts per node, child counts, ordering within and across
    /// nodes, equal leaf depth, and that the tracked length matches the keys
    /// actually stored.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        let Some(root) = self.root.as_deref() else {
            if self.len != 0 {
                return Err(format!("Empty tree reports {} keys", self.len));
            }
            return Ok(());
        };

        if root.is_empty() {
            return Err("Root node holds no keys".to_string());
        }

        let mut leaf_depth = None;
        let stored = self.check_node_invariants(root, None, None, true, 0, &mut leaf_depth)?;
        if stored != self.len {
            return Err(format!(
                "Tree reports {} keys but nodes hold {}",
                self.len, stored
            ));
        }
        Ok(())
    }

    /// Recursively check invariants for a node and its children, returning the
    /// number of keys in the subtree.
    fn check_node_invariants(
        &self,
        node: &Node<K>,
        min_key: Option<&K>,
        max_key: Option<&K>,
        is_root: bool,
        depth: usize,
        leaf_depth: &mut Option<usize>,
    ) -> Result<usize, String> {
        if node.degree != self.degree {
            return Err(format!(
                "Node at depth {} has degree {} but tree has {}",
                depth, node.degree, self.degree
            ));
        }

        // Check capacity constraints
        if node.len() > node.max_keys() {
            return Err(format!(
                "Node at depth {} holds {} keys (max {})",
                depth,
                node.len(),
                node.max_keys()
            ));
        }
        if !is_root && node.len() < node.min_keys() {
            return Err(format!(
                "Node at depth {} holds {} keys (min {})",
                depth,
                node.len(),
                node.min_keys()
            ));
        }

        // Check that keys are sorted
        if let Some(i) = node.keys.windows(2).position(|pair| pair[0] > pair[1]) {
            return Err(format!("Keys out of order at index {} at depth {}", i + 1, depth));
        }

        // Check key bounds
        if let (Some(min), Some(first)) = (min_key, node.keys.first()) {
            if first < min {
                return Err(format!("Key below its separator at depth {}", depth));
            }
        }
        if let (Some(max), Some(last)) = (max_key, node.keys.last()) {
            if last > max {
                return Err(format!("Key above its separator at depth {}", depth));
            }
        }

        if node.is_leaf() {
            match *leaf_depth {
                None => *leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(format!(
                        "Leaf at depth {} but other leaves are at depth {}",
                        depth, expected
                    ));
                }
                Some(_) => {}
            }
            return Ok(node.len());
        }

        if node.children.len() != node.len() + 1 {
            return Err(format!(
                "Internal node at depth {} has {} keys and {} children",
                depth,
                node.len(),
                node.children.len()
            ));
        }

        let mut stored = node.len();
        for (i, child) in node.children.iter().enumerate() {
            let child_min = if i == 0 { min_key } else { Some(&node.keys[i - 1]) };
            let child_max = if i == node.len() { max_key } else { Some(&node.keys[i]) };
            stored += self.check_node_invariants(
                child,
                child_min,
                child_max,
                false,
                depth + 1,
                leaf_depth,
            )?;
        }
        Ok(stored)
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Check if tree is in a valid state for operations
    pub fn validate_for_operation(&self, operation: &str) -> BTreeResult<()> {
        self.check_invariants_detailed().map_err(|e| {
            BTreeError::data_integrity(operation, &format!("Validation for {}: {}", operation, e))
        })
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<K> BTree<K> {
    /// Returns all keys in order as a vector (for testing/debugging).
    pub fn slice(&self) -> Vec<&K> {
        self.keys().collect()
    }

    /// Returns the key count of every node, grouped by level from the root down.
    pub fn node_sizes(&self) -> Vec<Vec<usize>> {
        let mut levels = Vec::new();
        let mut current: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while !current.is_empty() {
            levels.push(current.iter().map(|node| node.len()).collect());
            current = current.into_iter().flat_map(Node::children).collect();
        }
        levels
    }

    /// Returns the depth of every leaf, left to right (for testing/debugging).
    pub fn leaf_depths(&self) -> Vec<usize> {
        let mut depths = Vec::new();
        if let Some(root) = self.root.as_deref() {
            collect_leaf_depths(root, 0, &mut depths);
        }
        depths
    }
}

fn collect_leaf_depths<K>(node: &Node<K>, depth: usize, depths: &mut Vec<usize>) {
    if node.is_leaf() {
        depths.push(depth);
        return;
    }
    for child in node.children() {
        collect_leaf_depths(child, depth + 1, depths);
    }
}

impl<K: fmt::Debug> Node<K> {
    fn fmt_depth(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let kind = if self.is_leaf() { "Leaf" } else { "Branch" };
        writeln!(f, "{}{}: {:?}", "  ".repeat(depth), kind, self.keys)?;
        for child in self.children() {
            child.fmt_depth(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Renders the node structure, one node per line, indented by depth.
impl<K: fmt::Debug> fmt::Display for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BTree[degree={}, len={}]", self.degree, self.len)?;
        match self.root.as_deref() {
            None => writeln!(f, "  <empty>"),
            Some(root) => root.fmt_depth(f, 1),
        }
    }
}
