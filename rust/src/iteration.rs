//! Iterator implementations for BTree.
//!
//! Keys come out in non-decreasing order with duplicates adjacent.

use std::iter::FusedIterator;

use crate::types::{BTree, Node};

/// In-order iterator over borrowed keys.
///
/// Keeps an explicit stack of `(node, next key index)` frames along the path
/// from the root to the current position.
pub struct KeyIterator<'a, K> {
    stack: Vec<(&'a Node<K>, usize)>,
    remaining: usize,
}

impl<'a, K> KeyIterator<'a, K> {
    fn new(tree: &'a BTree<K>) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(tree.height()),
            remaining: tree.len,
        };
        if let Some(root) = tree.root.as_deref() {
            iter.push_leftmost(root);
        }
        iter
    }

    fn push_leftmost(&mut self, mut node: &'a Node<K>) {
        loop {
            self.stack.push((node, 0));
            match node.children.first() {
                Some(child) => node = child.as_ref(),
                None => break,
            }
        }
    }
}

impl<'a, K> Iterator for KeyIterator<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, index)) = self.stack.pop() {
            if index >= node.keys.len() {
                continue;
            }
            self.stack.push((node, index + 1));
            if let Some(child) = node.children.get(index + 1) {
                self.push_leftmost(child);
            }
            self.remaining -= 1;
            return Some(&node.keys[index]);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for KeyIterator<'_, K> {}

impl<K> FusedIterator for KeyIterator<'_, K> {}

/// Owning in-order iterator, produced by `BTree::into_iter`.
pub struct IntoIter<K> {
    inner: std::vec::IntoIter<K>,
}

impl<K> IntoIter<K> {
    fn new(tree: BTree<K>) -> Self {
        let mut keys = Vec::with_capacity(tree.len);
        if let Some(root) = tree.root {
            drain_in_order(*root, &mut keys);
        }
        Self {
            inner: keys.into_iter(),
        }
    }
}

fn drain_in_order<K>(node: Node<K>, out: &mut Vec<K>) {
    if node.children.is_empty() {
        out.extend(node.keys);
        return;
    }
    let mut children = node.children.into_iter();
    for key in node.keys {
        if let Some(child) = children.next() {
            drain_in_order(*child, out);
        }
        out.push(key);
    }
    for child in children {
        drain_in_order(*child, out);
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for IntoIter<K> {
    fn next_back(&mut self) -> Option<K> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> BTree<K> {
    /// Returns an iterator over the keys in non-decreasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// for key in [3, 1, 2, 1] {
    ///     tree.insert(key);
    /// }
    /// let keys: Vec<_> = tree.keys().copied().collect();
    /// assert_eq!(keys, vec![1, 1, 2, 3]);
    /// ```
    pub fn keys(&self) -> KeyIterator<'_, K> {
        KeyIterator::new(self)
    }

    /// Alias for `keys`.
    pub fn iter(&self) -> KeyIterator<'_, K> {
        self.keys()
    }
}

impl<'a, K> IntoIterator for &'a BTree<K> {
    type Item = &'a K;
    type IntoIter = KeyIterator<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}

impl<K> IntoIterator for BTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::BTree;

    #[test]
    fn test_empty_iteration() {
        let tree = BTree::<i32>::new(2).unwrap();
        assert_eq!(tree.keys().next(), None);
        assert_eq!(tree.into_iter().next(), None);
    }

    #[test]
    fn test_iteration_is_sorted_with_duplicates_adjacent() {
        let mut tree = BTree::new(2).unwrap();
        let keys = [8, 3, 8, 1, 5, 3, 9, 0, 8, 2, 7, 4, 6, 3];
        for key in keys {
            tree.insert(key);
        }
        let mut expected = keys.to_vec();
        expected.sort();

        let borrowed: Vec<i32> = tree.keys().copied().collect();
        assert_eq!(borrowed, expected);
        assert_eq!(tree.keys().len(), expected.len());

        let owned: Vec<i32> = tree.into_iter().collect();
        assert_eq!(owned, expected);
    }

    #[test]
    fn test_iteration_over_deep_tree() {
        let mut tree = BTree::new(2).unwrap();
        for key in (0..1000).rev() {
            tree.insert(key);
        }
        assert!(tree.height() >= 5);
        let collected: Vec<i32> = (&tree).into_iter().copied().collect();
        assert_eq!(collected, (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn test_into_iter_reversed() {
        let mut tree = BTree::new(3).unwrap();
        for key in 0..50 {
            tree.insert(key);
        }
        let reversed: Vec<i32> = tree.into_iter().rev().collect();
        assert_eq!(reversed, (0..50).rev().collect::<Vec<_>>());
    }
}
