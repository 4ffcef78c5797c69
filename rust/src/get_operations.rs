//! GET operations for BTree.
//!
//! This module contains the read operations: point lookup and membership.

use crate::types::{BTree, Key, Node};

impl BTree {
    /// Look up a key.
    ///
    /// # Returns
    ///
    /// The stored key equal to `key` if present, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new();
    /// tree.add(7);
    /// assert_eq!(tree.get(7), Some(7));
    /// assert_eq!(tree.get(8), None);
    /// ```
    pub fn get(&self, key: Key) -> Option<Key> {
        self.root.get(key)
    }

    /// Check if key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new();
    /// tree.add(1);
    /// assert!(tree.contains(1));
    /// assert!(!tree.contains(2));
    /// ```
    pub fn contains(&self, key: Key) -> bool {
        self.get(key).is_some()
    }

    /// Smallest key in the tree.
    pub fn first(&self) -> Option<Key> {
        self.root.min_key()
    }

    /// Largest key in the tree.
    pub fn last(&self) -> Option<Key> {
        self.root.max_key()
    }
}

impl Node {
    /// Search this subtree for `key`.
    ///
    /// A miss in an internal node descends into the child at the search
    /// position, which is the only subtree that could hold the key.
    pub(crate) fn get(&self, key: Key) -> Option<Key> {
        let (index, found) = self.keys.find(key);
        if found {
            return self.keys.get(index);
        }
        self.children.get(index).and_then(|child| child.get(key))
    }
}
