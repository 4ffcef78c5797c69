//! INSERT operations for BTree.
//!
//! This module contains the insertion path: descent to the leaf, split
//! propagation back up through the parents, and root growth when the split
//! reaches the top.

use crate::error::ModifyResult;
use crate::types::{BTree, InsertResult, Key, Node, TreeConfig};
use tracing::debug;

impl BTree {
    /// Insert a key, returning the tree for chaining.
    ///
    /// Adding a key that is already present leaves the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new();
    /// tree.add(2).add(1).add(2);
    /// assert_eq!(tree.to_vec(), vec![1, 2]);
    /// ```
    pub fn add(&mut self, key: Key) -> &mut Self {
        self.insert(key);
        self
    }

    /// Insert a key.
    ///
    /// # Returns
    ///
    /// `true` if the key was not present before.
    pub fn insert(&mut self, key: Key) -> bool {
        if self.contains(key) {
            return false;
        }

        let root = std::mem::take(&mut self.root);
        self.root = match root.add(key, &self.config) {
            InsertResult::NoSplit(node) => node,
            InsertResult::Split {
                separator,
                left,
                right,
            } => {
                debug!(separator, key, "root split, tree grows by one level");
                Box::new(Node::new_root(separator, left, right))
            }
        };
        self.len += 1;
        true
    }

    /// Insert with invariant checking before and after the mutation.
    ///
    /// # Returns
    ///
    /// Whether the key was newly inserted, or a `DataIntegrity` /
    /// `CorruptedTree` error if the tree is not a valid B-tree.
    pub fn try_add(&mut self, key: Key) -> ModifyResult<bool> {
        self.validate_for_operation("add")?;
        let inserted = self.insert(key);
        self.validate_for_operation("add")?;
        Ok(inserted)
    }
}

impl Node {
    /// Insert `key` into this subtree, taking ownership of it.
    ///
    /// Returns the subtree unchanged if `key` is already present. Otherwise
    /// the key goes into a leaf; a child that splits is replaced by its two
    /// halves and the promoted key lands here, and if that leaves this node
    /// with more than `order - 1` keys it splits in turn.
    pub(crate) fn add(mut self: Box<Self>, key: Key, config: &TreeConfig) -> InsertResult {
        let (index, found) = self.keys.find(key);
        if found {
            return InsertResult::NoSplit(self);
        }

        if self.is_leaf() {
            self.keys.insert_at(index, key);
        } else {
            let child = self.children.take(index);
            match child.add(key, config) {
                InsertResult::NoSplit(child) => {
                    self.children.insert(index, child);
                    return InsertResult::NoSplit(self);
                }
                InsertResult::Split {
                    separator,
                    left,
                    right,
                } => {
                    self.children.insert_pair(index, left, right);
                    self.keys.insert_at(index, separator);
                }
            }
        }

        if self.is_overfull(config) {
            self.split()
        } else {
            InsertResult::NoSplit(self)
        }
    }
}

impl Extend<Key> for BTree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for BTree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = BTree::new();
        tree.extend(iter);
        tree
    }
}
