//! Tree structure management operations for BTree.
//!
//! This module contains tree-level operations that describe or reset the
//! overall structure: size queries, height, clearing and node counting.

use crate::types::{BTree, Node};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl BTree {
    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels, counting the root. An empty tree has height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut current: &Node = &self.root;
        while let Some(child) = current.children.first() {
            height += 1;
            current = child;
        }
        height
    }

    /// Returns true if the root is a leaf node.
    pub fn is_leaf_root(&self) -> bool {
        self.root.is_leaf()
    }

    /// Remove every key, keeping the configuration.
    pub fn clear(&mut self) {
        self.root = Box::new(Node::empty());
        self.len = 0;
    }

    /// Count the leaf and internal nodes in the tree.
    pub fn count_nodes(&self) -> (usize, usize) {
        Self::count_nodes_recursive(&self.root)
    }

    fn count_nodes_recursive(node: &Node) -> (usize, usize) {
        if node.is_leaf() {
            return (1, 0);
        }
        node.children
            .iter()
            .map(Self::count_nodes_recursive)
            .fold((0, 1), |(leaves, internals), (l, i)| {
                (leaves + l, internals + i)
            })
    }
}
