//! Node-level structural operations.
//!
//! This module contains the status checks used by the insert and delete
//! paths, and the three restructuring primitives: split, rotation and merge.

use crate::types::{ChildSequence, InsertResult, Key, Node, TreeConfig};
use tracing::trace;

impl Node {
    // ============================================================================
    // STATUS CHECKS
    // ============================================================================

    /// Returns true if this node has no children.
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of keys in this node.
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this node holds more keys than the order allows.
    pub(crate) fn is_overfull(&self, config: &TreeConfig) -> bool {
        self.keys.len() > config.max_keys()
    }

    /// Returns true if this node is below minimum occupancy.
    pub(crate) fn is_underfull(&self, config: &TreeConfig) -> bool {
        self.keys.len() < config.min_keys
    }

    /// Smallest key in this subtree.
    pub(crate) fn min_key(&self) -> Option<Key> {
        match self.children.first() {
            Some(child) => child.min_key(),
            None => self.keys.first(),
        }
    }

    /// Largest key in this subtree.
    pub(crate) fn max_key(&self) -> Option<Key> {
        match self.children.last() {
            Some(child) => child.max_key(),
            None => self.keys.last(),
        }
    }

    // ============================================================================
    // SPLIT
    // ============================================================================

    /// Split this node around its middle key.
    ///
    /// The key at `len / 2` is promoted. This node keeps the keys (and the
    /// children) before it and becomes the left half; a new node takes the
    /// rest.
    pub(crate) fn split(mut self: Box<Self>) -> InsertResult {
        let keys = std::mem::take(&mut self.keys);
        let Some((left_keys, separator, right_keys)) = keys.split_at_middle() else {
            return InsertResult::NoSplit(self);
        };

        let right_children = if self.is_leaf() {
            ChildSequence::new()
        } else {
            self.children.split_off(left_keys.len() + 1)
        };
        self.keys = left_keys;

        trace!(
            separator,
            left_keys = self.keys.len(),
            right_keys = right_keys.len(),
            "split node"
        );

        let right = Box::new(Node {
            keys: right_keys,
            children: right_children,
        });
        InsertResult::Split {
            separator,
            left: self,
            right,
        }
    }

    // ============================================================================
    // ROTATIONS
    // ============================================================================

    /// Move a key from `children[index]` to `children[index + 1]` through
    /// the separator at `index`.
    ///
    /// The left child's largest key becomes the separator and the old
    /// separator becomes the right child's smallest key. For internal
    /// children the left child's last child moves along with it. Returns
    /// false, leaving the node untouched, if there is nothing to move.
    pub(crate) fn right_rotation(&mut self, index: usize) -> bool {
        if index >= self.keys.len() {
            return false;
        }
        let Some((left, right)) = self.children.pair_mut(index) else {
            return false;
        };
        let Some(borrowed) = left.keys.pop_last() else {
            return false;
        };
        let moved_child = left.children.pop_last();

        let separator = self.keys.replace(index, borrowed);
        right.keys.push_front(separator);
        if let Some(child) = moved_child {
            right.children.push_front(child);
        }

        trace!(index, separator, borrowed, "rotated right");
        true
    }

    /// Move a key from `children[index + 1]` to `children[index]` through
    /// the separator at `index`. Mirror image of `right_rotation`.
    pub(crate) fn left_rotation(&mut self, index: usize) -> bool {
        if index >= self.keys.len() {
            return false;
        }
        let Some((left, right)) = self.children.pair_mut(index) else {
            return false;
        };
        let Some(borrowed) = right.keys.pop_first() else {
            return false;
        };
        let moved_child = right.children.pop_first();

        let separator = self.keys.replace(index, borrowed);
        left.keys.push(separator);
        if let Some(child) = moved_child {
            left.children.push(child);
        }

        trace!(index, separator, borrowed, "rotated left");
        true
    }

    // ============================================================================
    // MERGE
    // ============================================================================

    /// Merge `children[index]` into `children[index - 1]`.
    ///
    /// The separator between them moves down between the two key runs and
    /// the right child's children follow the left child's. The right child
    /// is dropped and the separator disappears from this node.
    pub(crate) fn merge_child(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.children.len() || index > self.keys.len() {
            return false;
        }
        let right = self.children.take(index);
        let separator = self.keys.remove_at(index - 1);
        self.children[index - 1].absorb(separator, *right);

        trace!(
            index,
            separator,
            merged_keys = self.children[index - 1].len(),
            "merged children"
        );
        true
    }

    /// Append `separator` and all of `right`'s contents to this node.
    fn absorb(&mut self, separator: Key, mut right: Node) {
        self.keys.push(separator);
        self.keys.append(&mut right.keys);
        self.children.append(&mut right.children);
    }
}
