//! DELETE operations for BTree.
//!
//! This module contains the deletion path: removal from a leaf (with
//! predecessor substitution when the key sits in an internal node), repair
//! of under-occupied children on the way back up, and root collapse.

use crate::error::ModifyResult;
use crate::types::{BTree, Key, Node, Sibling, TreeConfig};
use tracing::{debug, warn};

impl BTree {
    /// Remove a key, returning the tree for chaining.
    ///
    /// Deleting a key that is not present leaves the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree: BTree = (1..=10).collect();
    /// tree.delete(4).delete(40);
    /// assert_eq!(tree.get(4), None);
    /// assert_eq!(tree.len(), 9);
    /// ```
    pub fn delete(&mut self, key: Key) -> &mut Self {
        self.remove(key);
        self
    }

    /// Remove a key.
    ///
    /// # Returns
    ///
    /// `true` if the key was present.
    pub fn remove(&mut self, key: Key) -> bool {
        if !self.contains(key) {
            return false;
        }

        let root = std::mem::take(&mut self.root);
        self.root = Self::collapse_root(root.delete(key, &self.config));
        self.len -= 1;
        true
    }

    /// Remove with invariant checking before and after the mutation.
    pub fn try_delete(&mut self, key: Key) -> ModifyResult<bool> {
        self.validate_for_operation("delete")?;
        let removed = self.remove(key);
        self.validate_for_operation("delete")?;
        Ok(removed)
    }

    /// Replace a root left with no keys and a single child by that child.
    fn collapse_root(mut root: Box<Node>) -> Box<Node> {
        while root.keys.is_empty() && root.children.len() == 1 {
            debug!("root emptied by merge, tree shrinks by one level");
            root = root.children.take(0);
        }
        root
    }
}

impl Node {
    /// Delete `key` from this subtree, taking ownership of it and returning
    /// the updated subtree root.
    ///
    /// Keys are only ever removed physically from leaves. A key found in an
    /// internal node is overwritten by its in-order predecessor, which is
    /// then deleted from the left subtree. Whichever child the deletion went
    /// through is repaired if it dropped below minimum occupancy.
    pub(crate) fn delete(mut self: Box<Self>, key: Key, config: &TreeConfig) -> Box<Self> {
        let (index, found) = self.keys.find(key);

        if self.is_leaf() {
            if found {
                self.keys.remove_at(index);
            }
            return self;
        }

        let target = if found {
            let Some(predecessor) = self.children.get(index).and_then(Node::max_key) else {
                warn!(key, index, "internal key has an empty left subtree");
                return self;
            };
            self.keys.replace(index, predecessor);
            predecessor
        } else {
            key
        };

        let child = self.children.take(index);
        self.children.insert(index, child.delete(target, config));

        if self.children[index].is_underfull(config) {
            self.rebalance_child(index, config);
        }
        self
    }

    /// Restore minimum occupancy of `children[index]`.
    ///
    /// Borrows through a rotation when an adjacent sibling can spare a key
    /// (left first), otherwise merges the child with its left sibling, or
    /// with its right sibling when it is the leftmost child.
    fn rebalance_child(&mut self, index: usize, config: &TreeConfig) {
        let borrow = self.children.can_borrow(index, config.min_keys);
        let rotated = match borrow {
            Some(Sibling::Left) => self.right_rotation(index - 1),
            Some(Sibling::Right) => self.left_rotation(index),
            None => false,
        };
        if rotated {
            return;
        }
        if borrow.is_some() {
            warn!(index, ?borrow, "sibling reported spare keys but rotation failed");
        }

        let merge_at = if index > 0 { index } else { index + 1 };
        if !self.merge_child(merge_at) {
            warn!(
                index,
                children = self.children.len(),
                "under-occupied child has no sibling to merge with"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(keys: &[Key]) -> Node {
        Node::leaf(keys.to_vec())
    }

    fn child_keys(node: &Node) -> Vec<Vec<Key>> {
        node.children
            .iter()
            .map(|child| child.keys.as_slice().to_vec())
            .collect()
    }

    fn tree_from(root: Node) -> BTree {
        let mut tree = BTree::new();
        tree.len = count_keys(&root);
        tree.root = Box::new(root);
        tree
    }

    fn count_keys(node: &Node) -> usize {
        node.len() + node.children.iter().map(count_keys).sum::<usize>()
    }

    #[test]
    fn test_delete_merges_when_no_sibling_can_spare() {
        let mut tree = tree_from(Node::internal(
            vec![3, 6],
            vec![leaf(&[1, 2]), leaf(&[4, 5]), leaf(&[7, 8])],
        ));
        tree.delete(4);

        assert_eq!(tree.get(5), Some(5));
        assert_eq!(tree.get(4), None);
        assert_eq!(tree.root.keys.as_slice(), &[6]);
        assert_eq!(child_keys(&tree.root), vec![vec![1, 2, 3, 5], vec![7, 8]]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_delete_borrows_from_left_sibling() {
        let mut tree = tree_from(Node::internal(
            vec![4, 7],
            vec![leaf(&[1, 2, 3]), leaf(&[5, 6]), leaf(&[8, 9])],
        ));
        tree.delete(5);

        assert_eq!(tree.root.keys.as_slice(), &[3, 7]);
        assert_eq!(
            child_keys(&tree.root),
            vec![vec![1, 2], vec![4, 6], vec![8, 9]]
        );
    }

    #[test]
    fn test_delete_borrows_from_right_sibling() {
        let mut tree = tree_from(Node::internal(
            vec![3, 6],
            vec![leaf(&[1, 2]), leaf(&[4, 5]), leaf(&[7, 8, 9])],
        ));
        tree.delete(4);

        assert_eq!(tree.root.keys.as_slice(), &[3, 7]);
        assert_eq!(
            child_keys(&tree.root),
            vec![vec![1, 2], vec![5, 6], vec![8, 9]]
        );
    }

    #[test]
    fn test_leftmost_child_merges_right() {
        let mut tree = tree_from(Node::internal(
            vec![3, 6],
            vec![leaf(&[1, 2]), leaf(&[4, 5]), leaf(&[7, 8])],
        ));
        tree.delete(1);

        assert_eq!(tree.root.keys.as_slice(), &[6]);
        assert_eq!(child_keys(&tree.root), vec![vec![2, 3, 4, 5], vec![7, 8]]);
    }

    #[test]
    fn test_delete_internal_key_uses_predecessor() {
        let mut tree = tree_from(Node::internal(
            vec![4, 7],
            vec![leaf(&[1, 2, 3]), leaf(&[5, 6]), leaf(&[8, 9])],
        ));
        tree.delete(4);

        assert_eq!(tree.root.keys.as_slice(), &[3, 7]);
        assert_eq!(
            child_keys(&tree.root),
            vec![vec![1, 2], vec![5, 6], vec![8, 9]]
        );
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_delete_internal_key_repairs_left_subtree() {
        let mut tree = tree_from(Node::internal(
            vec![3, 6],
            vec![leaf(&[1, 2]), leaf(&[4, 5]), leaf(&[7, 8])],
        ));
        tree.delete(3);

        assert_eq!(tree.get(3), None);
        assert_eq!(tree.root.keys.as_slice(), &[6]);
        assert_eq!(child_keys(&tree.root), vec![vec![1, 2, 4, 5], vec![7, 8]]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_root_collapses_after_last_separator_merges() {
        let mut tree = tree_from(Node::internal(vec![3], vec![leaf(&[1, 2]), leaf(&[4, 5])]));
        tree.delete(5);

        assert!(tree.root.is_leaf());
        assert_eq!(tree.root.keys.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_internal_child_rotation_moves_subtree() {
        // Deleting 10 starves the left leaf; its merge starves the left
        // internal child, which then borrows a key and a leaf from the right.
        let left = Node::internal(
            vec![20, 30],
            vec![leaf(&[10, 15]), leaf(&[25, 27]), leaf(&[35, 37])],
        );
        let right = Node::internal(
            vec![60, 70, 80],
            vec![leaf(&[55, 57]), leaf(&[65, 67]), leaf(&[75, 77]), leaf(&[85, 87])],
        );
        let mut tree = tree_from(Node::internal(vec![50], vec![left, right]));
        tree.delete(10);

        assert_eq!(tree.root.keys.as_slice(), &[60]);
        let left = &tree.root.children[0];
        assert_eq!(left.keys.as_slice(), &[30, 50]);
        assert_eq!(
            child_keys(left),
            vec![vec![15, 20, 25, 27], vec![35, 37], vec![55, 57]]
        );
        assert_eq!(tree.root.children[1].keys.as_slice(), &[70, 80]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_delete_absent_key_is_noop() {
        let mut tree = tree_from(Node::internal(
            vec![3, 6],
            vec![leaf(&[1, 2]), leaf(&[4, 5]), leaf(&[7, 8])],
        ));
        assert!(!tree.remove(42));
        assert!(!tree.remove(0));
        assert_eq!(tree.len(), 8);
        assert_eq!(tree.to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_node_delete_on_absent_key_keeps_structure() {
        let config = TreeConfig::default();
        let node = Box::new(Node::internal(
            vec![3, 6],
            vec![leaf(&[1, 2]), leaf(&[4, 5]), leaf(&[7, 8])],
        ));
        let before = node.clone();
        let after = node.delete(9, &config);
        assert_eq!(after, before);
    }

    #[test]
    fn test_delete_everything_leaves_empty_leaf() {
        let mut tree: BTree = (1..=30).collect();
        for key in (1..=30).rev() {
            assert!(tree.remove(key));
        }
        assert!(tree.is_empty());
        assert!(tree.root.is_leaf());
        assert!(tree.root.keys.is_empty());
    }

    #[test]
    fn test_try_delete() {
        let mut tree: BTree = (1..=10).collect();
        assert_eq!(tree.try_delete(5), Ok(true));
        assert_eq!(tree.try_delete(5), Ok(false));
    }
}
