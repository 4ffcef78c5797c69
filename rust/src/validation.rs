//! Validation and debugging utilities for BTree.
//!
//! This module contains invariant checking, the in-order snapshot used by
//! tests, and a structural `Display` rendering.

use crate::error::{BTreeError, BTreeResult};
use crate::types::{BTree, Key, Node};
use std::fmt;

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl BTree {
    /// Check if the tree maintains B-tree invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies per node: keys strictly ascending and within the bounds set
    /// by the ancestors' separators; at most `order - 1` keys; at least
    /// `min_keys` keys unless it is the root; an internal root holds a key;
    /// children either absent or one more than the keys. Across the tree:
    /// every leaf at the same depth, and the stored count matching the keys.
    pub fn check_invariants_detailed(&self) -> BTreeResult<()> {
        let mut leaf_depth = None;
        let counted = self.check_node_invariants(&self.root, None, None, 0, &mut leaf_depth)?;
        if counted != self.len {
            return Err(BTreeError::data_integrity(
                "Key count",
                &format!("{} keys in tree vs {} recorded", counted, self.len),
            ));
        }
        Ok(())
    }

    /// Check if tree is in a valid state for operations
    pub fn validate_for_operation(&self, operation: &str) -> BTreeResult<()> {
        self.check_invariants_detailed().map_err(|e| {
            BTreeError::data_integrity(operation, &format!("Validation for {}: {}", operation, e))
        })
    }

    /// Recursively check a subtree, returning the number of keys it holds.
    fn check_node_invariants(
        &self,
        node: &Node,
        min_key: Option<Key>,
        max_key: Option<Key>,
        depth: usize,
        leaf_depth: &mut Option<usize>,
    ) -> BTreeResult<usize> {
        let keys = node.keys.as_slice();
        let is_root = depth == 0;
        let context = format!("Node at depth {}", depth);

        if keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(BTreeError::data_integrity(
                &context,
                &format!("keys not strictly ascending: {:?}", keys),
            ));
        }
        if let (Some(low), Some(&first)) = (min_key, keys.first()) {
            if first <= low {
                return Err(BTreeError::data_integrity(
                    &context,
                    &format!("key {} not above separator {}", first, low),
                ));
            }
        }
        if let (Some(high), Some(&last)) = (max_key, keys.last()) {
            if last >= high {
                return Err(BTreeError::data_integrity(
                    &context,
                    &format!("key {} not below separator {}", last, high),
                ));
            }
        }
        if node.is_overfull(&self.config) {
            return Err(BTreeError::data_integrity(
                &context,
                &format!("{} keys exceeds maximum {}", keys.len(), self.config.max_keys()),
            ));
        }
        if !is_root && node.is_underfull(&self.config) {
            return Err(BTreeError::data_integrity(
                &context,
                &format!("{} keys below minimum {}", keys.len(), self.config.min_keys),
            ));
        }

        if node.is_leaf() {
            match *leaf_depth {
                None => *leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(BTreeError::corrupted_tree(
                        "Leaf depth",
                        &format!("leaf at depth {} vs {}", depth, expected),
                    ));
                }
                Some(_) => {}
            }
            return Ok(keys.len());
        }

        if keys.is_empty() {
            return Err(BTreeError::corrupted_tree(
                "Internal node",
                &format!("{} has children but no keys", context),
            ));
        }
        if node.children.len() != keys.len() + 1 {
            return Err(BTreeError::corrupted_tree(
                "Child sequence",
                &format!(
                    "{} has {} keys and {} children",
                    context,
                    keys.len(),
                    node.children.len()
                ),
            ));
        }

        let mut total = keys.len();
        for (i, child) in node.children.iter().enumerate() {
            let child_min = if i == 0 { min_key } else { node.keys.get(i - 1) };
            let child_max = if i == keys.len() { max_key } else { node.keys.get(i) };
            total += self.check_node_invariants(child, child_min, child_max, depth + 1, leaf_depth)?;
        }
        Ok(total)
    }

    // ============================================================================
    // DEBUGGING AND TESTING UTILITIES
    // ============================================================================

    /// Returns all keys in ascending order (for testing/debugging).
    pub fn to_vec(&self) -> Vec<Key> {
        let mut keys = Vec::with_capacity(self.len);
        Self::collect_keys(&self.root, &mut keys);
        keys
    }

    /// Returns the sizes of all leaf nodes, left to right (for testing/debugging).
    pub fn leaf_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        Self::collect_leaf_sizes(&self.root, &mut sizes);
        sizes
    }

    fn collect_keys(node: &Node, out: &mut Vec<Key>) {
        if node.is_leaf() {
            out.extend_from_slice(node.keys.as_slice());
            return;
        }
        for (i, child) in node.children.iter().enumerate() {
            Self::collect_keys(child, out);
            if let Some(key) = node.keys.get(i) {
                out.push(key);
            }
        }
    }

    fn collect_leaf_sizes(node: &Node, sizes: &mut Vec<usize>) {
        if node.is_leaf() {
            sizes.push(node.len());
        } else {
            for child in node.children.iter() {
                Self::collect_leaf_sizes(child, sizes);
            }
        }
    }

    /// Write a node and its children, one node per line, indented by depth.
    fn fmt_node(node: &Node, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = "  ".repeat(depth);
        if node.is_leaf() {
            writeln!(f, "{}Leaf{:?}", indent, node.keys.as_slice())
        } else {
            writeln!(
                f,
                "{}Internal{:?}: {} children",
                indent,
                node.keys.as_slice(),
                node.children.len()
            )?;
            for child in node.children.iter() {
                Self::fmt_node(child, depth + 1, f)?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for BTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_node(&self.root, 0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(keys: &[Key]) -> Node {
        Node::leaf(keys.to_vec())
    }

    fn tree_with_root(root: Node, len: usize) -> BTree {
        let mut tree = BTree::new();
        tree.root = Box::new(root);
        tree.len = len;
        tree
    }

    #[test]
    fn test_valid_tree_passes() {
        let tree = tree_with_root(
            Node::internal(vec![3, 6], vec![leaf(&[1, 2]), leaf(&[4, 5]), leaf(&[7, 8])]),
            8,
        );
        assert!(tree.check_invariants());
        assert_eq!(tree.to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(tree.leaf_sizes(), vec![2, 2, 2]);
    }

    #[test]
    fn test_detects_unsorted_keys() {
        let tree = tree_with_root(leaf(&[2, 1]), 2);
        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(matches!(err, BTreeError::DataIntegrity(_)));
    }

    #[test]
    fn test_detects_key_outside_separator_bounds() {
        let tree = tree_with_root(
            Node::internal(vec![3], vec![leaf(&[1, 2]), leaf(&[3, 4])]),
            5,
        );
        assert!(!tree.check_invariants());
    }

    #[test]
    fn test_detects_underfull_child() {
        let tree = tree_with_root(Node::internal(vec![3], vec![leaf(&[1]), leaf(&[4, 5])]), 4);
        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("below minimum"));
    }

    #[test]
    fn test_detects_overfull_node() {
        let tree = tree_with_root(leaf(&[1, 2, 3, 4, 5]), 5);
        assert!(!tree.check_invariants());
    }

    #[test]
    fn test_detects_uneven_leaf_depth() {
        let deep = Node::internal(
            vec![10, 20],
            vec![leaf(&[1, 2]), leaf(&[11, 12]), leaf(&[21, 22])],
        );
        let tree = tree_with_root(Node::internal(vec![30], vec![deep, leaf(&[31, 32])]), 11);
        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(matches!(err, BTreeError::CorruptedTree(_)));
    }

    #[test]
    fn test_detects_child_count_mismatch() {
        let tree = tree_with_root(Node::internal(vec![3, 6], vec![leaf(&[1, 2]), leaf(&[4, 5])]), 6);
        assert!(matches!(
            tree.check_invariants_detailed(),
            Err(BTreeError::CorruptedTree(_))
        ));
    }

    #[test]
    fn test_detects_len_mismatch() {
        let tree = tree_with_root(leaf(&[1, 2]), 3);
        assert!(!tree.check_invariants());
    }

    #[test]
    fn test_display_renders_structure() {
        let tree = tree_with_root(
            Node::internal(vec![3], vec![leaf(&[1, 2]), leaf(&[4, 5])]),
            5,
        );
        assert_eq!(
            tree.to_string(),
            "Internal[3]: 2 children\n  Leaf[1, 2]\n  Leaf[4, 5]\n"
        );
    }
}
