//! Construction and configuration logic for BTree and its nodes.
//!
//! This module contains order validation, the derivation of minimum
//! occupancy from the order, and the constructors for trees and nodes.

use crate::error::{BTreeError, InitResult};
use crate::types::{
    BTree, ChildSequence, Key, KeySequence, Node, TreeConfig, DEFAULT_MIN_KEYS, DEFAULT_ORDER,
    MIN_ORDER,
};

impl TreeConfig {
    /// Create a configuration for the given order.
    ///
    /// The minimum occupancy is derived as `ceil(order / 2) - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::TreeConfig;
    ///
    /// let config = TreeConfig::new(5).unwrap();
    /// assert_eq!(config.min_keys(), 2);
    /// assert_eq!(config.max_keys(), 4);
    /// assert!(TreeConfig::new(2).is_err());
    /// ```
    pub fn new(order: usize) -> InitResult<Self> {
        if order < MIN_ORDER {
            return Err(BTreeError::invalid_order(order, MIN_ORDER));
        }
        Self::with_min_keys(order, order.div_ceil(2) - 1)
    }

    /// Create a configuration with an explicit minimum occupancy.
    ///
    /// `min_keys` must be at least `max(1, ceil(order / 2) - 1)` so that
    /// siblings stay balanced, and at most `(order - 1) / 2` so that both
    /// halves of a split and the result of a merge respect the bounds.
    pub fn with_min_keys(order: usize, min_keys: usize) -> InitResult<Self> {
        if order < MIN_ORDER {
            return Err(BTreeError::invalid_order(order, MIN_ORDER));
        }
        let low = (order.div_ceil(2) - 1).max(1);
        let high = (order - 1) / 2;
        if min_keys < low || min_keys > high {
            return Err(BTreeError::invalid_min_keys(min_keys, low, high));
        }
        Ok(Self { order, min_keys })
    }

    /// Maximum number of children per internal node.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Minimum number of keys in a non-root node.
    pub fn min_keys(&self) -> usize {
        self.min_keys
    }

    /// Maximum number of keys per node.
    pub fn max_keys(&self) -> usize {
        self.order - 1
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            min_keys: DEFAULT_MIN_KEYS,
        }
    }
}

impl BTree {
    /// Create an empty tree of order 5 with a minimum occupancy of 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.order(), 5);
    /// ```
    pub fn new() -> Self {
        Self::from_config(TreeConfig::default())
    }

    /// Create an empty tree with the given order.
    ///
    /// # Returns
    ///
    /// Returns `Err(BTreeError::InvalidOrder)` if `order` is below 3.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::with_order(16).unwrap();
    /// assert_eq!(tree.min_keys(), 7);
    /// assert!(BTree::with_order(1).is_err());
    /// ```
    pub fn with_order(order: usize) -> InitResult<Self> {
        TreeConfig::new(order).map(Self::from_config)
    }

    /// Create an empty tree from a validated configuration.
    pub fn with_config(config: TreeConfig) -> InitResult<Self> {
        let config = TreeConfig::with_min_keys(config.order, config.min_keys)?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: TreeConfig) -> Self {
        Self {
            config,
            root: Box::new(Node::empty()),
            len: 0,
        }
    }

    /// Returns the configuration this tree was built with.
    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// Maximum number of children per internal node.
    pub fn order(&self) -> usize {
        self.config.order
    }

    /// Minimum number of keys in a non-root node.
    pub fn min_keys(&self) -> usize {
        self.config.min_keys
    }
}

impl Default for BTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Node {
    /// Creates an empty leaf.
    pub(crate) fn empty() -> Self {
        Self {
            keys: KeySequence::new(),
            children: ChildSequence::new(),
        }
    }

    /// Creates a leaf holding `keys`, which must already be sorted.
    pub(crate) fn leaf(keys: Vec<Key>) -> Self {
        Self {
            keys: KeySequence::from(keys),
            children: ChildSequence::new(),
        }
    }

    /// Creates an internal node; `children` must hold one more node than
    /// `keys` holds keys.
    pub(crate) fn internal(keys: Vec<Key>, children: Vec<Node>) -> Self {
        Self {
            keys: KeySequence::from(keys),
            children: ChildSequence::from(children),
        }
    }

    /// Creates the root that replaces a split root.
    pub(crate) fn new_root(separator: Key, left: Box<Node>, right: Box<Node>) -> Self {
        Self {
            keys: KeySequence::from(vec![separator]),
            children: ChildSequence(vec![left, right]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_order_five() {
        let config = TreeConfig::default();
        assert_eq!(config.order(), DEFAULT_ORDER);
        assert_eq!(config.min_keys(), DEFAULT_MIN_KEYS);
        assert_eq!(TreeConfig::new(DEFAULT_ORDER).unwrap(), config);
    }

    #[test]
    fn test_derived_min_keys() {
        assert_eq!(TreeConfig::new(3).unwrap().min_keys(), 1);
        assert_eq!(TreeConfig::new(4).unwrap().min_keys(), 1);
        assert_eq!(TreeConfig::new(6).unwrap().min_keys(), 2);
        assert_eq!(TreeConfig::new(7).unwrap().min_keys(), 3);
        assert_eq!(TreeConfig::new(64).unwrap().min_keys(), 31);
    }

    #[test]
    fn test_invalid_order() {
        let result = TreeConfig::new(2);
        assert!(matches!(result, Err(BTreeError::InvalidOrder(_))));
        assert!(BTree::with_order(0).is_err());
    }

    #[test]
    fn test_invalid_min_keys() {
        assert!(matches!(
            TreeConfig::with_min_keys(5, 1),
            Err(BTreeError::InvalidMinKeys(_))
        ));
        assert!(matches!(
            TreeConfig::with_min_keys(5, 3),
            Err(BTreeError::InvalidMinKeys(_))
        ));
        assert!(TreeConfig::with_min_keys(5, 2).is_ok());
    }

    #[test]
    fn test_with_config_revalidates() {
        let bogus = TreeConfig {
            order: 5,
            min_keys: 0,
        };
        assert!(BTree::with_config(bogus).unwrap_err().is_config_error());

        let tree = BTree::with_config(TreeConfig::new(8).unwrap()).unwrap();
        assert_eq!(tree.order(), 8);
        assert_eq!(tree.min_keys(), 3);
        assert_eq!(tree.config().max_keys(), 7);
    }

    #[test]
    fn test_new_tree_is_empty_leaf() {
        let tree = BTree::default();
        assert!(tree.root.is_leaf());
        assert!(tree.root.keys.is_empty());
        assert_eq!(tree.len, 0);
    }
}
