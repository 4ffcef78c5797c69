//! Core types and data structures for BTree.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the B-tree implementation.

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest order (maximum children per node) a tree can be built with.
pub const MIN_ORDER: usize = 3;

/// Order used by `BTree::new`.
pub const DEFAULT_ORDER: usize = 5;

/// Minimum occupancy that goes with `DEFAULT_ORDER`.
pub const DEFAULT_MIN_KEYS: usize = 2;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Scalar key stored by the tree.
pub type Key = i64;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// In-memory B-tree holding a set of keys.
///
/// Every node holds between `min_keys` and `order - 1` sorted keys (the root
/// may hold fewer), and every internal node holds exactly one more child than
/// it has keys. Insertion splits overflowing nodes on the way back up from
/// the leaf; deletion repairs under-occupied children by rotating a key
/// through the parent or by merging siblings.
///
/// # Examples
///
/// ```
/// use btree::BTree;
///
/// let mut tree = BTree::new();
/// tree.add(3).add(1).add(4).add(1).add(5);
///
/// assert_eq!(tree.get(1), Some(1));
/// assert_eq!(tree.get(2), None);
/// assert_eq!(tree.to_vec(), vec![1, 3, 4, 5]);
///
/// tree.delete(4);
/// assert!(!tree.contains(4));
/// assert_eq!(tree.len(), 3);
/// ```
///
/// # Performance Characteristics
///
/// - **Add**: O(M · log_M n)
/// - **Get**: O(log n)
/// - **Delete**: O(M · log_M n)
#[derive(Debug, Clone)]
pub struct BTree {
    /// Fanout and occupancy bounds shared by every node.
    pub(crate) config: TreeConfig,
    /// The root node of the tree.
    pub(crate) root: Box<Node>,
    /// Number of keys stored.
    pub(crate) len: usize,
}

/// Fanout and occupancy bounds for a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Maximum number of children per internal node.
    pub(crate) order: usize,
    /// Minimum number of keys in any non-root node.
    pub(crate) min_keys: usize,
}

/// Sorted, duplicate-free keys held by one node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct KeySequence(pub(crate) Vec<Key>);

/// Owned children of an internal node. Empty for a leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ChildSequence(pub(crate) Vec<Box<Node>>);

/// A single tree node. Leaves and internal nodes share the representation;
/// a node is a leaf exactly when it has no children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) keys: KeySequence,
    pub(crate) children: ChildSequence,
}

// ============================================================================
// ENUMS AND RESULT TYPES
// ============================================================================

/// Result of an insertion into a subtree.
#[derive(Debug)]
pub(crate) enum InsertResult {
    /// The subtree absorbed the key (or already held it) and still fits.
    NoSplit(Box<Node>),
    /// The subtree overflowed and was replaced by two halves around a
    /// promoted separator.
    Split {
        separator: Key,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// Adjacent sibling able to give up a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sibling {
    Left,
    Right,
}
