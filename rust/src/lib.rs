//! In-memory B-tree key set.
//!
//! This crate provides an ordered set of scalar keys stored in a classic
//! B-tree, supporting lookup, insertion and deletion while keeping every
//! node between its minimum occupancy and the order's maximum fanout.
//!
//! Insertion descends to a leaf and splits overflowing nodes on the way back
//! up; a split that reaches the root grows the tree by one level. Deletion
//! removes keys from leaves and repairs any child that drops below minimum
//! occupancy by rotating a key from a sibling through the parent, or by
//! merging it with a sibling; a root emptied by a merge is replaced by its
//! only child.
//!
//! ```
//! use btree::BTree;
//!
//! let mut tree = BTree::with_order(5).unwrap();
//! for key in 1..=16 {
//!     tree.add(key);
//! }
//! assert!(tree.check_invariants());
//!
//! tree.delete(8).delete(9);
//! assert_eq!(tree.get(8), None);
//! assert_eq!(tree.get(10), Some(10));
//! ```

mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod node;
mod sequence;
mod tree_structure;
mod types;
mod validation;

pub use error::{BTreeError, BTreeResult, InitResult, ModifyResult};
pub use types::{BTree, Key, TreeConfig, DEFAULT_MIN_KEYS, DEFAULT_ORDER, MIN_ORDER};
