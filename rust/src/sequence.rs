//! Key and child sequences held by a node.
//!
//! Both sequences grow and shrink by exactly the elements a caller inserts
//! or removes. Neither checks ordering on insert: callers locate the slot
//! with `KeySequence::find` first.

use crate::types::{ChildSequence, Key, KeySequence, Node, Sibling};
use std::ops::{Index, IndexMut};

// ============================================================================
// KEY SEQUENCE
// ============================================================================

impl KeySequence {
    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }

    /// Binary search for the first slot holding a key `>= key`.
    ///
    /// Returns that index and whether the slot holds `key` itself. The index
    /// doubles as the child position whose subtree would contain `key`.
    pub(crate) fn find(&self, key: Key) -> (usize, bool) {
        match self.0.binary_search(&key) {
            Ok(index) => (index, true),
            Err(index) => (index, false),
        }
    }

    /// Store `key` at `index`, shifting later keys right.
    pub(crate) fn insert_at(&mut self, index: usize, key: Key) {
        self.0.insert(index, key);
    }

    /// Remove and return the key at `index`, shifting later keys left.
    pub(crate) fn remove_at(&mut self, index: usize) -> Key {
        self.0.remove(index)
    }

    /// Overwrite the key at `index`, returning the previous one.
    pub(crate) fn replace(&mut self, index: usize, key: Key) -> Key {
        std::mem::replace(&mut self.0[index], key)
    }

    pub(crate) fn get(&self, index: usize) -> Option<Key> {
        self.0.get(index).copied()
    }

    pub(crate) fn first(&self) -> Option<Key> {
        self.0.first().copied()
    }

    pub(crate) fn last(&self) -> Option<Key> {
        self.0.last().copied()
    }

    pub(crate) fn pop_first(&mut self) -> Option<Key> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.remove(0))
        }
    }

    pub(crate) fn pop_last(&mut self) -> Option<Key> {
        self.0.pop()
    }

    pub(crate) fn push(&mut self, key: Key) {
        self.0.push(key);
    }

    pub(crate) fn push_front(&mut self, key: Key) {
        self.0.insert(0, key);
    }

    /// Move every key of `other` onto the end of this sequence.
    pub(crate) fn append(&mut self, other: &mut KeySequence) {
        self.0.append(&mut other.0);
    }

    /// Consume the sequence around its middle key.
    ///
    /// The middle is `len / 2`, so for an even length the left half is the
    /// larger one. Returns `None` for an empty sequence.
    pub(crate) fn split_at_middle(mut self) -> Option<(KeySequence, Key, KeySequence)> {
        if self.0.is_empty() {
            return None;
        }
        let middle = self.0.len() / 2;
        let right = self.0.split_off(middle + 1);
        let promoted = self.0.pop()?;
        Some((self, promoted, KeySequence(right)))
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn as_slice(&self) -> &[Key] {
        &self.0
    }
}

impl From<Vec<Key>> for KeySequence {
    fn from(keys: Vec<Key>) -> Self {
        Self(keys)
    }
}

// ============================================================================
// CHILD SEQUENCE
// ============================================================================

impl ChildSequence {
    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }

    /// Store a freshly split pair at `index` and `index + 1`.
    ///
    /// The handle of the node that split must already have been taken out of
    /// the sequence; the two halves take its place.
    pub(crate) fn insert_pair(&mut self, index: usize, left: Box<Node>, right: Box<Node>) {
        self.0.insert(index, right);
        self.0.insert(index, left);
    }

    /// Which adjacent sibling of the child at `index` can spare a key.
    ///
    /// A sibling qualifies when it holds more than `min_keys` keys. The left
    /// sibling wins when both qualify; `None` means the child must merge.
    pub(crate) fn can_borrow(&self, index: usize, min_keys: usize) -> Option<Sibling> {
        let spare = |i: usize| self.0.get(i).is_some_and(|node| node.keys.len() > min_keys);
        if index > 0 && spare(index - 1) {
            Some(Sibling::Left)
        } else if spare(index + 1) {
            Some(Sibling::Right)
        } else {
            None
        }
    }

    /// Take ownership of the child at `index`.
    pub(crate) fn take(&mut self, index: usize) -> Box<Node> {
        self.0.remove(index)
    }

    /// Hand a child back at `index`.
    pub(crate) fn insert(&mut self, index: usize, child: Box<Node>) {
        self.0.insert(index, child);
    }

    /// Mutable access to the children at `index` and `index + 1`.
    pub(crate) fn pair_mut(&mut self, index: usize) -> Option<(&mut Node, &mut Node)> {
        if index + 1 >= self.0.len() {
            return None;
        }
        let (left, right) = self.0.split_at_mut(index + 1);
        Some((&mut left[index], &mut right[0]))
    }

    pub(crate) fn pop_first(&mut self) -> Option<Box<Node>> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.remove(0))
        }
    }

    pub(crate) fn pop_last(&mut self) -> Option<Box<Node>> {
        self.0.pop()
    }

    pub(crate) fn push(&mut self, child: Box<Node>) {
        self.0.push(child);
    }

    pub(crate) fn push_front(&mut self, child: Box<Node>) {
        self.0.insert(0, child);
    }

    pub(crate) fn append(&mut self, other: &mut ChildSequence) {
        self.0.append(&mut other.0);
    }

    /// Split off the children from `at` onwards.
    pub(crate) fn split_off(&mut self, at: usize) -> ChildSequence {
        ChildSequence(self.0.split_off(at))
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Node> {
        self.0.get(index).map(Box::as_ref)
    }

    pub(crate) fn first(&self) -> Option<&Node> {
        self.get(0)
    }

    pub(crate) fn last(&self) -> Option<&Node> {
        self.0.last().map(Box::as_ref)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Node> {
        self.0.iter().map(Box::as_ref)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Node>> for ChildSequence {
    fn from(children: Vec<Node>) -> Self {
        Self(children.into_iter().map(Box::new).collect())
    }
}

impl Index<usize> for ChildSequence {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        &self.0[index]
    }
}

impl IndexMut<usize> for ChildSequence {
    fn index_mut(&mut self, index: usize) -> &mut Node {
        &mut self.0[index]
    }
}
