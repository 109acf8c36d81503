use std::fmt::Debug;

use crate::types::{height_of, AvlNode, Link};
use crate::util;
use crate::util::InvariantError;

/// AVL tree retaining duplicate values.
///
/// Rebalancing keeps the height logarithmic in the element count, so insert
/// and remove stay `O(log n)`. Equal values are kept, not replaced; removal
/// takes out one occurrence at a time.
///
/// The "no value" sentinel is `None` at the call boundary, kept apart from
/// "value not present in the tree" (a lookup miss) and from an empty child
/// slot inside the structure.
///
/// # Example
///
/// ```
/// use avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// assert!(tree.insert(Some(3)));
/// assert!(tree.insert(Some(1)));
/// assert!(tree.insert(Some(3)));
/// assert!(!tree.insert(None));
///
/// assert_eq!(tree.size(), 3);
/// assert!(tree.contains(&3));
///
/// assert!(tree.remove(Some(&3)));
/// assert_eq!(tree.size(), 2);
/// assert!(tree.contains(&3));
/// ```
pub struct AvlTree<V> {
    root: Link<V>,
    size: usize,
}

impl<V: Ord> AvlTree<V> {
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Insert one occurrence of `value`.
    ///
    /// The `None` sentinel is rejected with `false` and no mutation. Every
    /// `Some` insert succeeds, including repeats of a resident value, which
    /// accumulate in the right subtree.
    pub fn insert(&mut self, value: Option<V>) -> bool {
        let Some(value) = value else {
            return false;
        };
        self.root = Some(util::insert(self.root.take(), value));
        self.size += 1;
        true
    }

    /// Remove the first occurrence of `value` in symmetric order.
    ///
    /// The `None` sentinel is rejected exactly as on insert. An accepted
    /// call reports `true` whether or not the value was resident; removing
    /// an absent value leaves the tree unchanged. [`size`](Self::size)
    /// still tracks the element count exactly.
    pub fn remove(&mut self, value: Option<&V>) -> bool {
        let Some(value) = value else {
            return false;
        };
        let (root, removed) = util::remove(self.root.take(), value);
        self.root = root;
        if removed {
            self.size -= 1;
        }
        true
    }

    pub fn contains(&self, value: &V) -> bool {
        util::find(&self.root, value).is_some()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Height of the whole tree. An empty tree has height -1, a single
    /// node height 0.
    pub fn height(&self) -> i32 {
        height_of(&self.root)
    }

    /// Root node, exposed for inspection and tests only. The shape is not
    /// a stable surface.
    pub fn root(&self) -> Option<&AvlNode<V>> {
        self.root.as_deref()
    }

    /// Walk the whole tree checking search ordering, balance range, and
    /// height caches.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        util::assert_avl_tree(&self.root)
    }
}

impl<V: Ord> Default for AvlTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord + Debug> AvlTree<V> {
    /// Indented rendering of the whole tree for debugging.
    pub fn print(&self) -> String {
        util::print(&self.root, "")
    }
}
