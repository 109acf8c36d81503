//! Self-balancing AVL search tree with duplicate retention.
//!
//! Every node caches the height of its subtree; after each insert or remove
//! the unwind path refreshes those caches and applies one of the four
//! rotation cases (single left, single right, left-right, right-left)
//! wherever a balance factor leaves {-1, 0, 1}. Values that compare equal
//! are kept rather than replaced: ties route into the right subtree, so
//! repeats accumulate in a right-leaning chain and removal takes them out
//! one occurrence at a time.
//!
//! Instead of parent pointers, all links are owned (`Option<Box<AvlNode>>`):
//! each recursive insert/remove step takes ownership of a subtree and hands
//! back the (possibly rotated) replacement, which the caller re-links as its
//! child.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`AvlNode`], the [`Link`] alias, height helpers |
//! [`util`] | rotations, rebalancing, `insert` / `remove` / `find`, validation |
//! [`tree`] | [`AvlTree`], the owning container |

pub mod tree;
pub mod types;
pub mod util;

pub use tree::AvlTree;
pub use types::{height_of, AvlNode, Link};
pub use util::{
    assert_avl_tree, find, insert, print, rebalance, remove, rotate_left, rotate_left_right,
    rotate_right, rotate_right_left, InvariantError,
};
