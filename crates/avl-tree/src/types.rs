/// An owned, possibly absent subtree.
///
/// Every link in the tree is exclusively owned: replacing a link drops the
/// old subtree, and recursive operations hand subtrees back to the caller
/// by value.
pub type Link<V> = Option<Box<AvlNode<V>>>;

/// Tree node holding one value, a cached subtree height, and its subtrees.
#[derive(Clone, Debug)]
pub struct AvlNode<V> {
    pub value: V,
    /// Cached height of the subtree rooted here. A leaf has height 0.
    pub height: i32,
    pub left: Link<V>,
    pub right: Link<V>,
}

impl<V> AvlNode<V> {
    /// New leaf: height 0, no children.
    pub fn new(value: V) -> Self {
        Self {
            value,
            height: 0,
            left: None,
            right: None,
        }
    }

    pub fn left_height(&self) -> i32 {
        height_of(&self.left)
    }

    pub fn right_height(&self) -> i32 {
        height_of(&self.right)
    }

    /// Recompute the cached height from the children's cached heights.
    ///
    /// Both children must already carry correct heights; after a rotation
    /// the lower node has to be updated before its new parent.
    pub fn update_height(&mut self) {
        self.height = 1 + self.left_height().max(self.right_height());
    }

    /// Balance factor, `height(right) - height(left)`.
    pub fn balance_factor(&self) -> i32 {
        self.right_height() - self.left_height()
    }
}

/// Height of a possibly absent subtree. An empty slot has height -1.
#[inline]
pub fn height_of<V>(link: &Link<V>) -> i32 {
    match link {
        None => -1,
        Some(node) => node.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_link_has_height_minus_one() {
        assert_eq!(height_of::<i32>(&None), -1);
    }

    #[test]
    fn new_node_is_a_leaf() {
        let node = AvlNode::new(7);
        assert_eq!(node.height, 0);
        assert!(node.left.is_none());
        assert!(node.right.is_none());
        assert_eq!(node.balance_factor(), 0);
    }

    #[test]
    fn update_height_follows_taller_child() {
        let mut node = AvlNode::new(10);
        node.right = Some(Box::new(AvlNode::new(20)));
        node.update_height();
        assert_eq!(node.height, 1);
        assert_eq!(node.balance_factor(), 1);

        node.left = Some(Box::new(AvlNode::new(5)));
        node.update_height();
        assert_eq!(node.height, 1);
        assert_eq!(node.balance_factor(), 0);
    }
}
