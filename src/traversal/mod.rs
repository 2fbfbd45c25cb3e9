//! Everything related to traversing binary trees.
//!
//! The module is home to the following items:
//! - [`BinaryNode`] — the *capability trait for binary tree nodes*: a key and up to two children
//! - Lazy traversal iterators: [`PreOrder`], [`InOrder`], [`PostOrder`] and [`LevelOrder`]
//! - Sequence-returning traversals: [`pre_order`], [`in_order`], [`post_order`], [`depth_first_search`] and [`breadth_first_search`], as well as the callback-based [`for_each_in_order`]
//!
//! Every traversal takes the root as an `Option`, since an absent root is just an empty tree: all of them produce an empty sequence for it. Traversals are pure functions of the structure they walk — repeated calls produce fresh and identical sequences.
//!
//! The iterators use an explicit stack or queue rather than recursion, so their memory usage is bounded by the height (for the depth-first orders) or the width (for level order) of the tree and deep trees cannot overflow the call stack.
//!
//! [`BinaryNode`]: trait.BinaryNode.html " "
//! [`PreOrder`]: struct.PreOrder.html " "
//! [`InOrder`]: struct.InOrder.html " "
//! [`PostOrder`]: struct.PostOrder.html " "
//! [`LevelOrder`]: struct.LevelOrder.html " "
//! [`pre_order`]: fn.pre_order.html " "
//! [`in_order`]: fn.in_order.html " "
//! [`post_order`]: fn.post_order.html " "
//! [`depth_first_search`]: fn.depth_first_search.html " "
//! [`breadth_first_search`]: fn.breadth_first_search.html " "
//! [`for_each_in_order`]: fn.for_each_in_order.html " "

use core::{
    iter::FusedIterator,
    fmt::{self, Formatter, Debug},
};
use alloc::{vec::Vec, collections::VecDeque};
use arrayvec::ArrayVec;

#[cfg(test)]
mod tests;

/// Nodes of binary trees which can be traversed.
///
/// Implementors only need to provide access to the key and the children; all traversals are provided on top of that. Traversals assume that the structure is a tree, i.e. that no node is reachable by more than one path. Implementations which allow sharing or cycles break that assumption, and walking such a structure will either visit nodes repeatedly or never finish.
pub trait BinaryNode: Sized {
    /// The data payload of the node.
    type Key;

    /// Returns a reference to the key of the node.
    fn key(&self) -> &Self::Key;
    /// Returns the left child, or `None` if the node does not have one.
    fn left(&self) -> Option<&Self>;
    /// Returns the right child, or `None` if the node does not have one.
    fn right(&self) -> Option<&Self>;

    /// Returns the children which are present, the left one first.
    #[inline]
    fn children(&self) -> ArrayVec<[&Self; 2]> {
        let mut children = ArrayVec::new();
        if let Some(left) = self.left() {
            children.push(left);
        }
        if let Some(right) = self.right() {
            children.push(right);
        }
        children
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    fn is_leaf(&self) -> bool {
        self.left().is_none() && self.right().is_none()
    }

    /// Collects the subtree in pre-order. See [`pre_order`].
    ///
    /// [`pre_order`]: fn.pre_order.html " "
    #[inline(always)]
    fn pre_order(&self) -> Vec<&Self> {
        pre_order(Some(self))
    }
    /// Collects the subtree in in-order. See [`in_order`].
    ///
    /// [`in_order`]: fn.in_order.html " "
    #[inline(always)]
    fn in_order(&self) -> Vec<&Self> {
        in_order(Some(self))
    }
    /// Collects the subtree in post-order. See [`post_order`].
    ///
    /// [`post_order`]: fn.post_order.html " "
    #[inline(always)]
    fn post_order(&self) -> Vec<&Self> {
        post_order(Some(self))
    }
    /// Collects the subtree in depth-first order. See [`depth_first_search`].
    ///
    /// [`depth_first_search`]: fn.depth_first_search.html " "
    #[inline(always)]
    fn depth_first_search(&self) -> Vec<&Self> {
        depth_first_search(Some(self))
    }
    /// Collects the subtree in level order. See [`breadth_first_search`].
    ///
    /// [`breadth_first_search`]: fn.breadth_first_search.html " "
    #[inline(always)]
    fn breadth_first_search(&self) -> Vec<&Self> {
        breadth_first_search(Some(self))
    }
    /// Calls the closure on every key of the subtree in in-order. See [`for_each_in_order`].
    ///
    /// [`for_each_in_order`]: fn.for_each_in_order.html " "
    #[inline(always)]
    fn for_each_in_order<F>(&self, visit: F)
    where F: FnMut(&Self::Key),
    {
        for_each_in_order(Some(self), visit)
    }
}

/// Collects the tree in *pre-order*: every node comes before its left subtree, which comes before its right subtree.
///
/// Returns an empty sequence if `root` is `None`.
pub fn pre_order<N: BinaryNode>(root: Option<&N>) -> Vec<&N> {
    let result: Vec<_> = PreOrder::new(root).collect();
    log::trace!("pre-order traversal visited {} nodes", result.len());
    result
}
/// Collects the tree in *in-order*: every node comes after its left subtree and before its right subtree.
///
/// For a tree shaped like a binary search tree, this produces the nodes sorted by key; the traversal itself imposes no ordering constraint on the keys.
///
/// Returns an empty sequence if `root` is `None`.
pub fn in_order<N: BinaryNode>(root: Option<&N>) -> Vec<&N> {
    let result: Vec<_> = InOrder::new(root).collect();
    log::trace!("in-order traversal visited {} nodes", result.len());
    result
}
/// Collects the tree in *post-order*: every node comes after both of its subtrees, the left one first.
///
/// Returns an empty sequence if `root` is `None`.
pub fn post_order<N: BinaryNode>(root: Option<&N>) -> Vec<&N> {
    let result: Vec<_> = PostOrder::new(root).collect();
    log::trace!("post-order traversal visited {} nodes", result.len());
    result
}
/// Collects the tree in *level order*: nodes closer to the root come first, and nodes of the same depth are ordered left to right.
///
/// Returns an empty sequence if `root` is `None`.
pub fn breadth_first_search<N: BinaryNode>(root: Option<&N>) -> Vec<&N> {
    let result: Vec<_> = LevelOrder::new(root).collect();
    log::trace!("breadth-first search visited {} nodes", result.len());
    result
}
/// Collects the tree in *depth-first* order, which fully explores the left subtree of a node before backtracking to explore the right one.
///
/// The resulting sequence is identical to the one produced by [`pre_order`], but this function walks the tree by recursion instead of using the explicit stack of [`PreOrder`]. Recursion depth equals the height of the tree, so prefer `pre_order` for trees of unbounded height.
///
/// Returns an empty sequence if `root` is `None`.
///
/// [`pre_order`]: fn.pre_order.html " "
/// [`PreOrder`]: struct.PreOrder.html " "
pub fn depth_first_search<N: BinaryNode>(root: Option<&N>) -> Vec<&N> {
    fn visit<'a, N: BinaryNode>(node: &'a N, result: &mut Vec<&'a N>) {
        result.push(node);
        if let Some(left) = node.left() {
            visit(left, result);
        }
        if let Some(right) = node.right() {
            visit(right, result);
        }
    }
    let mut result = Vec::new();
    if let Some(root) = root {
        visit(root, &mut result);
    }
    log::trace!("depth-first search visited {} nodes", result.len());
    result
}
/// Calls `visit` on the key of every node of the tree in in-order.
///
/// The calls happen synchronously and strictly in order, one per node; nothing is buffered. Does nothing if `root` is `None`.
///
/// # Example
/// ```rust
/// # use bough::{Node, traversal::for_each_in_order};
/// let tree = Node::new('b').with_left(Node::new('a')).with_right(Node::new('c'));
/// let mut keys = String::new();
/// for_each_in_order(Some(&tree), |key| keys.push(*key));
/// assert_eq!(keys, "abc");
/// ```
pub fn for_each_in_order<N, F>(root: Option<&N>, mut visit: F)
where
    N: BinaryNode,
    F: FnMut(&N::Key),
{
    for node in InOrder::new(root) {
        visit(node.key());
    }
}
/// Returns the number of nodes in the tree, or zero if `root` is `None`.
#[inline]
pub fn node_count<N: BinaryNode>(root: Option<&N>) -> usize {
    PreOrder::new(root).count()
}

/// A lazy pre-order iterator over a tree. See [`pre_order`] for the order.
///
/// [`pre_order`]: fn.pre_order.html " "
pub struct PreOrder<'a, N: BinaryNode> {
    stack: Vec<&'a N>,
}
impl<'a, N: BinaryNode> PreOrder<'a, N> {
    /// Creates an iterator starting at the specified root. Yields nothing if `root` is `None`.
    #[inline]
    pub fn new(root: Option<&'a N>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}
impl<'a, N: BinaryNode> Iterator for PreOrder<'a, N> {
    type Item = &'a N;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so that the left subtree is popped before it
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}
impl<N: BinaryNode> FusedIterator for PreOrder<'_, N> {}

/// A lazy in-order iterator over a tree. See [`in_order`] for the order.
///
/// [`in_order`]: fn.in_order.html " "
pub struct InOrder<'a, N: BinaryNode> {
    stack: Vec<&'a N>,
    // The root of the subtree whose leftmost path still has to be pushed
    descend_from: Option<&'a N>,
}
impl<'a, N: BinaryNode> InOrder<'a, N> {
    /// Creates an iterator starting at the specified root. Yields nothing if `root` is `None`.
    #[inline]
    pub fn new(root: Option<&'a N>) -> Self {
        Self {
            stack: Vec::new(),
            descend_from: root,
        }
    }
}
impl<'a, N: BinaryNode> Iterator for InOrder<'a, N> {
    type Item = &'a N;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.descend_from {
            self.stack.push(node);
            self.descend_from = node.left();
        }
        let node = self.stack.pop()?;
        self.descend_from = node.right();
        Some(node)
    }
}
impl<N: BinaryNode> FusedIterator for InOrder<'_, N> {}

/// A lazy post-order iterator over a tree. See [`post_order`] for the order.
///
/// [`post_order`]: fn.post_order.html " "
pub struct PostOrder<'a, N: BinaryNode> {
    // The flag is set once the children of the node have been pushed above it
    stack: Vec<(&'a N, bool)>,
}
impl<'a, N: BinaryNode> PostOrder<'a, N> {
    /// Creates an iterator starting at the specified root. Yields nothing if `root` is `None`.
    #[inline]
    pub fn new(root: Option<&'a N>) -> Self {
        Self {
            stack: root.into_iter().map(|x| (x, false)).collect(),
        }
    }
}
impl<'a, N: BinaryNode> Iterator for PostOrder<'a, N> {
    type Item = &'a N;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|x| (x, false)));
            self.stack.extend(node.left().map(|x| (x, false)));
        }
    }
}
impl<N: BinaryNode> FusedIterator for PostOrder<'_, N> {}

/// A lazy level-order (breadth-first) iterator over a tree. See [`breadth_first_search`] for the order.
///
/// [`breadth_first_search`]: fn.breadth_first_search.html " "
pub struct LevelOrder<'a, N: BinaryNode> {
    queue: VecDeque<&'a N>,
}
impl<'a, N: BinaryNode> LevelOrder<'a, N> {
    /// Creates an iterator starting at the specified root. Yields nothing if `root` is `None`.
    #[inline]
    pub fn new(root: Option<&'a N>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}
impl<'a, N: BinaryNode> Iterator for LevelOrder<'a, N> {
    type Item = &'a N;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node)
    }
}
impl<N: BinaryNode> FusedIterator for LevelOrder<'_, N> {}

//────────────────────────────────────────────────────┐
// Debug implementations which don't require N: Debug │
//────────────────────────────────────────────────────┘
impl<N: BinaryNode> Debug for PreOrder<'_, N> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreOrder")
            .field("pending", &self.stack.len())
            .finish()
    }
}
impl<N: BinaryNode> Debug for InOrder<'_, N> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("InOrder")
            .field("pending", &self.stack.len())
            .field("descending", &self.descend_from.is_some())
            .finish()
    }
}
impl<N: BinaryNode> Debug for PostOrder<'_, N> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostOrder")
            .field("pending", &self.stack.len())
            .finish()
    }
}
impl<N: BinaryNode> Debug for LevelOrder<'_, N> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelOrder")
            .field("pending", &self.queue.len())
            .finish()
    }
}
