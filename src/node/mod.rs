//! The owned binary tree node.
//!
//! A [`Node`] holds a key and up to two children. The parent exclusively owns its children, so a tree is simply its root node: dropping the root drops the whole tree, and shared or cyclic structures cannot be expressed.
//!
//! # Example
//! ```rust
//! use bough::{Node, BinaryNode};
//!
//! let mut root = Node::new("Hello");
//! assert!(root.is_leaf());
//!
//! // Children are attached by direct assignment; the previously attached subtree, if any, is returned.
//! assert!(root.set_left(Some(Node::new("World"))).is_none());
//! root.set_key("Hi");
//!
//! assert_eq!(*root.key(), "Hi");
//! assert_eq!(root.left().map(Node::key), Some(&"World"));
//! assert!(root.right().is_none());
//! ```
//!
//! [`Node`]: struct.Node.html " "

use core::{
    fmt::{self, Formatter, Display},
    mem,
};
use alloc::{boxed::Box, string::String, vec::Vec, format};
use crate::traversal::BinaryNode;

#[cfg(test)]
mod tests;

/// A node of a binary tree, owning its key and its children.
///
/// Nodes are created as leaves with [`new`] and linked together with [`with_left`]/[`with_right`] while building or [`set_left`]/[`set_right`] afterwards. See the [`BinaryNode`] trait for the traversals.
///
/// [`new`]: #method.new " "
/// [`with_left`]: #method.with_left " "
/// [`with_right`]: #method.with_right " "
/// [`set_left`]: #method.set_left " "
/// [`set_right`]: #method.set_right " "
/// [`BinaryNode`]: ../traversal/trait.BinaryNode.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<E> {
    key: E,
    left: Option<Box<Node<E>>>,
    right: Option<Box<Node<E>>>,
}
impl<E> Node<E> {
    /// Creates a leaf node with the specified key.
    #[inline]
    pub const fn new(key: E) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
    /// Creates a node with the specified key and children.
    #[inline]
    pub fn with_children(key: E, left: Option<Self>, right: Option<Self>) -> Self {
        Self {
            key,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }
    /// Attaches the specified node as the left child, replacing and dropping the previous one, and returns the node back. Intended for building trees in a single expression.
    #[inline]
    pub fn with_left(mut self, left: Self) -> Self {
        self.left = Some(Box::new(left));
        self
    }
    /// Attaches the specified node as the right child, replacing and dropping the previous one, and returns the node back. Intended for building trees in a single expression.
    #[inline]
    pub fn with_right(mut self, right: Self) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// Returns a reference to the key.
    #[inline(always)]
    pub const fn key(&self) -> &E {
        &self.key
    }
    /// Returns a *mutable* reference to the key. Modifying the key never affects the structure of the tree.
    #[inline(always)]
    pub fn key_mut(&mut self) -> &mut E {
        &mut self.key
    }
    /// Replaces the key, returning the previous one.
    #[inline]
    pub fn set_key(&mut self, key: E) -> E {
        mem::replace(&mut self.key, key)
    }

    /// Returns a reference to the left child, or `None` if there is none.
    #[inline]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }
    /// Returns a reference to the right child, or `None` if there is none.
    #[inline]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
    /// Replaces the left child with the specified subtree (or detaches it if `None` is passed), returning the previously attached subtree.
    #[inline]
    pub fn set_left(&mut self, left: Option<Self>) -> Option<Self> {
        mem::replace(&mut self.left, left.map(Box::new)).map(|x| *x)
    }
    /// Replaces the right child with the specified subtree (or detaches it if `None` is passed), returning the previously attached subtree.
    #[inline]
    pub fn set_right(&mut self, right: Option<Self>) -> Option<Self> {
        mem::replace(&mut self.right, right.map(Box::new)).map(|x| *x)
    }
}
impl<E: Display> Node<E> {
    /// Renders the subtree in pre-order, one key per line, indenting every line by two spaces per level of depth on top of `indent` levels.
    ///
    /// The left subtree is rendered before the right one.
    ///
    /// # Example
    /// ```rust
    /// # use bough::Node;
    /// let tree = Node::new(1).with_left(Node::new(2)).with_right(Node::new(3));
    /// assert_eq!(tree.as_indented_pre_order(0), "1\n  2\n  3\n");
    /// ```
    pub fn as_indented_pre_order(&self, indent: usize) -> String {
        let mut output = String::new();
        let mut stack = Vec::new();
        stack.push((self, indent));
        while let Some((node, depth)) = stack.pop() {
            output.extend(core::iter::repeat(' ').take(depth * 2));
            output.push_str(&format!("{}\n", node.key));
            if let Some(right) = node.right() {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left() {
                stack.push((left, depth + 1));
            }
        }
        output
    }
}
impl<E: Display> Display for Node<E> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_indented_pre_order(0))
    }
}
impl<E> BinaryNode for Node<E> {
    type Key = E;
    #[inline(always)]
    fn key(&self) -> &E {
        &self.key
    }
    #[inline(always)]
    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }
    #[inline(always)]
    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}
impl<E> From<E> for Node<E> {
    #[inline(always)]
    fn from(key: E) -> Self {
        Self::new(key)
    }
}
impl<E> Drop for Node<E> {
    fn drop(&mut self) {
        // Descendants are unlinked iteratively so that deep trees don't overflow the stack
        let mut pending: Vec<Box<Node<E>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
