//! A binary tree node and the ubiquitous traversals over it.
//!
//! # Overview
//! Bough is built around two things: the [`Node`] type, an owned binary tree node holding a key and up to two exclusively owned children, and the traversal engine in the [`traversal`] module, which walks anything implementing the [`BinaryNode`] capability trait and produces the nodes in pre-order, in-order, post-order, depth-first or breadth-first (level) order.
//!
//! Traversals never mutate the tree and keep no state between calls: every call walks the structure anew and returns a fresh sequence. Each ordering is also available as a lazy iterator, which is what the sequence-returning functions collect from.
//!
//! ```rust
//! use bough::{Node, BinaryNode};
//!
//! //         1
//! //       /   \
//! //      2     3
//! //     / \   / \
//! //    4   5 6   7
//! let tree = Node::new(1)
//!     .with_left(Node::new(2).with_left(Node::new(4)).with_right(Node::new(5)))
//!     .with_right(Node::new(3).with_left(Node::new(6)).with_right(Node::new(7)));
//!
//! let keys = |nodes: Vec<&Node<i32>>| nodes.into_iter().map(|n| *n.key()).collect::<Vec<_>>();
//! assert_eq!(keys(tree.pre_order()), [1, 2, 4, 5, 3, 6, 7]);
//! assert_eq!(keys(tree.in_order()), [4, 2, 5, 1, 6, 3, 7]);
//! assert_eq!(keys(tree.post_order()), [4, 5, 2, 6, 7, 3, 1]);
//! assert_eq!(keys(tree.breadth_first_search()), [1, 2, 3, 4, 5, 6, 7]);
//! ```
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate.
//! - `alloc` (**enabled by default**) — required for the heap-allocated nodes; the crate has no allocator-free mode and this flag only exists for symmetry with `std`.
//! - `visualizer` (**enabled by default**) — adds the [`printer`] module, which draws trees on the terminal using `termcolor`. Implies `std`.
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//! - `termcolor` (*optional*) — `^1.4`
//!
//! [`Node`]: node/struct.Node.html " "
//! [`BinaryNode`]: traversal/trait.BinaryNode.html " "
//! [`traversal`]: traversal/index.html " "
//! [`printer`]: printer/index.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(not(feature = "alloc"))]
compile_error!("the alloc feature is required, as nodes own their children through heap allocations");

extern crate alloc;

pub mod node;
pub use node::Node;

pub mod traversal;
pub use traversal::{BinaryNode, PreOrder, InOrder, PostOrder, LevelOrder};

#[cfg(feature = "visualizer")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "visualizer")))]
pub mod printer;
#[cfg(feature = "visualizer")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "visualizer")))]
pub use printer::PrintOptions;

/// A prelude for using Bough, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::node::Node as BinaryTreeNode;
    #[doc(no_inline)]
    pub use crate::traversal::BinaryNode;
    #[cfg(feature = "visualizer")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "visualizer")))]
    #[doc(no_inline)]
    pub use crate::printer::{PrintOptions as TreePrintOptions, print_tree};
}
