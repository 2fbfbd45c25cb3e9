//! Draws a sample tree and prints the keys in every traversal order.

use bough::{printer::print_tree, BinaryNode, Node, PrintOptions};
use std::io::{self, Write};

/// Builds the complete tree of depth 3 with keys 1 to 15 in level order:
/// ```text
///                1
///          /           \
///         2             3
///       /   \         /   \
///      4     5       6     7
///     / \   / \     / \   / \
///    8   9 10 11   12 13 14 15
/// ```
fn sample_tree() -> Node<u32> {
    fn subtree(key: u32, depth: u32) -> Node<u32> {
        if depth == 0 {
            Node::new(key)
        } else {
            Node::new(key)
                .with_left(subtree(key * 2, depth - 1))
                .with_right(subtree(key * 2 + 1, depth - 1))
        }
    }
    subtree(1, 3)
}

fn print_keys(out: &mut impl Write, label: &str, nodes: &[&Node<u32>]) -> io::Result<()> {
    writeln!(out, "\n{}:", label)?;
    for node in nodes {
        write!(out, "{} ", node.key())?;
    }
    writeln!(out)
}

fn main() -> io::Result<()> {
    let tree = sample_tree();
    print_tree(Some(&tree), &PrintOptions::default())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_keys(&mut out, "PreOrder", &tree.pre_order())?;
    print_keys(&mut out, "InOrder", &tree.in_order())?;
    print_keys(&mut out, "PostOrder", &tree.post_order())?;
    print_keys(&mut out, "BreadthFirstSearch", &tree.breadth_first_search())?;
    print_keys(&mut out, "DepthFirstSearch", &tree.depth_first_search())?;

    writeln!(out, "\nForEachInOrder:")?;
    let mut result = Ok(());
    tree.for_each_in_order(|key| {
        if result.is_ok() {
            result = write!(out, "{} ", key);
        }
    });
    result?;
    writeln!(out)
}
