use super::*;
use crate::Node;

//         1
//       /   \
//      2     3
//     / \   / \
//    4   5 6   7
fn complete_tree() -> Node<u32> {
    Node::new(1)
        .with_left(Node::new(2).with_left(Node::new(4)).with_right(Node::new(5)))
        .with_right(Node::new(3).with_left(Node::new(6)).with_right(Node::new(7)))
}
//    8
//     \
//      3
//     /
//    5
//     \
//      1
fn zigzag_tree() -> Node<u32> {
    Node::new(8).with_right(
        Node::new(3).with_left(Node::new(5).with_right(Node::new(1))),
    )
}
fn keys(nodes: Vec<&Node<u32>>) -> Vec<u32> {
    nodes.into_iter().map(|x| *x.key()).collect()
}

#[test]
fn complete_tree_orders() {
    let tree = complete_tree();
    assert_eq!(keys(pre_order(Some(&tree))), [1, 2, 4, 5, 3, 6, 7]);
    assert_eq!(keys(in_order(Some(&tree))), [4, 2, 5, 1, 6, 3, 7]);
    assert_eq!(keys(post_order(Some(&tree))), [4, 5, 2, 6, 7, 3, 1]);
    assert_eq!(keys(breadth_first_search(Some(&tree))), [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(keys(depth_first_search(Some(&tree))), [1, 2, 4, 5, 3, 6, 7]);
}

#[test]
fn trait_methods_match_free_functions() {
    let tree = complete_tree();
    assert_eq!(tree.pre_order(), pre_order(Some(&tree)));
    assert_eq!(tree.in_order(), in_order(Some(&tree)));
    assert_eq!(tree.post_order(), post_order(Some(&tree)));
    assert_eq!(tree.breadth_first_search(), breadth_first_search(Some(&tree)));
    assert_eq!(tree.depth_first_search(), depth_first_search(Some(&tree)));
}

#[test]
fn one_sided_children() {
    let tree = zigzag_tree();
    assert_eq!(keys(tree.pre_order()), [8, 3, 5, 1]);
    assert_eq!(keys(tree.in_order()), [8, 5, 1, 3]);
    assert_eq!(keys(tree.post_order()), [1, 5, 3, 8]);
    assert_eq!(keys(tree.breadth_first_search()), [8, 3, 5, 1]);
    assert_eq!(keys(tree.depth_first_search()), [8, 3, 5, 1]);
}

#[test]
fn absent_root() {
    let root: Option<&Node<u32>> = None;
    assert!(pre_order(root).is_empty());
    assert!(in_order(root).is_empty());
    assert!(post_order(root).is_empty());
    assert!(breadth_first_search(root).is_empty());
    assert!(depth_first_search(root).is_empty());
    assert_eq!(node_count(root), 0);

    let mut calls = 0;
    for_each_in_order(root, |_| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn single_node() {
    let leaf = Node::new(42_u32);
    for order in [
        leaf.pre_order(),
        leaf.in_order(),
        leaf.post_order(),
        leaf.breadth_first_search(),
        leaf.depth_first_search(),
    ]
    .iter()
    {
        assert_eq!(order.len(), 1);
        assert!(core::ptr::eq(order[0], &leaf));
    }
}

#[test]
fn yields_references_into_the_tree() {
    let tree = complete_tree();
    let root_left = tree.left().expect("node 2 exists");
    let in_order = tree.in_order();
    assert!(core::ptr::eq(in_order[1], root_left));
    assert!(core::ptr::eq(in_order[3], &tree));
}

#[test]
fn for_each_visits_in_order() {
    let tree = complete_tree();
    let mut visited = Vec::new();
    tree.for_each_in_order(|key| visited.push(*key));
    assert_eq!(visited, [4, 2, 5, 1, 6, 3, 7]);
}

#[test]
fn repeated_traversals_are_identical() {
    let tree = zigzag_tree();
    assert_eq!(tree.post_order(), tree.post_order());
    assert_eq!(tree.breadth_first_search(), tree.breadth_first_search());
}

#[test]
fn children_are_packed_left_first() {
    let tree = zigzag_tree();
    assert!(tree.children().iter().map(|x| *x.key()).eq([3].iter().copied()));
    let three = tree.right().expect("node 3 exists");
    assert!(three.children().iter().map(|x| *x.key()).eq([5].iter().copied()));
    let complete = complete_tree();
    assert!(complete.children().iter().map(|x| *x.key()).eq([2, 3].iter().copied()));
    assert!(Node::new(0_u32).children().is_empty());
}

#[test]
fn iterators_are_fused() {
    let tree = Node::new(1_u32).with_left(Node::new(2));
    let mut iter = InOrder::new(Some(&tree));
    assert_eq!(iter.next().map(Node::key), Some(&2));
    assert_eq!(iter.next().map(Node::key), Some(&1));
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());

    let mut iter = LevelOrder::new(Some(&tree));
    assert_eq!(iter.by_ref().count(), 2);
    assert!(iter.next().is_none());
}

#[test]
fn lazy_iterators_can_stop_early() {
    let tree = complete_tree();
    let first_even = PostOrder::new(Some(&tree)).find(|x| x.key() % 2 == 0);
    assert_eq!(first_even.map(Node::key), Some(&4));
    let first_leaf = LevelOrder::new(Some(&tree)).find(|x| x.is_leaf());
    assert_eq!(first_leaf.map(Node::key), Some(&4));
}

#[test]
fn deep_degenerate_tree() {
    const DEPTH: u32 = 100_000;
    let mut tree = Node::new(0_u32);
    for key in 1..DEPTH {
        tree = Node::new(key).with_left(tree);
    }
    assert_eq!(node_count(Some(&tree)), DEPTH as usize);
    assert_eq!(tree.in_order().first().map(|x| *x.key()), Some(0));
    assert_eq!(tree.post_order().last().map(|x| *x.key()), Some(DEPTH - 1));
    assert_eq!(tree.breadth_first_search().len(), DEPTH as usize);
}

#[test]
fn node_count_matches_sequence_lengths() {
    let tree = complete_tree();
    assert_eq!(node_count(Some(&tree)), 7);
    assert_eq!(node_count(tree.right()), 3);
}
