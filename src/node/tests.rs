use super::*;

#[test]
fn basic() {
    let mut tree: Node<u64> = Node::new(1987_u64);
    tree.set_left(Some(Node::new(83)));
    tree.set_right(Some(Node::new(87)));

    assert_eq!(tree.left().map(Node::key), Some(&83));
    assert_eq!(tree.right().map(Node::key), Some(&87));
    assert!(!BinaryNode::is_leaf(&tree));
}

#[test]
fn set_key_round_trip() {
    let mut tree = Node::with_children(1, Some(Node::new(2)), Some(Node::new(3)));
    let snapshot = tree.clone();

    assert_eq!(tree.set_key(10), 1);
    assert_eq!(*tree.key(), 10);
    assert_eq!(tree.left(), snapshot.left());
    assert_eq!(tree.right(), snapshot.right());

    *tree.key_mut() += 1;
    assert_eq!(*tree.key(), 11);
}

#[test]
fn replacing_children_returns_previous_subtree() {
    let mut tree = Node::new('a').with_left(Node::new('b').with_left(Node::new('c')));
    let previous = tree.set_left(Some(Node::new('d')));
    assert_eq!(previous, Some(Node::new('b').with_left(Node::new('c'))));
    assert_eq!(tree.left().map(Node::key), Some(&'d'));

    assert_eq!(tree.set_right(None), None);
    assert_eq!(tree.set_left(None), Some(Node::new('d')));
    assert!(BinaryNode::is_leaf(&tree));
}

#[test]
fn indented_pre_order() {
    //      1
    //    /   \
    //   2     3
    //    \   /
    //     4 5
    let tree = Node::new(1)
        .with_left(Node::new(2).with_right(Node::new(4)))
        .with_right(Node::new(3).with_left(Node::new(5)));
    assert_eq!(
        tree.as_indented_pre_order(0),
        "1\n  2\n    4\n  3\n    5\n",
    );
    assert_eq!(
        tree.as_indented_pre_order(2),
        "    1\n      2\n        4\n      3\n        5\n",
    );
    assert_eq!(tree.to_string(), tree.as_indented_pre_order(0));
}

#[test]
fn from_key() {
    let leaf: Node<&str> = "leaf".into();
    assert_eq!(leaf, Node::new("leaf"));
    assert!(leaf.left().is_none() && leaf.right().is_none());
}

#[test]
fn dropping_deep_tree() {
    let mut tree = Node::new(0_u32);
    for key in 1..200_000 {
        tree = Node::new(key).with_right(tree);
    }
    drop(tree);
}
