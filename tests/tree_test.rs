//! Path-addressed tree mutation and structural violation checks.

use comptree::domain::{Composite, DomainError, Node, NodePath, RenderOptions, Tree};
use comptree::util::testing;
use rstest::{fixture, rstest};

#[fixture]
fn tree() -> Tree {
    testing::init_test_setup();
    // /      Root
    // /0       File1.txt
    // /1       Subdir1
    // /1/0       File2.txt
    // /1/1       Subdir2
    // /1/1/0       File3.txt
    let mut tree = Tree::new(Node::composite("Root"));
    tree.add(&NodePath::root(), Node::leaf("File1.txt")).unwrap();
    let subdir1 = tree.add(&NodePath::root(), Node::composite("Subdir1")).unwrap();
    tree.add(&subdir1, Node::leaf("File2.txt")).unwrap();
    let subdir2 = tree.add(&subdir1, Node::composite("Subdir2")).unwrap();
    tree.add(&subdir2, Node::leaf("File3.txt")).unwrap();
    tree
}

fn path(s: &str) -> NodePath {
    s.parse().unwrap()
}

#[rstest]
fn given_built_tree_when_rendering_then_matches_outline(tree: Tree) {
    assert_eq!(
        tree.render(1, &RenderOptions::default()),
        vec![
            "-Root",
            "--File1.txt",
            "--Subdir1",
            "----File2.txt",
            "----Subdir2",
            "------File3.txt",
        ]
    );
    assert_eq!(tree.node_count(), 6);
    assert_eq!(tree.depth(), 4);
}

#[rstest]
fn given_add_when_attaching_then_returns_child_path(mut tree: Tree) {
    let added = tree.add(&path("/1/1"), Node::leaf("File4.txt")).unwrap();
    assert_eq!(added, path("/1/1/1"));
    assert_eq!(tree.get(&added).map(Node::name), Some("File4.txt"));
}

#[rstest]
fn given_leaf_parent_when_adding_then_not_a_composite(mut tree: Tree) {
    let before = tree.clone();
    let err = tree.add(&path("/0"), Node::leaf("x")).unwrap_err();
    assert_eq!(err, DomainError::NotAComposite(path("/0")));
    assert_eq!(tree, before);
}

#[rstest]
fn given_missing_parent_when_adding_then_not_found(mut tree: Tree) {
    let err = tree.add(&path("/7"), Node::leaf("x")).unwrap_err();
    assert_eq!(err, DomainError::NodeNotFound(path("/7")));
}

#[rstest]
#[case::onto_itself("/1", "/1")]
#[case::onto_child("/1", "/1/1")]
#[case::onto_grandchild("/1", "/1/1/0")]
fn given_move_under_own_subtree_when_moving_then_cycle_detected_and_unchanged(
    mut tree: Tree,
    #[case] from: &str,
    #[case] to: &str,
) {
    let before = tree.clone();
    let err = tree.move_node(&path(from), &path(to)).unwrap_err();
    match err {
        // a leaf target is rejected before the cycle check
        DomainError::NotAComposite(p) => assert_eq!(p, path(to)),
        DomainError::CycleDetected { from: f, to: t } => {
            assert_eq!(f, path(from));
            assert_eq!(t, path(to));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(tree, before);
}

#[rstest]
fn given_composite_target_inside_subtree_when_moving_then_cycle_detected(mut tree: Tree) {
    let before = tree.clone();
    let err = tree.move_node(&path("/1"), &path("/1/1")).unwrap_err();
    assert!(matches!(err, DomainError::CycleDetected { .. }));
    assert_eq!(tree, before);
}

#[rstest]
fn given_root_when_moving_or_removing_then_rejected(mut tree: Tree) {
    assert_eq!(
        tree.move_node(&NodePath::root(), &path("/1")).unwrap_err(),
        DomainError::RootRemoval
    );
    assert_eq!(tree.remove(&NodePath::root()).unwrap_err(), DomainError::RootRemoval);
}

#[rstest]
fn given_valid_move_when_moving_then_subtree_reattached(mut tree: Tree) {
    // Subdir2 up to the root, after File1.txt and Subdir1
    let moved = tree.move_node(&path("/1/1"), &NodePath::root()).unwrap();
    assert_eq!(moved, path("/2"));
    assert_eq!(
        tree.render(0, &RenderOptions::default()),
        vec!["Root", "--File1.txt", "--Subdir1", "----File2.txt", "--Subdir2", "----File3.txt"]
    );
}

#[rstest]
fn given_earlier_sibling_when_moving_into_later_sibling_then_target_index_shifts(mut tree: Tree) {
    let moved = tree.move_node(&path("/0"), &path("/1/1")).unwrap();
    assert_eq!(moved, path("/0/1/1"));
    assert_eq!(tree.get(&moved).map(Node::name), Some("File1.txt"));
    assert_eq!(tree.node_count(), 6);
}

#[rstest]
fn given_path_when_removing_then_subtree_detached(mut tree: Tree) {
    let removed = tree.remove(&path("/1")).unwrap();
    assert_eq!(removed.node_count(), 4);
    assert_eq!(tree.node_count(), 2);
    assert!(tree.get(&path("/1")).is_none());
    assert_eq!(
        tree.remove(&path("/3")).unwrap_err(),
        DomainError::NodeNotFound(path("/3"))
    );
}

#[rstest]
fn given_owned_child_when_added_to_composite_then_moved_in() {
    let mut parent = Composite::new("p");
    let child = Node::leaf("c");
    parent.add(child);
    // `child` has been moved: it now has exactly one parent
    assert_eq!(parent.children().len(), 1);
    assert_eq!(Tree::from(Node::from(parent)).into_root().node_count(), 2);
}
