//! Outline rendering properties over a handful of tree shapes.

use comptree::domain::{Composite, Node, RenderOptions};
use comptree::util::testing;
use rstest::{fixture, rstest};

fn file_system() -> Node {
    let mut subdir2 = Composite::new("Subdir2");
    subdir2.add(Node::leaf("File3.txt"));
    let mut subdir1 = Composite::new("Subdir1");
    subdir1.add(Node::leaf("File2.txt"));
    subdir1.add(subdir2.into());
    let mut root = Composite::new("Root");
    root.add(Node::leaf("File1.txt"));
    root.add(subdir1.into());
    root.into()
}

fn wide() -> Node {
    Composite::with_children("wide", (0..10).map(|i| Node::leaf(format!("leaf{}", i)))).into()
}

fn chain(levels: usize) -> Node {
    (0..levels).fold(Node::leaf("bottom"), |child, i| {
        Composite::with_children(format!("level{}", levels - i), [child]).into()
    })
}

fn mixed() -> Node {
    Composite::with_children(
        "mixed",
        [
            Node::composite("empty"),
            Composite::with_children("one", [Node::leaf("x")]).into(),
            Node::leaf("y"),
            Composite::with_children("two", [Node::composite("empty2"), Node::leaf("z")]).into(),
        ],
    )
    .into()
}

#[fixture]
fn setup() {
    testing::init_test_setup();
}

fn indent_of(line: &str, marker: char) -> usize {
    line.chars().take_while(|&c| c == marker).count()
}

#[rstest]
#[case::file_system(file_system(), 6)]
#[case::wide(wide(), 11)]
#[case::chain(chain(5), 6)]
#[case::mixed(mixed(), 8)]
#[case::single_leaf(Node::leaf("alone"), 1)]
fn given_tree_when_rendering_then_one_line_per_node(
    #[from(setup)] _setup: (),
    #[case] tree: Node,
    #[case] expected: usize,
) {
    assert_eq!(tree.node_count(), expected);
    assert_eq!(tree.render(1).len(), expected);
}

#[rstest]
#[case::file_system(file_system())]
#[case::wide(wide())]
#[case::chain(chain(4))]
#[case::mixed(mixed())]
fn given_tree_when_rendering_then_lines_follow_preorder_with_fixed_step(
    #[from(setup)] _setup: (),
    #[case] tree: Node,
    #[values(0, 1, 3)] start: usize,
    #[values(1, 2, 4)] step: usize,
) {
    let opts = RenderOptions { marker: '-', step };
    let lines = tree.render_with(start, &opts);

    let visited: Vec<_> = tree.iter().collect();
    assert_eq!(lines.len(), visited.len());
    for (line, (level, node)) in lines.iter().zip(visited) {
        assert_eq!(indent_of(line, '-'), start + level * step, "line {:?}", line);
        assert!(line.ends_with(node.name()));
    }
}

#[rstest]
fn given_composite_when_rendering_then_own_line_precedes_descendants(#[from(setup)] _setup: ()) {
    let tree = file_system();
    let lines = tree.render(0);
    let pos = |name: &str| lines.iter().position(|l| l.trim_start_matches('-') == name).unwrap();

    assert!(pos("Subdir1") < pos("File2.txt"));
    assert!(pos("Subdir1") < pos("Subdir2"));
    assert!(pos("Subdir2") < pos("File3.txt"));
    // siblings keep insertion order
    assert!(pos("File1.txt") < pos("Subdir1"));
    assert!(pos("File2.txt") < pos("Subdir2"));
}

#[rstest]
fn given_empty_composite_when_rendering_then_single_line(#[from(setup)] _setup: ()) {
    assert_eq!(Node::composite("empty").render(2), vec!["--empty"]);
}

#[rstest]
fn given_file_system_example_when_rendering_from_depth_one_then_exact_outline(#[from(setup)] _setup: ()) {
    assert_eq!(
        file_system().render(1),
        vec![
            "-Root",
            "--File1.txt",
            "--Subdir1",
            "----File2.txt",
            "----Subdir2",
            "------File3.txt",
        ]
    );
}

#[rstest]
fn given_duplicate_names_when_rendering_then_no_dedup(#[from(setup)] _setup: ()) {
    let tree: Node = Composite::with_children("r", [Node::leaf("a"), Node::leaf("a")]).into();
    assert_eq!(tree.render(0), vec!["r", "--a", "--a"]);
}

#[rstest]
fn given_very_deep_chain_when_rendering_then_completes_without_recursion(#[from(setup)] _setup: ()) {
    let levels = 200_000;
    let tree = chain(levels);
    // step 0 keeps every indent empty so the outline stays small
    let opts = RenderOptions { marker: '-', step: 0 };

    let lines = tree.render_with(0, &opts);

    assert_eq!(lines.len(), levels + 1);
    assert_eq!(tree.node_count(), levels + 1);
    assert_eq!(tree.depth(), levels + 1);
    assert_eq!(lines.first().map(String::as_str), Some("level1"));
    assert_eq!(lines.last().map(String::as_str), Some("bottom"));
    // dropping `tree` here must not recurse per level either
}
