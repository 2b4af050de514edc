//! Rendering scenarios checked against known-good drawings.

use rstest::rstest;

use treevis::domain::{BinaryTree, Forest, Style};
use treevis::util::testing::{init_test_setup, render_plain, search_tree};
use treevis::{draw_to, render_lines};

fn with_right_child(value: i64, child: i64) -> BinaryTree<i64> {
    let mut tree = BinaryTree::with_root(value);
    let root = tree.root().unwrap();
    tree.set_right(root, child).unwrap();
    tree
}

// ============================================================
// Single tree shapes
// ============================================================

#[test]
fn given_single_node_when_rendered_then_value_line_and_empty_edge_line() {
    init_test_setup();
    let tree = BinaryTree::with_root(5);
    assert_eq!(render_plain(&[&tree]), vec!["  5", ""]);
}

#[test]
fn given_left_child_when_rendered_then_slash_under_root() {
    init_test_setup();
    let tree = search_tree(&[5, 3]);
    assert_eq!(render_plain(&[&tree]), vec!["    5", "   /", "  3", ""]);
}

#[test]
fn given_right_child_when_rendered_then_backslash_under_root() {
    init_test_setup();
    let tree = search_tree(&[5, 7]);
    assert_eq!(render_plain(&[&tree]), vec!["  5", "   \\", "    7", ""]);
}

#[test]
fn given_two_children_when_rendered_then_edges_are_symmetric() {
    init_test_setup();
    let tree = search_tree(&[5, 3, 7]);
    assert_eq!(
        render_plain(&[&tree]),
        vec!["    5", "   / \\", "  3   7", ""]
    );
}

#[rstest]
#[case::odd_width(100, vec!["  100", "   \\", "    7", ""])]
#[case::even_width(10, vec!["  10", "    \\", "     7", ""])]
fn given_multi_digit_root_when_right_child_then_edge_follows_width_parity(
    #[case] value: i64,
    #[case] expected: Vec<&str>,
) {
    init_test_setup();
    let tree = with_right_child(value, 7);
    assert_eq!(render_plain(&[&tree]), expected);
}

#[test]
fn given_full_depth_three_tree_when_rendered_then_root_extends_to_edges() {
    init_test_setup();
    let tree = search_tree(&[5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(
        render_plain(&[&tree]),
        vec![
            "      __5_",
            "     /    \\",
            "    3      8",
            "   / \\    / \\",
            "  1   4  7   9",
            "",
        ]
    );
}

#[test]
fn given_full_depth_four_tree_when_rendered_then_subtrees_never_collide() {
    init_test_setup();
    let tree = search_tree(&[50, 20, 80, 10, 30, 70, 90, 5, 15, 25, 35, 65, 75, 85, 95]);
    assert_eq!(
        render_plain(&[&tree]),
        vec![
            "           ________50________",
            "          /                  \\",
            "      ___20___            ___80___",
            "     /        \\          /        \\",
            "    10       _30       _70       _90",
            "   /  \\     /   \\     /   \\     /   \\",
            "  5   15   25   35   65   75   85   95",
            "",
        ]
    );
}

#[test]
fn given_right_skewed_tree_when_rendered_then_staircase() {
    init_test_setup();
    let tree = search_tree(&[1, 2, 3]);
    assert_eq!(
        render_plain(&[&tree]),
        vec!["  1", "   \\", "    2", "     \\", "      3", ""]
    );
}

#[test]
fn given_mixed_widths_when_rendered_then_wide_values_get_extensions() {
    init_test_setup();
    let tree = search_tree(&[1000, 5, 20000, 3, 7]);
    assert_eq!(
        render_plain(&[&tree]),
        vec![
            "      _1000",
            "     /     \\",
            "    5     20000",
            "   / \\",
            "  3   7",
            "",
        ]
    );
}

// ============================================================
// Forests
// ============================================================

#[test]
fn given_two_leaves_when_rendered_then_share_one_line_pair() {
    init_test_setup();
    let a = BinaryTree::with_root(1);
    let b = BinaryTree::with_root(22);
    assert_eq!(render_plain(&[&a, &b]), vec!["  1  22", ""]);
}

#[test]
fn given_forest_of_different_depths_when_rendered_then_shallow_trees_stop_early() {
    init_test_setup();
    let a = search_tree(&[5, 3, 8]);
    let b = search_tree(&[100, 50, 150, 25]);
    let c = BinaryTree::with_root(7);
    assert_eq!(
        render_plain(&[&a, &b, &c]),
        vec![
            "    5         _100    7",
            "   / \\       /   \\",
            "  3   8    _50   150",
            "          /",
            "         25",
            "",
        ]
    );
}

#[test]
fn given_empty_tree_in_forest_when_drawn_then_skipped() {
    init_test_setup();
    let empty: BinaryTree<i64> = BinaryTree::new();
    let leaf = BinaryTree::with_root(9);
    let mut out = Vec::new();

    draw_to(&mut out, [empty.root_ref(), leaf.root_ref()], Style::Plain).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "  9\n\n");
}

#[test]
fn given_only_empty_trees_when_drawn_then_no_output() {
    let empty: BinaryTree<i64> = BinaryTree::new();
    let mut out = Vec::new();
    draw_to(&mut out, [empty.root_ref()], Style::Plain).unwrap();
    assert!(out.is_empty());
}

// ============================================================
// Colors
// ============================================================

#[test]
fn given_colored_and_invalid_colored_nodes_when_rendered_then_invalid_falls_back() {
    init_test_setup();
    let mut tree = search_tree(&[5, 3]);
    let root = tree.root().unwrap();
    let child = tree.get_node(root).unwrap().left.unwrap();
    tree.set_color(root, Some(300)).unwrap();
    tree.set_color(child, Some(34)).unwrap();

    let forest = Forest::build([tree.root_ref()]).unwrap();
    let lines = render_lines(&forest, Style::Colored);

    assert_eq!(lines[0], "    5");
    assert_eq!(lines[2], "  \x1b[38;5;34m3\x1b[0;0m");
}
