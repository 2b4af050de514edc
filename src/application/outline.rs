//! Indented outline of a binary tree, for trees too wide to draw.

use termtree::Tree;

use crate::domain::DrawableNode;

/// Builds a `termtree` outline; children are tagged `L:` or `R:`.
pub fn outline<N: DrawableNode>(node: &N) -> Tree<String> {
    fn build<N: DrawableNode>(node: &N, tag: &str) -> Tree<String> {
        let mut tree = Tree::new(format!("{}{}", tag, node.text()));
        if let Some(left) = node.left() {
            tree.push(build(&left, "L: "));
        }
        if let Some(right) = node.right() {
            tree.push(build(&right, "R: "));
        }
        tree
    }

    build(node, "")
}
