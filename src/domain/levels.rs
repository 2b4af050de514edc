//! Breadth-first grouping of layout nodes by depth.

use std::collections::VecDeque;

use crate::domain::layout::LayoutNode;

/// Nodes of one tree grouped by level, left to right within each level.
pub fn build_levels(root: &LayoutNode) -> Vec<Vec<&LayoutNode>> {
    let mut levels: Vec<Vec<&LayoutNode>> = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(node) = queue.pop_front() {
        let depth = node.level() - root.level();
        if levels.len() <= depth {
            levels.push(Vec::new());
        }
        levels[depth].push(node);

        queue.extend(node.left());
        queue.extend(node.right());
    }

    levels
}
