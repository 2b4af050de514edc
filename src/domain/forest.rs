//! Side-by-side arrangement of independently laid out trees.

use tracing::{debug, instrument};

use crate::domain::error::DomainResult;
use crate::domain::layout::{LayoutNode, LEFT_MARGIN};
use crate::domain::levels::build_levels;
use crate::domain::node::DrawableNode;

/// Blank columns between the boundaries of neighbouring trees.
pub const TREE_GAP: i64 = 2;

/// Shifts each root right of its predecessor, in input order.
///
/// The first tree's left boundary lands on [`LEFT_MARGIN`]; every later tree
/// starts [`TREE_GAP`] columns after the previous tree's right boundary.
#[instrument(level = "debug", skip(roots), fields(trees = roots.len()))]
pub fn arrange_trees(roots: &mut [LayoutNode]) {
    let mut left_boundary = LEFT_MARGIN;
    for root in roots.iter_mut() {
        root.shift(left_boundary - root.left_boundary());
        left_boundary = root.right_boundary() + TREE_GAP;
    }
}

/// Ordered, arranged layout roots drawn together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    roots: Vec<LayoutNode>,
}

impl Forest {
    /// Lays out every present root and arranges them left to right.
    ///
    /// `None` entries stand for empty trees and are skipped.
    pub fn build<N, I>(nodes: I) -> DomainResult<Self>
    where
        N: DrawableNode,
        I: IntoIterator<Item = Option<N>>,
    {
        let mut roots = nodes
            .into_iter()
            .flatten()
            .map(|node| LayoutNode::build(&node))
            .collect::<DomainResult<Vec<_>>>()?;
        arrange_trees(&mut roots);
        debug!("Arranged {} trees", roots.len());
        Ok(Self { roots })
    }

    pub fn roots(&self) -> &[LayoutNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of levels in the deepest tree.
    pub fn depth(&self) -> usize {
        self.roots
            .iter()
            .map(|root| build_levels(root).len())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::arena::BinaryTree;

    #[test]
    fn given_two_leaves_when_arranged_then_separated_by_gap() {
        let a = BinaryTree::with_root(1);
        let b = BinaryTree::with_root(22);
        let forest = Forest::build([a.root_ref(), b.root_ref()]).unwrap();

        let [first, second] = forest.roots() else {
            panic!("expected two trees");
        };
        assert_eq!(first.left_boundary(), LEFT_MARGIN);
        assert_eq!(second.left_boundary(), first.right_boundary() + TREE_GAP);
        assert_eq!(second.position(), 5);
    }

    #[test]
    fn given_empty_trees_when_built_then_skipped() {
        let empty: BinaryTree<i32> = BinaryTree::new();
        let leaf = BinaryTree::with_root(7);
        let forest = Forest::build([empty.root_ref(), leaf.root_ref(), None]).unwrap();
        assert_eq!(forest.roots().len(), 1);
        assert_eq!(forest.depth(), 1);
    }
}
