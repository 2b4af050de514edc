//! Positioned wrapper around tree nodes.
//!
//! A [`LayoutNode`] is built once per draw from a [`DrawableNode`] tree. Children
//! are laid out recursively under their parent's pivot, then pulled apart by a
//! single corrective shift so neither subtree crosses the pivot margin. All
//! coordinates are relative columns; a shift moves a whole subtree uniformly.

use tracing::{debug, instrument};

use crate::domain::edge::{Edge, Edges, Side};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::format::text_width;
use crate::domain::node::DrawableNode;

/// Minimum gap between a parent's pivot and the near boundary of a child subtree.
pub const PIVOT_MARGIN: i64 = 2;
/// Column where the leftmost boundary of a drawing lands.
pub const LEFT_MARGIN: i64 = 2;
/// Anchor column for a root before normalization.
pub const ROOT_POSITION: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutNode {
    label: String,
    color: Option<i64>,
    base_position: i64,
    offset: i64,
    level: usize,
    width: i64,
    value_width: i64,
    left: Option<Box<LayoutNode>>,
    right: Option<Box<LayoutNode>>,
    edges: Edges,
}

impl LayoutNode {
    /// Lays out a whole tree rooted at `node`, normalized to the left margin.
    pub fn build<N: DrawableNode>(node: &N) -> DomainResult<Self> {
        Self::construct(node, ROOT_POSITION, 0, true)
    }

    /// Builds the layout for `node` anchored at `position` on depth `level`.
    ///
    /// Only root calls should pass `normalize`; it shifts the finished subtree
    /// so its left boundary sits at [`LEFT_MARGIN`].
    #[instrument(level = "trace", skip(node))]
    pub fn construct<N: DrawableNode>(
        node: &N,
        position: i64,
        level: usize,
        normalize: bool,
    ) -> DomainResult<Self> {
        let label = node.text();
        let value_width = text_width(&label);
        let mut layout = Self {
            label,
            color: node.color(),
            base_position: position,
            offset: 0,
            level,
            width: value_width,
            value_width,
            left: None,
            right: None,
            edges: Edges::default(),
        };

        if let Some(child) = node.left() {
            layout.edges.left = Some(Edge::new(Side::Left, layout.pivot() - 1));
            let anchor = layout.left_child_position(text_width(&child.text()))?;
            let subtree = Self::construct(&child, anchor, level + 1, false)?;
            layout.width += subtree.width;
            layout.left = Some(Box::new(subtree));

            let displacement = layout.left_displacement()?;
            layout.shift_child(Side::Left, displacement);
        }

        if let Some(child) = node.right() {
            let edge_position = if layout.rendered_width() % 2 == 1 {
                layout.pivot() + 1
            } else {
                layout.pivot() + 2
            };
            layout.edges.right = Some(Edge::new(Side::Right, edge_position));
            let anchor = layout.right_child_position(text_width(&child.text()))?;
            let subtree = Self::construct(&child, anchor, level + 1, false)?;
            layout.width += subtree.width;
            layout.right = Some(Box::new(subtree));

            let displacement = layout.right_displacement()?;
            layout.shift_child(Side::Right, displacement);
        }

        if normalize {
            layout.shift(LEFT_MARGIN - layout.left_boundary());
        }

        Ok(layout)
    }

    /// Pull needed to keep the left subtree clear of the pivot margin (always <= 0).
    fn left_displacement(&self) -> DomainResult<i64> {
        let left = self.child(Side::Left)?;
        Ok((self.pivot() - PIVOT_MARGIN + 1 - left.right_boundary()).min(0))
    }

    /// Push needed to keep the right subtree clear of the pivot margin (always >= 0).
    fn right_displacement(&self) -> DomainResult<i64> {
        let right = self.child(Side::Right)?;
        Ok(
            (self.pivot() - self.value_width % 2 + PIVOT_MARGIN - right.left_boundary())
                .max(0),
        )
    }

    fn child(&self, side: Side) -> DomainResult<&LayoutNode> {
        let child = match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        };
        child.ok_or(DomainError::MissingChild(side))
    }

    /// Moves one child subtree together with the edge leading to it.
    fn shift_child(&mut self, side: Side, offset: i64) {
        if offset == 0 {
            return;
        }
        debug!(depth = self.level, %side, offset, "Displacing subtree of {:?}", self.label);
        let (subtree, edge) = match side {
            Side::Left => (self.left.as_mut(), self.edges.left.as_mut()),
            Side::Right => (self.right.as_mut(), self.edges.right.as_mut()),
        };
        if let Some(subtree) = subtree {
            subtree.shift(offset);
        }
        if let Some(edge) = edge {
            edge.shift(offset);
        }
    }

    /// Column where the left child must start so its pivot sits under the edge.
    pub fn left_child_position(&self, child_width: i64) -> DomainResult<i64> {
        let edge = self
            .edges
            .left
            .as_ref()
            .ok_or(DomainError::MissingChild(Side::Left))?;
        Ok(edge.position() - child_width % 2 - child_width / 2)
    }

    /// Column where the right child must start so its pivot sits under the edge.
    pub fn right_child_position(&self, child_width: i64) -> DomainResult<i64> {
        let edge = self
            .edges
            .right
            .as_ref()
            .ok_or(DomainError::MissingChild(Side::Right))?;
        Ok(edge.position() + 1 - child_width / 2)
    }

    /// Shifts this node, its edges and both subtrees by `offset` columns.
    pub fn shift(&mut self, offset: i64) {
        if offset == 0 {
            return;
        }
        self.offset += offset;
        self.edges.shift(offset);
        if let Some(left) = self.left.as_mut() {
            left.shift(offset);
        }
        if let Some(right) = self.right.as_mut() {
            right.shift(offset);
        }
    }

    pub fn position(&self) -> i64 {
        self.base_position + self.offset
    }

    /// Column under the value that child edges hang from.
    pub fn pivot(&self) -> i64 {
        self.position() + (self.value_width / 2 - 1).max(0)
    }

    /// Underscores printed before the value so it reaches the left edge.
    pub fn extension_left(&self) -> i64 {
        self.edges
            .left
            .as_ref()
            .map_or(0, |edge| (self.position() - edge.position() - 1).max(0))
    }

    /// Underscores printed after the value so it reaches the right edge.
    pub fn extension_right(&self) -> i64 {
        self.edges.right.as_ref().map_or(0, |edge| {
            (edge.position() - (self.position() + self.value_width)).max(0)
        })
    }

    /// First column of the printed text, extension included.
    pub fn extended_position(&self) -> i64 {
        self.position() - self.extension_left()
    }

    pub fn left_boundary(&self) -> i64 {
        [self.left.as_deref(), self.right.as_deref()]
            .into_iter()
            .flatten()
            .map(LayoutNode::left_boundary)
            .fold(self.extended_position(), i64::min)
    }

    pub fn right_boundary(&self) -> i64 {
        [self.left.as_deref(), self.right.as_deref()]
            .into_iter()
            .flatten()
            .map(LayoutNode::right_boundary)
            .fold(
                self.position() + self.value_width + self.extension_right(),
                i64::max,
            )
    }

    /// Plain printed form: `_` extensions around the value.
    pub fn text(&self) -> String {
        format!(
            "{}{}{}",
            "_".repeat(self.extension_left() as usize),
            self.label,
            "_".repeat(self.extension_right() as usize)
        )
    }

    pub fn rendered_width(&self) -> i64 {
        self.extension_left() + self.value_width + self.extension_right()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> Option<i64> {
        self.color
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn value_width(&self) -> i64 {
        self.value_width
    }

    pub fn edges(&self) -> &Edges {
        &self.edges
    }

    pub fn left(&self) -> Option<&LayoutNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&LayoutNode> {
        self.right.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::arena::BinaryTree;

    fn layout(values: &[i32]) -> LayoutNode {
        let tree: BinaryTree<i32> = values.iter().copied().collect();
        LayoutNode::build(&tree.root_ref().unwrap()).unwrap()
    }

    #[test]
    fn given_leaf_when_built_then_width_is_text_length_and_no_edges() {
        let node = layout(&[12345]);
        assert_eq!(node.width(), 5);
        assert_eq!(node.rendered_width(), 5);
        assert!(node.edges().is_empty());
        assert_eq!(node.position(), LEFT_MARGIN);
    }

    #[test]
    fn given_root_with_left_child_when_built_then_edge_is_pivot_minus_one() {
        let node = layout(&[5, 3]);
        let edge = node.edges().left.as_ref().unwrap();
        assert_eq!(node.edges().len(), 1);
        assert_eq!(edge.glyph(), '/');
        assert_eq!(edge.position(), node.pivot() - 1);
        let child = node.left().unwrap();
        assert_eq!(child.position(), edge.position() - 1);
        assert_eq!(child.level(), 1);
    }

    #[test]
    fn given_odd_width_value_when_right_child_then_edge_is_pivot_plus_one() {
        let node = layout(&[100, 700]);
        let edge = node.edges().right.as_ref().unwrap();
        assert_eq!(edge.glyph(), '\\');
        assert_eq!(edge.position(), node.pivot() + 1);
    }

    #[test]
    fn given_even_width_value_when_right_child_then_edge_is_pivot_plus_two() {
        let node = layout(&[10, 70]);
        let edge = node.edges().right.as_ref().unwrap();
        assert_eq!(edge.position(), node.pivot() + 2);
    }

    #[test]
    fn given_missing_edge_when_child_position_requested_then_errors() {
        let node = layout(&[5]);
        assert_eq!(
            node.left_child_position(1),
            Err(DomainError::MissingChild(Side::Left))
        );
        assert_eq!(
            node.right_child_position(1),
            Err(DomainError::MissingChild(Side::Right))
        );
    }

    #[test]
    fn given_crowded_subtrees_when_built_then_extensions_reach_edges() {
        let node = layout(&[5, 3, 8, 1, 4, 7, 9]);
        assert_eq!(node.extension_left(), 2);
        assert_eq!(node.extension_right(), 1);
        assert_eq!(node.text(), "__5_");
        assert_eq!(node.left_boundary(), LEFT_MARGIN);
        assert_eq!(node.right_boundary(), 14);
        assert_eq!(node.width(), 7);
    }
}
