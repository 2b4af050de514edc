use generational_arena::{Arena, Index};
use std::fmt::Display;
use tracing::instrument;

use crate::domain::edge::Side;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::DrawableNode;

/// Tree node in the arena-based binary tree.
#[derive(Debug)]
pub struct TreeNode<T> {
    /// Value printed for this node
    pub value: T,
    /// Optional ANSI 256-color code
    pub color: Option<i64>,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    pub left: Option<Index>,
    pub right: Option<Index>,
}

impl<T> TreeNode<T> {
    fn new(value: T, parent: Option<Index>) -> Self {
        Self {
            value,
            color: None,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-based binary tree.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// A tree without a root is empty and is skipped when drawing.
#[derive(Debug)]
pub struct BinaryTree<T> {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode<T>>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn with_root(value: T) -> Self {
        let mut tree = Self::new();
        tree.root = Some(tree.arena.insert(TreeNode::new(value, None)));
        tree
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode<T>> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode<T>> {
        self.arena.get_mut(idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn set_left(&mut self, parent: Index, value: T) -> DomainResult<Index> {
        self.attach(parent, Side::Left, value)
    }

    pub fn set_right(&mut self, parent: Index, value: T) -> DomainResult<Index> {
        self.attach(parent, Side::Right, value)
    }

    #[instrument(level = "trace", skip(self, value))]
    fn attach(&mut self, parent: Index, side: Side, value: T) -> DomainResult<Index> {
        let node = self.arena.get(parent).ok_or(DomainError::NodeNotFound)?;
        if node.child(side).is_some() {
            return Err(DomainError::SlotOccupied(side));
        }
        let idx = self.arena.insert(TreeNode::new(value, Some(parent)));
        if let Some(node) = self.arena.get_mut(parent) {
            match side {
                Side::Left => node.left = Some(idx),
                Side::Right => node.right = Some(idx),
            }
        }
        Ok(idx)
    }

    pub fn set_color(&mut self, idx: Index, color: Option<i64>) -> DomainResult<()> {
        let node = self.arena.get_mut(idx).ok_or(DomainError::NodeNotFound)?;
        node.color = color;
        Ok(())
    }

    /// Number of levels, 0 for an empty tree.
    pub fn depth(&self) -> usize {
        self.root.map_or(0, |root| self.calculate_depth(root))
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        match self.get_node(node_idx) {
            Some(node) => {
                1 + [node.left, node.right]
                    .into_iter()
                    .flatten()
                    .map(|child| self.calculate_depth(child))
                    .max()
                    .unwrap_or(0)
            }
            None => 0,
        }
    }

    /// Pre-order iteration (node, left subtree, right subtree).
    pub fn iter(&self) -> TreeIterator<'_, T> {
        TreeIterator::new(self)
    }

    /// Borrowed view of the root, None for an empty tree.
    pub fn root_ref(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|idx| NodeRef { tree: self, idx })
    }
}

impl<T: Ord> BinaryTree<T> {
    /// Binary-search-tree insertion; equal values go right.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert(&mut self, value: T) -> Index {
        let Some(mut current) = self.root else {
            let idx = self.arena.insert(TreeNode::new(value, None));
            self.root = Some(idx);
            return idx;
        };
        loop {
            let node = &self.arena[current];
            let side = if value < node.value {
                Side::Left
            } else {
                Side::Right
            };
            match node.child(side) {
                Some(next) => current = next,
                None => {
                    let idx = self.arena.insert(TreeNode::new(value, Some(current)));
                    let parent = &mut self.arena[current];
                    match side {
                        Side::Left => parent.left = Some(idx),
                        Side::Right => parent.right = Some(idx),
                    }
                    return idx;
                }
            }
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

/// Borrowed handle on one node of a [`BinaryTree`].
#[derive(Debug)]
pub struct NodeRef<'a, T> {
    tree: &'a BinaryTree<T>,
    idx: Index,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub fn index(&self) -> Index {
        self.idx
    }

    fn child(&self, side: Side) -> Option<Self> {
        self.tree
            .get_node(self.idx)
            .and_then(|node| node.child(side))
            .map(|idx| NodeRef {
                tree: self.tree,
                idx,
            })
    }
}

impl<T: Display> DrawableNode for NodeRef<'_, T> {
    fn text(&self) -> String {
        self.tree
            .get_node(self.idx)
            .map(|node| node.value.to_string())
            .unwrap_or_default()
    }

    fn color(&self) -> Option<i64> {
        self.tree.get_node(self.idx).and_then(|node| node.color)
    }

    fn left(&self) -> Option<Self> {
        self.child(Side::Left)
    }

    fn right(&self) -> Option<Self> {
        self.child(Side::Right)
    }
}

pub struct TreeIterator<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<Index>,
}

impl<'a, T> TreeIterator<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a, T> Iterator for TreeIterator<'a, T> {
    type Item = (Index, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.stack.pop()?;
        let node = self.tree.get_node(current_idx)?;
        // Push right first so the left subtree is visited first
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some((current_idx, node))
    }
}
