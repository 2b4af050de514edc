//! Diagonal connectors drawn beneath a parent node.

use std::fmt;

/// Which child slot an edge (or a child) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// One `/` or `\` connector with a shiftable column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    direction: Side,
    base_position: i64,
    offset: i64,
}

impl Edge {
    pub fn new(direction: Side, position: i64) -> Self {
        Self {
            direction,
            base_position: position,
            offset: 0,
        }
    }

    pub fn direction(&self) -> Side {
        self.direction
    }

    /// Current column: anchor plus every shift applied so far.
    pub fn position(&self) -> i64 {
        self.base_position + self.offset
    }

    pub fn shift(&mut self, offset: i64) {
        self.offset += offset;
    }

    pub fn glyph(&self) -> char {
        match self.direction {
            Side::Left => '/',
            Side::Right => '\\',
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The zero, one or two edges owned by a layout node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edges {
    pub left: Option<Edge>,
    pub right: Option<Edge>,
}

impl Edges {
    pub fn get(&self, side: Side) -> Option<&Edge> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    pub fn shift(&mut self, offset: i64) {
        if let Some(edge) = self.left.as_mut() {
            edge.shift(offset);
        }
        if let Some(edge) = self.right.as_mut() {
            edge.shift(offset);
        }
    }

    pub fn len(&self) -> usize {
        self.left.iter().count() + self.right.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Edges in left-to-right drawing order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.left.iter().chain(self.right.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_shifted_edge_when_position_then_includes_offset() {
        let mut edge = Edge::new(Side::Right, 7);
        edge.shift(3);
        edge.shift(-1);
        assert_eq!(edge.position(), 9);
        assert_eq!(edge.to_string(), "\\");
    }

    #[test]
    fn given_edges_when_iter_then_left_comes_first() {
        let edges = Edges {
            left: Some(Edge::new(Side::Left, 4)),
            right: Some(Edge::new(Side::Right, 6)),
        };
        let glyphs: String = edges.iter().map(Edge::glyph).collect();
        assert_eq!(glyphs, "/\\");
        assert_eq!(edges.len(), 2);
    }
}
