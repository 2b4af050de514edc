//! Line assembly for laid out forests.

use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{build_levels, styled_value, DrawableNode, Forest, LayoutNode, Style};

/// Appends text at absolute columns, never moving the cursor backwards.
#[derive(Debug, Default)]
struct LineBuilder {
    line: String,
    cursor: i64,
}

impl LineBuilder {
    /// Pads up to `column` and appends `text`, which occupies `width` columns.
    ///
    /// `text` may carry ANSI codes, so the cursor advances by `width`
    /// instead of the string length.
    fn place(&mut self, column: i64, text: &str, width: i64) {
        let padding = (column - self.cursor).max(0) as usize;
        self.line.push_str(&" ".repeat(padding));
        self.line.push_str(text);
        self.cursor = column + width;
    }

    fn finish(self) -> String {
        self.line
    }
}

fn value_line<'a>(nodes: impl Iterator<Item = &'a LayoutNode>, style: Style) -> String {
    let mut builder = LineBuilder::default();
    for node in nodes {
        let text = format!(
            "{}{}{}",
            "_".repeat(node.extension_left() as usize),
            styled_value(node.label(), node.color(), style),
            "_".repeat(node.extension_right() as usize)
        );
        builder.place(node.extended_position(), &text, node.rendered_width());
    }
    builder.finish()
}

fn edge_line<'a>(nodes: impl Iterator<Item = &'a LayoutNode>) -> String {
    let mut builder = LineBuilder::default();
    for edge in nodes.flat_map(|node| node.edges().iter()) {
        builder.place(edge.position(), &edge.to_string(), 1);
    }
    builder.finish()
}

/// Renders a forest into two lines per level: values, then edges.
#[instrument(level = "debug", skip(forest))]
pub fn render_lines(forest: &Forest, style: Style) -> Vec<String> {
    let trees: Vec<Vec<Vec<&LayoutNode>>> = forest.roots().iter().map(build_levels).collect();
    let depth = trees.iter().map(Vec::len).max().unwrap_or(0);
    debug!("Rendering {} trees over {} levels", trees.len(), depth);

    let mut lines = Vec::with_capacity(depth * 2);
    for level in 0..depth {
        let nodes: Vec<&LayoutNode> = trees
            .iter()
            .filter_map(|tree| tree.get(level))
            .flatten()
            .copied()
            .collect();
        lines.push(value_line(nodes.iter().copied(), style));
        lines.push(edge_line(nodes.iter().copied()));
    }
    lines
}

/// Lays out `roots` as one forest and writes it to `writer`.
///
/// `None` roots stand for empty trees and are skipped.
pub fn draw_to<W, N, I>(writer: &mut W, roots: I, style: Style) -> ApplicationResult<()>
where
    W: Write,
    N: DrawableNode,
    I: IntoIterator<Item = Option<N>>,
{
    let forest = Forest::build(roots)?;
    for line in render_lines(&forest, style) {
        writeln!(writer, "{}", line).with_context("write tree line")?;
    }
    writer.flush().with_context("flush output")
}

/// Draws `roots` side by side on standard output.
pub fn draw<N, I>(roots: I, style: Style) -> ApplicationResult<()>
where
    N: DrawableNode,
    I: IntoIterator<Item = Option<N>>,
{
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    draw_to(&mut handle, roots, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BinaryTree;

    #[test]
    fn given_cursor_past_column_when_place_then_appends_without_padding() {
        let mut builder = LineBuilder::default();
        builder.place(3, "ab", 2);
        builder.place(4, "c", 1);
        assert_eq!(builder.finish(), "   abc");
    }

    #[test]
    fn given_colored_node_when_rendered_then_alignment_ignores_escape_codes() {
        let mut tree = BinaryTree::with_root(5);
        let root = tree.root().unwrap();
        tree.set_color(root, Some(9)).unwrap();
        let leaf = BinaryTree::with_root(1);

        let forest = Forest::build([tree.root_ref(), leaf.root_ref()]).unwrap();
        let lines = render_lines(&forest, Style::Colored);

        assert_eq!(lines[0], "  \x1b[38;5;9m5\x1b[0;0m  1");
        assert_eq!(render_lines(&forest, Style::Plain)[0], "  5  1");
    }
}
