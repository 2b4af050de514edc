//! The seam between a caller's tree structure and the layout core.

/// Read-only view of one binary tree node.
///
/// Layout only needs the value's text, an optional 256-color code and the
/// two child slots. Implement this for any tree type to draw it.
pub trait DrawableNode: Sized {
    /// Textual form of the stored value.
    fn text(&self) -> String;

    /// Optional ANSI 256-color code. Values outside 0..=255 are tolerated
    /// here and rejected when the color is applied.
    fn color(&self) -> Option<i64> {
        None
    }

    fn left(&self) -> Option<Self>;

    fn right(&self) -> Option<Self>;
}
