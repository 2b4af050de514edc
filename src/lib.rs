//! Aligned ASCII rendering of binary trees.
//!
//! ```text
//!       __5_
//!      /    \
//!     3      8
//!    / \    / \
//!   1   4  7   9
//! ```
//!
//! Trees are laid out by [`domain::LayoutNode`], arranged side by side by
//! [`domain::Forest`] and turned into lines by [`application::render_lines`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{draw, draw_to, outline, render_lines};
pub use domain::{BinaryTree, DrawableNode, Forest, LayoutNode, Style};
