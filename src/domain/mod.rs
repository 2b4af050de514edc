//! Domain layer: tree data and the layout core
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod edge;
pub mod error;
pub mod forest;
pub mod format;
pub mod layout;
pub mod levels;
pub mod node;

pub use arena::{BinaryTree, NodeRef, TreeNode};
pub use edge::{Edge, Edges, Side};
pub use error::{DomainError, DomainResult};
pub use forest::{arrange_trees, Forest, TREE_GAP};
pub use format::{colors_256, styled_value, text_width, Style};
pub use layout::{LayoutNode, LEFT_MARGIN, PIVOT_MARGIN, ROOT_POSITION};
pub use levels::build_levels;
pub use node::DrawableNode;
