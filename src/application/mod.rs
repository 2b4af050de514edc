//! Application layer: drawing use cases
//!
//! This layer turns laid out forests into terminal lines and owns the only I/O.

pub mod error;
pub mod error_ext;
pub mod outline;
pub mod render;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use outline::outline;
pub use render::{draw, draw_to, render_lines};
