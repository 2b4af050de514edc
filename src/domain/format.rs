//! Value formatting: printable width and 256-color styling.

use tracing::debug;

use crate::domain::error::{DomainError, DomainResult};

/// Whether node values are wrapped in ANSI color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Colored,
    Plain,
}

/// Printable width of a node's text, in columns.
pub fn text_width(text: &str) -> i64 {
    text.chars().count() as i64
}

/// Wraps `text` in an ANSI 256-color foreground sequence.
pub fn colors_256(text: &str, code: i64) -> DomainResult<String> {
    if !(0..=255).contains(&code) {
        return Err(DomainError::InvalidColor(code));
    }
    Ok(format!("\x1b[38;5;{code}m{text}\x1b[0;0m"))
}

/// By-value rendering path: a missing or invalid color yields plain text.
pub fn styled_value(text: &str, color: Option<i64>, style: Style) -> String {
    let Some(code) = color.filter(|_| style == Style::Colored) else {
        return text.to_string();
    };
    match colors_256(text, code) {
        Ok(colored) => colored,
        Err(e) => {
            debug!("Falling back to plain text for {:?}: {}", text, e);
            text.to_string()
        }
    }
}
