//! Core error types

use thiserror::Error;

/// Error for screen identifiers that match no [`Screen`] variant
///
/// The command surface itself is total; this is the one fallible seam, at
/// the string boundary of `Screen::from_str`. Callers map it to the
/// fallback display, never a fault.
///
/// [`Screen`]: crate::screen::Screen
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown screen identifier: {name}")]
pub struct ScreenParseError {
    /// The identifier that failed to parse
    pub name: String,
}
