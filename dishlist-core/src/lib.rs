//! Dishlist Core Library
//!
//! Platform-independent state machine for the menu application, including:
//! - the single state aggregate (dish list, draft, filter snapshot)
//! - screen navigation over a closed screen set
//! - the six-command mutation surface, total for all inputs
//! - the derived average-price computation
//!
//! This crate performs no I/O. Frontends own the event loop, feed commands
//! in through `MenuController` and render from its read accessors.

pub mod controller;
pub mod error;
pub mod screen;
pub mod state;
pub mod types;

// Re-export common types
pub use controller::{Command, MenuController};
pub use error::ScreenParseError;
pub use screen::Screen;
pub use state::MenuState;
pub use types::{Dish, DishField};
