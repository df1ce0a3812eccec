//! Configuration types
//!
//! Typed pin configuration plus the textual pin names used in board
//! descriptions. With the `serde` feature the types serialize, so a board
//! layout can be stored alongside other settings.

pub mod parse;
pub mod types;

pub use parse::*;
pub use types::*;
