//! External interrupt lines and handler dispatch
//!
//! EXTI line `n` serves pin `n` of whichever port SYSCFG routes to it.
//! Lines 0-4 each own an NVIC vector; lines 5-9 and 10-15 share one.

pub mod line;
pub mod table;

pub use line::{Interrupt, Priority};
pub use table::{Handler, InterruptTable, TableFull, MAX_HANDLERS};
