//! stmgpio Hardware Abstraction Layer
//!
//! This crate defines the seams between the GPIO driver and the silicon
//! it runs on. The driver in `stmgpio-core` is written against these
//! traits only, so the same code drives real memory-mapped registers or a
//! simulated register file on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (blinky, button handlers)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  stmgpio-core (GpioDriver, Interrupts)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  stmgpio-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ stmgpio-hal-  │       │ stmgpio-core  │
//! │   stm32f4     │       │   ::sim       │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bus::RegisterBus`] - 32-bit register reads and writes
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use bus::RegisterBus;
pub use gpio::{InputPin, OutputPin, PinState};
