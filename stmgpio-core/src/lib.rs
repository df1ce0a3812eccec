//! Register-level GPIO driver for the STM32F407
//!
//! This crate holds everything that does not depend on real silicon:
//!
//! - Port, pin and mode types with their register encodings
//! - The GPIO/EXTI/NVIC driver, generic over a [`RegisterBus`]
//! - Interrupt line identifiers and the handler table
//! - Pin-name parsing ("PA0", "!PD12")
//! - A simulated register file for host tests
//!
//! The driver writes through whatever bus it owns; the
//! `stmgpio-hal-stm32f4` crate supplies the memory-mapped one.
//!
//! [`RegisterBus`]: stmgpio_hal::RegisterBus

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod fmt;

pub mod config;
pub mod driver;
pub mod interrupt;
pub mod pin;
pub mod regs;
pub mod sim;

pub use config::{
    parse_pin_string, AltFunction, Edge, OutputType, PinConfig, PinHandle, PinMode, PinName,
    PinNumber, PinParseError, Port, Pull, Speed,
};
pub use driver::GpioDriver;
pub use interrupt::{Handler, Interrupt, InterruptTable, Priority, TableFull};
pub use pin::Pin;
