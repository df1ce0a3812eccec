//! STM32F407 backend for the stmgpio driver
//!
//! This crate connects `stmgpio-core` to real silicon:
//!
//! - [`Mmio`] - the memory-mapped [`RegisterBus`]
//! - [`SharedGpio`] - driver and handler table shared with vector handlers
//! - [`board`] - pin assignments of the STM32F4-Discovery
//!
//! The firmware must link a `critical-section` implementation, usually
//! `cortex-m` with its `critical-section-single-core` feature.
//!
//! # Usage
//!
//! ```ignore
//! static GPIO: SharedGpio<Mmio> = SharedGpio::new();
//!
//! fn on_button(gpio: &mut GpioDriver<Mmio>) {
//!     if gpio.acknowledge_interrupt(board::USER_BUTTON.pin()) {
//!         gpio.toggle_output(Port::D, board::LED_GREEN.pin());
//!     }
//! }
//!
//! #[entry]
//! fn main() -> ! {
//!     let mut gpio = GpioDriver::new(Mmio::take().unwrap());
//!     board::init(&mut gpio);
//!     let mut table = InterruptTable::new();
//!     table.register(board::USER_BUTTON_IRQ, on_button).ok();
//!     GPIO.install(gpio, table);
//!     loop { cortex_m::asm::wfi(); }
//! }
//!
//! #[interrupt]
//! fn EXTI0() {
//!     GPIO.dispatch(Interrupt::Exti0);
//! }
//! ```
//!
//! [`RegisterBus`]: stmgpio_hal::RegisterBus

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod mmio;
pub mod shared;

pub use mmio::Mmio;
pub use shared::SharedGpio;
