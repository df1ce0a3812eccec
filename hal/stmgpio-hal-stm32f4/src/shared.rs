//! Driver shared between the foreground and interrupt handlers
//!
//! A [`SharedGpio`] lives in a `static`. The foreground installs the
//! driver and its handler table once, then reaches the registers through
//! [`SharedGpio::with`]. Vector handlers call [`SharedGpio::dispatch`],
//! which runs the registered handler with the same driver.
//!
//! Both paths run inside a critical section, so a foreground
//! `toggle_output` cannot interleave with one done by a handler.

use core::cell::RefCell;

use critical_section::Mutex;
use stmgpio_core::{GpioDriver, Interrupt, InterruptTable};
use stmgpio_hal::RegisterBus;

struct Shared<B> {
    gpio: GpioDriver<B>,
    table: InterruptTable<GpioDriver<B>>,
}

/// GPIO driver plus handler table behind a critical-section mutex
pub struct SharedGpio<B> {
    inner: Mutex<RefCell<Option<Shared<B>>>>,
}

impl<B> Default for SharedGpio<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> SharedGpio<B> {
    /// Create an empty slot, usable in a `static`
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }
}

impl<B: RegisterBus> SharedGpio<B> {
    /// Install the driver and its handlers, replacing any previous pair
    pub fn install(&self, gpio: GpioDriver<B>, table: InterruptTable<GpioDriver<B>>) {
        critical_section::with(|cs| {
            self.inner
                .borrow_ref_mut(cs)
                .replace(Shared { gpio, table });
        });
    }

    /// Remove the driver and handlers again
    pub fn uninstall(&self) -> Option<(GpioDriver<B>, InterruptTable<GpioDriver<B>>)> {
        critical_section::with(|cs| {
            self.inner
                .borrow_ref_mut(cs)
                .take()
                .map(|shared| (shared.gpio, shared.table))
        })
    }

    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }

    /// Run `f` with the driver inside a critical section
    ///
    /// Returns `None` if nothing is installed.
    pub fn with<R>(&self, f: impl FnOnce(&mut GpioDriver<B>) -> R) -> Option<R> {
        critical_section::with(|cs| {
            let mut inner = self.inner.borrow_ref_mut(cs);
            inner.as_mut().map(|shared| f(&mut shared.gpio))
        })
    }

    /// Run the handler registered for `irq`
    ///
    /// Returns `false` if nothing is installed or no handler is registered.
    pub fn dispatch(&self, irq: Interrupt) -> bool {
        critical_section::with(|cs| {
            let mut inner = self.inner.borrow_ref_mut(cs);
            match inner.as_mut() {
                Some(Shared { gpio, table }) => table.dispatch(irq, gpio),
                None => false,
            }
        })
    }
}
