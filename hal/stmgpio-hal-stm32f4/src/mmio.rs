//! Memory-mapped register bus

use core::ptr;
use core::sync::atomic::{AtomicBool, Ordering};

use stmgpio_core::regs::rcc;
use stmgpio_hal::RegisterBus;

static TAKEN: AtomicBool = AtomicBool::new(false);

/// Volatile access to the STM32F407 peripheral address space
///
/// Only one `Mmio` exists at a time unless [`Mmio::steal`] is used, so a
/// driver that owns it has exclusive access to the GPIO registers.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Take the bus; returns `None` after the first call
    pub fn take() -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(Self { _private: () })
        }
    }

    /// Create a bus regardless of whether one was already taken
    ///
    /// # Safety
    ///
    /// The caller must ensure no other `Mmio` is used concurrently, for
    /// example after a panic handler takes over.
    pub unsafe fn steal() -> Self {
        TAKEN.store(true, Ordering::Release);
        Self { _private: () }
    }
}

impl RegisterBus for Mmio {
    fn read(&self, addr: u32) -> u32 {
        // SAFETY: every address the driver passes is an aligned, word-sized
        // peripheral register from the RM0090 map
        unsafe { ptr::read_volatile(addr as *const u32) }
    }

    fn write(&mut self, addr: u32, value: u32) {
        // SAFETY: see `read`; `&mut self` gives exclusive access
        unsafe { ptr::write_volatile(addr as *mut u32, value) }

        // A peripheral is only usable two AHB cycles after its clock
        // enable lands (RM0090 6.3.12)
        if matches!(addr, rcc::AHB1ENR | rcc::APB2ENR | rcc::AHB1RSTR) {
            cortex_m::asm::dsb();
        }
    }
}
