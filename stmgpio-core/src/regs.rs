//! STM32F407 register map
//!
//! Addresses and field layouts from RM0090. Only the registers the GPIO
//! driver touches are listed.

/// Reset and clock control
pub mod rcc {
    pub const BASE: u32 = 0x4002_3800;

    /// AHB1 peripheral reset register
    pub const AHB1RSTR: u32 = BASE + 0x10;
    /// AHB1 peripheral clock enable register (GPIOAEN..GPIOIEN = bits 0..8)
    pub const AHB1ENR: u32 = BASE + 0x30;
    /// APB2 peripheral clock enable register
    pub const APB2ENR: u32 = BASE + 0x44;

    /// SYSCFG clock enable bit in `APB2ENR`
    pub const APB2ENR_SYSCFGEN: u32 = 1 << 14;
}

/// General-purpose I/O ports
pub mod gpio {
    /// GPIOA base; later ports follow at `STRIDE` intervals
    pub const BASE: u32 = 0x4002_0000;
    pub const STRIDE: u32 = 0x400;

    pub const MODER: u32 = 0x00;
    pub const OTYPER: u32 = 0x04;
    pub const OSPEEDR: u32 = 0x08;
    pub const PUPDR: u32 = 0x0C;
    pub const IDR: u32 = 0x10;
    pub const ODR: u32 = 0x14;
    pub const BSRR: u32 = 0x18;
    pub const LCKR: u32 = 0x1C;
    pub const AFRL: u32 = 0x20;
    pub const AFRH: u32 = 0x24;

    /// Width of the per-pin MODER/OSPEEDR/PUPDR fields
    pub const FIELD2: u32 = 2;
    /// Width of the per-pin AFR fields
    pub const FIELD_AF: u32 = 4;
}

/// System configuration controller
pub mod syscfg {
    pub const BASE: u32 = 0x4001_3800;

    /// First of four external interrupt configuration registers
    pub const EXTICR1: u32 = BASE + 0x08;

    /// Lines per EXTICR register
    pub const LINES_PER_EXTICR: u32 = 4;
    /// Width of each line's port selector
    pub const FIELD_EXTI: u32 = 4;
}

/// External interrupt/event controller
pub mod exti {
    pub const BASE: u32 = 0x4001_3C00;

    /// Interrupt mask register (1 = unmasked)
    pub const IMR: u32 = BASE;
    /// Event mask register
    pub const EMR: u32 = BASE + 0x04;
    /// Rising trigger selection register
    pub const RTSR: u32 = BASE + 0x08;
    /// Falling trigger selection register
    pub const FTSR: u32 = BASE + 0x0C;
    /// Software interrupt event register
    pub const SWIER: u32 = BASE + 0x10;
    /// Pending register (write 1 to clear)
    pub const PR: u32 = BASE + 0x14;
}

/// Nested vectored interrupt controller
pub mod nvic {
    /// Interrupt set-enable registers
    pub const ISER: u32 = 0xE000_E100;
    /// Interrupt clear-enable registers
    pub const ICER: u32 = 0xE000_E180;
    /// Interrupt priority registers (one byte per IRQ)
    pub const IPR: u32 = 0xE000_E400;

    /// Priority bits implemented by the STM32F4 (upper nibble of each byte)
    pub const PRIO_BITS: u32 = 4;

    /// Number of ISER/ICER words
    pub const ENABLE_WORDS: usize = 8;
    /// Number of IPR words
    pub const PRIORITY_WORDS: usize = 60;
}

/// `SYSCFG_EXTICRx` address and field shift for EXTI line `line`
pub const fn exticr(line: u32) -> (u32, u32) {
    let addr = syscfg::EXTICR1 + 4 * (line / syscfg::LINES_PER_EXTICR);
    let shift = syscfg::FIELD_EXTI * (line % syscfg::LINES_PER_EXTICR);
    (addr, shift)
}

/// `GPIOx_AFRL`/`GPIOx_AFRH` offset and field shift for pin `pin`
pub const fn afr(pin: u32) -> (u32, u32) {
    let offset = if pin < 8 { gpio::AFRL } else { gpio::AFRH };
    (offset, gpio::FIELD_AF * (pin % 8))
}

/// NVIC enable word offset and bit mask for IRQ `irq`
pub const fn nvic_enable(irq: u32) -> (u32, u32) {
    (4 * (irq / 32), 1 << (irq % 32))
}

/// `NVIC_IPR` word address and field shift for IRQ `irq`
pub const fn nvic_priority(irq: u32) -> (u32, u32) {
    let addr = nvic::IPR + 4 * (irq / 4);
    let shift = 8 * (irq % 4) + (8 - nvic::PRIO_BITS);
    (addr, shift)
}
