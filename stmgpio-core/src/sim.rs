//! Simulated STM32F407 register file
//!
//! [`SimBus`] decodes register addresses into an in-memory model of the
//! RCC, GPIO, SYSCFG, EXTI and NVIC blocks with the access semantics the
//! driver depends on:
//!
//! - GPIO and SYSCFG registers read as zero and drop writes while their
//!   clock is gated
//! - `BSRR` sets and resets `ODR` bits (set wins when both are written)
//! - `IDR` shows `ODR` for output and alternate-function pins, the
//!   externally driven or pulled level for inputs, and 0 for analog pins.
//!   No peripheral is modelled, so an alternate-function pin reads the
//!   `ODR` bit rather than the level its peripheral would drive
//! - a level change on a pin whose EXTI line is routed to its port,
//!   unmasked and armed for that edge latches the line's `PR` bit
//! - `PR` and `ICER` are write-one-to-clear, `ISER` is write-one-to-set
//! - `AHB1RSTR` returns a port's registers to their reset values
//!
//! Addresses outside the model read as zero and ignore writes.

use stmgpio_hal::{PinState, RegisterBus};

use crate::config::{PinNumber, Port, PORT_COUNT};
use crate::interrupt::Interrupt;
use crate::regs::{self, exti, gpio, nvic, rcc, syscfg};

/// Register block of one GPIO port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PortRegs {
    moder: u32,
    otyper: u32,
    ospeedr: u32,
    pupdr: u32,
    odr: u32,
    lckr: u32,
    afrl: u32,
    afrh: u32,
}

impl PortRegs {
    /// Reset values from RM0090 (port A and B carry the debug pins)
    const fn reset(port: Port) -> Self {
        let (moder, ospeedr, pupdr) = match port {
            Port::A => (0xA800_0000, 0x0C00_0000, 0x6400_0000),
            Port::B => (0x0000_0280, 0x0000_00C0, 0x0000_0100),
            _ => (0, 0, 0),
        };
        Self {
            moder,
            otyper: 0,
            ospeedr,
            pupdr,
            odr: 0,
            lckr: 0,
            afrl: 0,
            afrh: 0,
        }
    }
}

/// Externally driven pin levels of one port
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct External {
    /// Pins with something attached that drives them
    driven: u16,
    /// Level of the driven pins
    level: u16,
}

/// EXTI controller registers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ExtiRegs {
    imr: u32,
    emr: u32,
    rtsr: u32,
    ftsr: u32,
    pr: u32,
}

/// Decoded register address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reg {
    Ahb1Rstr,
    Ahb1Enr,
    Apb2Enr,
    Gpio(Port, u32),
    ExtiCr(usize),
    Exti(u32),
    Iser(usize),
    Icer(usize),
    Ipr(usize),
    Unmapped,
}

fn decode(addr: u32) -> Reg {
    let gpio_end = gpio::BASE + gpio::STRIDE * PORT_COUNT as u32;
    let word = |base: u32| ((addr - base) / 4) as usize;

    match addr {
        rcc::AHB1RSTR => Reg::Ahb1Rstr,
        rcc::AHB1ENR => Reg::Ahb1Enr,
        rcc::APB2ENR => Reg::Apb2Enr,
        a if (gpio::BASE..gpio_end).contains(&a) => {
            let index = ((a - gpio::BASE) / gpio::STRIDE) as usize;
            match Port::from_index(index) {
                Some(port) => Reg::Gpio(port, (a - gpio::BASE) % gpio::STRIDE),
                None => Reg::Unmapped,
            }
        }
        a if (syscfg::EXTICR1..syscfg::EXTICR1 + 16).contains(&a) => {
            Reg::ExtiCr(word(syscfg::EXTICR1))
        }
        a if (exti::BASE..=exti::PR).contains(&a) => Reg::Exti(a),
        a if (nvic::ISER..nvic::ISER + 4 * nvic::ENABLE_WORDS as u32).contains(&a) => {
            Reg::Iser(word(nvic::ISER))
        }
        a if (nvic::ICER..nvic::ICER + 4 * nvic::ENABLE_WORDS as u32).contains(&a) => {
            Reg::Icer(word(nvic::ICER))
        }
        a if (nvic::IPR..nvic::IPR + 4 * nvic::PRIORITY_WORDS as u32).contains(&a) => {
            Reg::Ipr(word(nvic::IPR))
        }
        _ => Reg::Unmapped,
    }
}

/// In-memory STM32F407 GPIO/EXTI/NVIC register model
#[derive(Debug, Clone)]
pub struct SimBus {
    ahb1rstr: u32,
    ahb1enr: u32,
    apb2enr: u32,
    ports: [PortRegs; PORT_COUNT],
    external: [External; PORT_COUNT],
    exticr: [u32; 4],
    exti: ExtiRegs,
    iser: [u32; nvic::ENABLE_WORDS],
    ipr: [u32; nvic::PRIORITY_WORDS],
    last_write: Option<(u32, u32)>,
}

impl Default for SimBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SimBus {
    /// Register file in its power-on reset state
    pub fn new() -> Self {
        Self {
            ahb1rstr: 0,
            ahb1enr: 0,
            apb2enr: 0,
            ports: Port::ALL.map(PortRegs::reset),
            external: [External::default(); PORT_COUNT],
            exticr: [0; 4],
            exti: ExtiRegs::default(),
            iser: [0; nvic::ENABLE_WORDS],
            ipr: [0; nvic::PRIORITY_WORDS],
            last_write: None,
        }
    }

    /// Most recent write as `(address, value)`
    pub fn last_write(&self) -> Option<(u32, u32)> {
        self.last_write
    }

    /// Drive a pin from outside the chip (a button, a jumper)
    ///
    /// Latches EXTI pending flags for any edge this produces on the pin.
    pub fn drive_input(&mut self, port: Port, pin: PinNumber, state: PinState) {
        let before = self.input_levels();
        let ext = &mut self.external[port.index()];
        ext.driven |= pin.mask() as u16;
        match state {
            PinState::High => ext.level |= pin.mask() as u16,
            PinState::Low => ext.level &= !(pin.mask() as u16),
        }
        self.latch_edges(&before);
    }

    /// Stop driving a pin externally; it floats to its pull level
    pub fn release_input(&mut self, port: Port, pin: PinNumber) {
        let before = self.input_levels();
        self.external[port.index()].driven &= !(pin.mask() as u16);
        self.latch_edges(&before);
    }

    /// Interrupt lines the NVIC would currently take
    ///
    /// A line is active when it is enabled and at least one of its EXTI
    /// pending flags is set.
    pub fn active_interrupts(&self) -> impl Iterator<Item = Interrupt> + '_ {
        Interrupt::ALL.into_iter().filter(move |irq| {
            let (word, bit) = regs::nvic_enable(irq.number());
            self.iser[word as usize / 4] & bit != 0 && self.exti.pr & irq.pin_mask() != 0
        })
    }

    fn port_clocked(&self, port: Port) -> bool {
        self.ahb1enr & port.rcc_bit() != 0
    }

    fn syscfg_clocked(&self) -> bool {
        self.apb2enr & rcc::APB2ENR_SYSCFGEN != 0
    }

    /// Level the input data register shows for every pin of `port`
    fn idr(&self, port: Port) -> u32 {
        let regs = &self.ports[port.index()];
        let ext = self.external[port.index()];
        let mut idr = 0;
        for pin in PinNumber::all() {
            let n = pin.bits() as u32;
            let mask = pin.mask();
            let level = match (regs.moder >> (2 * n)) & 0b11 {
                0b01 | 0b10 => regs.odr & mask != 0,
                0b11 => false,
                _ if ext.driven as u32 & mask != 0 => ext.level as u32 & mask != 0,
                // Floating inputs settle low in the model
                _ => (regs.pupdr >> (2 * n)) & 0b11 == 0b01,
            };
            if level {
                idr |= mask;
            }
        }
        idr
    }

    fn input_levels(&self) -> [u32; PORT_COUNT] {
        Port::ALL.map(|port| self.idr(port))
    }

    /// Set `PR` bits for edges between `before` and the current levels
    fn latch_edges(&mut self, before: &[u32; PORT_COUNT]) {
        for line in 0..16u32 {
            let mask = 1 << line;
            if self.exti.imr & mask == 0 {
                continue;
            }
            let (addr, shift) = regs::exticr(line);
            let word = ((addr - syscfg::EXTICR1) / 4) as usize;
            let source = (self.exticr[word] >> shift) & 0xF;
            let Some(port) = Port::from_index(source as usize) else {
                continue;
            };
            let was = before[port.index()] & mask != 0;
            let now = self.idr(port) & mask != 0;
            let rising = !was && now && self.exti.rtsr & mask != 0;
            let falling = was && !now && self.exti.ftsr & mask != 0;
            if rising || falling {
                self.exti.pr |= mask;
            }
        }
    }

    fn read_gpio(&self, port: Port, offset: u32) -> u32 {
        if !self.port_clocked(port) {
            return 0;
        }
        let regs = &self.ports[port.index()];
        match offset {
            gpio::MODER => regs.moder,
            gpio::OTYPER => regs.otyper,
            gpio::OSPEEDR => regs.ospeedr,
            gpio::PUPDR => regs.pupdr,
            gpio::IDR => self.idr(port),
            gpio::ODR => regs.odr,
            gpio::LCKR => regs.lckr,
            gpio::AFRL => regs.afrl,
            gpio::AFRH => regs.afrh,
            // BSRR is write-only
            _ => 0,
        }
    }

    fn write_gpio(&mut self, port: Port, offset: u32, value: u32) {
        if !self.port_clocked(port) {
            return;
        }
        let regs = &mut self.ports[port.index()];
        match offset {
            gpio::MODER => regs.moder = value,
            gpio::OTYPER => regs.otyper = value & 0xFFFF,
            gpio::OSPEEDR => regs.ospeedr = value,
            gpio::PUPDR => regs.pupdr = value,
            gpio::ODR => regs.odr = value & 0xFFFF,
            gpio::BSRR => regs.odr = (regs.odr & !(value >> 16)) | (value & 0xFFFF),
            gpio::LCKR => regs.lckr = value,
            gpio::AFRL => regs.afrl = value,
            gpio::AFRH => regs.afrh = value,
            _ => {}
        }
    }

    fn read_exti(&self, addr: u32) -> u32 {
        match addr {
            exti::IMR => self.exti.imr,
            exti::EMR => self.exti.emr,
            exti::RTSR => self.exti.rtsr,
            exti::FTSR => self.exti.ftsr,
            exti::PR => self.exti.pr,
            _ => 0,
        }
    }

    fn write_exti(&mut self, addr: u32, value: u32) {
        // 23 lines on the F407
        let value = value & 0x007F_FFFF;
        match addr {
            exti::IMR => self.exti.imr = value,
            exti::EMR => self.exti.emr = value,
            exti::RTSR => self.exti.rtsr = value,
            exti::FTSR => self.exti.ftsr = value,
            exti::SWIER => self.exti.pr |= value & self.exti.imr,
            exti::PR => self.exti.pr &= !value,
            _ => {}
        }
    }

    fn write_ahb1rstr(&mut self, value: u32) {
        self.ahb1rstr = value;
        for port in Port::ALL {
            if value & port.rcc_bit() != 0 {
                self.ports[port.index()] = PortRegs::reset(port);
            }
        }
    }
}

impl RegisterBus for SimBus {
    fn read(&self, addr: u32) -> u32 {
        match decode(addr) {
            Reg::Ahb1Rstr => self.ahb1rstr,
            Reg::Ahb1Enr => self.ahb1enr,
            Reg::Apb2Enr => self.apb2enr,
            Reg::Gpio(port, offset) => self.read_gpio(port, offset),
            Reg::ExtiCr(i) if self.syscfg_clocked() => self.exticr[i],
            Reg::ExtiCr(_) => 0,
            Reg::Exti(a) => self.read_exti(a),
            Reg::Iser(i) | Reg::Icer(i) => self.iser[i],
            Reg::Ipr(i) => self.ipr[i],
            Reg::Unmapped => 0,
        }
    }

    fn write(&mut self, addr: u32, value: u32) {
        self.last_write = Some((addr, value));
        let before = self.input_levels();

        match decode(addr) {
            Reg::Ahb1Rstr => self.write_ahb1rstr(value),
            Reg::Ahb1Enr => self.ahb1enr = value,
            Reg::Apb2Enr => self.apb2enr = value,
            Reg::Gpio(port, offset) => self.write_gpio(port, offset, value),
            Reg::ExtiCr(i) if self.syscfg_clocked() => self.exticr[i] = value & 0xFFFF,
            Reg::ExtiCr(_) => {}
            Reg::Exti(a) => self.write_exti(a, value),
            Reg::Iser(i) => self.iser[i] |= value,
            Reg::Icer(i) => self.iser[i] &= !value,
            Reg::Ipr(i) => self.ipr[i] = value & 0xF0F0_F0F0,
            Reg::Unmapped => {}
        }

        self.latch_edges(&before);
    }
}
