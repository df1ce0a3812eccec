//! GPIO peripheral driver
//!
//! [`GpioDriver`] owns the register bus, so every register access goes
//! through one `&mut` handle. There is no hidden global state: the
//! application decides where the driver lives and who may touch it.
//!
//! # Usage
//!
//! ```
//! use stmgpio_core::config::{PinConfig, PinHandle, PinNumber, Port, Speed};
//! use stmgpio_core::driver::GpioDriver;
//! use stmgpio_core::sim::SimBus;
//! use stmgpio_hal::PinState;
//!
//! let mut gpio = GpioDriver::new(SimBus::new());
//! let led = PinHandle::new(Port::D, PinConfig::output(PinNumber::P12).with_speed(Speed::Fast));
//!
//! gpio.enable_clock(Port::D, true);
//! gpio.initialize(&led);
//! gpio.write_output(Port::D, PinNumber::P12, PinState::High);
//! assert_eq!(gpio.read_input(Port::D, PinNumber::P12), PinState::High);
//! ```
//!
//! # Preconditions
//!
//! The port clock must be enabled before any other operation on that
//! port. Reading a pin configured as output returns the driven level.
//! [`GpioDriver::toggle_output`] is a read-modify-write of the whole
//! output data register; it must not race another context toggling the
//! same port.

use stmgpio_hal::{PinState, RegisterBus};

use crate::config::{AltFunction, Edge, OutputType, PinConfig, PinHandle, PinMode, PinNumber, Port};
use crate::config::{Pull, Speed};
use crate::fmt::{debug, trace};
use crate::interrupt::{Interrupt, Priority};
use crate::pin::Pin;
use crate::regs::{self, exti, gpio, nvic, rcc};

/// GPIO driver over a register bus
pub struct GpioDriver<B> {
    bus: B,
}

impl<B: RegisterBus> GpioDriver<B> {
    /// Take ownership of the register bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Give the register bus back
    pub fn release(self) -> B {
        self.bus
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Enable or disable the clock gate for `port`
    pub fn enable_clock(&mut self, port: Port, on: bool) {
        if on {
            self.bus.set_bits(rcc::AHB1ENR, port.rcc_bit());
        } else {
            self.bus.clear_bits(rcc::AHB1ENR, port.rcc_bit());
        }
        debug!("GPIO{}: clock {}", port.letter(), on);
    }

    /// Check whether the clock gate for `port` is open
    pub fn is_clock_enabled(&self, port: Port) -> bool {
        self.bus.read(rcc::AHB1ENR) & port.rcc_bit() != 0
    }

    /// Return every register of `port` to its reset value
    pub fn reset_port(&mut self, port: Port) {
        self.bus.set_bits(rcc::AHB1RSTR, port.rcc_bit());
        self.bus.clear_bits(rcc::AHB1RSTR, port.rcc_bit());
        debug!("GPIO{}: reset", port.letter());
    }

    /// Apply a pin configuration
    ///
    /// Writes mode, speed, pull, output type and alternate function. For
    /// interrupt modes the pin's EXTI line is also routed to this port,
    /// armed for the configured edge and unmasked. Configuring a pin in a
    /// non-interrupt mode masks its EXTI line if that line was routed to
    /// this port.
    pub fn initialize(&mut self, handle: &PinHandle) {
        let port = handle.port;
        let cfg = &handle.config;
        let base = port.base_address();
        let n = cfg.pin.bits() as u32;

        self.bus.write_field(
            base + gpio::MODER,
            gpio::FIELD2 * n,
            gpio::FIELD2,
            cfg.mode.moder_bits(),
        );
        self.bus.write_field(
            base + gpio::OSPEEDR,
            gpio::FIELD2 * n,
            gpio::FIELD2,
            cfg.speed.bits(),
        );
        self.bus.write_field(
            base + gpio::PUPDR,
            gpio::FIELD2 * n,
            gpio::FIELD2,
            cfg.pull.bits(),
        );
        self.bus
            .write_field(base + gpio::OTYPER, n, 1, cfg.mode.output_type().bits());

        if let Some(af) = cfg.mode.alt_function() {
            let (offset, shift) = regs::afr(n);
            self.bus
                .write_field(base + offset, shift, gpio::FIELD_AF, af.bits() as u32);
        }

        match cfg.mode.edge() {
            Some(edge) => self.route_interrupt(port, cfg.pin, edge),
            None => self.unroute_interrupt(port, cfg.pin),
        }

        trace!("GPIO{}{}: {}", port.letter(), n, cfg.mode);
    }

    /// Route the pin's EXTI line to `port` and arm it for `edge`
    fn route_interrupt(&mut self, port: Port, pin: PinNumber, edge: Edge) {
        let n = pin.bits() as u32;

        self.bus.write_field(exti::RTSR, n, 1, edge.rising() as u32);
        self.bus.write_field(exti::FTSR, n, 1, edge.falling() as u32);

        self.bus.set_bits(rcc::APB2ENR, rcc::APB2ENR_SYSCFGEN);
        let (addr, shift) = regs::exticr(n);
        self.bus
            .write_field(addr, shift, regs::syscfg::FIELD_EXTI, port.exti_code());

        self.bus.set_bits(exti::IMR, pin.mask());
    }

    /// Mask the pin's EXTI line if it currently listens to `port`
    fn unroute_interrupt(&mut self, port: Port, pin: PinNumber) {
        if self.bus.read(exti::IMR) & pin.mask() == 0 {
            return;
        }
        if self.exti_source(pin) == Some(port) {
            self.bus.clear_bits(exti::IMR, pin.mask());
        }
    }

    /// Port currently selected for the EXTI line of `pin`
    ///
    /// `None` while the SYSCFG clock is gated: EXTICR then reads as zero,
    /// which would otherwise look like port A.
    fn exti_source(&self, pin: PinNumber) -> Option<Port> {
        if self.bus.read(rcc::APB2ENR) & rcc::APB2ENR_SYSCFGEN == 0 {
            return None;
        }
        let (addr, shift) = regs::exticr(pin.bits() as u32);
        let code = self.bus.read_field(addr, shift, regs::syscfg::FIELD_EXTI);
        Port::from_index(code as usize)
    }

    /// Decode the current register state of one pin
    pub fn read_config(&self, port: Port, pin: PinNumber) -> PinConfig {
        let base = port.base_address();
        let n = pin.bits() as u32;
        let field = |offset: u32| self.bus.read_field(base + offset, gpio::FIELD2 * n, gpio::FIELD2);

        let otype = OutputType::from_bits(self.bus.read_field(base + gpio::OTYPER, n, 1));
        let mode = match field(gpio::MODER) {
            0b00 => self.input_mode(port, pin),
            0b01 => PinMode::Output(otype),
            0b10 => {
                let (offset, shift) = regs::afr(n);
                let af = self.bus.read_field(base + offset, shift, gpio::FIELD_AF) as u8;
                match AltFunction::new(af) {
                    Some(af) => PinMode::Alternate(af, otype),
                    None => PinMode::Input,
                }
            }
            _ => PinMode::Analog,
        };

        PinConfig {
            pin,
            mode,
            speed: Speed::from_bits(field(gpio::OSPEEDR)),
            pull: Pull::from_bits(field(gpio::PUPDR)),
        }
    }

    /// Input or interrupt, depending on the EXTI routing of the pin
    fn input_mode(&self, port: Port, pin: PinNumber) -> PinMode {
        let n = pin.bits() as u32;
        if self.bus.read(exti::IMR) & pin.mask() == 0 || self.exti_source(pin) != Some(port) {
            return PinMode::Input;
        }
        let rising = self.bus.read_field(exti::RTSR, n, 1) == 1;
        let falling = self.bus.read_field(exti::FTSR, n, 1) == 1;
        match Edge::from_triggers(rising, falling) {
            Some(edge) => PinMode::Interrupt(edge),
            None => PinMode::Input,
        }
    }

    /// Sample the logic level of one pin
    pub fn read_input(&self, port: Port, pin: PinNumber) -> PinState {
        let idr = self.bus.read(port.base_address() + gpio::IDR);
        PinState::from_bit(idr >> pin.bits())
    }

    /// Sample all sixteen pins of a port
    pub fn read_input_port(&self, port: Port) -> u16 {
        self.bus.read(port.base_address() + gpio::IDR) as u16
    }

    /// Level the output data register drives on one pin
    pub fn output_state(&self, port: Port, pin: PinNumber) -> PinState {
        let odr = self.bus.read(port.base_address() + gpio::ODR);
        PinState::from_bit(odr >> pin.bits())
    }

    /// Drive one pin to `state`
    ///
    /// Uses the bit set/reset register: one store, no read-modify-write.
    pub fn write_output(&mut self, port: Port, pin: PinNumber, state: PinState) {
        let bits = match state {
            PinState::High => pin.mask(),
            PinState::Low => pin.mask() << 16,
        };
        self.bus.write(port.base_address() + gpio::BSRR, bits);
    }

    /// Overwrite the whole output data register of a port
    pub fn write_output_port(&mut self, port: Port, value: u16) {
        self.bus.write(port.base_address() + gpio::ODR, value as u32);
    }

    /// Flip the driven level of one pin
    ///
    /// Read-modify-write of the port's output data register.
    pub fn toggle_output(&mut self, port: Port, pin: PinNumber) {
        self.bus
            .modify(port.base_address() + gpio::ODR, |odr| odr ^ pin.mask());
        trace!("GPIO{}{}: toggle", port.letter(), pin.bits());
    }

    /// Set the NVIC priority of an interrupt line
    pub fn configure_interrupt_priority(&mut self, irq: Interrupt, priority: Priority) {
        let (addr, shift) = regs::nvic_priority(irq.number());
        self.bus
            .write_field(addr, shift, nvic::PRIO_BITS, priority.level() as u32);
        debug!("{}: priority {}", irq, priority.level());
    }

    /// Current NVIC priority of an interrupt line
    pub fn interrupt_priority(&self, irq: Interrupt) -> Priority {
        let (addr, shift) = regs::nvic_priority(irq.number());
        let level = self.bus.read_field(addr, shift, nvic::PRIO_BITS) as u8;
        // A 4-bit field always fits
        Priority::new(level).unwrap_or(Priority::LOWEST)
    }

    /// Enable or disable an interrupt line in the NVIC
    pub fn set_interrupt_enabled(&mut self, irq: Interrupt, enabled: bool) {
        let (offset, bit) = regs::nvic_enable(irq.number());
        let base = if enabled { nvic::ISER } else { nvic::ICER };
        self.bus.write(base + offset, bit);
        debug!("{}: enabled {}", irq, enabled);
    }

    /// Check whether an interrupt line is enabled in the NVIC
    pub fn is_interrupt_enabled(&self, irq: Interrupt) -> bool {
        let (offset, bit) = regs::nvic_enable(irq.number());
        self.bus.read(nvic::ISER + offset) & bit != 0
    }

    /// Check whether the EXTI pending flag of `pin` is set
    pub fn is_interrupt_pending(&self, pin: PinNumber) -> bool {
        self.bus.read(exti::PR) & pin.mask() != 0
    }

    /// Clear the EXTI pending flag of `pin`
    ///
    /// Writes only the pin's bit: the pending register is write-one-to-clear,
    /// so other pins sharing the line keep their flags. Returns whether the
    /// flag was set.
    pub fn acknowledge_interrupt(&mut self, pin: PinNumber) -> bool {
        let was_pending = self.is_interrupt_pending(pin);
        if was_pending {
            self.bus.write(exti::PR, pin.mask());
            trace!("EXTI{}: acknowledged", pin.bits());
        }
        was_pending
    }

    /// Borrow one pin as a digital I/O handle
    pub fn pin(&mut self, port: Port, pin: PinNumber) -> Pin<'_, B> {
        Pin::new(self, port, pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PINS_PER_PORT;
    use crate::sim::SimBus;
    use proptest::prelude::*;

    fn driver() -> GpioDriver<SimBus> {
        let mut gpio = GpioDriver::new(SimBus::new());
        for port in Port::ALL {
            gpio.enable_clock(port, true);
        }
        gpio
    }

    fn mode_strategy() -> impl Strategy<Value = PinMode> {
        let otype = prop_oneof![Just(OutputType::PushPull), Just(OutputType::OpenDrain)];
        let edge = prop_oneof![Just(Edge::Rising), Just(Edge::Falling), Just(Edge::Both)];
        prop_oneof![
            Just(PinMode::Input),
            Just(PinMode::Analog),
            otype.clone().prop_map(PinMode::Output),
            (0u8..16, otype).prop_map(|(af, otype)| {
                PinMode::Alternate(AltFunction::new(af).unwrap(), otype)
            }),
            edge.prop_map(PinMode::Interrupt),
        ]
    }

    fn config_strategy() -> impl Strategy<Value = PinHandle> {
        let port = (0usize..Port::ALL.len()).prop_map(|i| Port::ALL[i]);
        let pin = (0u8..PINS_PER_PORT).prop_map(|n| PinNumber::new(n).unwrap());
        let speed = prop_oneof![
            Just(Speed::Low),
            Just(Speed::Medium),
            Just(Speed::Fast),
            Just(Speed::High)
        ];
        let pull = prop_oneof![Just(Pull::None), Just(Pull::Up), Just(Pull::Down)];
        (port, pin, mode_strategy(), speed, pull).prop_map(|(port, pin, mode, speed, pull)| {
            PinHandle::new(port, PinConfig::new(pin, mode).with_speed(speed).with_pull(pull))
        })
    }

    proptest! {
        #[test]
        fn prop_initialize_reads_back(handle in config_strategy()) {
            let mut gpio = driver();
            gpio.initialize(&handle);
            prop_assert_eq!(gpio.read_config(handle.port, handle.pin()), handle.config);
        }

        #[test]
        fn prop_initialize_leaves_other_pins(
            first in config_strategy(),
            second in config_strategy(),
        ) {
            prop_assume!(first.port != second.port || first.pin() != second.pin());
            // Two interrupt pins on one EXTI line cannot both be routed
            prop_assume!(
                first.config.mode.edge().is_none()
                    || second.config.mode.edge().is_none()
                    || first.pin() != second.pin()
            );
            let mut gpio = driver();
            gpio.initialize(&first);
            gpio.initialize(&second);
            prop_assert_eq!(gpio.read_config(first.port, first.pin()), first.config);
        }
    }

    #[test]
    fn test_register_bit_pattern() {
        let mut gpio = driver();
        let handle = PinHandle::new(
            Port::D,
            PinConfig::new(PinNumber::P12, PinMode::Output(OutputType::OpenDrain))
                .with_speed(Speed::Fast)
                .with_pull(Pull::Down),
        );
        gpio.initialize(&handle);

        let base = Port::D.base_address();
        let bus = gpio.bus();
        assert_eq!(bus.read(base + gpio::MODER), 0b01 << 24);
        assert_eq!(bus.read(base + gpio::OSPEEDR), 0b10 << 24);
        assert_eq!(bus.read(base + gpio::PUPDR), 0b10 << 24);
        assert_eq!(bus.read(base + gpio::OTYPER), 1 << 12);
    }

    #[test]
    fn test_alternate_function_high_register() {
        let mut gpio = driver();
        let af = AltFunction::new(5).unwrap();
        let handle = PinHandle::new(
            Port::B,
            PinConfig::new(PinNumber::P10, PinMode::Alternate(af, OutputType::PushPull)),
        );
        gpio.initialize(&handle);

        let base = Port::B.base_address();
        assert_eq!(gpio.bus().read(base + gpio::AFRH) & 0xF00, 5 << 8);
        assert_eq!(gpio.bus().read(base + gpio::AFRL), 0);
    }

    #[test]
    fn test_clock_enable() {
        let mut gpio = GpioDriver::new(SimBus::new());
        assert!(!gpio.is_clock_enabled(Port::A));

        gpio.enable_clock(Port::A, true);
        gpio.enable_clock(Port::D, true);
        assert_eq!(gpio.bus().read(rcc::AHB1ENR), 0b1001);

        gpio.enable_clock(Port::A, false);
        assert!(!gpio.is_clock_enabled(Port::A));
        assert!(gpio.is_clock_enabled(Port::D));
    }

    #[test]
    fn test_unclocked_port_ignores_writes() {
        let mut gpio = GpioDriver::new(SimBus::new());
        gpio.initialize(&PinHandle::new(Port::E, PinConfig::output(PinNumber::P3)));

        // The write was lost while the clock was gated
        gpio.enable_clock(Port::E, true);
        assert_eq!(gpio.bus().read(Port::E.base_address() + gpio::MODER), 0);
    }

    #[test]
    fn test_write_then_read() {
        let mut gpio = driver();
        gpio.initialize(&PinHandle::new(Port::D, PinConfig::output(PinNumber::P12)));

        gpio.write_output(Port::D, PinNumber::P12, PinState::High);
        assert_eq!(gpio.read_input(Port::D, PinNumber::P12), PinState::High);

        gpio.write_output(Port::D, PinNumber::P12, PinState::Low);
        assert_eq!(gpio.read_input(Port::D, PinNumber::P12), PinState::Low);
    }

    #[test]
    fn test_write_uses_set_reset_register() {
        let mut gpio = driver();
        let bsrr = Port::D.base_address() + gpio::BSRR;

        gpio.write_output(Port::D, PinNumber::P12, PinState::High);
        assert_eq!(gpio.bus().last_write(), Some((bsrr, 1 << 12)));

        gpio.write_output(Port::D, PinNumber::P12, PinState::Low);
        assert_eq!(gpio.bus().last_write(), Some((bsrr, 1 << 28)));
    }

    #[test]
    fn test_toggle_pair_restores_level() {
        let mut gpio = driver();
        gpio.initialize(&PinHandle::new(Port::D, PinConfig::output(PinNumber::P13)));
        gpio.write_output(Port::D, PinNumber::P13, PinState::High);
        gpio.write_output(Port::D, PinNumber::P14, PinState::High);

        gpio.toggle_output(Port::D, PinNumber::P13);
        assert_eq!(gpio.output_state(Port::D, PinNumber::P13), PinState::Low);
        gpio.toggle_output(Port::D, PinNumber::P13);
        assert_eq!(gpio.output_state(Port::D, PinNumber::P13), PinState::High);

        // Neighbouring pin untouched
        assert_eq!(gpio.output_state(Port::D, PinNumber::P14), PinState::High);
    }

    #[test]
    fn test_whole_port_access() {
        let mut gpio = driver();
        for pin in PinNumber::all() {
            gpio.initialize(&PinHandle::new(Port::C, PinConfig::output(pin)));
        }
        gpio.write_output_port(Port::C, 0xA5A5);
        assert_eq!(gpio.read_input_port(Port::C), 0xA5A5);
    }

    #[test]
    fn test_reset_port() {
        let mut gpio = driver();
        gpio.initialize(&PinHandle::new(Port::C, PinConfig::output(PinNumber::P0)));
        gpio.write_output(Port::C, PinNumber::P0, PinState::High);

        gpio.reset_port(Port::C);
        assert_eq!(
            gpio.read_config(Port::C, PinNumber::P0),
            PinConfig::input(PinNumber::P0)
        );
        assert_eq!(gpio.output_state(Port::C, PinNumber::P0), PinState::Low);
        assert_eq!(gpio.bus().read(rcc::AHB1RSTR), 0);
    }

    #[test]
    fn test_interrupt_routing() {
        let mut gpio = driver();
        let button = PinHandle::new(
            Port::D,
            PinConfig::interrupt(PinNumber::P5, Edge::Falling).with_pull(Pull::Up),
        );
        gpio.initialize(&button);

        let bus = gpio.bus();
        assert_ne!(bus.read(rcc::APB2ENR) & rcc::APB2ENR_SYSCFGEN, 0);
        assert_eq!(bus.read(exti::IMR), 1 << 5);
        assert_eq!(bus.read(exti::FTSR), 1 << 5);
        assert_eq!(bus.read(exti::RTSR), 0);
        // EXTICR2, line 5 field = port D code 3
        assert_eq!(bus.read(regs::syscfg::EXTICR1 + 4), 3 << 4);
    }

    #[test]
    fn test_reconfigure_masks_line() {
        let mut gpio = driver();
        gpio.initialize(&PinHandle::new(
            Port::A,
            PinConfig::interrupt(PinNumber::P0, Edge::Both),
        ));
        assert_ne!(gpio.bus().read(exti::IMR) & 1, 0);

        gpio.initialize(&PinHandle::new(Port::A, PinConfig::input(PinNumber::P0)));
        assert_eq!(gpio.bus().read(exti::IMR) & 1, 0);
    }

    #[test]
    fn test_reconfigure_other_port_keeps_line() {
        let mut gpio = driver();
        gpio.initialize(&PinHandle::new(
            Port::A,
            PinConfig::interrupt(PinNumber::P0, Edge::Rising),
        ));
        gpio.initialize(&PinHandle::new(Port::B, PinConfig::output(PinNumber::P0)));
        assert_eq!(
            gpio.read_config(Port::A, PinNumber::P0).mode,
            PinMode::Interrupt(Edge::Rising)
        );
    }

    #[test]
    fn test_gated_syscfg_keeps_other_port_line() {
        let mut gpio = driver();
        gpio.initialize(&PinHandle::new(
            Port::B,
            PinConfig::interrupt(PinNumber::P3, Edge::Rising),
        ));
        gpio.bus_mut()
            .clear_bits(rcc::APB2ENR, rcc::APB2ENR_SYSCFGEN);

        // Routing is unreadable, so port A must not claim line 3
        assert_eq!(
            gpio.read_config(Port::A, PinNumber::P3).mode,
            PinMode::Input
        );
        gpio.initialize(&PinHandle::new(Port::A, PinConfig::input(PinNumber::P3)));
        assert_eq!(gpio.bus().read(exti::IMR) & (1 << 3), 1 << 3);

        gpio.bus_mut().set_bits(rcc::APB2ENR, rcc::APB2ENR_SYSCFGEN);
        assert_eq!(
            gpio.read_config(Port::B, PinNumber::P3).mode,
            PinMode::Interrupt(Edge::Rising)
        );
    }

    #[test]
    fn test_both_edges_latch() {
        let mut gpio = driver();
        gpio.initialize(&PinHandle::new(
            Port::C,
            PinConfig::interrupt(PinNumber::P11, Edge::Both),
        ));

        gpio.bus_mut()
            .drive_input(Port::C, PinNumber::P11, PinState::High);
        assert!(gpio.acknowledge_interrupt(PinNumber::P11));

        gpio.bus_mut()
            .drive_input(Port::C, PinNumber::P11, PinState::Low);
        assert!(gpio.acknowledge_interrupt(PinNumber::P11));
        assert!(!gpio.is_interrupt_pending(PinNumber::P11));
    }

    #[test]
    fn test_priority_and_enable() {
        let mut gpio = driver();
        gpio.configure_interrupt_priority(Interrupt::Exti9_5, Priority::LOWEST);
        gpio.configure_interrupt_priority(Interrupt::Exti0, Priority::new(3).unwrap());

        assert_eq!(gpio.interrupt_priority(Interrupt::Exti9_5), Priority::LOWEST);
        assert_eq!(
            gpio.interrupt_priority(Interrupt::Exti0),
            Priority::new(3).unwrap()
        );
        // IPR5 byte 3, upper nibble
        assert_eq!(gpio.bus().read(nvic::IPR + 0x14), 0xF0 << 24);

        // Lowering the priority value clears the old field first
        gpio.configure_interrupt_priority(Interrupt::Exti9_5, Priority::new(1).unwrap());
        assert_eq!(gpio.bus().read(nvic::IPR + 0x14), 0x10 << 24);

        gpio.set_interrupt_enabled(Interrupt::Exti15_10, true);
        assert!(gpio.is_interrupt_enabled(Interrupt::Exti15_10));
        assert!(!gpio.is_interrupt_enabled(Interrupt::Exti0));
        assert_eq!(gpio.bus().last_write(), Some((nvic::ISER + 4, 1 << 8)));

        gpio.set_interrupt_enabled(Interrupt::Exti15_10, false);
        assert!(!gpio.is_interrupt_enabled(Interrupt::Exti15_10));
        assert_eq!(gpio.bus().last_write(), Some((nvic::ICER + 4, 1 << 8)));
    }

    #[test]
    fn test_acknowledge_clears_only_its_pin() {
        let mut gpio = driver();
        for pin in [PinNumber::P5, PinNumber::P7] {
            gpio.initialize(&PinHandle::new(
                Port::B,
                PinConfig::interrupt(pin, Edge::Rising),
            ));
        }
        gpio.bus_mut().drive_input(Port::B, PinNumber::P5, PinState::High);
        gpio.bus_mut().drive_input(Port::B, PinNumber::P7, PinState::High);
        assert!(gpio.is_interrupt_pending(PinNumber::P5));
        assert!(gpio.is_interrupt_pending(PinNumber::P7));

        assert!(gpio.acknowledge_interrupt(PinNumber::P5));
        assert_eq!(gpio.bus().last_write(), Some((exti::PR, 1 << 5)));
        assert!(!gpio.is_interrupt_pending(PinNumber::P5));
        assert!(gpio.is_interrupt_pending(PinNumber::P7));

        // Nothing left to clear for P5
        assert!(!gpio.acknowledge_interrupt(PinNumber::P5));
    }
}
