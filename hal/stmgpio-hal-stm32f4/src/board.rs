//! STM32F4-Discovery pin assignments
//!
//! The four user LEDs sit on PD12..PD15 (active high). The blue user
//! button on PA0 has an external pull-down and reads high while pressed.

use stmgpio_core::{
    Edge, GpioDriver, Interrupt, PinConfig, PinHandle, PinNumber, Port, Priority,
};
use stmgpio_hal::RegisterBus;

pub const LED_GREEN: PinHandle = PinHandle::new(Port::D, PinConfig::output(PinNumber::P12));
pub const LED_ORANGE: PinHandle = PinHandle::new(Port::D, PinConfig::output(PinNumber::P13));
pub const LED_RED: PinHandle = PinHandle::new(Port::D, PinConfig::output(PinNumber::P14));
pub const LED_BLUE: PinHandle = PinHandle::new(Port::D, PinConfig::output(PinNumber::P15));

pub const LEDS: [PinHandle; 4] = [LED_GREEN, LED_ORANGE, LED_RED, LED_BLUE];

/// User button, interrupting on press
pub const USER_BUTTON: PinHandle = PinHandle::new(
    Port::A,
    PinConfig::interrupt(PinNumber::P0, Edge::Rising),
);

/// Interrupt line the user button fires
pub const USER_BUTTON_IRQ: Interrupt = Interrupt::for_pin(PinNumber::P0);

/// Clock the LED and button ports, configure the pins and enable the
/// button interrupt at the lowest priority
pub fn init<B: RegisterBus>(gpio: &mut GpioDriver<B>) {
    gpio.enable_clock(Port::A, true);
    gpio.enable_clock(Port::D, true);

    for led in &LEDS {
        gpio.initialize(led);
    }
    gpio.initialize(&USER_BUTTON);

    gpio.configure_interrupt_priority(USER_BUTTON_IRQ, Priority::LOWEST);
    gpio.set_interrupt_enabled(USER_BUTTON_IRQ, true);
}
