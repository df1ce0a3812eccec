//! Borrowed single-pin view
//!
//! [`Pin`] lets code that only cares about one pin (an LED, a button) use
//! the `stmgpio-hal` pin traits or the `embedded-hal` 1.0 digital traits
//! without knowing the port or the register bus behind it.

use core::convert::Infallible;

use stmgpio_hal::{InputPin, OutputPin, PinState, RegisterBus};

use crate::config::{PinNumber, Port};
use crate::driver::GpioDriver;

/// One pin of a port, borrowed from the driver
pub struct Pin<'a, B> {
    driver: &'a mut GpioDriver<B>,
    port: Port,
    pin: PinNumber,
}

impl<'a, B: RegisterBus> Pin<'a, B> {
    pub(crate) fn new(driver: &'a mut GpioDriver<B>, port: Port, pin: PinNumber) -> Self {
        Self { driver, port, pin }
    }

    pub fn port(&self) -> Port {
        self.port
    }

    pub fn number(&self) -> PinNumber {
        self.pin
    }
}

impl<B: RegisterBus> OutputPin for Pin<'_, B> {
    fn set_state(&mut self, state: PinState) {
        self.driver.write_output(self.port, self.pin, state);
    }

    fn toggle(&mut self) {
        self.driver.toggle_output(self.port, self.pin);
    }

    fn output_state(&self) -> PinState {
        self.driver.output_state(self.port, self.pin)
    }
}

impl<B: RegisterBus> InputPin for Pin<'_, B> {
    fn input_state(&self) -> PinState {
        self.driver.read_input(self.port, self.pin)
    }
}

impl<B: RegisterBus> embedded_hal::digital::ErrorType for Pin<'_, B> {
    type Error = Infallible;
}

impl<B: RegisterBus> embedded_hal::digital::OutputPin for Pin<'_, B> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        OutputPin::set_low(self);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        OutputPin::set_high(self);
        Ok(())
    }
}

impl<B: RegisterBus> embedded_hal::digital::StatefulOutputPin for Pin<'_, B> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(OutputPin::is_set_high(&*self))
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!OutputPin::is_set_high(&*self))
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        OutputPin::toggle(self);
        Ok(())
    }
}

impl<B: RegisterBus> embedded_hal::digital::InputPin for Pin<'_, B> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(InputPin::is_high(&*self))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(InputPin::is_low(&*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PinConfig, PinHandle};
    use crate::sim::SimBus;

    fn led_driver() -> GpioDriver<SimBus> {
        let mut gpio = GpioDriver::new(SimBus::new());
        gpio.enable_clock(Port::D, true);
        gpio.initialize(&PinHandle::new(Port::D, PinConfig::output(PinNumber::P12)));
        gpio
    }

    #[test]
    fn test_hal_traits() {
        let mut gpio = led_driver();
        let mut led = gpio.pin(Port::D, PinNumber::P12);

        OutputPin::set_high(&mut led);
        assert!(OutputPin::is_set_high(&led));
        assert!(InputPin::is_high(&led));

        OutputPin::toggle(&mut led);
        assert!(InputPin::is_low(&led));
        assert_eq!(led.number(), PinNumber::P12);
    }

    #[test]
    fn test_embedded_hal_traits() {
        use embedded_hal::digital::{InputPin as EhInput, OutputPin as EhOutput, StatefulOutputPin};

        let mut gpio = led_driver();
        let mut led = gpio.pin(Port::D, PinNumber::P12);

        EhOutput::set_high(&mut led).unwrap();
        assert!(StatefulOutputPin::is_set_high(&mut led).unwrap());
        StatefulOutputPin::toggle(&mut led).unwrap();
        assert!(StatefulOutputPin::is_set_low(&mut led).unwrap());
        assert!(EhInput::is_low(&mut led).unwrap());
    }

    /// Generic code written against embedded-hal drives the pin
    fn blink<P: embedded_hal::digital::StatefulOutputPin>(pin: &mut P, times: usize) {
        for _ in 0..times {
            pin.toggle().ok();
        }
    }

    #[test]
    fn test_generic_embedded_hal_consumer() {
        let mut gpio = led_driver();
        blink(&mut gpio.pin(Port::D, PinNumber::P12), 3);
        assert_eq!(gpio.output_state(Port::D, PinNumber::P12), PinState::High);
    }
}
