//! GPIO pin abstractions
//!
//! Digital pin traits that the driver's borrowed pin views implement, so
//! application code can be written against a single pin without knowing
//! which port or register file backs it.

/// Logic level of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl PinState {
    /// Level encoded in bit 0 of `bits`
    pub const fn from_bit(bits: u32) -> Self {
        if bits & 1 == 1 {
            PinState::High
        } else {
            PinState::Low
        }
    }

    /// The opposite level
    pub const fn inverted(self) -> Self {
        match self {
            PinState::Low => PinState::High,
            PinState::High => PinState::Low,
        }
    }

    pub const fn is_high(self) -> bool {
        matches!(self, PinState::High)
    }
}

impl From<bool> for PinState {
    fn from(high: bool) -> Self {
        if high {
            PinState::High
        } else {
            PinState::Low
        }
    }
}

impl From<PinState> for bool {
    fn from(state: PinState) -> bool {
        state.is_high()
    }
}

impl core::ops::Not for PinState {
    type Output = PinState;

    fn not(self) -> PinState {
        self.inverted()
    }
}

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin to `state`
    fn set_state(&mut self, state: PinState);

    /// Flip the driven level
    fn toggle(&mut self);

    /// Level the pin is currently driving
    fn output_state(&self) -> PinState;

    /// Set the pin high (logic 1)
    fn set_high(&mut self) {
        self.set_state(PinState::High);
    }

    /// Set the pin low (logic 0)
    fn set_low(&mut self) {
        self.set_state(PinState::Low);
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool {
        self.output_state().is_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Sample the pin level
    fn input_state(&self) -> PinState;

    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool {
        self.input_state().is_high()
    }

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
