//! Pin configuration type definitions
//!
//! Every field is a bounded type: a pin number above 15, an alternate
//! function above 15, or an output type on an input pin cannot be
//! constructed, so `GpioDriver::initialize` never has to validate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::regs;

/// Number of GPIO ports (A..I)
pub const PORT_COUNT: usize = 9;

/// Pins per port
pub const PINS_PER_PORT: u8 = 16;

/// GPIO port instance
///
/// Each variant maps to exactly one register block base address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
}

impl Port {
    /// All ports, in register-block order
    pub const ALL: [Port; PORT_COUNT] = [
        Port::A,
        Port::B,
        Port::C,
        Port::D,
        Port::E,
        Port::F,
        Port::G,
        Port::H,
        Port::I,
    ];

    /// Zero-based port index (A = 0)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Port from its index
    pub const fn from_index(index: usize) -> Option<Port> {
        if index < PORT_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Port from its letter ('A'..='I', case-insensitive)
    pub fn from_letter(letter: char) -> Option<Port> {
        let upper = letter.to_ascii_uppercase();
        if !('A'..='I').contains(&upper) {
            return None;
        }
        Self::from_index(upper as usize - 'A' as usize)
    }

    /// Port letter
    pub const fn letter(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Base address of the port's register block
    pub const fn base_address(self) -> u32 {
        regs::gpio::BASE + regs::gpio::STRIDE * self as u32
    }

    /// Source selector written to `SYSCFG_EXTICRx` to route a line to this port
    pub const fn exti_code(self) -> u32 {
        self as u32
    }

    /// Clock enable / reset bit in `RCC_AHB1ENR` and `RCC_AHB1RSTR`
    pub const fn rcc_bit(self) -> u32 {
        1 << self as u32
    }
}

/// Pin number within a port (0-15)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct PinNumber(u8);

/// Rejected pin number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidPinNumber(pub u8);

impl core::fmt::Display for InvalidPinNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "pin number {} out of range 0-15", self.0)
    }
}

impl PinNumber {
    pub const P0: PinNumber = PinNumber(0);
    pub const P1: PinNumber = PinNumber(1);
    pub const P2: PinNumber = PinNumber(2);
    pub const P3: PinNumber = PinNumber(3);
    pub const P4: PinNumber = PinNumber(4);
    pub const P5: PinNumber = PinNumber(5);
    pub const P6: PinNumber = PinNumber(6);
    pub const P7: PinNumber = PinNumber(7);
    pub const P8: PinNumber = PinNumber(8);
    pub const P9: PinNumber = PinNumber(9);
    pub const P10: PinNumber = PinNumber(10);
    pub const P11: PinNumber = PinNumber(11);
    pub const P12: PinNumber = PinNumber(12);
    pub const P13: PinNumber = PinNumber(13);
    pub const P14: PinNumber = PinNumber(14);
    pub const P15: PinNumber = PinNumber(15);

    /// Create a pin number, or `None` if `n` is not 0-15
    pub const fn new(n: u8) -> Option<Self> {
        if n < PINS_PER_PORT {
            Some(Self(n))
        } else {
            None
        }
    }

    /// All sixteen pin numbers in ascending order
    pub fn all() -> impl Iterator<Item = PinNumber> {
        (0..PINS_PER_PORT).map(PinNumber)
    }

    /// Raw pin number
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Single-bit mask for per-pin registers (IDR, ODR, IMR, PR, ...)
    pub const fn mask(self) -> u32 {
        1 << self.0
    }
}

impl TryFrom<u8> for PinNumber {
    type Error = InvalidPinNumber;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n).ok_or(InvalidPinNumber(n))
    }
}

impl From<PinNumber> for u8 {
    fn from(pin: PinNumber) -> u8 {
        pin.0
    }
}

/// Alternate function selector (AF0-AF15)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct AltFunction(u8);

impl AltFunction {
    /// Create an alternate function selector, or `None` if `n` is not 0-15
    pub const fn new(n: u8) -> Option<Self> {
        if n < 16 {
            Some(Self(n))
        } else {
            None
        }
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for AltFunction {
    type Error = u8;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n).ok_or(n)
    }
}

impl From<AltFunction> for u8 {
    fn from(af: AltFunction) -> u8 {
        af.0
    }
}

/// Output driver type (`GPIOx_OTYPER`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutputType {
    #[default]
    PushPull,
    OpenDrain,
}

impl OutputType {
    pub const fn bits(self) -> u32 {
        match self {
            OutputType::PushPull => 0,
            OutputType::OpenDrain => 1,
        }
    }

    pub const fn from_bits(bits: u32) -> Self {
        if bits & 1 == 1 {
            OutputType::OpenDrain
        } else {
            OutputType::PushPull
        }
    }
}

/// Output slew rate class (`GPIOx_OSPEEDR`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Speed {
    #[default]
    Low,
    Medium,
    Fast,
    High,
}

impl Speed {
    pub const fn bits(self) -> u32 {
        match self {
            Speed::Low => 0b00,
            Speed::Medium => 0b01,
            Speed::Fast => 0b10,
            Speed::High => 0b11,
        }
    }

    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0b00 => Speed::Low,
            0b01 => Speed::Medium,
            0b10 => Speed::Fast,
            _ => Speed::High,
        }
    }
}

/// Internal pull resistor (`GPIOx_PUPDR`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Pull {
    #[default]
    None,
    Up,
    Down,
}

impl Pull {
    pub const fn bits(self) -> u32 {
        match self {
            Pull::None => 0b00,
            Pull::Up => 0b01,
            Pull::Down => 0b10,
        }
    }

    /// Decode a `PUPDR` field; the reserved value `0b11` reads as `None`
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0b01 => Pull::Up,
            0b10 => Pull::Down,
            _ => Pull::None,
        }
    }
}

/// Edge that raises an external interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Edge {
    Rising,
    Falling,
    Both,
}

impl Edge {
    /// Rising-edge trigger selected (`EXTI_RTSR`)
    pub const fn rising(self) -> bool {
        matches!(self, Edge::Rising | Edge::Both)
    }

    /// Falling-edge trigger selected (`EXTI_FTSR`)
    pub const fn falling(self) -> bool {
        matches!(self, Edge::Falling | Edge::Both)
    }

    /// Edge selection from the two trigger bits, `None` if neither is set
    pub const fn from_triggers(rising: bool, falling: bool) -> Option<Self> {
        match (rising, falling) {
            (true, true) => Some(Edge::Both),
            (true, false) => Some(Edge::Rising),
            (false, true) => Some(Edge::Falling),
            (false, false) => None,
        }
    }
}

/// Pin operating mode
///
/// The output type only exists for modes that drive the pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PinMode {
    /// Digital input
    Input,
    /// General-purpose output
    Output(OutputType),
    /// Peripheral-controlled pin
    Alternate(AltFunction, OutputType),
    /// Analog (digital input buffer disabled)
    Analog,
    /// Digital input that raises an EXTI interrupt on the given edge
    Interrupt(Edge),
}

impl PinMode {
    /// Push-pull output, the common case
    pub const OUTPUT: PinMode = PinMode::Output(OutputType::PushPull);

    /// `GPIOx_MODER` field value
    pub const fn moder_bits(self) -> u32 {
        match self {
            PinMode::Input | PinMode::Interrupt(_) => 0b00,
            PinMode::Output(_) => 0b01,
            PinMode::Alternate(..) => 0b10,
            PinMode::Analog => 0b11,
        }
    }

    /// Output type written to `GPIOx_OTYPER`
    ///
    /// Modes that do not drive the pin leave it at the push-pull reset value.
    pub const fn output_type(self) -> OutputType {
        match self {
            PinMode::Output(otype) | PinMode::Alternate(_, otype) => otype,
            _ => OutputType::PushPull,
        }
    }

    /// Interrupt edge, if this is an interrupt mode
    pub const fn edge(self) -> Option<Edge> {
        match self {
            PinMode::Interrupt(edge) => Some(edge),
            _ => None,
        }
    }

    /// Alternate function, if this is alternate-function mode
    pub const fn alt_function(self) -> Option<AltFunction> {
        match self {
            PinMode::Alternate(af, _) => Some(af),
            _ => None,
        }
    }

    /// Whether the output data register drives the pin
    pub const fn drives_pin(self) -> bool {
        matches!(self, PinMode::Output(_) | PinMode::Alternate(..))
    }
}

/// Configuration of a single pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// Pin number within the port
    pub pin: PinNumber,
    /// Operating mode
    pub mode: PinMode,
    /// Output speed class
    pub speed: Speed,
    /// Pull resistor
    pub pull: Pull,
}

impl PinConfig {
    /// Create a config with reset-value speed and no pull resistor
    pub const fn new(pin: PinNumber, mode: PinMode) -> Self {
        Self {
            pin,
            mode,
            speed: Speed::Low,
            pull: Pull::None,
        }
    }

    /// Floating digital input
    pub const fn input(pin: PinNumber) -> Self {
        Self::new(pin, PinMode::Input)
    }

    /// Push-pull output
    pub const fn output(pin: PinNumber) -> Self {
        Self::new(pin, PinMode::OUTPUT)
    }

    /// Edge-triggered interrupt input
    pub const fn interrupt(pin: PinNumber, edge: Edge) -> Self {
        Self::new(pin, PinMode::Interrupt(edge))
    }

    pub const fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    pub const fn with_pull(mut self, pull: Pull) -> Self {
        self.pull = pull;
        self
    }
}

/// A port paired with one pin configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinHandle {
    pub port: Port,
    pub config: PinConfig,
}

impl PinHandle {
    pub const fn new(port: Port, config: PinConfig) -> Self {
        Self { port, config }
    }

    /// Pin number of the configured pin
    pub const fn pin(&self) -> PinNumber {
        self.config.pin
    }
}
