//! EXTI interrupt lines as seen by the NVIC

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::PinNumber;

/// NVIC interrupt line that carries GPIO external interrupts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Interrupt {
    Exti0,
    Exti1,
    Exti2,
    Exti3,
    Exti4,
    /// Shared by pins 5-9
    Exti9_5,
    /// Shared by pins 10-15
    Exti15_10,
}

impl Interrupt {
    pub const ALL: [Interrupt; 7] = [
        Interrupt::Exti0,
        Interrupt::Exti1,
        Interrupt::Exti2,
        Interrupt::Exti3,
        Interrupt::Exti4,
        Interrupt::Exti9_5,
        Interrupt::Exti15_10,
    ];

    /// Position in the STM32F407 vector table (IRQn)
    pub const fn number(self) -> u32 {
        match self {
            Interrupt::Exti0 => 6,
            Interrupt::Exti1 => 7,
            Interrupt::Exti2 => 8,
            Interrupt::Exti3 => 9,
            Interrupt::Exti4 => 10,
            Interrupt::Exti9_5 => 23,
            Interrupt::Exti15_10 => 40,
        }
    }

    /// Line that raises interrupts for `pin`
    pub const fn for_pin(pin: PinNumber) -> Self {
        match pin.bits() {
            0 => Interrupt::Exti0,
            1 => Interrupt::Exti1,
            2 => Interrupt::Exti2,
            3 => Interrupt::Exti3,
            4 => Interrupt::Exti4,
            5..=9 => Interrupt::Exti9_5,
            _ => Interrupt::Exti15_10,
        }
    }

    /// EXTI pending/mask bits multiplexed onto this line
    pub const fn pin_mask(self) -> u32 {
        match self {
            Interrupt::Exti0 => 1 << 0,
            Interrupt::Exti1 => 1 << 1,
            Interrupt::Exti2 => 1 << 2,
            Interrupt::Exti3 => 1 << 3,
            Interrupt::Exti4 => 1 << 4,
            Interrupt::Exti9_5 => 0x0000_03E0,
            Interrupt::Exti15_10 => 0x0000_FC00,
        }
    }

    /// Pins multiplexed onto this line
    pub fn pins(self) -> impl Iterator<Item = PinNumber> {
        let mask = self.pin_mask();
        PinNumber::all().filter(move |pin| mask & pin.mask() != 0)
    }
}

/// NVIC priority level (0 = most urgent, 15 = least)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Priority(u8);

impl Priority {
    pub const HIGHEST: Priority = Priority(0);
    pub const LOWEST: Priority = Priority(15);

    /// Create a priority, or `None` if `level` exceeds the 4 implemented bits
    pub const fn new(level: u8) -> Option<Self> {
        if level <= 15 {
            Some(Self(level))
        } else {
            None
        }
    }

    pub const fn level(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Priority {
    type Error = u8;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or(level)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> u8 {
        priority.0
    }
}
