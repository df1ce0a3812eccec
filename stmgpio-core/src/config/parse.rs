//! Pin name parsing
//!
//! Board descriptions name pins the way the reference manual and the
//! silkscreen do:
//! - "PA0" -> (Port A, Pin 0, active-high)
//! - "!PD12" -> (Port D, Pin 12, active-low)

use super::types::{PinNumber, Port};

/// Pin string parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinParseError {
    /// Missing the leading 'P'
    MissingPrefix,
    /// Port letter outside A-I
    InvalidPort,
    /// Pin number missing, not a number, or above 15
    InvalidPin,
}

/// A named pin reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinName {
    pub port: Port,
    pub pin: PinNumber,
    /// Logic is active-low
    pub inverted: bool,
}

/// Parse a pin string such as "PD12" or "!PA0"
pub fn parse_pin_string(s: &str) -> Result<PinName, PinParseError> {
    let s = s.trim();

    let (s, inverted) = match s.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (s, false),
    };

    let s = s
        .strip_prefix('P')
        .or_else(|| s.strip_prefix('p'))
        .ok_or(PinParseError::MissingPrefix)?;

    let mut chars = s.chars();
    let port = chars
        .next()
        .and_then(Port::from_letter)
        .ok_or(PinParseError::InvalidPort)?;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PinParseError::InvalidPin);
    }
    let pin = digits
        .parse::<u8>()
        .ok()
        .and_then(PinNumber::new)
        .ok_or(PinParseError::InvalidPin)?;

    Ok(PinName {
        port,
        pin,
        inverted,
    })
}
