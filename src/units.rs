//! Frequency and length unit conversions.
//!
//! Conversions are plain multiplications; rounding happens only when a value
//! is formatted for display.

use crate::float_types::{METER_TO_INCH, Real};
use std::fmt::Display;
use std::str::FromStr;

/// Unit a frequency is entered or displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrequencyUnit {
    Hz,
    KHz,
    #[default]
    MHz,
    GHz,
}

impl FrequencyUnit {
    /// Hertz per one of this unit.
    pub const fn multiplier(self) -> Real {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
            FrequencyUnit::MHz => 1e6,
            FrequencyUnit::GHz => 1e9,
        }
    }

    /// `value` in this unit, expressed in Hz.
    #[inline]
    pub fn to_hz(self, value: Real) -> Real {
        value * self.multiplier()
    }

    /// `hz` expressed in this unit.
    #[inline]
    pub fn from_hz(self, hz: Real) -> Real {
        hz / self.multiplier()
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            FrequencyUnit::Hz => "Hz",
            FrequencyUnit::KHz => "kHz",
            FrequencyUnit::MHz => "MHz",
            FrequencyUnit::GHz => "GHz",
        }
    }
}

impl Display for FrequencyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when a unit string is not one of Hz, kHz, MHz, GHz.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown frequency unit '{0}'")]
pub struct UnknownUnit(pub String);

impl FromStr for FrequencyUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hz" => Ok(FrequencyUnit::Hz),
            "khz" => Ok(FrequencyUnit::KHz),
            "mhz" => Ok(FrequencyUnit::MHz),
            "ghz" => Ok(FrequencyUnit::GHz),
            _ => Err(UnknownUnit(s.to_string())),
        }
    }
}

#[inline]
pub fn meters_to_inches(meters: Real) -> Real {
    meters * METER_TO_INCH
}

#[inline]
pub fn inches_to_meters(inches: Real) -> Real {
    inches / METER_TO_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_units_scale_by_thousands() {
        assert_eq!(FrequencyUnit::KHz.to_hz(2.5), 2_500.0);
        assert_eq!(FrequencyUnit::GHz.to_hz(1.2), 1.2e9);
        assert_eq!(FrequencyUnit::MHz.from_hz(433e6), 433.0);
        assert_eq!(FrequencyUnit::Hz.from_hz(50.0), 50.0);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("kHz".parse::<FrequencyUnit>(), Ok(FrequencyUnit::KHz));
        assert_eq!(" GHZ ".parse::<FrequencyUnit>(), Ok(FrequencyUnit::GHz));
        assert!("THz".parse::<FrequencyUnit>().is_err());
        assert_eq!(FrequencyUnit::MHz.to_string(), "MHz");
    }

    #[test]
    fn inches() {
        assert!((meters_to_inches(1.0) - 39.3701).abs() < 1e-12);
        assert!((inches_to_meters(meters_to_inches(0.25)) - 0.25).abs() < 1e-12);
    }
}
