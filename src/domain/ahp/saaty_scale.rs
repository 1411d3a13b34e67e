//! Saaty fundamental scale value object (1/9 to 9).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Highest intensity on the fundamental scale.
pub const MAX_INTENSITY: u8 = 9;

/// One point of Saaty's fundamental scale: an intensity `k` in 1..=9 or
/// its reciprocal `1/k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SaatyValue {
    intensity: u8,
    inverted: bool,
}

impl SaatyValue {
    /// Equal importance.
    pub const EQUAL: Self = Self {
        intensity: 1,
        inverted: false,
    };

    /// Creates `k` (the row item is `k` times as important).
    pub fn favoring(intensity: u8) -> Result<Self, ValidationError> {
        Self::checked(intensity, false)
    }

    /// Creates `1/k` (the column item is `k` times as important).
    pub fn against(intensity: u8) -> Result<Self, ValidationError> {
        Self::checked(intensity, true)
    }

    fn checked(intensity: u8, inverted: bool) -> Result<Self, ValidationError> {
        if !(1..=MAX_INTENSITY).contains(&intensity) {
            return Err(ValidationError::out_of_range(
                "saaty_intensity",
                1,
                i32::from(MAX_INTENSITY),
                i32::from(intensity),
            ));
        }
        // 1/1 is just 1
        Ok(Self {
            intensity,
            inverted: inverted && intensity != 1,
        })
    }

    /// Parses a scale label such as `"7"` or `"1/7"`.
    pub fn parse(label: &str) -> Result<Self, ValidationError> {
        let label = label.trim();
        let invalid = || {
            ValidationError::invalid_format(
                "saaty_value",
                format!("'{}' is not on the scale 1/9 .. 9", label),
            )
        };

        match label.split_once('/') {
            Some((numerator, denominator)) => {
                if numerator.trim() != "1" {
                    return Err(invalid());
                }
                let intensity: u8 = denominator.trim().parse().map_err(|_| invalid())?;
                Self::against(intensity).map_err(|_| invalid())
            }
            None => {
                let intensity: u8 = label.parse().map_err(|_| invalid())?;
                Self::favoring(intensity).map_err(|_| invalid())
            }
        }
    }

    /// All 17 scale points in ascending order, 1/9 first.
    pub fn all() -> Vec<Self> {
        let reciprocals = (2..=MAX_INTENSITY).rev().map(|k| Self {
            intensity: k,
            inverted: true,
        });
        let direct = (1..=MAX_INTENSITY).map(|k| Self {
            intensity: k,
            inverted: false,
        });
        reciprocals.chain(direct).collect()
    }

    /// Returns the numeric value stored in the judgment matrix.
    pub fn value(&self) -> f64 {
        let k = f64::from(self.intensity);
        if self.inverted {
            1.0 / k
        } else {
            k
        }
    }

    /// Returns the mirrored judgment (`k` becomes `1/k` and back).
    pub fn reciprocal(&self) -> Self {
        Self {
            intensity: self.intensity,
            inverted: !self.inverted && self.intensity != 1,
        }
    }

    /// Returns the intensity regardless of direction.
    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    /// Returns the scale label, e.g. `"1/5"`.
    pub fn label(&self) -> String {
        if self.inverted {
            format!("1/{}", self.intensity)
        } else {
            self.intensity.to_string()
        }
    }

    /// Returns Saaty's verbal meaning of the intensity.
    pub fn meaning(&self) -> &'static str {
        match self.intensity {
            1 => "Equal importance",
            3 => "Moderate importance",
            5 => "Strong importance",
            7 => "Very strong importance",
            9 => "Extreme importance",
            _ => "Intermediate value",
        }
    }
}

impl Default for SaatyValue {
    fn default() -> Self {
        Self::EQUAL
    }
}

impl fmt::Display for SaatyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SaatyValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SaatyValue {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SaatyValue> for String {
    fn from(value: SaatyValue) -> Self {
        value.label()
    }
}
