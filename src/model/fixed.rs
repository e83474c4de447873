//! Fixed-precision decimals for rates and averages.
//!
//! Values are kept as a scaled integer so that the same counts always print
//! the same string; no floating point is involved in rounding.

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Sub;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fixed {
    scaled: i64,
    places: u8,
}

impl Fixed {
    /// A value given directly in units of `10^-places`
    pub const fn from_scaled(scaled: i64, places: u8) -> Self {
        Self { scaled, places }
    }

    pub const fn zero(places: u8) -> Self {
        Self { scaled: 0, places }
    }

    /// `numerator / denominator` rounded half away from zero to `places`
    /// decimals. A zero denominator yields zero.
    pub fn from_ratio(numerator: u64, denominator: u64, places: u8) -> Self {
        if denominator == 0 {
            return Self::zero(places);
        }
        let n = numerator as u128 * 10u128.pow(places as u32);
        let d = denominator as u128;
        let scaled = (2 * n + d) / (2 * d);
        Self {
            scaled: scaled.min(i64::MAX as u128) as i64,
            places,
        }
    }

    pub fn scaled(&self) -> i64 {
        self.scaled
    }

    pub fn places(&self) -> u8 {
        self.places
    }

    pub fn abs(self) -> Self {
        Self {
            scaled: self.scaled.saturating_abs(),
            places: self.places,
        }
    }

    pub fn to_f64(&self) -> f64 {
        self.scaled as f64 / 10f64.powi(self.places as i32)
    }

    /// Same value expressed with more decimal places
    fn widen(self, places: u8) -> Self {
        if places <= self.places {
            return self;
        }
        let factor = 10i64.pow((places - self.places) as u32);
        Self {
            scaled: self.scaled.saturating_mul(factor),
            places,
        }
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Fixed {
        let places = self.places.max(rhs.places);
        let lhs = self.widen(places);
        let rhs = rhs.widen(places);
        Fixed {
            scaled: lhs.scaled.saturating_sub(rhs.scaled),
            places,
        }
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.scaled < 0 { "-" } else { "" };
        let magnitude = self.scaled.unsigned_abs();
        if self.places == 0 {
            return write!(f, "{}{}", sign, magnitude);
        }
        let scale = 10u64.pow(self.places as u32);
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            magnitude / scale,
            magnitude % scale,
            width = self.places as usize
        )
    }
}

impl Serialize for Fixed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_formatting() {
        assert_eq!(Fixed::from_ratio(3, 1, 2).to_string(), "3.00");
        assert_eq!(Fixed::from_ratio(100, 1, 1).to_string(), "100.0");
        assert_eq!(Fixed::from_ratio(2, 3, 2).to_string(), "0.67");
        assert_eq!(Fixed::from_ratio(1, 3, 1).to_string(), "0.3");
    }

    #[test]
    fn test_ratio_rounds_half_away_from_zero() {
        // 1/8 = 0.125
        assert_eq!(Fixed::from_ratio(1, 8, 2).to_string(), "0.13");
        // 1/16 = 0.0625 -> 0.1 at one place
        assert_eq!(Fixed::from_ratio(1, 16, 1).to_string(), "0.1");
        // 200/3 = 66.666..
        assert_eq!(Fixed::from_ratio(200, 3, 1).to_string(), "66.7");
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Fixed::from_ratio(5, 0, 2).to_string(), "0.00");
        assert_eq!(Fixed::from_ratio(0, 0, 1).to_string(), "0.0");
    }

    #[test]
    fn test_negative_display_and_sub() {
        let a = Fixed::from_scaled(150, 2);
        let b = Fixed::from_scaled(275, 2);
        assert_eq!((a - b).to_string(), "-1.25");
        assert_eq!((b - a).to_string(), "1.25");
        assert_eq!(Fixed::from_scaled(-5, 2).to_string(), "-0.05");
        assert_eq!((a - b).abs(), Fixed::from_scaled(125, 2));
    }

    #[test]
    fn test_sub_widens_places() {
        let a = Fixed::from_scaled(15, 1);
        let b = Fixed::from_scaled(125, 2);
        assert_eq!((a - b).to_string(), "0.25");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Fixed::from_ratio(7, 3, 2)).unwrap();
        assert_eq!(json, "\"2.33\"");
    }
}
