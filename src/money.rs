//! Fixed-point currency type with 2 decimal places precision.
//!
//! Uses `rust_decimal` internally with scale enforcement to ensure
//! consistent monetary calculations without floating-point errors.

use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A currency amount that maintains exactly 2 decimal places of precision.
///
/// Parses export-style currency text (`"$1,234.56"`) by stripping the
/// optional leading symbol and the grouping separators. The rendered form
/// never carries a currency symbol; ledger lines re-apply one contextually
/// where the import format requires it.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use iif_export::Money;
///
/// let amount = Money::from_str("$1,234.56").unwrap();
/// assert_eq!(amount.to_string(), "1,234.56");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a new `Money` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Money(normalized)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let decimal = Decimal::from_str(&bare.replace(',', ""))?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    /// Renders with en-locale thousands grouping and exactly two fraction
    /// digits: `23,724.88`, `-1,250.00`, `0.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.abs();
        let sign = if self.0.is_sign_negative() && !abs.is_zero() {
            "-"
        } else {
            ""
        };
        let int_part = abs
            .trunc()
            .to_i64()
            .unwrap_or(i64::MAX)
            .to_formatted_string(&Locale::en);
        let rendered = format!("{:.2}", abs);
        let frac_part = rendered.rsplit('.').next().unwrap_or("00");
        write!(f, "{}{}.{}", sign, int_part, frac_part)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money::new(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money::new(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Money::new(-self.0)
    }
}
