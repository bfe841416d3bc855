//! Fixed-point currency amount with 2 decimal places precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so monetary
//! values carry no floating-point drift. The CNAB wire format consumes
//! integer cents, exposed via [`Amount::cents`].

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A currency amount that maintains exactly 2 decimal places.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use cnab240_pix::Amount;
///
/// let amount = Amount::from_str("1250.5").unwrap();
/// assert_eq!(amount.to_string(), "1250.50");
/// assert_eq!(amount.cents(), 125050);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Amount(normalized)
    }

    /// The value in integer cents.
    ///
    /// Exact because the scale is fixed at 2, so the underlying mantissa
    /// is the cent count.
    pub fn cents(&self) -> i64 {
        self.0.mantissa() as i64
    }

    /// Returns `true` if this value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_positive()
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Amount::new(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
