//! Error types for engine construction.
//!
//! Construction is the only fallible operation in this crate: once a
//! polynomial has been accepted, `update` and `digest` operate on validated
//! fixed-width arithmetic and cannot fail.

use core::fmt;

/// The generator polynomial does not describe a supported CRC width.
///
/// Returned when the supplied polynomial does not satisfy
/// `2^width <= poly < 2^(width+1)` for any width in {8, 16, 24, 32, 64}:
/// the value is too small, too large, or falls in a gap between supported
/// widths.
///
/// # Examples
///
/// ```
/// use polycrc::{Crc, InvalidPolynomial};
///
/// // Degree 12 is not a supported width.
/// let err = Crc::new(0x1234, 0, true, 0).unwrap_err();
/// assert_eq!(err, InvalidPolynomial::new());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct InvalidPolynomial;

impl InvalidPolynomial {
  /// Create a new error value.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for InvalidPolynomial {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for InvalidPolynomial {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("the degree of the polynomial must be 8, 16, 24, 32 or 64")
  }
}

impl core::error::Error for InvalidPolynomial {}
