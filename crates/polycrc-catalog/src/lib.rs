//! Named parameter sets for well-known CRC algorithms.
//!
//! The catalog is a static configuration table: each entry carries the
//! `(poly, init, reversed, xor_out)` tuple of a published algorithm plus its
//! check value (the CRC of the ASCII bytes `"123456789"`). The engine crate
//! never validates names; this crate resolves a name to parameters, and
//! construction validates the polynomial shape as usual.
//!
//! Lookup accepts the conventional spellings loosely: case, dashes, spaces
//! and a leading `crc` prefix are ignored, so `"crc-32"`, `"CRC32"` and
//! `"32"` all resolve to the same entry. Identifier names (`"Crc32"`) are
//! matched exactly as a fallback.
//!
//! Entries whose width the engine does not support (for example the 5-bit
//! USB token CRC) are still listed, since the catalog is data; they surface
//! [`InvalidPolynomial`] at construction.
//!
//! # Example
//!
//! ```
//! let mut crc = polycrc_catalog::build("crc-32")?;
//! crc.update(b"123456789");
//! assert_eq!(crc.value(), 0xCBF4_3926);
//! # Ok::<(), polycrc_catalog::CatalogError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

use core::fmt;

use polycrc::{Crc, CrcWidth, InvalidPolynomial};

// ─────────────────────────────────────────────────────────────────────────────
// CrcSpec
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters of one published CRC algorithm.
///
/// `init` is the initial register value and `xor_out` the final XOR mask,
/// exactly as the engine consumes them. `check` is the published CRC of
/// `"123456789"` and is what the conformance tests assert against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcSpec {
  /// Conventional name, e.g. `"crc-32"`.
  pub name: &'static str,
  /// Identifier-style name, e.g. `"Crc32"`.
  pub identifier: &'static str,
  /// Generator polynomial including the implicit leading bit.
  pub poly: u128,
  /// Bit-reversed (reflected) algorithm.
  pub reversed: bool,
  /// Initial register value.
  pub init: u64,
  /// Final XOR mask.
  pub xor_out: u64,
  /// CRC of `"123456789"`.
  pub check: u64,
}

impl CrcSpec {
  /// Build an engine for this parameter set.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidPolynomial`] for entries whose width the engine does
  /// not support.
  pub fn build(&self) -> Result<Crc, InvalidPolynomial> {
    Crc::new(self.poly, self.init, self.reversed, self.xor_out)
  }

  /// True when the entry's width is one the engine supports.
  #[must_use]
  pub fn supported(&self) -> bool {
    CrcWidth::classify(self.poly).is_ok()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// The Catalog
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! spec {
  ($name:literal, $identifier:literal, $poly:literal, $reversed:literal, $init:literal, $xor_out:literal, $check:literal) => {
    CrcSpec {
      name: $name,
      identifier: $identifier,
      poly: $poly,
      reversed: $reversed,
      init: $init,
      xor_out: $xor_out,
      check: $check,
    }
  };
}

/// All catalogued algorithms.
///
/// The check column is the CRC of `"123456789"`.
#[rustfmt::skip]
pub const CATALOG: &[CrcSpec] = &[
  // 8-bit
  spec!("crc-8",           "Crc8",          0x107,                   false, 0x00,                  0x00,                  0xF4),
  spec!("crc-8-darc",      "Crc8Darc",      0x139,                   true,  0x00,                  0x00,                  0x15),
  spec!("crc-8-i-code",    "Crc8ICode",     0x11D,                   false, 0xFD,                  0x00,                  0x7E),
  spec!("crc-8-itu",       "Crc8Itu",       0x107,                   false, 0x00,                  0x55,                  0xA1),
  // 16-bit
  spec!("crc-16",          "Crc16",         0x1_8005,                true,  0x0000,                0x0000,                0xBB3D),
  spec!("crc-16-usb",      "Crc16Usb",      0x1_8005,                true,  0xFFFF,                0xFFFF,                0xB4C8),
  spec!("x-25",            "CrcX25",        0x1_1021,                true,  0xFFFF,                0xFFFF,                0x906E),
  spec!("xmodem",          "CrcXmodem",     0x1_1021,                false, 0x0000,                0x0000,                0x31C3),
  spec!("modbus",          "CrcModbus",     0x1_8005,                true,  0xFFFF,                0x0000,                0x4B37),
  spec!("kermit",          "CrcKermit",     0x1_1021,                true,  0x0000,                0x0000,                0x2189),
  spec!("crc-ccitt-false", "CrcCcittFalse", 0x1_1021,                false, 0xFFFF,                0x0000,                0x29B1),
  spec!("crc-aug-ccitt",   "CrcAugCcitt",   0x1_1021,                false, 0x1D0F,                0x0000,                0xE5CC),
  // 24-bit
  spec!("crc-24",          "Crc24",         0x186_4CFB,              false, 0xB7_04CE,             0x00_0000,             0x21_CF02),
  // 32-bit
  spec!("crc-32",          "Crc32",         0x1_04C1_1DB7,           true,  0xFFFF_FFFF,           0xFFFF_FFFF,           0xCBF4_3926),
  spec!("crc-32c",         "Crc32C",        0x1_1EDC_6F41,           true,  0xFFFF_FFFF,           0xFFFF_FFFF,           0xE306_9283),
  spec!("crc-32-mpeg",     "Crc32Mpeg",     0x1_04C1_1DB7,           false, 0xFFFF_FFFF,           0x0000_0000,           0x0376_E6E7),
  spec!("posix",           "CrcPosix",      0x1_04C1_1DB7,           false, 0x0000_0000,           0xFFFF_FFFF,           0x765E_7680),
  // 64-bit
  spec!("crc-64",          "Crc64",         0x1_0000_0000_0000_001B, true,  0x0000_0000_0000_0000, 0x0000_0000_0000_0000, 0x46A5_A938_8A5B_EFFE),
  spec!("crc-64-jones",    "Crc64Jones",    0x1_AD93_D235_94C9_35A9, true,  0xFFFF_FFFF_FFFF_FFFF, 0x0000_0000_0000_0000, 0xCAA7_1716_8609_F281),
  // Other widths, listed for completeness; the engine rejects them.
  spec!("crc-3-rohc",      "Crc3Rohc",      0xB,                     true,  0x7,                   0x0,                   0x6),
  spec!("crc-4-itu",       "Crc4Itu",       0x13,                    true,  0x00,                  0x00,                  0x07),
  spec!("crc-5-epc",       "Crc5Epc",       0x29,                    false, 0x09,                  0x00,                  0x00),
  spec!("crc-5-itu",       "Crc5Itu",       0x35,                    true,  0x00,                  0x00,                  0x07),
  spec!("crc-5-usb",       "Crc5Usb",       0x25,                    true,  0x1F,                  0x1F,                  0x19),
  spec!("crc-6-itu",       "Crc6Itu",       0x43,                    true,  0x00,                  0x00,                  0x06),
  spec!("crc-7",           "Crc7",          0x89,                    false, 0x00,                  0x00,                  0x75),
  spec!("crc-7-rohc",      "Crc7Rohc",      0xCF,                    true,  0x7F,                  0x00,                  0x53),
  spec!("crc-10",          "Crc10",         0x633,                   false, 0x000,                 0x000,                 0x199),
  spec!("crc-11",          "Crc11",         0xB85,                   false, 0x01A,                 0x000,                 0x5A3),
  spec!("crc-14-darc",     "Crc14Darc",     0x4805,                  true,  0x0000,                0x0000,                0x082D),
  spec!("crc-15",          "Crc15",         0xC599,                  false, 0x0000,                0x0000,                0x059E),
  spec!("crc-40-gsm",      "Crc40Gsm",      0x100_0482_0009,         false, 0x00_0000_0000,        0x00_0000_0000,        0x2B_E9B0_39B9),
];

// ─────────────────────────────────────────────────────────────────────────────
// Lookup
// ─────────────────────────────────────────────────────────────────────────────

/// Copy the simplified form of `name` into `buf`: separators dropped,
/// ASCII-lowercased, leading `crc` removed. Catalog names fit well within
/// the buffer; queries that overflow it cannot match and come back truncated.
fn simplify<'a>(name: &str, buf: &'a mut [u8; 48]) -> &'a [u8] {
  let mut len = 0;
  for b in name.bytes() {
    if b == b'-' || b == b' ' {
      continue;
    }
    if len == buf.len() {
      break;
    }
    // Bounded by the explicit length check above.
    #[allow(clippy::indexing_slicing)]
    {
      buf[len] = b.to_ascii_lowercase();
    }
    len += 1;
  }
  let simplified = buf.get(..len).unwrap_or(&[]);
  match simplified {
    [b'c', b'r', b'c', rest @ ..] => rest,
    _ => simplified,
  }
}

/// Look up a catalog entry by name.
///
/// Tries the simplified conventional name first, then the identifier name
/// verbatim.
#[must_use]
pub fn find(name: &str) -> Option<&'static CrcSpec> {
  let mut query_buf = [0u8; 48];
  let query = simplify(name, &mut query_buf);

  for spec in CATALOG {
    let mut entry_buf = [0u8; 48];
    if simplify(spec.name, &mut entry_buf) == query {
      return Some(spec);
    }
  }
  CATALOG.iter().find(|spec| spec.identifier == name)
}

/// Build an engine for a named algorithm.
///
/// # Errors
///
/// [`CatalogError::UnknownName`] when no entry matches,
/// [`CatalogError::InvalidPolynomial`] when the entry's width is
/// unsupported.
pub fn build(name: &str) -> Result<Crc, CatalogError> {
  let spec = find(name).ok_or(CatalogError::UnknownName)?;
  Ok(spec.build()?)
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Failure to build an engine from a catalog name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
  /// No catalog entry matches the requested name.
  UnknownName,
  /// The entry exists but its width is not supported by the engine.
  InvalidPolynomial(InvalidPolynomial),
}

impl fmt::Display for CatalogError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnknownName => f.write_str("unknown CRC name"),
      Self::InvalidPolynomial(err) => err.fmt(f),
    }
  }
}

impl core::error::Error for CatalogError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::UnknownName => None,
      Self::InvalidPolynomial(err) => Some(err),
    }
  }
}

impl From<InvalidPolynomial> for CatalogError {
  fn from(err: InvalidPolynomial) -> Self {
    Self::InvalidPolynomial(err)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
