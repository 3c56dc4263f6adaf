//! The stateful CRC engine.
//!
//! [`Crc`] wraps a built lookup table with the fixed parameters of an
//! algorithm (width, direction, initial value, final XOR) and a running
//! value. The running value is the only field that changes over the
//! engine's lifetime; there is no terminal state, and `digest` can be read
//! repeatedly between updates.
//!
//! # Value protocol
//!
//! The stored value is the externally visible CRC, not the raw register.
//! `update` unwraps it into register form, runs the block kernel, and wraps
//! it back:
//!
//! ```text
//! value' = xor_out ^ block(xor_out ^ value, data)
//! ```
//!
//! so a fresh engine (with `value = init ^ xor_out`) starts the register at
//! `init`, and chained updates continue the register exactly where the
//! previous call left it.

use core::fmt;

use crate::{
  dispatch::{self, Backend},
  error::InvalidPolynomial,
  kernels,
  poly::CrcWidth,
  table::{CrcTable, SliceTables},
};

// ─────────────────────────────────────────────────────────────────────────────
// Digest Buffers
// ─────────────────────────────────────────────────────────────────────────────

/// A CRC digest: the current value as big-endian bytes.
///
/// Exactly `ceil(width / 8)` bytes long, zero-padded on the left.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Digest {
  bytes: [u8; 8],
  len: usize,
}

impl Digest {
  /// The digest bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    self.bytes.get(..self.len).unwrap_or(&[])
  }

  /// Digest length in bytes.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.len
  }

  /// True when the digest is empty (never the case for a built engine).
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }
}

impl AsRef<[u8]> for Digest {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl core::ops::Deref for Digest {
  type Target = [u8];

  #[inline]
  fn deref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl fmt::Debug for Digest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.as_bytes()).finish()
  }
}

/// A CRC digest rendered as uppercase hexadecimal.
///
/// Exactly `2 * ceil(width / 8)` characters.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HexDigest {
  buf: [u8; 16],
  len: usize,
}

impl HexDigest {
  /// The hex string.
  #[inline]
  #[must_use]
  pub fn as_str(&self) -> &str {
    let bytes = self.buf.get(..self.len).unwrap_or(&[]);
    // The buffer only ever holds ASCII hex digits.
    core::str::from_utf8(bytes).unwrap_or("")
  }
}

impl AsRef<str> for HexDigest {
  #[inline]
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

impl core::ops::Deref for HexDigest {
  type Target = str;

  #[inline]
  fn deref(&self) -> &str {
    self.as_str()
  }
}

impl fmt::Display for HexDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Debug for HexDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(self.as_str(), f)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Crc
// ─────────────────────────────────────────────────────────────────────────────

/// A table-driven CRC engine for one `(poly, init, reversed, xor_out)`
/// configuration.
///
/// Construction validates the polynomial, builds the lookup table, and
/// initializes the running value to `init ^ xor_out`. The engine then
/// accepts any number of [`update`](Self::update) calls; [`digest`],
/// [`hexdigest`] and [`value`] read the current CRC without mutating it.
///
/// Cloning preserves the accumulated value, which makes it cheap to compute
/// several CRCs sharing a common prefix; [`fresh`](Self::fresh) instead
/// produces a sibling reset to the initial value.
///
/// [`digest`]: Self::digest
/// [`hexdigest`]: Self::hexdigest
/// [`value`]: Self::value
///
/// # Examples
///
/// ```
/// use polycrc::Crc;
///
/// let mut crc = Crc::new(0x104C11DB7, 0xFFFF_FFFF, true, 0xFFFF_FFFF)?;
/// crc.update(b"123456789");
/// assert_eq!(crc.value(), 0xCBF4_3926);
/// assert_eq!(crc.hexdigest().as_str(), "CBF43926");
/// # Ok::<(), polycrc::InvalidPolynomial>(())
/// ```
#[derive(Clone)]
pub struct Crc {
  poly: u128,
  width: CrcWidth,
  reversed: bool,
  init: u64,
  xor_out: u64,
  backend: Backend,
  table: CrcTable,
  slice: Option<SliceTables>,
  value: u64,
}

impl Crc {
  /// Build an engine from raw algorithm parameters.
  ///
  /// `poly` includes the implicit leading 1-bit (CRC-32 is `0x104C11DB7`).
  /// `init` is the initial register value and `xor_out` the final XOR mask;
  /// both are truncated to the polynomial's width. `reversed` selects the
  /// bit-reversed (LSB-first) algorithm.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidPolynomial`] when the degree of `poly` is not one of
  /// 8, 16, 24, 32 or 64.
  pub fn new(poly: u128, init: u64, reversed: bool, xor_out: u64) -> Result<Self, InvalidPolynomial> {
    Self::with_backend(poly, init, reversed, xor_out, dispatch::selected())
  }

  /// Build an engine with conventional defaults: all-ones initial value
  /// (so leading zero bytes affect the CRC), bit-reversed algorithm, no
  /// final XOR.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidPolynomial`] when the degree of `poly` is not one of
  /// 8, 16, 24, 32 or 64.
  pub fn with_defaults(poly: u128) -> Result<Self, InvalidPolynomial> {
    let width = CrcWidth::classify(poly)?;
    Self::new(poly, width.mask(), true, 0)
  }

  /// Build an engine on an explicitly chosen backend instead of the
  /// process-wide selection.
  ///
  /// Both backends are observably equivalent; this exists for differential
  /// tests and benchmarks.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidPolynomial`] when the degree of `poly` is not one of
  /// 8, 16, 24, 32 or 64.
  pub fn with_backend(
    poly: u128,
    init: u64,
    reversed: bool,
    xor_out: u64,
    backend: Backend,
  ) -> Result<Self, InvalidPolynomial> {
    let width = CrcWidth::classify(poly)?;
    let mask = width.mask();
    let init = init & mask;
    let xor_out = xor_out & mask;
    let table = CrcTable::build(width, poly, reversed);
    // Slicing serves only the reversed direction; forward engines keep the
    // bytewise kernel regardless of the selected backend.
    let slice = if backend == Backend::Slice4 && reversed {
      SliceTables::derive(&table)
    } else {
      None
    };
    Ok(Self {
      poly,
      width,
      reversed,
      init,
      xor_out,
      backend,
      table,
      slice,
      value: init ^ xor_out,
    })
  }

  /// Fold `data` into the running value.
  ///
  /// Calling this repeatedly over consecutive chunks yields the same digest
  /// as a single call over their concatenation.
  pub fn update(&mut self, data: &[u8]) {
    self.value = self.xor_out ^ self.block(self.xor_out ^ self.value, data);
  }

  /// Run the block kernel for this engine's width, direction and backend.
  fn block(&self, crc: u64, data: &[u8]) -> u64 {
    if let Some(slice) = &self.slice {
      return match slice {
        SliceTables::W16(t) => u64::from(kernels::crc16_r_slice4(crc as u16, t, data)),
        SliceTables::W24(t) => u64::from(kernels::crc24_r_slice4(crc as u32, t, data)),
        SliceTables::W32(t) => u64::from(kernels::crc32_r_slice4(crc as u32, t, data)),
        SliceTables::W64(t) => kernels::crc64_r_slice4(crc, t, data),
      };
    }
    match &self.table {
      CrcTable::W8(t) => u64::from(kernels::crc8(crc as u8, t, data)),
      CrcTable::W16(t) if self.reversed => u64::from(kernels::crc16_r(crc as u16, t, data)),
      CrcTable::W16(t) => u64::from(kernels::crc16(crc as u16, t, data)),
      CrcTable::W24(t) if self.reversed => u64::from(kernels::crc24_r(crc as u32, t, data)),
      CrcTable::W24(t) => u64::from(kernels::crc24(crc as u32, t, data)),
      CrcTable::W32(t) if self.reversed => u64::from(kernels::crc32_r(crc as u32, t, data)),
      CrcTable::W32(t) => u64::from(kernels::crc32(crc as u32, t, data)),
      CrcTable::W64(t) if self.reversed => kernels::crc64_r(crc, t, data),
      CrcTable::W64(t) => kernels::crc64(crc, t, data),
    }
  }

  /// The current CRC as a width-masked integer.
  #[inline]
  #[must_use]
  pub fn value(&self) -> u64 {
    self.value
  }

  /// The current CRC as big-endian bytes of length
  /// [`digest_size`](Self::digest_size). Non-mutating.
  #[must_use]
  pub fn digest(&self) -> Digest {
    let len = self.width.digest_size();
    let be = self.value.to_be_bytes();
    let mut bytes = [0u8; 8];
    for i in 0..len {
      // Indices are bounded: len <= 8.
      #[allow(clippy::indexing_slicing)]
      {
        bytes[i] = be[8 - len + i];
      }
    }
    Digest { bytes, len }
  }

  /// The current CRC as an uppercase hex string of length
  /// `2 * digest_size()`. Non-mutating.
  #[must_use]
  pub fn hexdigest(&self) -> HexDigest {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
    let digest = self.digest();
    let mut buf = [0u8; 16];
    let mut len = 0;
    for &b in digest.as_bytes() {
      // Indices are bounded: two hex digits per digest byte, at most 16.
      #[allow(clippy::indexing_slicing)]
      {
        buf[len] = DIGITS[(b >> 4) as usize];
        buf[len + 1] = DIGITS[(b & 0x0F) as usize];
      }
      len += 2;
    }
    HexDigest { buf, len }
  }

  /// Restore the running value to `init ^ xor_out`, as if freshly built.
  #[inline]
  pub fn reset(&mut self) {
    self.value = self.init ^ self.xor_out;
  }

  /// A sibling engine with the same parameters and table, reset to the
  /// initial value.
  #[must_use]
  pub fn fresh(&self) -> Self {
    let mut crc = self.clone();
    crc.reset();
    crc
  }

  /// Like [`fresh`](Self::fresh), but immediately folds `seed` in.
  #[must_use]
  pub fn fresh_with(&self, seed: &[u8]) -> Self {
    let mut crc = self.fresh();
    crc.update(seed);
    crc
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Read-only descriptors
  // ───────────────────────────────────────────────────────────────────────────

  /// The CRC width.
  #[inline]
  #[must_use]
  pub fn width(&self) -> CrcWidth {
    self.width
  }

  /// Digest length in bytes.
  #[inline]
  #[must_use]
  pub fn digest_size(&self) -> usize {
    self.width.digest_size()
  }

  /// True when this engine runs the bit-reversed algorithm.
  #[inline]
  #[must_use]
  pub fn reversed(&self) -> bool {
    self.reversed
  }

  /// The width-masked initial register value.
  #[inline]
  #[must_use]
  pub fn init(&self) -> u64 {
    self.init
  }

  /// The width-masked final XOR value.
  #[inline]
  #[must_use]
  pub fn xor_out(&self) -> u64 {
    self.xor_out
  }

  /// The generator polynomial, including the implicit leading bit.
  #[inline]
  #[must_use]
  pub fn poly(&self) -> u128 {
    self.poly
  }

  /// Diagnostic name of the backend this engine runs on.
  ///
  /// Forward engines report `portable/bytewise` even when slice-by-4 was
  /// selected, since slicing only serves the reversed direction.
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    if self.slice.is_some() {
      self.backend.name()
    } else {
      Backend::Bytewise.name()
    }
  }

  /// Read one lookup-table entry, widened to `u64`.
  #[inline]
  #[must_use]
  pub fn table_entry(&self, index: u8) -> u64 {
    self.table.entry(index)
  }

  /// Iterate over all 256 table entries in index order, widened to `u64`.
  ///
  /// This is the read access used by code generation.
  pub fn table_entries(&self) -> impl Iterator<Item = u64> + '_ {
    (0..=255u8).map(move |i| self.table.entry(i))
  }
}

impl fmt::Debug for Crc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc")
      .field("poly", &format_args!("{:#X}", self.poly))
      .field("width", &self.width.bits())
      .field("reversed", &self.reversed)
      .field("init", &format_args!("{:#X}", self.init))
      .field("xor_out", &format_args!("{:#X}", self.xor_out))
      .field("value", &format_args!("{:#X}", self.value))
      .finish_non_exhaustive()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
